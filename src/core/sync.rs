//! The translation pass: scan, group, filter, resolve, plan, and (optionally)
//! execute against a backend.
//!
//! Families are processed one after another. A skipped or failed family never
//! stops the remaining ones; only configuration problems abort a run, and
//! those surface before this module is reached.

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};

use super::{
    changes::filter_by_changes,
    classify::FamilyKey,
    context::RunContext,
    family::{ClassifiedFile, Collision, FamilySet, build_families},
    file_scanner::{ScanResult, scan_files},
    locale::LocaleCode,
    plan::{TargetPlan, plan},
    resolve::{Resolution, Strategy, resolve},
};
use crate::backend::{TranslationBackend, TranslationMode, TranslationRequest};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// More than one non-default member changed in the same run.
    Ambiguous { changed: Vec<LocaleCode> },
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FamilyOutcome {
    Skipped(SkipReason),
    /// Dry run: the plan was computed but nothing was sent to a backend.
    Planned(TargetPlan),
    Applied {
        plan: TargetPlan,
        created: Vec<PathBuf>,
        updated: bool,
        warnings: Vec<String>,
    },
    Failed {
        plan: TargetPlan,
        created: Vec<PathBuf>,
        error: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyReport {
    pub key: FamilyKey,
    pub strategy: Option<Strategy>,
    pub outcome: FamilyOutcome,
}

impl FamilyReport {
    pub fn plan(&self) -> Option<&TargetPlan> {
        match &self.outcome {
            FamilyOutcome::Skipped(_) => None,
            FamilyOutcome::Planned(plan)
            | FamilyOutcome::Applied { plan, .. }
            | FamilyOutcome::Failed { plan, .. } => Some(plan),
        }
    }

    /// Skips and failures count as problems for the exit status.
    pub fn is_problem(&self) -> bool {
        matches!(
            self.outcome,
            FamilyOutcome::Skipped(SkipReason::Ambiguous { .. }) | FamilyOutcome::Failed { .. }
        )
    }
}

#[derive(Debug, Default)]
pub struct SyncReport {
    pub files_scanned: usize,
    pub inaccessible_count: usize,
    pub missing_dirs: Vec<PathBuf>,
    pub family_count: usize,
    pub collisions: Vec<Collision>,
    pub classified: Vec<ClassifiedFile>,
    /// True when no change list was supplied.
    pub full_scan: bool,
    /// One report per affected family, in key order.
    pub families: Vec<FamilyReport>,
    pub applied: bool,
}

impl SyncReport {
    pub fn problem_count(&self) -> usize {
        self.families.iter().filter(|f| f.is_problem()).count()
    }

    pub fn create_count(&self) -> usize {
        self.families
            .iter()
            .filter_map(FamilyReport::plan)
            .map(|p| p.create.len())
            .sum()
    }

    pub fn update_count(&self) -> usize {
        self.families
            .iter()
            .filter_map(FamilyReport::plan)
            .map(|p| p.update.len())
            .sum()
    }
}

/// Scan the configured directories and group files into families.
pub fn discover(ctx: &RunContext) -> (FamilySet, ScanResult) {
    let mut scan = scan_files(
        &ctx.root,
        &ctx.scan_dirs,
        &ctx.extensions,
        &ctx.ignores,
        ctx.verbose,
    );
    let files = std::mem::take(&mut scan.files);
    let set = build_families(files, &ctx.registry);
    (set, scan)
}

/// Run one translation pass.
///
/// With `backend == None` this is a dry run that only plans.
pub fn run_sync(ctx: &RunContext, backend: Option<&dyn TranslationBackend>) -> SyncReport {
    let (set, scan) = discover(ctx);

    let mut report = SyncReport {
        files_scanned: set.classified.len(),
        inaccessible_count: scan.skipped_count,
        missing_dirs: scan.missing_dirs,
        family_count: set.len(),
        collisions: set.collisions,
        classified: set.classified,
        full_scan: ctx.changes.is_full_scan(),
        families: Vec::new(),
        applied: backend.is_some(),
    };

    let affected = filter_by_changes(set.families, &ctx.changes);
    let default_locale = ctx.registry.default_locale();

    for (key, family) in affected {
        let (source, strategy) = match resolve(&family, default_locale, &ctx.changes) {
            Resolution::Resolved { source, strategy } => (source, strategy),
            Resolution::Ambiguous { changed } => {
                report.families.push(FamilyReport {
                    key,
                    strategy: None,
                    outcome: FamilyOutcome::Skipped(SkipReason::Ambiguous { changed }),
                });
                continue;
            }
            Resolution::Empty => {
                report.families.push(FamilyReport {
                    key,
                    strategy: None,
                    outcome: FamilyOutcome::Skipped(SkipReason::Empty),
                });
                continue;
            }
        };

        let plan = plan(&family, &source, &ctx.registry);
        let outcome = match backend {
            None => FamilyOutcome::Planned(plan),
            Some(backend) => execute(ctx, backend, plan),
        };

        report.families.push(FamilyReport {
            key,
            strategy: Some(strategy),
            outcome,
        });
    }

    report
}

fn request(
    ctx: &RunContext,
    plan: &TargetPlan,
    mode: TranslationMode,
    locales: Vec<&str>,
    files: Vec<PathBuf>,
) -> TranslationRequest {
    let registry = &ctx.registry;
    TranslationRequest {
        mode,
        files,
        source_locale: plan.source.locale.clone(),
        source_locale_name: registry.name_or_code(&plan.source.locale).to_string(),
        target_locale_names: locales
            .iter()
            .map(|l| registry.name_or_code(l).to_string())
            .collect(),
        target_locales: locales.into_iter().map(String::from).collect(),
    }
}

fn execute(ctx: &RunContext, backend: &dyn TranslationBackend, plan: TargetPlan) -> FamilyOutcome {
    let mut created = Vec::new();
    let mut warnings = Vec::new();

    let result = create_missing(ctx, backend, &plan, &mut created, &mut warnings)
        .and_then(|_| update_existing(ctx, backend, &plan));

    match result {
        Ok(updated) => FamilyOutcome::Applied {
            plan,
            created,
            updated,
            warnings,
        },
        Err(e) => FamilyOutcome::Failed {
            plan,
            created,
            error: format!("{:#}", e),
        },
    }
}

fn create_missing(
    ctx: &RunContext,
    backend: &dyn TranslationBackend,
    plan: &TargetPlan,
    created: &mut Vec<PathBuf>,
    warnings: &mut Vec<String>,
) -> Result<()> {
    if plan.create.is_empty() {
        return Ok(());
    }

    let req = request(
        ctx,
        plan,
        TranslationMode::Create,
        plan.create_locales(),
        vec![plan.source.path.clone()],
    );
    let mut content = backend.translate_for_creation(&req)?;

    for target in &plan.create {
        let Some(text) = content.remove(&target.locale) else {
            warnings.push(format!(
                "backend '{}' returned no content for '{}'",
                backend.name(),
                target.locale
            ));
            continue;
        };
        if let Some(parent) = target.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        fs::write(&target.path, text)
            .with_context(|| format!("Failed to write file: {}", target.path.display()))?;
        created.push(target.path.clone());
    }

    for locale in content.keys() {
        warnings.push(format!(
            "backend '{}' returned unrequested locale '{}', ignored",
            backend.name(),
            locale
        ));
    }

    Ok(())
}

fn update_existing(
    ctx: &RunContext,
    backend: &dyn TranslationBackend,
    plan: &TargetPlan,
) -> Result<bool> {
    if plan.update.is_empty() {
        return Ok(false);
    }

    let files = std::iter::once(plan.source.path.clone())
        .chain(plan.update.iter().map(|t| t.path.clone()))
        .collect();
    let req = request(ctx, plan, TranslationMode::Update, plan.update_locales(), files);
    backend.translate_and_write(&req)?;
    Ok(true)
}
