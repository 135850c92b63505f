//! Report formatting and printing utilities.
//!
//! Every decision the core makes (classification, source-of-truth election,
//! planning, execution) is rendered here so a user can audit why a locale was
//! created, updated or skipped. Kept separate from core logic so docfam can be
//! used as a library.

use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CommandResult, CommandSummary, FamiliesSummary, InitSummary, SyncSummary,
};
use crate::core::{
    FamilyOutcome, FamilyReport, SkipReason, TargetPlan, classify::display_relative,
    family::Collision,
};

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult, verbose: bool) {
    print_to(result, verbose, &mut io::stdout().lock());
}

/// Print a command result to a custom writer.
///
/// Useful for testing or redirecting output.
pub fn print_to<W: Write>(result: &CommandResult, verbose: bool, writer: &mut W) {
    match &result.summary {
        CommandSummary::Sync(summary) => print_sync(summary, verbose, writer),
        CommandSummary::Families(summary) => print_families(summary, writer),
        CommandSummary::Init(summary) => print_init(summary, writer),
    }
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}

// ============================================================
// sync
// ============================================================

fn print_sync<W: Write>(summary: &SyncSummary, verbose: bool, writer: &mut W) {
    let report = &summary.report;
    let root = summary.root.as_path();

    if verbose {
        let _ = writeln!(
            writer,
            "{} {} (default: {})",
            "Locales:".bold(),
            summary.registry.codes().collect::<Vec<_>>().join(", "),
            summary.registry.default_locale()
        );
        let _ = writeln!(
            writer,
            "{} {}",
            "Scanning:".bold(),
            summary
                .scan_dirs
                .iter()
                .map(|d| d.display().to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
        for file in &report.classified {
            let _ = writeln!(
                writer,
                "  {} {} {} [{}, {}]",
                display_relative(&file.path, root),
                "->".dimmed(),
                file.classification.key.display_relative(root),
                file.classification.locale,
                file.classification.form
            );
        }
    }

    for dir in &report.missing_dirs {
        let _ = writeln!(
            writer,
            "{} Scan directory does not exist: {}",
            "warning:".bold().yellow(),
            display_relative(dir, root)
        );
    }
    if report.inaccessible_count > 0 && !verbose {
        let _ = writeln!(
            writer,
            "{} {} path(s) could not be accessed (use {} for details)",
            "warning:".bold().yellow(),
            report.inaccessible_count,
            "-v".cyan()
        );
    }
    print_collisions(&report.collisions, root, writer);

    let _ = writeln!(
        writer,
        "Found {} file(s) in {} document {}.",
        report.files_scanned,
        report.family_count,
        plural(report.family_count, "family", "families")
    );

    if !report.full_scan {
        let _ = writeln!(
            writer,
            "{} changed file(s) affect {} {}.",
            summary.changed_file_count,
            report.families.len(),
            plural(report.families.len(), "family", "families")
        );
        if report.families.is_empty() {
            let _ = writeln!(
                writer,
                "{} {}",
                SUCCESS_MARK.green(),
                "No document family affected by the changes, nothing to translate.".green()
            );
            return;
        }
    }

    for family in &report.families {
        print_family(family, summary, writer);
    }

    print_sync_footer(summary, writer);
}

fn print_collisions<W: Write>(collisions: &[Collision], root: &Path, writer: &mut W) {
    for collision in collisions {
        let _ = writeln!(
            writer,
            "{} {} and {} both map to '{}' of {}; using {}",
            "warning:".bold().yellow(),
            display_relative(&collision.displaced, root),
            display_relative(&collision.kept, root),
            collision.locale,
            collision.key.display_relative(root),
            display_relative(&collision.kept, root)
        );
    }
}

fn print_family<W: Write>(family: &FamilyReport, summary: &SyncSummary, writer: &mut W) {
    let root = summary.root.as_path();
    let _ = writeln!(writer);
    let _ = writeln!(
        writer,
        "{} {}",
        "==>".blue(),
        family.key.display_relative(root).bold()
    );

    let plan = match &family.outcome {
        FamilyOutcome::Skipped(SkipReason::Ambiguous { changed }) => {
            let _ = writeln!(
                writer,
                "  {} several non-default locales changed ({}); cannot choose a source of truth, family skipped",
                "error:".bold().red(),
                changed.join(", ")
            );
            return;
        }
        FamilyOutcome::Skipped(SkipReason::Empty) => {
            let _ = writeln!(
                writer,
                "  {} family has no files, skipped",
                "warning:".bold().yellow()
            );
            return;
        }
        FamilyOutcome::Planned(plan)
        | FamilyOutcome::Applied { plan, .. }
        | FamilyOutcome::Failed { plan, .. } => plan,
    };

    print_plan(plan, family, root, writer);

    match &family.outcome {
        FamilyOutcome::Applied {
            created,
            updated,
            warnings,
            ..
        } => {
            for path in created {
                let _ = writeln!(
                    writer,
                    "  {} {}",
                    "created".green().bold(),
                    display_relative(path, root)
                );
            }
            if *updated {
                let _ = writeln!(
                    writer,
                    "  {} {}",
                    "updated".green().bold(),
                    plan.update_locales().join(", ")
                );
            }
            for warning in warnings {
                let _ = writeln!(writer, "  {} {}", "warning:".bold().yellow(), warning);
            }
        }
        FamilyOutcome::Failed { created, error, .. } => {
            for path in created {
                let _ = writeln!(
                    writer,
                    "  {} {}",
                    "created".green().bold(),
                    display_relative(path, root)
                );
            }
            let _ = writeln!(
                writer,
                "  {} translation failed: {}",
                "error:".bold().red(),
                error
            );
        }
        FamilyOutcome::Planned(_) | FamilyOutcome::Skipped(_) => {}
    }
}

fn print_plan<W: Write>(plan: &TargetPlan, family: &FamilyReport, root: &Path, writer: &mut W) {
    let strategy = family
        .strategy
        .map(|s| format!(" ({})", s))
        .unwrap_or_default();
    let _ = writeln!(
        writer,
        "  source: {} {}{}",
        plan.source.locale.cyan(),
        display_relative(&plan.source.path, root),
        strategy.dimmed()
    );

    if plan.create.is_empty() {
        let _ = writeln!(writer, "  create: {}", "none".dimmed());
    }
    for target in &plan.create {
        let _ = writeln!(
            writer,
            "  create: {} {} {}",
            target.locale.cyan(),
            "->".dimmed(),
            display_relative(&target.path, root)
        );
    }

    if plan.update.is_empty() {
        let _ = writeln!(writer, "  update: {}", "none".dimmed());
    }
    for target in &plan.update {
        let _ = writeln!(
            writer,
            "  update: {} {}",
            target.locale.cyan(),
            display_relative(&target.path, root)
        );
    }
}

fn print_sync_footer<W: Write>(summary: &SyncSummary, writer: &mut W) {
    let report = &summary.report;
    let problems = report.problem_count();
    let creates = report.create_count();
    let updates = report.update_count();

    let _ = writeln!(writer);

    if report.applied {
        let created: usize = report
            .families
            .iter()
            .map(|f| match &f.outcome {
                FamilyOutcome::Applied { created, .. } | FamilyOutcome::Failed { created, .. } => {
                    created.len()
                }
                _ => 0,
            })
            .sum();
        let updated: usize = report
            .families
            .iter()
            .map(|f| match &f.outcome {
                FamilyOutcome::Applied {
                    plan,
                    updated: true,
                    ..
                } => plan.update.len(),
                _ => 0,
            })
            .sum();
        let _ = writeln!(
            writer,
            "{} {} file(s) and updated {} file(s).",
            "Created".green().bold(),
            created,
            updated
        );
    } else if creates + updates > 0 {
        let _ = writeln!(
            writer,
            "{} {} file(s) and update {} file(s).",
            "Would create".yellow().bold(),
            creates,
            updates
        );
        let _ = writeln!(writer, "Run with {} to translate.", "--apply".cyan());
    } else if problems == 0 {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "Nothing to translate.".green()
        );
    }

    if problems > 0 {
        let _ = writeln!(
            writer,
            "{} {} {} skipped or failed",
            FAILURE_MARK.red(),
            problems,
            plural(problems, "family", "families")
        );
    }
}

// ============================================================
// families
// ============================================================

fn print_families<W: Write>(summary: &FamiliesSummary, writer: &mut W) {
    let root = summary.root.as_path();
    let registry = &summary.registry;

    print_collisions(&summary.families.collisions, root, writer);

    let code_width = registry.codes().map(str::len).max().unwrap_or(0);
    let name_width = registry
        .codes()
        .map(|c| UnicodeWidthStr::width(registry.name_or_code(c)))
        .max()
        .unwrap_or(0);

    for family in summary.families.iter() {
        let _ = writeln!(writer, "{}", family.key.display_relative(root).bold());
        for code in registry.codes() {
            let name = registry.name_or_code(code);
            let padding = name_width - UnicodeWidthStr::width(name);
            let location = match family.get(code) {
                Some(path) => display_relative(path, root),
                None => "(missing)".dimmed().to_string(),
            };
            let _ = writeln!(
                writer,
                "  {}  {}{:padding$}  {}",
                format!("{:<code_width$}", code).cyan(),
                name,
                "",
                location,
                padding = padding
            );
        }
    }

    let file_count = summary.families.iter().map(|f| f.len()).sum::<usize>();
    let family_count = summary.families.len();
    let _ = writeln!(
        writer,
        "{} document {}, {} file(s).",
        family_count,
        plural(family_count, "family", "families"),
        file_count
    );
}

// ============================================================
// init
// ============================================================

fn print_init<W: Write>(summary: &InitSummary, writer: &mut W) {
    let _ = writeln!(
        writer,
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", summary.path.display()).green()
    );
}

// ============================================================
// Tests
// ============================================================
