pub mod families;
pub mod init;
pub mod sync;

use std::path::PathBuf;

use crate::core::{FamilySet, LocaleRegistry, SyncReport};

#[derive(Debug)]
pub enum CommandSummary {
    Sync(SyncSummary),
    Families(FamiliesSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct SyncSummary {
    pub root: PathBuf,
    pub registry: LocaleRegistry,
    pub scan_dirs: Vec<PathBuf>,
    /// Number of paths in the change list (0 in full-scan mode).
    pub changed_file_count: usize,
    pub report: SyncReport,
}

#[derive(Debug)]
pub struct FamiliesSummary {
    pub root: PathBuf,
    pub registry: LocaleRegistry,
    pub families: FamilySet,
}

#[derive(Debug)]
pub struct InitSummary {
    pub path: PathBuf,
}

/// Result of running a docfam command
pub struct CommandResult {
    pub summary: CommandSummary,
    /// Families that were skipped as ambiguous or failed in the backend.
    pub error_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    pub exit_on_errors: bool,
}
