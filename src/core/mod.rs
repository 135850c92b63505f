//! Core resolution engine.
//!
//! Control flow of one run:
//!
//! 1. `locale`: load the [`LocaleRegistry`](locale::LocaleRegistry)
//! 2. `file_scanner` + `family`: discover files and group them via `classify`
//! 3. `changes`: keep only families touched by the change list
//! 4. `resolve`: elect a source of truth per family
//! 5. `plan`: compute locales to create/update and their destinations
//! 6. `sync`: drive the above and hand work to a translation backend

pub mod changes;
pub mod classify;
pub mod context;
pub mod family;
pub mod file_scanner;
pub mod locale;
pub mod plan;
pub mod resolve;
pub mod sync;

pub use changes::{ChangeSet, filter_by_changes};
pub use classify::{Classification, FamilyKey, PathForm, classify};
pub use context::RunContext;
pub use family::{DocumentFamily, FamilySet, build_families};
pub use locale::{LocaleCode, LocaleRegistry, LocaleSource};
pub use plan::{Target, TargetPlan, plan};
pub use resolve::{Resolution, SourceOfTruth, Strategy, resolve};
pub use sync::{FamilyOutcome, FamilyReport, SkipReason, SyncReport, run_sync};
