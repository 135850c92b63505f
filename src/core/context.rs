use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use crate::{
    cli::args::CommonArgs,
    config::{BackendConfig, Config, load_config},
    core::{changes::ChangeSet, locale::LocaleRegistry},
};

/// Immutable inputs of one run, built once at startup and passed down.
///
/// # Configuration Priority
///
/// 1. CLI arguments (e.g., `--scan-dir docs`)
/// 2. `.i18nrc.json` config file
/// 3. Built-in defaults
#[derive(Debug, Clone)]
pub struct RunContext {
    /// Project root (the directory holding the config file), canonicalized.
    pub root: PathBuf,
    pub registry: LocaleRegistry,
    /// Directories to scan, relative to `root`.
    pub scan_dirs: Vec<PathBuf>,
    pub extensions: Vec<String>,
    pub ignores: Vec<String>,
    pub changes: ChangeSet,
    pub backend: Option<BackendConfig>,
    pub verbose: bool,
}

impl RunContext {
    /// Load configuration and the locale registry for the given arguments.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - The start directory does not exist
    /// - No config file is found, or it is invalid
    /// - The locale registry cannot be loaded
    pub fn new(common_args: &CommonArgs, changed_files: Option<&str>) -> Result<Self> {
        let start = common_args
            .root
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        let start = start
            .canonicalize()
            .with_context(|| format!("Invalid root directory: {}", start.display()))?;

        let loaded = load_config(&start)?;
        let mut config = loaded.config;
        if !common_args.scan_dirs.is_empty() {
            config.scan_dirs = common_args.scan_dirs.clone();
        }

        Self::from_config(loaded.root, config, changed_files, common_args.verbose)
    }

    /// Build a context from an already loaded config rooted at `root`.
    pub fn from_config(
        root: PathBuf,
        config: Config,
        changed_files: Option<&str>,
        verbose: bool,
    ) -> Result<Self> {
        let registry = config.load_registry(&root)?;
        let changes = changed_files
            .map(|raw| ChangeSet::parse(raw, &root))
            .unwrap_or_default();

        Ok(Self {
            scan_dirs: config.scan_dirs.iter().map(PathBuf::from).collect(),
            extensions: config.extensions,
            ignores: config.ignores,
            backend: config.backend,
            root,
            registry,
            changes,
            verbose,
        })
    }

    /// Path rendered relative to the project root, for diagnostics.
    pub fn relative(&self, path: &Path) -> String {
        crate::core::classify::display_relative(path, &self.root)
    }
}
