use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::locale::{InlineLocales, LocaleRegistry, LocaleSource, ScriptLocales};

pub const CONFIG_FILE_NAME: &str = ".i18nrc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_locale: Option<String>,
    /// Supported locale codes mapped to display names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locales: Option<BTreeMap<String, String>>,
    /// Script module to read locales from when they are not declared inline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale_source: Option<String>,
    #[serde(default = "default_scan_dirs")]
    pub scan_dirs: Vec<String>,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backend: Option<BackendConfig>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendConfig {
    pub command: String,
    #[serde(default)]
    pub args: Vec<String>,
}

fn default_scan_dirs() -> Vec<String> {
    ["content/docs", "messages"].map(String::from).to_vec()
}

fn default_extensions() -> Vec<String> {
    ["md", "mdx", "json"].map(String::from).to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_locale: Some("en".to_string()),
            locales: Some(BTreeMap::from([("en".to_string(), "English".to_string())])),
            locale_source: None,
            scan_dirs: default_scan_dirs(),
            extensions: default_extensions(),
            ignores: Vec::new(),
            backend: None,
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'ignores': \"{}\"", pattern)
                })?;
            }
        }

        if self.scan_dirs.is_empty() {
            bail!("'scanDirs' must list at least one directory");
        }

        if let Some(ext) = self
            .extensions
            .iter()
            .find(|e| e.is_empty() || e.starts_with('.'))
        {
            bail!(
                "Invalid extension in 'extensions': \"{}\" (use e.g. \"mdx\", without the dot)",
                ext
            );
        }

        Ok(())
    }

    /// Where the locale registry comes from.
    ///
    /// Inline `defaultLocale`/`locales` win; otherwise `localeSource` is used.
    pub fn locale_source(&self, root: &Path) -> Result<Box<dyn LocaleSource>> {
        if self.default_locale.is_some() || self.locales.is_some() {
            return Ok(Box::new(InlineLocales {
                default_locale: self.default_locale.clone(),
                locales: self.locales.clone(),
            }));
        }
        match &self.locale_source {
            Some(path) => Ok(Box::new(ScriptLocales {
                path: root.join(path),
            })),
            None => bail!(
                "No locales configured: set 'defaultLocale' and 'locales', or 'localeSource' in {}",
                CONFIG_FILE_NAME
            ),
        }
    }

    pub fn load_registry(&self, root: &Path) -> Result<LocaleRegistry> {
        let source = self.locale_source(root)?;
        source
            .load()
            .with_context(|| format!("Failed to load locales from {}", source.describe()))
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory containing the config file; all configured paths are relative to it.
    pub root: PathBuf,
}

/// Find and parse the config file, starting at `start_dir` and walking up.
///
/// A missing config file is an error: without it there is no locale registry.
pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    let Some(path) = find_config_file(start_dir) else {
        bail!(
            "{} not found in {} or any parent directory (run `docfam init` to create one)",
            CONFIG_FILE_NAME,
            start_dir.display()
        );
    };

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;
    config.validate()?;

    let root = path
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| start_dir.to_path_buf());

    Ok(ConfigLoadResult { config, root })
}
