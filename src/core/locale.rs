//! Locale registry and the sources it can be loaded from.
//!
//! The registry is the only locale information the rest of the pipeline needs:
//! one default locale code plus the supported codes and their display names.
//! How it is obtained (inline config, scraped from a TypeScript module, ...)
//! is hidden behind [`LocaleSource`].

use std::{collections::BTreeMap, fs, path::PathBuf};

use anyhow::{Context, Result, bail};
use regex::Regex;

/// Short locale identifier, e.g. `en` or `zh`.
pub type LocaleCode = String;

/// Immutable mapping of supported locales plus the designated default.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleRegistry {
    default_locale: LocaleCode,
    locales: BTreeMap<LocaleCode, String>,
}

impl LocaleRegistry {
    /// Build a registry, checking that the default is one of the supported codes.
    pub fn new(
        default_locale: impl Into<LocaleCode>,
        locales: BTreeMap<LocaleCode, String>,
    ) -> Result<Self> {
        let default_locale = default_locale.into();
        if locales.is_empty() {
            bail!("No supported locales declared");
        }
        if !locales.contains_key(&default_locale) {
            bail!(
                "Default locale '{}' is not one of the supported locales ({})",
                default_locale,
                locales.keys().cloned().collect::<Vec<_>>().join(", ")
            );
        }
        Ok(Self {
            default_locale,
            locales,
        })
    }

    pub fn default_locale(&self) -> &str {
        &self.default_locale
    }

    pub fn is_supported(&self, code: &str) -> bool {
        self.locales.contains_key(code)
    }

    /// Display name for a supported locale.
    pub fn name(&self, code: &str) -> Option<&str> {
        self.locales.get(code).map(String::as_str)
    }

    /// Display name, falling back to the code itself for unknown locales.
    pub fn name_or_code<'a>(&'a self, code: &'a str) -> &'a str {
        self.name(code).unwrap_or(code)
    }

    /// Supported locale codes in stable (sorted) order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.locales.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}

/// Anything that can produce a [`LocaleRegistry`].
///
/// Failures here are configuration errors and abort the run.
pub trait LocaleSource {
    fn load(&self) -> Result<LocaleRegistry>;

    /// Human-readable description used in diagnostics.
    fn describe(&self) -> String;
}

/// Locales declared directly in the config file.
#[derive(Debug, Clone)]
pub struct InlineLocales {
    pub default_locale: Option<String>,
    pub locales: Option<BTreeMap<String, String>>,
}

impl LocaleSource for InlineLocales {
    fn load(&self) -> Result<LocaleRegistry> {
        let Some(default_locale) = &self.default_locale else {
            bail!("Config is missing 'defaultLocale'");
        };
        let Some(locales) = &self.locales else {
            bail!("Config is missing 'locales'");
        };
        LocaleRegistry::new(default_locale.clone(), locales.clone())
    }

    fn describe(&self) -> String {
        "inline config".to_string()
    }
}

/// Locales scraped from a TypeScript i18n module such as `src/i18n/config.ts`:
///
/// ```ts
/// export const defaultLocale: Locale = 'en';
/// export const supportedLocales = { en: 'English', zh: '简体中文' };
/// ```
#[derive(Debug, Clone)]
pub struct ScriptLocales {
    pub path: PathBuf,
}

impl LocaleSource for ScriptLocales {
    fn load(&self) -> Result<LocaleRegistry> {
        let content = fs::read_to_string(&self.path)
            .with_context(|| format!("Locale source not found: {}", self.path.display()))?;
        parse_script_locales(&content)
            .with_context(|| format!("Failed to read locales from {}", self.path.display()))
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Extract the default locale and the supported locale map from script source.
pub fn parse_script_locales(content: &str) -> Result<LocaleRegistry> {
    let default_re = Regex::new(r#"defaultLocale\b[^=\n]*=\s*['"]([\w-]+)['"]"#)?;
    let block_re = Regex::new(r"(?s)supportedLocales\b[^=\n]*=\s*\{(.*?)\}")?;
    let pair_re = Regex::new(r#"['"]?([\w-]+)['"]?\s*:\s*['"]([^'"]*)['"]"#)?;

    let Some(default_locale) = default_re.captures(content).map(|c| c[1].to_string()) else {
        bail!("'defaultLocale' declaration not found");
    };
    let Some(block) = block_re.captures(content).map(|c| c[1].to_string()) else {
        bail!("'supportedLocales' declaration not found");
    };

    let locales: BTreeMap<String, String> = pair_re
        .captures_iter(&block)
        .map(|c| (c[1].trim().to_string(), c[2].trim().to_string()))
        .collect();

    LocaleRegistry::new(default_locale, locales)
}
