//! Path classification: maps a file path to its family key and locale.
//!
//! Three layouts are recognized, first match wins:
//!
//! 1. `docs/index.zh.mdx` - dotted locale marker, key `docs/index`
//! 2. `messages/zh.json`  - bare locale file name, key `messages`
//! 3. `docs/index.mdx`    - no marker, default locale, key `docs/index`
//!
//! A stem whose last dot-segment happens to equal a locale code is always read
//! as layout 1; no content inspection is done to disambiguate.

use std::{
    ffi::OsStr,
    fmt,
    path::{Path, PathBuf},
};

use super::locale::{LocaleCode, LocaleRegistry};

/// Locale-independent path prefix identifying one logical document.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FamilyKey(PathBuf);

impl FamilyKey {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self(path.into())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Key rendered relative to `root` when possible.
    pub fn display_relative(&self, root: &Path) -> String {
        display_relative(&self.0, root)
    }
}

impl fmt::Display for FamilyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Which naming layout a file was recognized as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathForm {
    /// `name.<locale>.ext`
    Dotted,
    /// `<locale>.ext`
    Bare,
    /// `name.ext`, implicitly the default locale
    Default,
}

impl fmt::Display for PathForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PathForm::Dotted => "dotted",
            PathForm::Bare => "bare",
            PathForm::Default => "default",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub key: FamilyKey,
    pub locale: LocaleCode,
    pub form: PathForm,
}

/// Derive the family key and locale for `path`.
///
/// Pure function of its inputs; the file system is never touched.
pub fn classify(path: &Path, registry: &LocaleRegistry) -> Classification {
    let dir = path.parent().unwrap_or_else(|| Path::new(""));
    let stem = path.file_stem().unwrap_or_default();

    // The stem is split as a path so non-UTF-8 names keep their exact bytes;
    // only the locale marker itself has to be valid UTF-8.
    let stem_path = Path::new(stem);
    if let Some(marker) = stem_path.extension().and_then(OsStr::to_str)
        && registry.is_supported(marker)
        && let Some(prefix) = stem_path.file_stem()
    {
        return Classification {
            key: FamilyKey::new(dir.join(prefix)),
            locale: marker.to_string(),
            form: PathForm::Dotted,
        };
    }

    if let Some(code) = stem.to_str()
        && registry.is_supported(code)
    {
        return Classification {
            key: FamilyKey::new(dir),
            locale: code.to_string(),
            form: PathForm::Bare,
        };
    }

    Classification {
        key: FamilyKey::new(dir.join(stem)),
        locale: registry.default_locale().to_string(),
        form: PathForm::Default,
    }
}

/// Render `path` relative to `root`, or as-is when it lies outside it.
pub fn display_relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}
