//! Target planning: which locales to create or update, and where they live.

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

use super::{
    classify::FamilyKey,
    family::DocumentFamily,
    locale::{LocaleCode, LocaleRegistry},
    resolve::SourceOfTruth,
};

/// A locale variant to be written, with its destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub locale: LocaleCode,
    pub path: PathBuf,
}

/// Work for one family.
///
/// `create`, `update` and the source locale partition the supported locales:
/// each supported code appears in exactly one of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetPlan {
    pub key: FamilyKey,
    pub source: SourceOfTruth,
    /// Supported locales missing from the family.
    pub create: Vec<Target>,
    /// Existing members other than the source.
    pub update: Vec<Target>,
}

impl TargetPlan {
    pub fn is_noop(&self) -> bool {
        self.create.is_empty() && self.update.is_empty()
    }

    pub fn create_locales(&self) -> Vec<&str> {
        self.create.iter().map(|t| t.locale.as_str()).collect()
    }

    pub fn update_locales(&self) -> Vec<&str> {
        self.update.iter().map(|t| t.locale.as_str()).collect()
    }

    /// Destination for a created locale, if it was planned.
    pub fn create_path(&self, locale: &str) -> Option<&Path> {
        self.create
            .iter()
            .find(|t| t.locale == locale)
            .map(|t| t.path.as_path())
    }
}

pub fn plan(family: &DocumentFamily, source: &SourceOfTruth, registry: &LocaleRegistry) -> TargetPlan {
    let mut create = Vec::new();
    let mut update = Vec::new();

    for locale in registry.codes() {
        match family.get(locale) {
            None => create.push(Target {
                locale: locale.to_string(),
                path: destination(family.key.as_path(), &source.path, locale, registry),
            }),
            Some(_) if locale == source.locale => {}
            Some(path) => update.push(Target {
                locale: locale.to_string(),
                path: path.to_path_buf(),
            }),
        }
    }

    TargetPlan {
        key: family.key.clone(),
        source: source.clone(),
        create,
        update,
    }
}

/// Synthesize the path of a new `locale` variant.
///
/// A source named after a locale (`messages/en.json`) produces a sibling
/// `messages/<locale>.json`. Anything else appends the locale marker to the
/// family prefix: `docs/index.<locale>.mdx`, or plain `docs/index.mdx` for the
/// default locale.
pub fn destination(prefix: &Path, source: &Path, locale: &str, registry: &LocaleRegistry) -> PathBuf {
    let source_is_bare = source
        .file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| registry.is_supported(stem));

    let mut name = if source_is_bare {
        OsString::from(locale)
    } else {
        let mut name = OsString::from(prefix.as_os_str());
        if locale != registry.default_locale() {
            name.push(".");
            name.push(locale);
        }
        name
    };
    if let Some(extension) = source.extension() {
        name.push(".");
        name.push(extension);
    }

    if source_is_bare {
        prefix.join(name)
    } else {
        PathBuf::from(name)
    }
}
