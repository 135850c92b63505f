//! Source-of-truth election: which member of a family is translated from.

use std::{
    fmt,
    path::{Path, PathBuf},
};

use super::{changes::ChangeSet, family::DocumentFamily, locale::LocaleCode};

/// The member elected as the basis for this run's translation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceOfTruth {
    pub locale: LocaleCode,
    pub path: PathBuf,
}

/// Why a particular member was elected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// The default-locale file was changed; default edits always win.
    ChangedDefault,
    /// Exactly one (non-default) member was changed.
    SingleChange,
    /// Nothing in the family changed; the default-locale member is used.
    UnchangedDefault,
    /// Nothing changed and there is no default-locale member; the first
    /// member in locale order is used.
    FirstAvailable,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Strategy::ChangedDefault => "default locale file changed",
            Strategy::SingleChange => "only changed file in family",
            Strategy::UnchangedDefault => "no changes, using default locale",
            Strategy::FirstAvailable => "no changes and no default locale file, using first member",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Resolved {
        source: SourceOfTruth,
        strategy: Strategy,
    },
    /// Several non-default members changed at once; intent is unclear.
    Ambiguous { changed: Vec<LocaleCode> },
    /// The family has no members at all.
    Empty,
}

impl Resolution {
    pub fn source(&self) -> Option<&SourceOfTruth> {
        match self {
            Resolution::Resolved { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Elect the source of truth for `family`.
///
/// Deterministic for a given family and change set: members are visited in
/// locale-code order.
pub fn resolve(family: &DocumentFamily, default_locale: &str, changes: &ChangeSet) -> Resolution {
    let changed: Vec<(&str, &Path)> = family
        .members()
        .filter(|(_, path)| changes.contains(path))
        .collect();

    let resolved = |locale: &str, path: &Path, strategy| Resolution::Resolved {
        source: SourceOfTruth {
            locale: locale.to_string(),
            path: path.to_path_buf(),
        },
        strategy,
    };

    if let Some((locale, path)) = changed.iter().find(|(l, _)| *l == default_locale) {
        return resolved(*locale, *path, Strategy::ChangedDefault);
    }

    match changed.as_slice() {
        [(locale, path)] => resolved(*locale, *path, Strategy::SingleChange),
        [] => {
            if let Some(path) = family.get(default_locale) {
                resolved(default_locale, path, Strategy::UnchangedDefault)
            } else if let Some((locale, path)) = family.members().next() {
                resolved(locale, path, Strategy::FirstAvailable)
            } else {
                Resolution::Empty
            }
        }
        many => Resolution::Ambiguous {
            changed: many.iter().map(|(l, _)| l.to_string()).collect(),
        },
    }
}
