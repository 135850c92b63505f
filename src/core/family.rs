//! Document families: all locale variants of one logical page or resource.

use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use super::{
    classify::{Classification, FamilyKey, classify},
    locale::{LocaleCode, LocaleRegistry},
};

/// One file per locale, grouped under a shared [`FamilyKey`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentFamily {
    pub key: FamilyKey,
    members: BTreeMap<LocaleCode, PathBuf>,
}

impl DocumentFamily {
    pub fn new(key: FamilyKey) -> Self {
        Self {
            key,
            members: BTreeMap::new(),
        }
    }

    /// Insert a member, returning the path it displaced, if any.
    pub fn insert(&mut self, locale: impl Into<LocaleCode>, path: PathBuf) -> Option<PathBuf> {
        self.members.insert(locale.into(), path)
    }

    pub fn get(&self, locale: &str) -> Option<&Path> {
        self.members.get(locale).map(PathBuf::as_path)
    }

    pub fn contains_locale(&self, locale: &str) -> bool {
        self.members.contains_key(locale)
    }

    /// Members in locale-code order.
    pub fn members(&self) -> impl Iterator<Item = (&str, &Path)> {
        self.members
            .iter()
            .map(|(locale, path)| (locale.as_str(), path.as_path()))
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Two physical files mapped to the same family slot; the later one won.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub key: FamilyKey,
    pub locale: LocaleCode,
    pub kept: PathBuf,
    pub displaced: PathBuf,
}

/// A classified candidate file, kept for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedFile {
    pub path: PathBuf,
    pub classification: Classification,
}

/// All families discovered in one run.
#[derive(Debug, Clone, Default)]
pub struct FamilySet {
    pub families: BTreeMap<FamilyKey, DocumentFamily>,
    pub collisions: Vec<Collision>,
    pub classified: Vec<ClassifiedFile>,
}

impl FamilySet {
    pub fn len(&self) -> usize {
        self.families.len()
    }

    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DocumentFamily> {
        self.families.values()
    }
}

/// Classify every file and group the results by family key.
///
/// When two files map to the same (key, locale) pair the later one wins; the
/// overwritten path is recorded in [`FamilySet::collisions`].
pub fn build_families<I>(files: I, registry: &LocaleRegistry) -> FamilySet
where
    I: IntoIterator<Item = PathBuf>,
{
    let mut set = FamilySet::default();

    for path in files {
        let classification = classify(&path, registry);
        let family = set
            .families
            .entry(classification.key.clone())
            .or_insert_with(|| DocumentFamily::new(classification.key.clone()));

        if let Some(displaced) = family.insert(classification.locale.clone(), path.clone()) {
            set.collisions.push(Collision {
                key: classification.key.clone(),
                locale: classification.locale.clone(),
                kept: path.clone(),
                displaced,
            });
        }

        set.classified.push(ClassifiedFile {
            path,
            classification,
        });
    }

    set
}
