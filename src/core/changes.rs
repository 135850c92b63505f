//! Externally supplied change lists (typically from a VCS diff) and the
//! family filter built on them.

use std::{
    collections::{BTreeMap, HashSet},
    path::{Component, Path, PathBuf},
};

use super::{classify::FamilyKey, family::DocumentFamily};

/// Set of changed files, resolved to absolute paths under the project root.
///
/// The default value means full-scan mode: no change list was supplied. A
/// supplied list stays a filter even when it names no usable path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    paths: HashSet<PathBuf>,
    supplied: bool,
}

impl ChangeSet {
    pub fn new<I>(paths: I) -> Self
    where
        I: IntoIterator<Item = PathBuf>,
    {
        Self {
            paths: paths.into_iter().map(|p| normalize_path(&p)).collect(),
            supplied: true,
        }
    }

    /// Parse a comma-separated list of paths.
    ///
    /// Relative paths are joined onto `root`. When a relative path starts with
    /// the root directory's own name (`site/docs/a.md` for a root named `site`,
    /// as produced by diffs taken from a parent repository), that leading
    /// component is dropped first. Empty entries are ignored.
    ///
    /// Only an empty string selects full-scan mode; `" , "` is a supplied list
    /// with no entries and matches nothing.
    pub fn parse(raw: &str, root: &Path) -> Self {
        if raw.is_empty() {
            return Self::default();
        }
        let root_name = root.file_name();
        let paths = raw
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(|p| {
                let path = Path::new(p);
                if path.is_absolute() {
                    return path.to_path_buf();
                }
                let mut components = path.components();
                let relative = match (components.next(), root_name) {
                    (Some(Component::Normal(first)), Some(name)) if first == name => {
                        components.as_path()
                    }
                    _ => path,
                };
                root.join(relative)
            });
        Self::new(paths)
    }

    pub fn contains(&self, path: &Path) -> bool {
        self.paths.contains(&normalize_path(path))
    }

    /// True when no change list was supplied.
    pub fn is_full_scan(&self) -> bool {
        !self.supplied
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Paths in sorted order, for reporting.
    pub fn sorted(&self) -> Vec<&Path> {
        let mut paths: Vec<&Path> = self.paths.iter().map(PathBuf::as_path).collect();
        paths.sort();
        paths
    }
}

/// Keep only families with at least one member in `changes`.
///
/// In full-scan mode every family is returned.
pub fn filter_by_changes(
    families: BTreeMap<FamilyKey, DocumentFamily>,
    changes: &ChangeSet,
) -> BTreeMap<FamilyKey, DocumentFamily> {
    if changes.is_full_scan() {
        return families;
    }
    families
        .into_iter()
        .filter(|(_, family)| family.members().any(|(_, path)| changes.contains(path)))
        .collect()
}

/// Lexically normalize a path: drop `.` segments and fold `..` into the parent.
///
/// The file system is not consulted, so deleted files still normalize. A `..`
/// only cancels a preceding normal segment; leading `..` segments are kept,
/// and `..` directly under the root stays at the root.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => out.push(component),
            },
            other => out.push(other),
        }
    }
    out
}
