//! Collection loading.
//!
//! Every entry file is read, decoded and validated on its own. A failure is
//! recorded against its file and never stops the rest of the collection.

use rayon::prelude::*;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use walks_core::Walk;
use walks_core::ids::entry_id;
use walks_schema::{ValidationOptions, validate_walk_all};

use crate::error::{ContentError, EntryError};
use crate::format::DataFormat;
use crate::icons::{IconReference, IconSet, unresolved_icons};
use crate::walk::build_walker;

/// How entries are checked while loading.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    pub validation: ValidationOptions,
    /// Local icons to check visitor-info keys against. `None` skips the check.
    pub icons: Option<IconSet>,
    /// Reject entries with unresolved icons instead of warning.
    pub icons_strict: bool,
}

/// A validated entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectionEntry {
    pub id: String,
    pub path: PathBuf,
    pub format: DataFormat,
    pub data: Walk,
}

/// The successfully loaded entries of one collection, keyed by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    name: String,
    entries: BTreeMap<String, CollectionEntry>,
}

impl Collection {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CollectionEntry> {
        self.entries.get(id)
    }

    /// Entries in id order.
    pub fn iter(&self) -> impl Iterator<Item = &CollectionEntry> {
        self.entries.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose record matches `predicate`, in id order.
    pub fn filter<'a, P>(&'a self, predicate: P) -> impl Iterator<Item = &'a CollectionEntry>
    where
        P: Fn(&Walk) -> bool + 'a,
    {
        self.entries.values().filter(move |entry| predicate(&entry.data))
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a CollectionEntry;
    type IntoIter = std::collections::btree_map::Values<'a, String, CollectionEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

/// An entry that was rejected.
#[derive(Debug)]
pub struct EntryFailure {
    /// Entry id, when the path yields one.
    pub id: Option<String>,
    pub path: PathBuf,
    pub error: EntryError,
}

/// A local icon key that does not resolve, reported without rejecting the entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconWarning {
    pub id: String,
    pub reference: IconReference,
}

/// Outcome of loading a collection.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub collection: Collection,
    /// Rejected entries, sorted by path.
    pub failures: Vec<EntryFailure>,
    /// Sorted by entry id, then by position in the entry.
    pub icon_warnings: Vec<IconWarning>,
}

impl LoadReport {
    /// `true` when no entry was rejected. Icon warnings do not count.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Load and validate every entry under `dir`.
///
/// # Errors
///
/// Returns `ContentError::MissingCollection` if `dir` is not a directory and
/// `ContentError::Walk` if the directory cannot be traversed. Problems with
/// individual entries are reported in [`LoadReport::failures`].
pub fn load_collection(
    name: &str,
    dir: &Path,
    options: &LoadOptions,
) -> Result<LoadReport, ContentError> {
    if !dir.is_dir() {
        return Err(ContentError::MissingCollection(dir.to_path_buf()));
    }

    let files = discover(dir)?;
    tracing::debug!(collection = name, files = files.len(), "discovered entry files");

    let outcomes: Vec<Result<CollectionEntry, EntryFailure>> = files
        .into_par_iter()
        .map(|(path, format)| load_entry(dir, path, format, options.validation))
        .collect();

    let mut loaded = Vec::new();
    let mut failures = Vec::new();
    for outcome in outcomes {
        match outcome {
            Ok(entry) => loaded.push(entry),
            Err(failure) => failures.push(failure),
        }
    }

    let (mut entries, duplicates) = split_duplicates(loaded, &failures);
    failures.extend(duplicates);

    let mut icon_warnings = Vec::new();
    if let Some(icons) = &options.icons {
        entries.retain(|id, entry| {
            let unresolved = unresolved_icons(&entry.data, icons);
            if unresolved.is_empty() {
                return true;
            }
            if options.icons_strict {
                failures.push(EntryFailure {
                    id: Some(id.clone()),
                    path: entry.path.clone(),
                    error: EntryError::UnresolvedIcons(unresolved),
                });
                return false;
            }
            for reference in unresolved {
                tracing::warn!(id = %id, icon = %reference.icon, path = %reference.path, "unresolved icon");
                icon_warnings.push(IconWarning {
                    id: id.clone(),
                    reference,
                });
            }
            true
        });
    }

    failures.sort_by(|a, b| a.path.cmp(&b.path));
    for failure in &failures {
        tracing::warn!(
            path = %failure.path.display(),
            kind = failure.error.kind(),
            error = %failure.error,
            "rejected entry"
        );
    }

    tracing::info!(
        collection = name,
        loaded = entries.len(),
        failed = failures.len(),
        icon_warnings = icon_warnings.len(),
        "collection loaded"
    );

    Ok(LoadReport {
        collection: Collection {
            name: name.to_string(),
            entries,
        },
        failures,
        icon_warnings,
    })
}

/// Entry files under `dir` with a recognised format, in walk order.
fn discover(dir: &Path) -> Result<Vec<(PathBuf, DataFormat)>, ContentError> {
    let mut files = Vec::new();
    for entry in build_walker(dir) {
        let entry = entry.map_err(|source| ContentError::Walk {
            path: dir.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        if let Some(format) = DataFormat::from_path(entry.path()) {
            files.push((entry.into_path(), format));
        }
    }
    Ok(files)
}

fn load_entry(
    dir: &Path,
    path: PathBuf,
    format: DataFormat,
    validation: ValidationOptions,
) -> Result<CollectionEntry, EntryFailure> {
    let relative = path.strip_prefix(dir).unwrap_or(&path);
    let id = match entry_id(relative) {
        Ok(id) => id,
        Err(e) => {
            return Err(EntryFailure {
                id: None,
                path,
                error: e.into(),
            });
        }
    };

    match read_entry(&path, format, validation) {
        Ok(data) => {
            tracing::debug!(id = %id, path = %path.display(), "loaded entry");
            Ok(CollectionEntry {
                id,
                path,
                format,
                data,
            })
        }
        Err(error) => Err(EntryFailure {
            id: Some(id),
            path,
            error,
        }),
    }
}

fn read_entry(
    path: &Path,
    format: DataFormat,
    validation: ValidationOptions,
) -> Result<Walk, EntryError> {
    let text = std::fs::read_to_string(path)?;
    let raw = format.parse(&text)?;
    Ok(validate_walk_all(&raw, validation)?)
}

/// Partition entries into uniquely identified ones and duplicate-id failures.
/// A loaded entry is rejected when any other discovered file, loaded or
/// failed, maps to the same id. Failed files keep their own failure.
fn split_duplicates(
    loaded: Vec<CollectionEntry>,
    failed: &[EntryFailure],
) -> (BTreeMap<String, CollectionEntry>, Vec<EntryFailure>) {
    let mut claims: HashMap<String, Vec<PathBuf>> = HashMap::new();
    for entry in &loaded {
        claims.entry(entry.id.clone()).or_default().push(entry.path.clone());
    }
    for failure in failed {
        if let Some(id) = &failure.id {
            claims.entry(id.clone()).or_default().push(failure.path.clone());
        }
    }

    let mut entries = BTreeMap::new();
    let mut failures = Vec::new();
    for entry in loaded {
        let paths = claims.get(&entry.id).map_or(&[][..], Vec::as_slice);
        if paths.len() <= 1 {
            entries.insert(entry.id.clone(), entry);
            continue;
        }
        let mut others: Vec<PathBuf> = paths
            .iter()
            .filter(|p| **p != entry.path)
            .cloned()
            .collect();
        others.sort();
        failures.push(EntryFailure {
            id: Some(entry.id.clone()),
            error: EntryError::DuplicateId {
                id: entry.id,
                others,
            },
            path: entry.path,
        });
    }
    (entries, failures)
}
