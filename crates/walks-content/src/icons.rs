//! Icon-reference check.
//!
//! Visitor-info icons are opaque keys for the site's icon loader. Local
//! icons are `*.svg` files named by their path under the icon directory
//! (`car`, `transport/bus`); keys with a `:` (`mdi:car`) come from an
//! installed icon pack and are never checked here.

use serde::Serialize;
use std::collections::BTreeSet;
use std::fmt;
use std::path::Path;

use walks_core::Walk;

use crate::error::ContentError;
use crate::walk::build_walker;

/// Names of the local icons available to the site.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconSet {
    names: BTreeSet<String>,
}

impl IconSet {
    /// Collect every `*.svg` under `dir`.
    ///
    /// # Errors
    ///
    /// Returns `ContentError::MissingIconDir` if `dir` is not a directory and
    /// `ContentError::Walk` if traversal fails.
    pub fn from_dir(dir: &Path) -> Result<Self, ContentError> {
        if !dir.is_dir() {
            return Err(ContentError::MissingIconDir(dir.to_path_buf()));
        }

        let mut names = BTreeSet::new();
        for entry in build_walker(dir) {
            let entry = entry.map_err(|source| ContentError::Walk {
                path: dir.to_path_buf(),
                source,
            })?;
            let path = entry.path();
            let is_svg = path
                .extension()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
            if !is_svg {
                continue;
            }
            if let Some(name) = path
                .strip_prefix(dir)
                .ok()
                .and_then(|relative| walks_core::ids::entry_id(relative).ok())
            {
                names.insert(name);
            }
        }

        tracing::debug!(dir = %dir.display(), count = names.len(), "loaded icon set");
        Ok(Self { names })
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for IconSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// An icon key used by a walk, with its location in the entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconReference {
    /// Field path of the key, e.g. `visitorInfo[1].icon`.
    pub path: String,
    pub icon: String,
}

impl fmt::Display for IconReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.icon, self.path)
    }
}

/// Icon keys of `walk` that are local references missing from `icons`.
#[must_use]
pub fn unresolved_icons(walk: &Walk, icons: &IconSet) -> Vec<IconReference> {
    walk.icon_keys()
        .enumerate()
        .filter(|(_, icon)| !icon.contains(':') && !icons.contains(icon))
        .map(|(index, icon)| IconReference {
            path: format!("visitorInfo[{index}].icon"),
            icon: icon.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use walks_core::{Difficulty, VisitorInfoEntry};

    fn walk_with_icons(icons: &[&str]) -> Walk {
        Walk {
            title: "Loop".into(),
            card_description: String::new(),
            tags: Vec::new(),
            area: String::new(),
            image: String::new(),
            image_alt: String::new(),
            difficulty: Difficulty::Easy,
            duration: String::new(),
            distance: String::new(),
            is_accessible: false,
            has_alerts: false,
            overview: String::new(),
            timeline: Vec::new(),
            map_url: String::new(),
            visitor_info: icons
                .iter()
                .map(|icon| VisitorInfoEntry {
                    title: (*icon).to_string(),
                    icon: (*icon).to_string(),
                    content: Vec::new(),
                })
                .collect(),
        }
    }

    #[test]
    fn from_dir_names_icons_by_relative_path() {
        let tmp = tempfile::tempdir().unwrap();
        fs::create_dir_all(tmp.path().join("transport")).unwrap();
        fs::write(tmp.path().join("car.svg"), "<svg/>").unwrap();
        fs::write(tmp.path().join("transport/bus.SVG"), "<svg/>").unwrap();
        fs::write(tmp.path().join("readme.txt"), "not an icon").unwrap();

        let icons = IconSet::from_dir(tmp.path()).unwrap();
        assert_eq!(icons.len(), 2);
        assert!(icons.contains("car"));
        assert!(icons.contains("transport/bus"));
        assert!(!icons.contains("readme"));
    }

    #[test]
    fn from_dir_requires_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("icons");
        assert!(matches!(
            IconSet::from_dir(&missing),
            Err(ContentError::MissingIconDir(path)) if path == missing
        ));
    }

    #[test]
    fn reports_missing_local_icons_with_paths() {
        let icons: IconSet = ["car", "toilet"].into_iter().collect();
        let walk = walk_with_icons(&["car", "cafe", "toilet", "bench"]);

        assert_eq!(
            unresolved_icons(&walk, &icons),
            [
                IconReference {
                    path: "visitorInfo[1].icon".into(),
                    icon: "cafe".into(),
                },
                IconReference {
                    path: "visitorInfo[3].icon".into(),
                    icon: "bench".into(),
                },
            ]
        );
    }

    #[test]
    fn icon_pack_keys_are_never_reported() {
        let walk = walk_with_icons(&["mdi:car", "lucide:map"]);
        assert!(unresolved_icons(&walk, &IconSet::default()).is_empty());
    }
}
