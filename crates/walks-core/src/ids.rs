//! Collection entry ids.
//!
//! An entry id is the file's path relative to the collection directory with
//! the extension removed and `/` as the separator, so
//! `north/coastal-loop.yaml` becomes `north/coastal-loop`.

use std::path::{Component, Path};

use crate::errors::CoreError;

/// Derive the entry id from a path relative to the collection directory.
///
/// # Errors
///
/// Returns `CoreError::InvalidEntryPath` if the path is empty, absolute,
/// escapes the collection (`..`), or is not valid UTF-8.
pub fn entry_id(relative: &Path) -> Result<String, CoreError> {
    let invalid = || CoreError::InvalidEntryPath(relative.display().to_string());

    let stem_path = relative.with_extension("");
    let mut segments = Vec::new();
    for component in stem_path.components() {
        match component {
            Component::Normal(part) => segments.push(part.to_str().ok_or_else(invalid)?),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(invalid());
            }
        }
    }

    if segments.is_empty() || segments.iter().any(|s| s.is_empty()) {
        return Err(invalid());
    }

    Ok(segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn strips_extension() {
        assert_eq!(entry_id(Path::new("coastal-loop.json")).unwrap(), "coastal-loop");
    }

    #[test]
    fn keeps_nested_directories() {
        let path: PathBuf = ["north", "coastal-loop.yaml"].iter().collect();
        assert_eq!(entry_id(&path).unwrap(), "north/coastal-loop");
    }

    #[test]
    fn only_last_extension_is_removed() {
        assert_eq!(entry_id(Path::new("loop.v2.toml")).unwrap(), "loop.v2");
    }

    #[test]
    fn leading_cur_dir_is_ignored() {
        assert_eq!(entry_id(Path::new("./loop.json")).unwrap(), "loop");
    }

    #[test]
    fn rejects_parent_and_absolute_paths() {
        assert!(matches!(
            entry_id(Path::new("../loop.json")),
            Err(CoreError::InvalidEntryPath(_))
        ));
        assert!(entry_id(Path::new("/abs/loop.json")).is_err());
        assert!(entry_id(Path::new("")).is_err());
    }
}
