//! Content collection location.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default collection directory, relative to the project root.
fn default_dir() -> String {
    String::from("src/content/walks")
}

/// Default collection name.
fn default_collection() -> String {
    String::from("walks")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContentConfig {
    /// Directory holding one data file per walk. Relative paths are resolved
    /// against the project root.
    #[serde(default = "default_dir")]
    pub dir: String,

    /// Collection name reported in output.
    #[serde(default = "default_collection")]
    pub collection: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dir: default_dir(),
            collection: default_collection(),
        }
    }
}

impl ContentConfig {
    /// Absolute (or root-relative) collection directory.
    #[must_use]
    pub fn resolve_dir(&self, project_root: &Path) -> PathBuf {
        let dir = Path::new(&self.dir);
        if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            project_root.join(dir)
        }
    }
}
