//! Local icon directory used by the optional icon-reference check.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct IconsConfig {
    /// Directory of `*.svg` icons. Empty disables the check.
    #[serde(default)]
    pub dir: String,

    /// Treat unresolved icon keys as entry failures instead of warnings.
    #[serde(default)]
    pub strict: bool,
}

impl IconsConfig {
    /// Check if an icon directory has been set.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.dir.is_empty()
    }

    /// Icon directory resolved against the project root, if configured.
    #[must_use]
    pub fn resolve_dir(&self, project_root: &Path) -> Option<PathBuf> {
        if !self.is_configured() {
            return None;
        }
        let dir = Path::new(&self.dir);
        Some(if dir.is_absolute() {
            dir.to_path_buf()
        } else {
            project_root.join(dir)
        })
    }
}
