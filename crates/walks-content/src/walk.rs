//! File walker over a collection directory.
//!
//! Uses the `ignore` crate so `.gitignore` rules apply to content folders.
//! Hidden files are skipped, and so is anything whose name starts with `_`,
//! which lets authors park drafts next to published entries.

use ignore::{DirEntry, WalkBuilder};
use std::path::Path;

/// Build a file walker over `root`, yielding entries in file-name order.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use walks_content::walk::build_walker;
///
/// for entry in build_walker(Path::new("src/content/walks")) {
///     println!("{}", entry.expect("readable").path().display());
/// }
/// ```
pub fn build_walker(root: &Path) -> ignore::Walk {
    let mut builder = WalkBuilder::new(root);
    builder
        .hidden(true)
        .require_git(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(|entry| !is_underscored(entry));
    builder.build()
}

fn is_underscored(entry: &DirEntry) -> bool {
    // Depth 0 is the root itself, whose name is not ours to judge.
    entry.depth() > 0 && entry.file_name().to_string_lossy().starts_with('_')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn create_fixture(dir: &Path) {
        for d in ["north", "_drafts", ".cache"] {
            fs::create_dir_all(dir.join(d)).expect("mkdir should succeed");
        }

        let files = [
            ("coastal-loop.json", "{}"),
            ("north/ridge.yaml", "title: Ridge"),
            ("_unpublished.json", "{}"),
            ("_drafts/wip.json", "{}"),
            (".cache/stale.json", "{}"),
            (".hidden.json", "{}"),
            ("notes.md", "# notes"),
        ];
        for (path, content) in files {
            fs::write(dir.join(path), content).expect("write should succeed");
        }
    }

    fn walked_files(root: &Path) -> Vec<String> {
        build_walker(root)
            .filter_map(Result::ok)
            .filter(|e| e.file_type().is_some_and(|ft| ft.is_file()))
            .map(|e| {
                e.path()
                    .strip_prefix(root)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn walks_nested_entries() {
        let tmp = tempfile::tempdir().unwrap();
        create_fixture(tmp.path());

        let entries = walked_files(tmp.path());
        assert!(entries.contains(&"coastal-loop.json".to_string()));
        assert!(entries.contains(&"north/ridge.yaml".to_string()));
        // Filtering by format happens in the loader, not here.
        assert!(entries.contains(&"notes.md".to_string()));
    }

    #[test]
    fn skips_underscored_and_hidden() {
        let tmp = tempfile::tempdir().unwrap();
        create_fixture(tmp.path());

        let entries = walked_files(tmp.path());
        assert!(!entries.iter().any(|e| e.contains("_unpublished")));
        assert!(!entries.iter().any(|e| e.starts_with("_drafts")));
        assert!(!entries.iter().any(|e| e.starts_with(".cache")));
        assert!(!entries.contains(&".hidden.json".to_string()));
    }

    #[test]
    fn respects_gitignore_without_a_repository() {
        let tmp = tempfile::tempdir().unwrap();
        create_fixture(tmp.path());
        fs::write(tmp.path().join(".gitignore"), "north/\n").expect("write .gitignore");

        let entries = walked_files(tmp.path());
        assert!(!entries.iter().any(|e| e.starts_with("north")));
        assert!(entries.contains(&"coastal-loop.json".to_string()));
    }

    #[test]
    fn yields_files_in_name_order() {
        let tmp = tempfile::tempdir().unwrap();
        for name in ["c.json", "a.json", "b.json"] {
            fs::write(tmp.path().join(name), "{}").expect("write should succeed");
        }
        assert_eq!(walked_files(tmp.path()), ["a.json", "b.json", "c.json"]);
    }
}
