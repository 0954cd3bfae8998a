//! File discovery backend
//!
//! Uses walkdir to traverse the scan root and yield candidate source files.

use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::core::error::ScanError;
use crate::core::paths::has_suffix;

/// Lazily discover every file under `root` whose name ends in `suffix`.
///
/// Entries are sorted by file name within each directory so repeated runs see
/// files in the same order. A missing or unreadable root (or subdirectory) is
/// yielded as `ScanError::Walk`, a root that is not a directory as
/// `ScanError::RootNotDirectory`.
pub fn discover_files<'a>(
    root: &Path,
    suffix: &'a str,
) -> impl Iterator<Item = Result<PathBuf, ScanError>> + 'a {
    WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter()
        .filter_map(move |entry| match entry {
            Ok(e) if e.depth() == 0 => {
                if e.path().is_dir() {
                    None
                } else {
                    Some(Err(ScanError::RootNotDirectory {
                        path: e.into_path(),
                    }))
                }
            }
            Ok(e) => {
                if is_candidate_file(&e) && has_suffix(e.path(), suffix) {
                    Some(Ok(e.into_path()))
                } else {
                    None
                }
            }
            Err(err) => {
                let path = err.path().map(Path::to_path_buf).unwrap_or_default();
                Some(Err(ScanError::Walk { path, source: err }))
            }
        })
}

/// Regular files, plus symlinks that do not point at a directory.
///
/// Symlinked directories are never entered. A dangling link is kept so that
/// opening it fails the run like any other unreadable file.
fn is_candidate_file(entry: &DirEntry) -> bool {
    entry.file_type().is_file() || (entry.path_is_symlink() && !entry.path().is_dir())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::tempdir;

    fn discover(root: &Path, suffix: &str) -> Vec<PathBuf> {
        discover_files(root, suffix)
            .collect::<Result<Vec<_>, _>>()
            .unwrap()
    }

    #[test]
    fn test_discover_empty_dir() {
        let temp = tempdir().unwrap();
        assert!(discover(temp.path(), ".java").is_empty());
    }

    #[test]
    fn test_discover_recurses_and_filters_by_suffix() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("src/main/java/org")).unwrap();
        File::create(temp.path().join("Top.java")).unwrap();
        File::create(temp.path().join("src/main/java/org/Deep.java")).unwrap();
        File::create(temp.path().join("src/main/java/org/notes.txt")).unwrap();
        File::create(temp.path().join("src/main/java/org/Deep.java.orig")).unwrap();

        let found = discover(temp.path(), ".java");
        assert_eq!(
            found,
            vec![
                temp.path().join("Top.java"),
                temp.path().join("src/main/java/org/Deep.java"),
            ]
        );
    }

    #[test]
    fn test_discover_skips_directories_with_suffix() {
        let temp = tempdir().unwrap();
        fs::create_dir(temp.path().join("odd.java")).unwrap();
        File::create(temp.path().join("odd.java/Real.java")).unwrap();

        let found = discover(temp.path(), ".java");
        assert_eq!(found, vec![temp.path().join("odd.java/Real.java")]);
    }

    #[test]
    fn test_discover_missing_root_fails() {
        let temp = tempdir().unwrap();
        let missing = temp.path().join("nope");

        let first = discover_files(&missing, ".java").next();
        match first {
            Some(Err(err)) => assert_eq!(err.io_kind(), Some(std::io::ErrorKind::NotFound)),
            other => panic!("expected walk error, got {:?}", other),
        }
    }

    #[test]
    fn test_discover_root_file_fails() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("A.java");
        fs::write(&file, "import java.util.List;\n").unwrap();

        let results: Vec<_> = discover_files(&file, ".java").collect();
        assert_eq!(results.len(), 1);
        assert!(matches!(
            &results[0],
            Err(ScanError::RootNotDirectory { path }) if path == &file
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_discover_follows_file_symlinks() {
        use std::os::unix::fs::symlink;

        let temp = tempdir().unwrap();
        let outside = temp.path().join("outside");
        let root = temp.path().join("root");
        fs::create_dir_all(&outside).unwrap();
        fs::create_dir_all(&root).unwrap();
        fs::write(outside.join("Real.java"), "import java.util.List;\n").unwrap();
        symlink(outside.join("Real.java"), root.join("Link.java")).unwrap();

        assert_eq!(discover(&root, ".java"), vec![root.join("Link.java")]);
    }

    #[cfg(unix)]
    #[test]
    fn test_discover_does_not_enter_dir_symlinks() {
        use std::os::unix::fs::symlink;

        let temp = tempdir().unwrap();
        let outside = temp.path().join("outside");
        let root = temp.path().join("root");
        fs::create_dir_all(&outside).unwrap();
        fs::create_dir_all(&root).unwrap();
        File::create(outside.join("Hidden.java")).unwrap();
        symlink(&outside, root.join("linked.java")).unwrap();

        assert!(discover(&root, ".java").is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_discover_keeps_dangling_symlink() {
        use std::os::unix::fs::symlink;

        let temp = tempdir().unwrap();
        symlink(temp.path().join("gone.java"), temp.path().join("Dangling.java")).unwrap();

        assert_eq!(
            discover(temp.path(), ".java"),
            vec![temp.path().join("Dangling.java")]
        );
    }
}
