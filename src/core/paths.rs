//! Path utilities

use std::path::Path;

/// Normalize a path to use '/' as separator (for log and error output)
pub fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Check whether the file name of `path` ends with `suffix` (case-sensitive)
///
/// Equivalent to matching the name against the glob `*{suffix}`, so a file
/// named exactly `.java` matches the suffix `.java`.
pub fn has_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.ends_with(suffix))
        .unwrap_or(false)
}
