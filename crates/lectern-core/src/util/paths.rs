//! Generic path utilities.

use std::path::{Path, PathBuf};

/// Expand a leading `~` to the user's home directory.
///
/// ```
/// use lectern_core::util::paths::expand_tilde;
///
/// let path = expand_tilde("/absolute/path");
/// assert_eq!(path.to_str(), Some("/absolute/path"));
/// ```
pub fn expand_tilde(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}

/// Walk up from `start` looking for a directory containing `marker`.
///
/// Returns the first ancestor (including `start` itself) where
/// `ancestor.join(marker)` exists.
pub fn find_dir_with_marker(start: &Path, marker: &str) -> Option<PathBuf> {
    start
        .ancestors()
        .find(|dir| dir.join(marker).exists())
        .map(Path::to_path_buf)
}

/// Resolve `path` against `base` unless it is already absolute.
pub fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
