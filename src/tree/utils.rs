//! Shared path helpers for tree walking

use std::path::{Path, PathBuf};

/// File name as a string, lossily converted.
pub fn file_name_lossy(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| ".".to_string())
}

/// Lower-cased final extension including the leading dot, e.g. `.go`.
///
/// Returns `None` for names without an extension. Dotfiles such as `.env`
/// have no extension.
pub fn dotted_extension(path: &Path) -> Option<String> {
    let ext = path.extension()?.to_string_lossy();
    Some(format!(".{}", ext.to_lowercase()))
}

/// Path of `path` relative to `root`, falling back to `path` itself.
pub fn relative_to(path: &Path, root: &Path) -> PathBuf {
    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}

/// Hidden entries are left out of the structure rendering, like `tree` does.
pub fn is_hidden_name(name: &str) -> bool {
    name.starts_with('.')
}
