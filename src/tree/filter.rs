//! Name and extension filtering for collected files

use std::path::Path;

use crate::config::CollectConfig;

use super::utils::file_name_lossy;

/// Whether a file found during the walk should be collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileDecision {
    Include,
    /// The exact file name is in the excluded-file set
    SkippedName,
    /// The extension is not in the included-extension set
    SkippedExtension,
}

/// File filter built from a `CollectConfig`.
/// The name check runs before the extension check.
pub struct FileFilter<'a> {
    config: &'a CollectConfig,
}

impl<'a> FileFilter<'a> {
    pub fn new(config: &'a CollectConfig) -> Self {
        Self { config }
    }

    pub fn decide(&self, path: &Path) -> FileDecision {
        let name = file_name_lossy(path);
        if self.config.is_excluded_file(&name) {
            return FileDecision::SkippedName;
        }
        if !self.config.includes_extension(path) {
            return FileDecision::SkippedExtension;
        }
        FileDecision::Include
    }
}
