//! SourceWalker - streams candidate files under a root in a fixed order
//!
//! Excluded directories are pruned at the walker level, so nothing beneath
//! them is ever visited. Directory symlinks are reported as entries but never
//! descended; symlinks to files are passed through like regular files.

use std::fs;
use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use tracing::{trace, warn};

use crate::config::CollectConfig;

use super::utils::relative_to;

/// A file found by the walk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: PathBuf,
    /// Path relative to the walk root, used for headers and notices
    pub relative: PathBuf,
}

pub struct SourceWalker<'a> {
    config: &'a CollectConfig,
    skip: Option<PathBuf>,
}

impl<'a> SourceWalker<'a> {
    pub fn new(config: &'a CollectConfig) -> Self {
        Self { config, skip: None }
    }

    /// Never yield `path` (the artifact being written, when it lives under the root).
    pub fn skip_path(mut self, path: &Path) -> Self {
        self.skip = fs::canonicalize(path).ok();
        self
    }

    fn build(&self, root: &Path) -> ignore::Walk {
        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .follow_links(false)
            .max_depth(self.config.max_depth)
            .sort_by_file_name(|a, b| a.cmp(b));

        if self.config.respect_gitignore {
            builder
                .ignore(true)
                .git_ignore(true)
                .git_exclude(true)
                .git_global(true)
                .parents(true)
                .require_git(false);
        }

        let config = self.config.clone();
        builder.filter_entry(move |entry| {
            if entry.depth() == 0 {
                return true;
            }
            let is_dir = entry.file_type().is_some_and(|t| t.is_dir());
            if is_dir && config.is_excluded_dir(&entry.file_name().to_string_lossy()) {
                trace!(path = %entry.path().display(), "pruned excluded directory");
                return false;
            }
            true
        });

        builder.build()
    }

    /// Call `visit` for every non-directory entry in traversal order.
    /// Stops at the first error returned by `visit`.
    pub fn for_each_file<F, E>(&self, root: &Path, mut visit: F) -> Result<(), E>
    where
        F: FnMut(FileRecord) -> Result<(), E>,
    {
        for result in self.build(root) {
            let entry = match result {
                Ok(entry) => entry,
                Err(err) => {
                    warn!(error = %err, "skipping unreadable entry");
                    continue;
                }
            };

            if entry.depth() == 0 {
                continue;
            }
            if entry.file_type().is_some_and(|t| t.is_dir()) {
                continue;
            }
            // Directory symlinks are listed but not followed
            if entry.path_is_symlink() && entry.path().is_dir() {
                trace!(path = %entry.path().display(), "not following directory symlink");
                continue;
            }
            if self.is_skipped(entry.path()) {
                continue;
            }

            visit(FileRecord {
                path: entry.path().to_path_buf(),
                relative: relative_to(entry.path(), root),
            })?;
        }
        Ok(())
    }

    /// Collect every file record. Convenience for callers that want a list.
    pub fn files(&self, root: &Path) -> Vec<FileRecord> {
        let mut files = Vec::new();
        let _ = self.for_each_file::<_, std::convert::Infallible>(root, |record| {
            files.push(record);
            Ok(())
        });
        files
    }

    /// Symlinks are resolved, so an alias of the skipped file is skipped too.
    fn is_skipped(&self, path: &Path) -> bool {
        let Some(skip) = &self.skip else {
            return false;
        };
        fs::canonicalize(path).is_ok_and(|p| &p == skip)
    }
}
