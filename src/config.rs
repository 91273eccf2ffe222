//! Collection configuration
//!
//! `CollectConfig` holds the three filter sets plus the depth settings. It is
//! built once before a run (defaults, then an optional JSON file, then CLI
//! overrides) and never mutated while collecting.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::CollectError;

/// Directories pruned from both the walk and the structure summary.
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &["node_modules", ".git", "dist", "build", "vendor"];

/// Lock and checksum files that carry no reviewable source.
pub const DEFAULT_EXCLUDED_FILES: &[&str] = &["go.sum", "go.work.sum"];

/// Source and manifest extensions included by default.
pub const DEFAULT_INCLUDED_EXTENSIONS: &[&str] = &[".go", ".mod", ".yaml", ".yml"];

/// Depth limit passed to the structure renderer.
pub const DEFAULT_STRUCTURE_DEPTH: usize = 4;

/// Configuration for a collection run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CollectConfig {
    /// Directory names whose whole subtree is skipped (exact match)
    pub excluded_dirs: BTreeSet<String>,
    /// File names that are never included (exact, case-sensitive match)
    pub excluded_files: BTreeSet<String>,
    /// Lower-cased extensions with leading dot, e.g. `.go`
    pub included_extensions: BTreeSet<String>,
    pub structure_depth: usize,
    /// Depth guard for the inclusion walk. `None` walks the whole tree.
    pub max_depth: Option<usize>,
    /// Also prune entries matched by .gitignore/.ignore files
    pub respect_gitignore: bool,
}

impl Default for CollectConfig {
    fn default() -> Self {
        Self {
            excluded_dirs: to_set(DEFAULT_EXCLUDED_DIRS),
            excluded_files: to_set(DEFAULT_EXCLUDED_FILES),
            included_extensions: DEFAULT_INCLUDED_EXTENSIONS
                .iter()
                .map(|e| normalize_extension(e))
                .collect(),
            structure_depth: DEFAULT_STRUCTURE_DEPTH,
            max_depth: None,
            respect_gitignore: false,
        }
    }
}

impl CollectConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, CollectError> {
        let text = std::fs::read_to_string(path).map_err(|source| CollectError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text).map_err(|source| CollectError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse a configuration from JSON text, normalizing extensions.
    pub fn from_json_str(text: &str) -> Result<Self, serde_json::Error> {
        let mut config: Self = serde_json::from_str(text)?;
        config.included_extensions = config
            .included_extensions
            .iter()
            .map(|e| normalize_extension(e))
            .collect();
        Ok(config)
    }

    /// Replace the included extensions. Accepts `go`, `.go` or `.GO`.
    pub fn with_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.included_extensions = extensions
            .into_iter()
            .map(|e| normalize_extension(e.as_ref()))
            .collect();
        self
    }

    pub fn exclude_dirs<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_dirs.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn exclude_files<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_files.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn is_excluded_dir(&self, name: &str) -> bool {
        self.excluded_dirs.contains(name)
    }

    pub fn is_excluded_file(&self, name: &str) -> bool {
        self.excluded_files.contains(name)
    }

    /// Check the lower-cased final extension of `path` against the include set.
    pub fn includes_extension(&self, path: &Path) -> bool {
        match crate::tree::dotted_extension(path) {
            Some(ext) => self.included_extensions.contains(&ext),
            None => false,
        }
    }
}

/// Default output location for a root: `<root>/scripts/go_project_code.txt`.
pub fn default_output_path(root: &Path) -> PathBuf {
    root.join("scripts").join("go_project_code.txt")
}

/// Normalize an extension to lower case with a single leading dot.
pub fn normalize_extension(ext: &str) -> String {
    let trimmed = ext.trim().trim_start_matches('.');
    format!(".{}", trimmed.to_lowercase())
}

fn to_set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}
