//! Fatal errors for a collection run
//!
//! Per-file problems never surface here; they are recorded inline in the
//! artifact as `FileOutcome` notices.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CollectError {
    #[error("cannot create output directory '{}': {source}", path.display())]
    CreateOutputDir { path: PathBuf, source: io::Error },

    #[error("cannot open output file '{}' for writing: {source}", path.display())]
    CreateOutput { path: PathBuf, source: io::Error },

    #[error("error writing output file '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("cannot read config file '{}': {source}", path.display())]
    ConfigRead { path: PathBuf, source: io::Error },

    #[error("invalid config file '{}': {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        source: serde_json::Error,
    },
}
