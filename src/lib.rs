//! Gather - flatten a project's source files into one line-numbered snapshot

pub mod collector;
pub mod config;
pub mod error;
pub mod file_utils;
pub mod output;
pub mod stats;
pub mod structure;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use collector::Collector;
pub use config::{CollectConfig, default_output_path};
pub use error::CollectError;
pub use file_utils::{FileOutcome, process_file};
pub use output::{ArtifactWriter, print_json};
pub use stats::{CollectSummary, StructureStatus, print_summary};
pub use structure::{BuiltinTree, ExternalTree, NoStructure, StructureRenderer};
pub use tree::{FileDecision, FileFilter, FileRecord, SourceWalker, TreeWalker};
