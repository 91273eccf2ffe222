//! Directory walking
//!
//! Two walkers share the same pruning rules:
//!
//! - `SourceWalker`: streams the files to collect, in deterministic order
//! - `TreeWalker`: builds a depth-limited `TreeNode` for the structure summary

mod filter;
mod node;
mod sources;
mod utils;
mod walker;

pub use filter::{FileDecision, FileFilter};
pub use node::TreeNode;
pub use sources::{FileRecord, SourceWalker};
pub use utils::{dotted_extension, relative_to};
pub use walker::TreeWalker;
