//! Output formatting
//!
//! - `artifact` - the snapshot text format written to the output file
//! - `tree` - plain-text tree formatter used by the built-in structure renderer
//! - `json` - JSON output for run summaries

mod artifact;
mod json;
mod tree;

pub use artifact::{
    ArtifactWriter, LINE_NUMBER_SEPARATOR, LINE_NUMBER_WIDTH, STRUCTURE_BANNER,
    STRUCTURE_FALLBACK, strip_line_number,
};
pub use json::print_json;
pub use tree::{TreeFormatter, continuation_prefix};
