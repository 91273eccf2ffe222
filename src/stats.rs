//! Run summary collection and display
//!
//! Counts every file the walk saw by its final state, so callers can report
//! what ended up in the artifact and what was left out.

use std::io::{self, Write};
use std::path::PathBuf;

use serde::Serialize;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::file_utils::FileOutcome;
use crate::tree::FileDecision;

/// How the structure summary was produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StructureStatus {
    Rendered,
    #[default]
    Fallback,
}

/// Counters for one collection run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CollectSummary {
    pub output: PathBuf,
    pub structure: StructureStatus,
    /// Files written with numbered content
    pub included: usize,
    pub skipped_name: usize,
    pub skipped_extension: usize,
    pub skipped_binary: usize,
    pub read_errors: usize,
    /// Total numbered lines written
    pub lines: usize,
}

impl CollectSummary {
    pub fn new(output: PathBuf) -> Self {
        Self {
            output,
            ..Default::default()
        }
    }

    /// Record a file that was filtered out before reading.
    pub fn record_decision(&mut self, decision: FileDecision) {
        match decision {
            FileDecision::Include => {}
            FileDecision::SkippedName => self.skipped_name += 1,
            FileDecision::SkippedExtension => self.skipped_extension += 1,
        }
    }

    /// Record the outcome of an included file.
    pub fn record_outcome(&mut self, outcome: &FileOutcome) {
        match outcome {
            FileOutcome::Included(_) => self.included += 1,
            FileOutcome::SkippedBinary => self.skipped_binary += 1,
            FileOutcome::SkippedError(_) => self.read_errors += 1,
        }
    }

    /// Files that got a header in the artifact.
    pub fn files_written(&self) -> usize {
        self.included + self.skipped_binary + self.read_errors
    }

    /// Every file the walk visited.
    pub fn files_seen(&self) -> usize {
        self.files_written() + self.skipped_name + self.skipped_extension
    }
}

/// Print the completion message and a one-line summary with optional color.
pub fn print_summary(summary: &CollectSummary, use_color: bool) -> io::Result<()> {
    let color_choice = if use_color {
        ColorChoice::Auto
    } else {
        ColorChoice::Never
    };
    let mut stdout = StandardStream::stdout(color_choice);

    let mut bold = ColorSpec::new();
    bold.set_bold(true);
    stdout.set_color(&bold)?;
    write!(stdout, "Project code collected into: ")?;
    stdout.reset()?;
    writeln!(stdout, "{}", summary.output.display())?;

    let mut count_color = ColorSpec::new();
    count_color.set_fg(Some(Color::Green));
    stdout.set_color(&count_color)?;
    write!(stdout, "  {} files", format_number(summary.included))?;
    stdout.reset()?;
    write!(stdout, ", {} lines", format_number(summary.lines))?;

    let skipped = summary.skipped_binary + summary.read_errors;
    if skipped > 0 {
        let mut warn_color = ColorSpec::new();
        warn_color.set_fg(Some(Color::Yellow));
        write!(stdout, ", ")?;
        stdout.set_color(&warn_color)?;
        write!(
            stdout,
            "{} binary, {} unreadable",
            summary.skipped_binary, summary.read_errors
        )?;
        stdout.reset()?;
    }
    writeln!(stdout)?;

    if summary.structure == StructureStatus::Fallback {
        writeln!(stdout, "  (structure summary unavailable)")?;
    }

    Ok(())
}

/// Format a number with thousand separators.
fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();

    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, c);
    }

    result
}
