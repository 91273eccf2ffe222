//! Collector - writes a project snapshot artifact
//!
//! One synchronous pass: structure summary first, then one block per
//! included file in walk order. Per-file problems become inline notices;
//! only failing to create or write the artifact aborts the run.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::{debug, info, trace, warn};

use crate::config::CollectConfig;
use crate::error::CollectError;
use crate::file_utils::{FileOutcome, process_file};
use crate::output::ArtifactWriter;
use crate::stats::{CollectSummary, StructureStatus};
use crate::structure::{ExternalTree, StructureRenderer};
use crate::tree::{FileDecision, FileFilter, SourceWalker};

pub struct Collector {
    config: CollectConfig,
    renderer: Box<dyn StructureRenderer>,
}

impl Collector {
    /// Create a collector that renders the structure with the `tree` command.
    pub fn new(config: CollectConfig) -> Self {
        Self {
            config,
            renderer: Box::new(ExternalTree::new()),
        }
    }

    pub fn with_renderer<R: StructureRenderer + 'static>(mut self, renderer: R) -> Self {
        self.renderer = Box::new(renderer);
        self
    }

    /// Collect `root` into the file at `output_path`, creating its parent
    /// directory if needed. The file is truncated if it exists.
    pub fn collect(&self, root: &Path, output_path: &Path) -> Result<CollectSummary, CollectError> {
        info!(root = %root.display(), output = %output_path.display(), "collecting project");

        let file = open_output(output_path)?;
        let write_err = |source: io::Error| CollectError::Write {
            path: output_path.to_path_buf(),
            source,
        };

        let (summary, _) = self
            .write_artifact(root, BufWriter::new(file), Some(output_path))
            .map_err(write_err)?;

        info!(
            included = summary.included,
            lines = summary.lines,
            binary = summary.skipped_binary,
            errors = summary.read_errors,
            "collection complete"
        );
        Ok(summary)
    }

    /// Write the snapshot of `root` into any writer.
    pub fn write_snapshot<W: Write>(&self, root: &Path, out: W) -> io::Result<(CollectSummary, W)> {
        self.write_artifact(root, out, None)
    }

    fn write_artifact<W: Write>(
        &self,
        root: &Path,
        out: W,
        output_path: Option<&Path>,
    ) -> io::Result<(CollectSummary, W)> {
        if !root.is_dir() {
            warn!(root = %root.display(), "root is not a readable directory");
        }

        let mut writer = ArtifactWriter::new(out);
        let mut summary =
            CollectSummary::new(output_path.map(Path::to_path_buf).unwrap_or_default());

        let rendered = match self.renderer.render(
            root,
            self.config.structure_depth,
            &self.config.excluded_dirs,
        ) {
            Ok(tree) => {
                summary.structure = StructureStatus::Rendered;
                Some(tree)
            }
            Err(e) => {
                debug!(error = %e, "structure summary unavailable, writing fallback note");
                None
            }
        };
        writer.write_structure(rendered.as_deref())?;

        let filter = FileFilter::new(&self.config);
        let mut walker = SourceWalker::new(&self.config);
        if let Some(path) = output_path {
            walker = walker.skip_path(path);
        }

        walker.for_each_file(root, |record| -> io::Result<()> {
            let decision = filter.decide(&record.path);
            summary.record_decision(decision);
            if decision != FileDecision::Include {
                trace!(path = %record.relative.display(), ?decision, "skipped");
                return Ok(());
            }

            let outcome = process_file(&record.path);
            match &outcome {
                FileOutcome::Included(_) => {
                    debug!(path = %record.relative.display(), "included");
                }
                FileOutcome::SkippedBinary => {
                    debug!(path = %record.relative.display(), "binary file skipped");
                }
                FileOutcome::SkippedError(message) => {
                    warn!(path = %record.relative.display(), error = %message, "error reading file");
                }
            }
            writer.write_file_block(&record.relative, &outcome)?;
            summary.record_outcome(&outcome);
            Ok(())
        })?;

        summary.lines = writer.lines_written();
        let out = writer.finish()?;
        Ok((summary, out))
    }
}

/// Create the parent directory and open the artifact for writing.
fn open_output(path: &Path) -> Result<File, CollectError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| CollectError::CreateOutputDir {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    File::create(path).map_err(|source| CollectError::CreateOutput {
        path: path.to_path_buf(),
        source,
    })
}
