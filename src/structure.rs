//! Directory structure summary
//!
//! The summary at the top of the artifact comes from a `StructureRenderer`.
//! A renderer failure is never fatal: the collector writes a fallback note
//! instead.

use std::collections::BTreeSet;
use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::output::TreeFormatter;
use crate::tree::TreeWalker;

/// Renders a directory tree for `root`, `depth` levels deep, leaving out
/// directories named in `excluded_dirs`.
pub trait StructureRenderer {
    fn render(
        &self,
        root: &Path,
        depth: usize,
        excluded_dirs: &BTreeSet<String>,
    ) -> io::Result<String>;
}

/// Shells out to the `tree` command.
#[derive(Debug, Clone)]
pub struct ExternalTree {
    program: OsString,
}

impl ExternalTree {
    pub fn new() -> Self {
        Self::with_program("tree")
    }

    /// Use a different executable with `tree`'s command-line interface.
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    fn command(&self, root: &Path, depth: usize, excluded_dirs: &BTreeSet<String>) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.arg("-L").arg(depth.to_string());
        if !excluded_dirs.is_empty() {
            let pattern: Vec<&str> = excluded_dirs.iter().map(String::as_str).collect();
            cmd.arg("-I").arg(pattern.join("|"));
        }
        cmd.arg(root);
        cmd
    }
}

impl Default for ExternalTree {
    fn default() -> Self {
        Self::new()
    }
}

impl StructureRenderer for ExternalTree {
    fn render(
        &self,
        root: &Path,
        depth: usize,
        excluded_dirs: &BTreeSet<String>,
    ) -> io::Result<String> {
        let output = self
            .command(root, depth, excluded_dirs)
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()?;

        if !output.status.success() {
            return Err(io::Error::other(format!(
                "{} exited with {}",
                self.program.to_string_lossy(),
                output.status
            )));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// Renders the tree in process, for hosts without the `tree` command.
/// Like `tree -L 0`, a depth of zero is rejected.
#[derive(Debug, Clone, Default)]
pub struct BuiltinTree;

impl StructureRenderer for BuiltinTree {
    fn render(
        &self,
        root: &Path,
        depth: usize,
        excluded_dirs: &BTreeSet<String>,
    ) -> io::Result<String> {
        if depth == 0 {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                "structure depth must be greater than 0",
            ));
        }
        let tree = TreeWalker::new(depth, excluded_dirs).walk(root)?;
        Ok(TreeFormatter::new().format(&tree))
    }
}

/// Never renders; the artifact gets the fallback note.
#[derive(Debug, Clone, Default)]
pub struct NoStructure;

impl StructureRenderer for NoStructure {
    fn render(&self, _: &Path, _: usize, _: &BTreeSet<String>) -> io::Result<String> {
        Err(io::Error::new(
            io::ErrorKind::Unsupported,
            "structure rendering disabled",
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn excluded(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_external_command_args() {
        let renderer = ExternalTree::new();
        let cmd = renderer.command(Path::new("/proj"), 4, &excluded(&["vendor", "dist"]));
        let args: Vec<_> = cmd.get_args().map(|a| a.to_string_lossy().to_string()).collect();
        assert_eq!(cmd.get_program(), "tree");
        assert_eq!(args, vec!["-L", "4", "-I", "dist|vendor", "/proj"]);
    }

    #[test]
    fn test_external_command_without_exclusions() {
        let renderer = ExternalTree::new();
        let cmd = renderer.command(Path::new("."), 2, &BTreeSet::new());
        let args: Vec<_> = cmd.get_args().map(|a| a.to_string_lossy().to_string()).collect();
        assert_eq!(args, vec!["-L", "2", "."]);
    }

    #[test]
    fn test_external_missing_program() {
        let renderer = ExternalTree::with_program("gather-test-no-such-tree-binary");
        let result = renderer.render(Path::new("."), 4, &BTreeSet::new());
        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_external_nonzero_exit() {
        let renderer = ExternalTree::with_program("false");
        assert!(renderer.render(Path::new("."), 4, &BTreeSet::new()).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn test_external_captures_stdout() {
        let renderer = ExternalTree::with_program("echo");
        let out = renderer
            .render(Path::new("/proj"), 3, &excluded(&["vendor"]))
            .unwrap();
        assert_eq!(out, "-L 3 -I vendor /proj\n");
    }

    #[test]
    fn test_builtin_render() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("cmd/vendor")).unwrap();
        fs::write(dir.path().join("cmd/main.go"), "").unwrap();
        fs::write(dir.path().join("go.mod"), "").unwrap();

        let out = BuiltinTree
            .render(dir.path(), 4, &excluded(&["vendor"]))
            .unwrap();
        let body: Vec<&str> = out.lines().skip(1).collect();
        assert_eq!(
            body,
            vec!["├── cmd", "│   └── main.go", "└── go.mod", "", "1 directory, 2 files"]
        );
    }

    #[test]
    fn test_builtin_rejects_zero_depth() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("main.go"), "").unwrap();

        let err = BuiltinTree
            .render(dir.path(), 0, &BTreeSet::new())
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
    }

    #[test]
    fn test_builtin_missing_root() {
        let result = BuiltinTree.render(Path::new("/nonexistent/gather"), 4, &BTreeSet::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_no_structure_always_fails() {
        let err = NoStructure
            .render(Path::new("."), 4, &BTreeSet::new())
            .unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::Unsupported);
    }
}
