//! Test utilities for building temporary project trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary project directory for testing.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add a text file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        self.add_bytes(path, content.as_bytes())
    }

    /// Add a file with raw content, creating parent directories as needed.
    pub fn add_bytes(&self, path: &str, content: &[u8]) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Populate a Go-style module with `packages` packages of `files_per_package` files.
    pub fn add_go_module(&self, packages: usize, files_per_package: usize) {
        self.add_file("go.mod", "module example.com/demo\n\ngo 1.22\n");
        self.add_file("go.sum", "example.com/dep v1.0.0 h1:abc=\n");
        for p in 0..packages {
            for f in 0..files_per_package {
                self.add_file(
                    &format!("pkg/p{}/file{}.go", p, f),
                    &format!(
                        "package p{}\n\n// F{} does nothing.\nfunc F{}() int {{\n\treturn {}\n}}\n",
                        p, f, f, f
                    ),
                );
            }
            self.add_file(&format!("pkg/p{}/vendor/dep.go", p), "package dep\n");
        }
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}
