//! Per-file reading for collection
//!
//! Each included file is read in full and decoded as UTF-8 before anything is
//! written, so a decode failure never leaves partial content in the artifact.

use std::io;
use std::path::Path;

/// Result of processing one included file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// Decoded file content, line terminators untouched
    Included(String),
    /// Content is not valid UTF-8
    SkippedBinary,
    /// Any other read failure, with the underlying message
    SkippedError(String),
}

impl FileOutcome {
    pub fn from_read(result: io::Result<Vec<u8>>) -> Self {
        match result {
            Ok(bytes) => match String::from_utf8(bytes) {
                Ok(content) => FileOutcome::Included(content),
                Err(_) => FileOutcome::SkippedBinary,
            },
            Err(e) => FileOutcome::SkippedError(e.to_string()),
        }
    }
}

/// Read `path` and classify the result.
pub fn process_file(path: &Path) -> FileOutcome {
    FileOutcome::from_read(std::fs::read(path))
}

/// Split content into lines, each keeping its terminator.
/// A final line without a newline is returned as-is; empty content has no lines.
pub fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    content.split_inclusive('\n')
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_process_file_success() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("main.go");
        fs::write(&file_path, "package main\n").unwrap();

        assert_eq!(
            process_file(&file_path),
            FileOutcome::Included("package main\n".to_string())
        );
    }

    #[test]
    fn test_process_file_nonexistent() {
        let outcome = process_file(Path::new("/nonexistent/file.go"));
        assert!(matches!(outcome, FileOutcome::SkippedError(_)));
    }

    #[test]
    fn test_invalid_utf8_file() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("invalid.go");
        fs::write(&file_path, [0xFFu8, 0xFE, 0x00, 0x01]).unwrap();

        assert_eq!(process_file(&file_path), FileOutcome::SkippedBinary);
    }

    #[test]
    fn test_invalid_utf8_after_valid_lines() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("mixed.go");
        let mut bytes = b"package main\nfunc main() {}\n".to_vec();
        bytes.extend_from_slice(&[0xC3, 0x28]);
        fs::write(&file_path, &bytes).unwrap();

        assert_eq!(process_file(&file_path), FileOutcome::SkippedBinary);
    }

    #[test]
    fn test_utf8_with_bom_is_kept() {
        let dir = TempDir::new().unwrap();
        let file_path = dir.path().join("bom.go");
        let mut content = vec![0xEF, 0xBB, 0xBF];
        content.extend_from_slice(b"package main");
        fs::write(&file_path, &content).unwrap();

        assert_eq!(
            process_file(&file_path),
            FileOutcome::Included("\u{FEFF}package main".to_string())
        );
    }

    #[test]
    fn test_from_read_error_message() {
        let outcome = FileOutcome::from_read(Err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "Permission denied",
        )));
        assert_eq!(outcome, FileOutcome::SkippedError("Permission denied".to_string()));
    }

    #[cfg(unix)]
    #[test]
    fn test_broken_symlink() {
        use std::os::unix::fs::symlink;

        let dir = TempDir::new().unwrap();
        let link = dir.path().join("broken.go");
        symlink(dir.path().join("missing.go"), &link).unwrap();

        assert!(matches!(process_file(&link), FileOutcome::SkippedError(_)));
    }

    #[test]
    fn test_split_lines_keeps_terminators() {
        let lines: Vec<_> = split_lines("a\r\n\nb").collect();
        assert_eq!(lines, vec!["a\r\n", "\n", "b"]);
        assert_eq!(split_lines("").count(), 0);
        assert_eq!(split_lines("one\n").collect::<Vec<_>>(), vec!["one\n"]);
    }
}
