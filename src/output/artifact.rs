//! Artifact writer
//!
//! Writes the snapshot text format:
//!
//! ```text
//! === GO PROJECT STRUCTURE ===
//! <rendered tree or fallback note>
//!
//!
//! // ====== FILE: a/main.go ======
//!
//!    1 | package main
//!    2 | ...
//! ```

use std::io::{self, Write};
use std::path::Path;

use crate::file_utils::{FileOutcome, split_lines};

pub const STRUCTURE_BANNER: &str = "=== GO PROJECT STRUCTURE ===";
pub const STRUCTURE_FALLBACK: &str =
    "# Note: Install 'tree' command for better structure visualization";

/// Width of the right-aligned line number column.
pub const LINE_NUMBER_WIDTH: usize = 4;
pub const LINE_NUMBER_SEPARATOR: &str = " | ";

/// Append-only writer for the artifact. Counts the numbered lines it writes.
pub struct ArtifactWriter<W: Write> {
    out: W,
    lines_written: usize,
}

impl<W: Write> ArtifactWriter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            lines_written: 0,
        }
    }

    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    /// Banner followed by the rendered structure, or the fallback note when
    /// no rendering is available.
    pub fn write_structure(&mut self, rendered: Option<&str>) -> io::Result<()> {
        writeln!(self.out, "{}", STRUCTURE_BANNER)?;
        match rendered {
            Some(tree) => write!(self.out, "{}\n\n", tree),
            None => write!(self.out, "{}\n\n", STRUCTURE_FALLBACK),
        }
    }

    /// Header, outcome body and trailing separator for one file.
    pub fn write_file_block(&mut self, relative: &Path, outcome: &FileOutcome) -> io::Result<()> {
        self.write_header(relative)?;
        match outcome {
            FileOutcome::Included(content) => {
                self.write_numbered(content)?;
            }
            FileOutcome::SkippedBinary => {
                writeln!(self.out, "// Binary file skipped: {}", relative.display())?;
            }
            FileOutcome::SkippedError(message) => {
                writeln!(
                    self.out,
                    "// Error reading file: {}: {}",
                    relative.display(),
                    message
                )?;
            }
        }
        self.out.write_all(b"\n\n")
    }

    fn write_header(&mut self, relative: &Path) -> io::Result<()> {
        write!(self.out, "\n// ====== FILE: {} ======\n\n", relative.display())
    }

    /// Write every line prefixed with its 1-based number. Returns the line count.
    pub fn write_numbered(&mut self, content: &str) -> io::Result<usize> {
        let mut count = 0;
        for (i, line) in split_lines(content).enumerate() {
            write!(
                self.out,
                "{:>width$}{}{}",
                i + 1,
                LINE_NUMBER_SEPARATOR,
                line,
                width = LINE_NUMBER_WIDTH
            )?;
            count += 1;
        }
        self.lines_written += count;
        Ok(count)
    }

    /// Flush and hand back the underlying writer.
    pub fn finish(mut self) -> io::Result<W> {
        self.out.flush()?;
        Ok(self.out)
    }
}

/// Strip the `NNNN | ` prefix from a numbered line.
pub fn strip_line_number(line: &str) -> Option<&str> {
    let (number, rest) = line.split_once(LINE_NUMBER_SEPARATOR)?;
    let digits = number.trim_start();
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    Some(rest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut ArtifactWriter<Vec<u8>>) -> io::Result<()>,
    {
        let mut writer = ArtifactWriter::new(Vec::new());
        f(&mut writer).unwrap();
        String::from_utf8(writer.finish().unwrap()).unwrap()
    }

    #[test]
    fn test_structure_rendered() {
        let out = render(|w| w.write_structure(Some(".\n└── main.go\n")));
        assert_eq!(out, "=== GO PROJECT STRUCTURE ===\n.\n└── main.go\n\n\n");
    }

    #[test]
    fn test_structure_fallback() {
        let out = render(|w| w.write_structure(None));
        assert_eq!(
            out,
            "=== GO PROJECT STRUCTURE ===\n# Note: Install 'tree' command for better structure visualization\n\n"
        );
    }

    #[test]
    fn test_included_block_format() {
        let out = render(|w| {
            w.write_file_block(
                Path::new("a/main.go"),
                &FileOutcome::Included("package main\n\nfunc main() {}".into()),
            )
        });
        assert_eq!(
            out,
            "\n// ====== FILE: a/main.go ======\n\n   1 | package main\n   2 | \n   3 | func main() {}\n\n"
        );
    }

    #[test]
    fn test_empty_file_block() {
        let out = render(|w| w.write_file_block(Path::new("e.go"), &FileOutcome::Included(String::new())));
        assert_eq!(out, "\n// ====== FILE: e.go ======\n\n\n\n");
    }

    #[test]
    fn test_binary_block_has_no_content_lines() {
        let out = render(|w| w.write_file_block(Path::new("bin.go"), &FileOutcome::SkippedBinary));
        assert_eq!(
            out,
            "\n// ====== FILE: bin.go ======\n\n// Binary file skipped: bin.go\n\n\n"
        );
        assert!(!out.contains(" | "));
    }

    #[test]
    fn test_error_block() {
        let out = render(|w| {
            w.write_file_block(
                Path::new("b/broken.go"),
                &FileOutcome::SkippedError("Permission denied (os error 13)".into()),
            )
        });
        assert!(out.contains("// Error reading file: b/broken.go: Permission denied (os error 13)\n"));
    }

    #[test]
    fn test_line_numbers_wider_than_column() {
        let content: String = (0..10_001).map(|_| "x\n").collect();
        let out = render(|w| w.write_numbered(&content).map(|_| ()));
        assert!(out.starts_with("   1 | x\n"));
        assert!(out.contains("9999 | x\n"));
        assert!(out.ends_with("10001 | x\n"));
    }

    #[test]
    fn test_lines_written_counter() {
        let mut writer = ArtifactWriter::new(Vec::new());
        writer
            .write_file_block(Path::new("a.go"), &FileOutcome::Included("1\n2\n".into()))
            .unwrap();
        writer
            .write_file_block(Path::new("b.go"), &FileOutcome::Included("3".into()))
            .unwrap();
        writer
            .write_file_block(Path::new("c.go"), &FileOutcome::SkippedBinary)
            .unwrap();
        assert_eq!(writer.lines_written(), 3);
    }

    #[test]
    fn test_round_trip() {
        let original = "line one\r\n\n  indented\ttab\nno newline at end";
        let out = render(|w| w.write_numbered(original).map(|_| ()));
        let rebuilt: String = out
            .split_inclusive('\n')
            .map(|l| strip_line_number(l).unwrap())
            .collect();
        assert_eq!(rebuilt, original);
    }

    #[test]
    fn test_strip_line_number() {
        assert_eq!(strip_line_number("  12 | let x = 1;\n"), Some("let x = 1;\n"));
        assert_eq!(strip_line_number("   1 | "), Some(""));
        assert_eq!(strip_line_number("// ====== FILE"), None);
        assert_eq!(strip_line_number("10001 | x"), Some("x"));
        assert_eq!(strip_line_number("ab"), None);
    }
}
