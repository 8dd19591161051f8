use std::{
    io,
    path::{Path, PathBuf},
    string::FromUtf8Error,
};

use tracing::instrument;

/// A source document, held as an ordered sequence of lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    lines: Vec<String>,
}

impl Document {
    /// Reads and decodes the document at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist, cannot be read, or is not
    /// valid UTF-8.
    #[instrument(level = "debug")]
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        let bytes = std::fs::read(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
            _ => LoadError::Io {
                path: path.to_path_buf(),
                source,
            },
        })?;

        let text = String::from_utf8(bytes).map_err(|source| LoadError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        let document = Self::parse(&text);
        tracing::debug!("read {} lines", document.lines.len());
        Ok(document)
    }

    /// Splits text into lines.
    ///
    /// `\r\n`, a lone `\r` and `\n` all end a line, so LF, CRLF and CR
    /// documents produce the same lines. A trailing line ending produces a
    /// final empty line; joining the lines with `\n` gives back an LF
    /// document unchanged.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut lines = Vec::new();
        let mut rest = text;
        while let Some(end) = rest.find(['\r', '\n']) {
            lines.push(rest[..end].to_string());
            let ending = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
            rest = &rest[end + ending..];
        }
        lines.push(rest.to_string());
        Self { lines }
    }

    /// The lines of the document, in order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

/// Errors that can occur when loading the source document.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The document was not found.
    #[error("source document not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The document could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// The document path.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// The document is not valid UTF-8.
    #[error("{} is not valid UTF-8: {source}", path.display())]
    Decode {
        /// The document path.
        path: PathBuf,
        /// The decoding error.
        source: FromUtf8Error,
    },
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use test_case::test_case;

    use super::*;

    #[test_case("a\nb", &["a", "b"]; "lf")]
    #[test_case("a\r\nb", &["a", "b"]; "crlf")]
    #[test_case("a\r\nb\nc", &["a", "b", "c"]; "mixed")]
    #[test_case("a\n", &["a", ""]; "trailing newline")]
    #[test_case("", &[""]; "empty")]
    #[test_case("a\rb", &["a", "b"]; "cr")]
    #[test_case("a\r\rb", &["a", "", "b"]; "consecutive cr")]
    #[test_case("a\n\rb", &["a", "", "b"]; "lf then cr")]
    #[test_case("a\r", &["a", ""]; "trailing cr")]
    fn parse_splits_lines(text: &str, expected: &[&str]) {
        assert_eq!(Document::parse(text).lines(), expected);
    }

    #[test]
    fn cr_document_segments_like_lf() {
        let cr = Document::parse("## Overview\rtext\r## API Design\rmore");
        let lf = Document::parse("## Overview\ntext\n## API Design\nmore");

        let sections = crate::domain::segment(cr.lines());

        assert_eq!(cr, lf);
        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].filename(), "overview.md");
        assert_eq!(sections[1].filename(), "api-design.md");
    }

    #[test]
    fn lf_document_round_trips() {
        let text = "## A\n\nbody\n";
        assert_eq!(Document::parse(text).lines().join("\n"), text);
    }

    #[test]
    fn load_reads_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("doc.md");
        std::fs::write(&path, "## Heading\r\ntext").unwrap();

        let document = Document::load(&path).unwrap();

        assert_eq!(document.lines(), ["## Heading", "text"]);
    }

    #[test]
    fn load_nonexistent_file() {
        let tmp = TempDir::new().unwrap();
        let result = Document::load(&tmp.path().join("missing.md"));

        assert!(matches!(result, Err(LoadError::NotFound(_))));
    }

    #[test]
    fn load_invalid_utf8() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("binary.md");
        std::fs::write(&path, [b'#', b'#', b' ', 0xff, 0xfe]).unwrap();

        let result = Document::load(&path);

        assert!(matches!(result, Err(LoadError::Decode { .. })));
    }

    #[test]
    fn load_directory_is_io_error() {
        let tmp = TempDir::new().unwrap();
        let result = Document::load(tmp.path());

        assert!(matches!(result, Err(LoadError::Io { .. })));
    }
}
