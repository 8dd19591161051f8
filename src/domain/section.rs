use std::ops::Range;

use serde::Serialize;
use tracing::instrument;

use crate::domain::{heading, slug};

/// A top-level section of a document.
///
/// Sections are produced by [`segment`] and describe a half-open range of
/// lines in the source document, starting at the section's own heading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    heading: String,
    start_line: usize,
    end_line: usize,
    filename: String,
}

impl Section {
    fn new(heading: String, start_line: usize, end_line: usize) -> Self {
        debug_assert!(start_line < end_line, "sections always contain their heading");
        let filename = slug::filename(&heading);
        Self {
            heading,
            start_line,
            end_line,
            filename,
        }
    }

    /// The heading text, without the marker and surrounding whitespace.
    #[must_use]
    pub fn heading(&self) -> &str {
        &self.heading
    }

    /// Index of the heading line.
    #[must_use]
    pub const fn start_line(&self) -> usize {
        self.start_line
    }

    /// Index one past the last line of the section.
    #[must_use]
    pub const fn end_line(&self) -> usize {
        self.end_line
    }

    /// The output filename derived from the heading.
    #[must_use]
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// The line range covered by the section.
    #[must_use]
    pub const fn range(&self) -> Range<usize> {
        self.start_line..self.end_line
    }

    /// The lines of the section, sliced from the document it was found in.
    ///
    /// # Panics
    ///
    /// Panics if `lines` is shorter than the document the section was found
    /// in.
    #[must_use]
    pub fn slice<'a, S>(&self, lines: &'a [S]) -> &'a [S] {
        &lines[self.range()]
    }
}

/// Splits a document into its top-level sections.
///
/// A section starts at each `## ` heading that is not inside a fenced block
/// and runs until the next one, or the end of the document. Anything before
/// the first section heading is not part of any section.
///
/// Fence lines toggle fenced-block state and are never themselves treated as
/// headings. An unterminated fence hides every heading after it.
#[must_use]
#[instrument(level = "debug", skip_all, fields(lines = lines.len()))]
pub fn segment<S: AsRef<str>>(lines: &[S]) -> Vec<Section> {
    let mut sections = Vec::new();
    let mut open: Option<(String, usize)> = None;
    let mut in_code_block = false;

    for (index, line) in lines.iter().enumerate() {
        let line = line.as_ref();

        if heading::is_fence(line) {
            in_code_block = !in_code_block;
            continue;
        }

        if in_code_block {
            continue;
        }

        if let Some(text) = heading::top_level_text(line) {
            if let Some((heading, start_line)) = open.take() {
                sections.push(Section::new(heading, start_line, index));
            }
            open = Some((text.to_string(), index));
        }
    }

    if let Some((heading, start_line)) = open {
        sections.push(Section::new(heading, start_line, lines.len()));
    }

    tracing::debug!("found {} sections", sections.len());
    sections
}
