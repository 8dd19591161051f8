use std::fmt;

use crate::domain::Section;

/// The filename of the index document within the output directory.
pub const FILENAME: &str = "index.md";

/// One line of the index: a section title and the file it was written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// The original heading text.
    pub title: String,
    /// The section's filename, relative to the index.
    pub filename: String,
}

impl From<&Section> for IndexEntry {
    fn from(section: &Section) -> Self {
        Self {
            title: section.heading().to_string(),
            filename: section.filename().to_string(),
        }
    }
}

/// The index document linking every section in order.
///
/// Rendered via [`Display`](fmt::Display) as a level-one title, a
/// description paragraph and a `Sections` list of relative links. Lines are
/// separated by `\n` with no trailing newline.
#[derive(Debug, Clone)]
pub struct Index<'a> {
    title: &'a str,
    description: &'a str,
    entries: Vec<IndexEntry>,
}

impl<'a> Index<'a> {
    /// Creates an index with the given title and description.
    #[must_use]
    pub const fn new(title: &'a str, description: &'a str, entries: Vec<IndexEntry>) -> Self {
        Self {
            title,
            description,
            entries,
        }
    }

    /// The entries, in section order.
    #[must_use]
    pub fn entries(&self) -> &[IndexEntry] {
        &self.entries
    }
}

impl fmt::Display for Index<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "# {}\n\n{}\n\n## Sections\n",
            self.title, self.description
        )?;
        for entry in &self.entries {
            write!(f, "\n- [{}](./{})", entry.title, entry.filename)?;
        }
        Ok(())
    }
}
