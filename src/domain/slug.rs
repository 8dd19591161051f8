//! Filesystem-safe identifiers derived from heading text.

/// The extension given to every section document and to the index.
pub const EXTENSION: &str = "md";

/// Normalises heading text into a slug.
///
/// The text is lower-cased, every character that is not a letter, digit,
/// whitespace or hyphen is removed, runs of whitespace and hyphens collapse to
/// a single `-`, and leading or trailing hyphens are dropped.
///
/// Distinct headings may produce the same slug. Nothing guards against that;
/// the later section simply overwrites the earlier one on disk.
#[must_use]
pub fn slug(heading: &str) -> String {
    let mut slug = String::with_capacity(heading.len());
    let mut pending_separator = false;

    for c in heading.to_lowercase().chars() {
        if c.is_whitespace() || c == '-' {
            pending_separator = true;
        } else if c.is_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(c);
        }
    }

    slug
}

/// The output filename for a section with the given heading.
#[must_use]
pub fn filename(heading: &str) -> String {
    format!("{}.{EXTENSION}", slug(heading))
}
