//! Markdown heading markers.
//!
//! Only ATX headings (`#` prefixed) are recognised, and only by prefix. There
//! is no attempt at a full markdown parse: a line is a heading of a given
//! depth if it starts with exactly that many `#` characters followed by a
//! space.

use std::borrow::Cow;

/// A line whose trimmed form starts with this marker opens or closes a fenced
/// block.
pub const FENCE: &str = "```";

/// The marker of a section heading.
pub const TOP_LEVEL: &str = "## ";

/// The next marker down from [`TOP_LEVEL`], checked first so it is never
/// mistaken for a section heading.
const SUB_LEVEL: &str = "### ";

/// Heading depth rewrites as `(marker, replacement)` pairs.
///
/// The table is ordered from the deepest tier to the shallowest, and a line is
/// rewritten by the first entry whose marker it starts with. Since each marker
/// ends with a space, at most one entry can match a given line, and no line is
/// ever shifted twice.
pub const SHIFTS: [(&str, &str); 4] = [
    ("##### ", "#### "),
    ("#### ", "### "),
    ("### ", "## "),
    ("## ", "# "),
];

/// Whether the line toggles fenced-block state.
#[must_use]
pub fn is_fence(line: &str) -> bool {
    line.trim().starts_with(FENCE)
}

/// The heading text of a section heading, or `None` if the line is not one.
///
/// Fence state is not considered here; the caller is expected to skip lines
/// inside fenced blocks.
#[must_use]
pub fn top_level_text(line: &str) -> Option<&str> {
    if line.starts_with(SUB_LEVEL) {
        return None;
    }
    line.strip_prefix(TOP_LEVEL).map(str::trim)
}

/// Shifts a heading line up by one level.
///
/// Lines that match none of the [`SHIFTS`] markers are returned unchanged.
#[must_use]
pub fn shift(line: &str) -> Cow<'_, str> {
    SHIFTS
        .iter()
        .find_map(|(marker, replacement)| {
            line.strip_prefix(marker)
                .map(|rest| Cow::Owned(format!("{replacement}{rest}")))
        })
        .unwrap_or(Cow::Borrowed(line))
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case("```", true; "bare fence")]
    #[test_case("```rust", true; "fence with language")]
    #[test_case("   ```", true; "indented fence")]
    #[test_case("``` ## Not a heading", true; "fence with heading text")]
    #[test_case("``", false; "two backticks")]
    #[test_case("text ```", false; "fence mid line")]
    fn fence_detection(line: &str, expected: bool) {
        assert_eq!(is_fence(line), expected);
    }

    #[test_case("## Overview", Some("Overview"); "plain")]
    #[test_case("##   Padded  ", Some("Padded"); "trimmed")]
    #[test_case("## ", Some(""); "empty heading")]
    #[test_case("### Details", None; "level three")]
    #[test_case("#### Deeper", None; "level four")]
    #[test_case("# Title", None; "level one")]
    #[test_case("##NoSpace", None; "missing space")]
    #[test_case(" ## Indented", None; "indented")]
    #[test_case("Some ## text", None; "marker mid line")]
    fn top_level_detection(line: &str, expected: Option<&str>) {
        assert_eq!(top_level_text(line), expected);
    }

    #[test_case("## Section", "# Section"; "level two")]
    #[test_case("### Sub", "## Sub"; "level three")]
    #[test_case("#### Subsub", "### Subsub"; "level four")]
    #[test_case("##### Deep", "#### Deep"; "level five")]
    #[test_case("###### Deepest", "###### Deepest"; "level six untouched")]
    #[test_case("# Title", "# Title"; "level one untouched")]
    #[test_case("plain text", "plain text"; "content untouched")]
    #[test_case("##NoSpace", "##NoSpace"; "missing space untouched")]
    #[test_case("", ""; "empty line")]
    fn shift_moves_up_one_level(line: &str, expected: &str) {
        assert_eq!(shift(line), expected);
    }

    #[test]
    fn shift_only_applies_once() {
        // A single pass must not cascade "#####" all the way down to "#".
        assert_eq!(shift("##### Five"), "#### Five");
        assert_eq!(shift(&shift("##### Five")), "### Five");
    }

    #[test]
    fn unmatched_lines_are_borrowed() {
        assert!(matches!(shift("body text"), Cow::Borrowed(_)));
    }

    #[test]
    fn shift_table_is_deepest_first() {
        let depths: Vec<usize> = SHIFTS.iter().map(|(marker, _)| marker.len()).collect();
        assert!(depths.windows(2).all(|pair| pair[0] > pair[1]));
    }
}
