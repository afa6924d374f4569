//! Line classification predicates for feature file content
//!
//! These are the only decisions the splitter makes about a line: whether it
//! opens an Examples table, carries a data row, carries a tag, or is a
//! comment. Everything else is treated as plain preamble text.

use regex::Regex;
use std::sync::LazyLock;

/// Literal text that opens an Examples table.
const TABLE_MARKER: &str = "Examples:";

/// Pattern matching an email address embedded anywhere in a line.
///
/// Lines mentioning an email address contain an '@' but are not tags; a step
/// like "Given I mail user@example.com" must stay a plain step line.
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}")
        .expect("email pattern must compile")
});

/// Check whether a line opens an Examples table.
pub fn is_table_marker(line: &str) -> bool {
    line.contains(TABLE_MARKER)
}

/// Check whether a line is a pipe-delimited table row.
pub fn is_row(line: &str) -> bool {
    line.contains('|')
}

/// Check whether a line carries an '@'-prefixed scenario tag.
///
/// A line containing an email address is not a tag, even though it contains
/// an '@'.
pub fn is_tag(line: &str) -> bool {
    line.contains('@') && !EMAIL.is_match(line)
}

/// Check whether a line is a '#' comment.
///
/// A line whose first non-whitespace character is '#' is a comment; an
/// entirely blank line is not.
pub fn is_comment(line: &str) -> bool {
    line.trim().starts_with('#')
}

/// Check whether a line is blank or whitespace-only.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
