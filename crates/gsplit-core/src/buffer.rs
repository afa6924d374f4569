//! Scenario preamble buffer with snapshot semantics
//!
//! The buffer accumulates everything that precedes and wraps an Examples
//! table: feature header, tags, steps, and the table header row. Each data
//! row is emitted against a point-in-time snapshot of the buffer, so later
//! mutation (a tag swap between two Examples blocks) never leaks into rows
//! that were already emitted.

use crate::classify;

/// A raw source line together with its 0-based position in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// Raw text, line terminator stripped
    pub text: String,
    /// 0-based position in the source file
    pub number: usize,
}

impl Line {
    /// Create a new line
    pub fn new(text: impl Into<String>, number: usize) -> Self {
        Self {
            text: text.into(),
            number,
        }
    }
}

/// Ordered preamble lines for the file currently being scanned.
///
/// Mutated only by [`push`](Self::push) and by the single-slot tag
/// substitution in [`replace_tag`](Self::replace_tag).
#[derive(Debug, Clone, Default)]
pub struct ScenarioBuffer {
    lines: Vec<Line>,
}

impl ScenarioBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a line to the end of the buffer
    pub fn push(&mut self, text: &str, number: usize) {
        self.lines.push(Line::new(text, number));
    }

    /// Number of buffered lines
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the buffer holds no lines
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Take a point-in-time copy of the buffered texts.
    ///
    /// The returned lines are independent of the buffer; mutating the buffer
    /// afterwards leaves earlier snapshots untouched.
    pub fn snapshot(&self) -> Vec<String> {
        self.lines.iter().map(|l| l.text.clone()).collect()
    }

    /// Replace the first tag line in the buffer with `text`.
    ///
    /// Scans in order and substitutes the first element classified as a tag,
    /// then stops. Returns `false` without mutating anything when the buffer
    /// holds no tag line; the new tag is dropped in that case.
    pub fn replace_tag(&mut self, text: &str, number: usize) -> bool {
        match self.lines.iter_mut().find(|l| classify::is_tag(&l.text)) {
            Some(slot) => {
                *slot = Line::new(text, number);
                true
            }
            None => false,
        }
    }
}
