//! Examples-table splitter state machine
//!
//! Scans a feature file's lines exactly once. Everything up to and including
//! the first table header accumulates in a [`ScenarioBuffer`]; each data row
//! then yields one [`GeneratedScenario`] made of a buffer snapshot plus that
//! row. A file with no Examples marker is signalled for verbatim copying
//! instead.

use crate::buffer::ScenarioBuffer;
use crate::classify;

/// One output unit: a numbered, self-contained scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedScenario {
    /// 1-based row number, monotonic across the whole file
    pub number: usize,
    /// Complete line set to write: preamble snapshot + the data row
    pub lines: Vec<String>,
}

/// Result of scanning one feature file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitOutcome {
    /// No Examples marker was found; the source must be copied unchanged
    CopyVerbatim,
    /// One generated scenario per data row, in file order
    Scenarios(Vec<GeneratedScenario>),
}

/// Split a feature file's lines into per-row scenarios.
///
/// The row counter starts at 1 and never resets within a file, so a second
/// Examples block continues numbering where the first left off. Comment
/// lines inside a table region are discarded without advancing the counter.
/// A tag line between two blocks replaces the buffered tag for every row
/// emitted after it.
pub fn split_feature<S: AsRef<str>>(lines: &[S]) -> SplitOutcome {
    let mut buffer = ScenarioBuffer::new();
    let mut scenarios = Vec::new();
    let mut in_table = false;
    let mut row_number = 0;

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i].as_ref();

        if !in_table {
            buffer.push(line, i);

            if classify::is_table_marker(line) {
                in_table = true;
                i = append_header(lines, i + 1, &mut buffer);
                continue;
            }
        } else if classify::is_comment(line) {
            // dropped: never buffered, never counted
        } else if classify::is_table_marker(line) {
            // a new Examples block; its header joins the buffer like the
            // first one's did
            i = append_header(lines, i + 1, &mut buffer);
            continue;
        } else if classify::is_row(line) {
            row_number += 1;
            let mut data = buffer.snapshot();
            data.push(line.to_string());
            scenarios.push(GeneratedScenario {
                number: row_number,
                lines: data,
            });
        } else if classify::is_tag(line) {
            buffer.replace_tag(line, i);
        }

        i += 1;
    }

    if in_table {
        SplitOutcome::Scenarios(scenarios)
    } else {
        SplitOutcome::CopyVerbatim
    }
}

/// Locate the table header following a marker and append it to the buffer.
///
/// Skips blank lines starting at `from`, appends the first non-blank line
/// found, and returns the index to resume scanning at (one past the header).
/// When only blanks remain the scan resumes at end of input.
fn append_header<S: AsRef<str>>(lines: &[S], from: usize, buffer: &mut ScenarioBuffer) -> usize {
    for (offset, line) in lines[from.min(lines.len())..].iter().enumerate() {
        let line = line.as_ref();
        if !classify::is_blank(line) {
            let header_idx = from + offset;
            buffer.push(line, header_idx);
            return header_idx + 1;
        }
    }
    lines.len()
}
