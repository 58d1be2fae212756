//! Picking the diagnostics a fix request is about.
//!
//! A selection asks for every diagnostic it touches. A bare cursor asks for
//! the single diagnostic it sits on:
//!
//! ```text
//! const value = items[0]!.name == other;
//!               ^^^^^^^^^^^^^^^^^^^^^^^  eqeqeq
//!               ^^^^^^^^^                no-non-null-assertion
//!                   |                    cursor -> no-non-null-assertion
//! ```
//!
//! Among the diagnostics containing the cursor, the one starting closest
//! wins, then the smallest.

use quickfix_diagnostics::Diagnostic;
use quickfix_source_file::{Position, Range};

/// Weight of a line difference relative to a column difference.
const LINE_DISTANCE_WEIGHT: u64 = 1000;
/// Weight of a spanned line relative to a spanned column.
const LINE_SIZE_WEIGHT: i64 = 100;

fn distance(cursor: Position, range: &Range) -> u64 {
    let start = range.start;
    if start.line == cursor.line {
        start.column.abs_diff(cursor.column) as u64
    } else {
        start.line.abs_diff(cursor.line) as u64 * LINE_DISTANCE_WEIGHT
    }
}

fn size(range: &Range) -> i64 {
    let columns = range.end.column as i64 - range.start.column as i64;
    if range.is_single_line() {
        columns
    } else {
        (range.end.line - range.start.line) as i64 * LINE_SIZE_WEIGHT + columns
    }
}

/// Diagnostics relevant to `requested`, in input order for a selection.
pub fn select_relevant<'a>(
    diagnostics: impl IntoIterator<Item = &'a Diagnostic>,
    requested: Range,
) -> Vec<&'a Diagnostic> {
    let intersecting: Vec<&Diagnostic> = diagnostics
        .into_iter()
        .filter(|diagnostic| diagnostic.range.intersects(&requested))
        .collect();
    if intersecting.len() <= 1 || !requested.is_empty() {
        return intersecting;
    }

    let cursor = requested.start;
    let containing: Vec<&Diagnostic> = intersecting
        .iter()
        .copied()
        .filter(|diagnostic| diagnostic.range.contains(cursor))
        .collect();
    let candidates = if containing.is_empty() {
        intersecting
    } else {
        containing
    };

    candidates
        .into_iter()
        .min_by_key(|diagnostic| (distance(cursor, &diagnostic.range), size(&diagnostic.range)))
        .into_iter()
        .collect()
}
