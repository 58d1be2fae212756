//! Zero-based line/column coordinates.

use std::fmt;

/// A location in a document.
///
/// Both fields are 0-based. `column` is a UTF-8 byte offset into the line
/// text, excluding the line terminator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// An end-exclusive span between two positions.
///
/// `end` never precedes `start`, including after deserialization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "RawRange")
)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

/// Unchecked wire form of [`Range`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawRange {
    start: Position,
    end: Position,
}

#[cfg(feature = "serde")]
impl From<RawRange> for Range {
    fn from(raw: RawRange) -> Self {
        Self::new(raw.start, raw.end)
    }
}

impl Range {
    /// Create a range, collapsing it onto `start` if `end` comes first.
    pub fn new(start: Position, end: Position) -> Self {
        if end < start {
            Self { start, end: start }
        } else {
            Self { start, end }
        }
    }

    /// Shorthand for a range from raw coordinates.
    pub fn from_coords(
        start_line: usize,
        start_column: usize,
        end_line: usize,
        end_column: usize,
    ) -> Self {
        Self::new(
            Position::new(start_line, start_column),
            Position::new(end_line, end_column),
        )
    }

    /// A zero-width range at `position`.
    pub const fn empty(position: Position) -> Self {
        Self {
            start: position,
            end: position,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn is_single_line(&self) -> bool {
        self.start.line == self.end.line
    }

    /// Whether `position` lies within the range, both ends inclusive.
    pub fn contains(&self, position: Position) -> bool {
        self.start <= position && position <= self.end
    }

    /// Whether the two ranges overlap or touch.
    pub fn intersects(&self, other: &Range) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Whether the two ranges share any content.
    ///
    /// Unlike [`Range::intersects`], touching ranges do not overlap, except
    /// for two insertions at the same point whose order would be ambiguous.
    pub fn overlaps(&self, other: &Range) -> bool {
        if self.is_empty() && other.is_empty() {
            return self.start == other.start;
        }
        self.start < other.end && other.start < self.end
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_collapses_inverted_range() {
        let range = Range::from_coords(3, 4, 1, 0);
        assert_eq!(range.start, Position::new(3, 4));
        assert_eq!(range.end, Position::new(3, 4));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let range = Range::from_coords(1, 2, 1, 6);
        assert!(range.contains(Position::new(1, 2)));
        assert!(range.contains(Position::new(1, 6)));
        assert!(!range.contains(Position::new(1, 7)));
        assert!(!range.contains(Position::new(0, 4)));
    }

    #[test]
    fn test_intersects_touching_ranges() {
        let a = Range::from_coords(0, 0, 0, 5);
        let b = Range::from_coords(0, 5, 0, 9);
        let c = Range::from_coords(0, 6, 0, 9);
        assert!(a.intersects(&b));
        assert!(!a.intersects(&c));
        assert!(a.intersects(&Range::empty(Position::new(0, 3))));
    }

    #[test]
    fn test_overlaps() {
        let a = Range::from_coords(0, 0, 0, 5);
        let b = Range::from_coords(0, 5, 0, 9);
        assert!(!a.overlaps(&b));
        assert!(a.overlaps(&Range::from_coords(0, 4, 0, 6)));

        let insert = Range::empty(Position::new(2, 0));
        assert!(insert.overlaps(&insert));
        assert!(!insert.overlaps(&Range::empty(Position::new(3, 0))));
        assert!(insert.overlaps(&Range::from_coords(1, 0, 3, 0)));
    }
}
