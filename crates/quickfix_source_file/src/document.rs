//! Read-only document snapshot with a line index.

use memchr::memchr_iter;

use crate::{Position, Range};

/// An immutable snapshot of a source file.
///
/// Lines are separated by `\n`; a trailing `\r` belongs to the terminator and
/// is not part of the line text. A document always has at least one line,
/// and text ending in a newline has a final empty line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceDocument {
    text: String,
    /// Byte offset of the first character of each line.
    line_starts: Vec<usize>,
}

impl SourceDocument {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let mut line_starts = Vec::with_capacity(text.len() / 32 + 1);
        line_starts.push(0);
        line_starts.extend(memchr_iter(b'\n', text.as_bytes()).map(|index| index + 1));
        Self { text, line_starts }
    }

    /// The full document text.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Index of the last line.
    pub fn last_line(&self) -> usize {
        self.line_starts.len() - 1
    }

    /// Text of line `line` without its terminator.
    pub fn line(&self, line: usize) -> Option<&str> {
        let start = *self.line_starts.get(line)?;
        let end = self
            .line_starts
            .get(line + 1)
            .map_or(self.text.len(), |next| next - 1);
        let text = &self.text[start..end];
        Some(text.strip_suffix('\r').unwrap_or(text))
    }

    /// Iterate over all lines with their index.
    pub fn lines(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        (0..self.line_count()).filter_map(|line| self.line(line).map(|text| (line, text)))
    }

    /// Length in bytes of line `line`, or 0 when out of bounds.
    pub fn line_len(&self, line: usize) -> usize {
        self.line(line).map_or(0, str::len)
    }

    /// The range covering the text of a line, excluding its terminator.
    pub fn line_range(&self, line: usize) -> Range {
        Range::from_coords(line, 0, line, self.line_len(line))
    }

    /// The range that removes a whole line, terminator included.
    ///
    /// For the last line the preceding terminator is consumed instead, so
    /// the document never ends up with a dangling empty line.
    pub fn full_line_deletion_range(&self, line: usize) -> Range {
        if line < self.last_line() {
            Range::from_coords(line, 0, line + 1, 0)
        } else if line > 0 {
            Range::from_coords(line - 1, self.line_len(line - 1), line, self.line_len(line))
        } else {
            self.line_range(line)
        }
    }

    /// Convert a position into a byte offset.
    ///
    /// Returns `None` if the position is outside the document or not on a
    /// character boundary.
    pub fn offset(&self, position: Position) -> Option<usize> {
        let line = self.line(position.line)?;
        if position.column > line.len() || !line.is_char_boundary(position.column) {
            return None;
        }
        Some(self.line_starts[position.line] + position.column)
    }

    /// Convert a byte offset into a position, clamped to the document.
    pub fn position_at(&self, offset: usize) -> Position {
        let offset = offset.min(self.text.len());
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(next) => next - 1,
        };
        let column = (offset - self.line_starts[line]).min(self.line_len(line));
        Position::new(line, column)
    }

    /// Clamp a position onto the nearest valid location at or before it.
    pub fn clamp(&self, position: Position) -> Position {
        let line = position.line.min(self.last_line());
        let text = self.line(line).unwrap_or_default();
        let mut column = position.column.min(text.len());
        while !text.is_char_boundary(column) {
            column -= 1;
        }
        Position::new(line, column)
    }

    /// Whether both ends of `range` address valid locations.
    pub fn contains_range(&self, range: &Range) -> bool {
        self.offset(range.start).is_some() && self.offset(range.end).is_some()
    }

    /// Text covered by `range`.
    pub fn text_in(&self, range: &Range) -> Option<&str> {
        let start = self.offset(range.start)?;
        let end = self.offset(range.end)?;
        self.text.get(start..end)
    }

    /// Text on the range's start line before the range.
    pub fn text_before(&self, range: &Range) -> &str {
        self.line(range.start.line)
            .and_then(|line| line.get(..range.start.column))
            .unwrap_or_default()
    }

    /// Text on the range's end line after the range.
    pub fn text_after(&self, range: &Range) -> &str {
        self.line(range.end.line)
            .and_then(|line| line.get(range.end.column..))
            .unwrap_or_default()
    }

    /// Position at the end of a line's text.
    pub fn line_end(&self, line: usize) -> Position {
        Position::new(line, self.line_len(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lines() {
        let doc = SourceDocument::new("const a = 1;\r\nlet b;\n\nfoo()");
        assert_eq!(doc.line_count(), 4);
        assert_eq!(doc.line(0), Some("const a = 1;"));
        assert_eq!(doc.line(1), Some("let b;"));
        assert_eq!(doc.line(2), Some(""));
        assert_eq!(doc.line(3), Some("foo()"));
        assert_eq!(doc.line(4), None);
    }

    #[test]
    fn test_trailing_newline_adds_empty_line() {
        let doc = SourceDocument::new("a\n");
        assert_eq!(doc.line_count(), 2);
        assert_eq!(doc.line(1), Some(""));
    }

    #[test]
    fn test_offset_round_trip() {
        let doc = SourceDocument::new("ab\ncde\nf");
        assert_eq!(doc.offset(Position::new(1, 2)), Some(5));
        assert_eq!(doc.position_at(5), Position::new(1, 2));
        assert_eq!(doc.offset(Position::new(1, 4)), None);
        assert_eq!(doc.position_at(100), Position::new(2, 1));
    }

    #[test]
    fn test_offset_rejects_non_char_boundary() {
        let doc = SourceDocument::new("é = 1");
        assert_eq!(doc.offset(Position::new(0, 1)), None);
        assert_eq!(doc.clamp(Position::new(0, 1)), Position::new(0, 0));
    }

    #[test]
    fn test_clamp() {
        let doc = SourceDocument::new("abc\nde");
        assert_eq!(doc.clamp(Position::new(9, 9)), Position::new(1, 2));
        assert_eq!(doc.clamp(Position::new(0, 10)), Position::new(0, 3));
    }

    #[test]
    fn test_text_in() {
        let doc = SourceDocument::new("let x = 1;\nlet y = 2;");
        assert_eq!(doc.text_in(&Range::from_coords(0, 4, 0, 5)), Some("x"));
        assert_eq!(
            doc.text_in(&Range::from_coords(0, 8, 1, 3)),
            Some("1;\nlet")
        );
        assert_eq!(doc.text_before(&Range::from_coords(1, 4, 1, 5)), "let ");
        assert_eq!(doc.text_after(&Range::from_coords(1, 4, 1, 5)), " = 2;");
    }

    #[test]
    fn test_full_line_deletion_range() {
        let doc = SourceDocument::new("a\nb\nc");
        assert_eq!(doc.full_line_deletion_range(0), Range::from_coords(0, 0, 1, 0));
        assert_eq!(doc.full_line_deletion_range(2), Range::from_coords(1, 1, 2, 1));

        let single = SourceDocument::new("only");
        assert_eq!(single.full_line_deletion_range(0), Range::from_coords(0, 0, 0, 4));
    }
}
