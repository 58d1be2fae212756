use quickfix_source_file::{Position, Range};
use serde::{Deserialize, Serialize};

/// A single text replacement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edit {
    range: Range,
    new_text: String,
}

impl Edit {
    /// Replace the content of `range` with `content`.
    pub fn range_replacement(content: impl Into<String>, range: Range) -> Self {
        Self {
            range,
            new_text: content.into(),
        }
    }

    /// Insert `content` at `at`.
    pub fn insertion(content: impl Into<String>, at: Position) -> Self {
        Self {
            range: Range::empty(at),
            new_text: content.into(),
        }
    }

    /// Delete the content of `range`.
    pub fn deletion(range: Range) -> Self {
        Self {
            range,
            new_text: String::new(),
        }
    }

    pub fn range(&self) -> Range {
        self.range
    }

    pub fn content(&self) -> &str {
        &self.new_text
    }

    pub fn is_insertion(&self) -> bool {
        self.range.is_empty() && !self.new_text.is_empty()
    }

    pub fn is_deletion(&self) -> bool {
        self.new_text.is_empty()
    }

    /// Whether the two edits touch the same text.
    pub fn overlaps(&self, other: &Edit) -> bool {
        self.range.overlaps(&other.range)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_deserialized_inverted_range_collapses() {
        let edit: Edit = serde_json::from_str(
            r#"{"range":{"start":{"line":2,"column":5},"end":{"line":1,"column":0}},"new_text":"x"}"#,
        )
        .unwrap();
        assert_eq!(edit.range(), Range::empty(Position::new(2, 5)));
    }

    #[test]
    fn test_range_serialization_round_trips() {
        let edit = Edit::deletion(Range::from_coords(0, 1, 3, 2));
        let json = serde_json::to_string(&edit).unwrap();
        assert_eq!(serde_json::from_str::<Edit>(&json).unwrap(), edit);
    }
}
