//! Fixes inside `switch` statements.
//!
//! Case clauses are located by indentation: a clause runs from its label to
//! the next label at the same indentation, or to a closing brace indented no
//! deeper than the label.

mod no_case_declarations;
mod no_fallthrough;

pub use no_case_declarations::NoCaseDeclarations;
pub use no_fallthrough::NoFallthrough;

use lazy_static::lazy_static;
use quickfix_source_file::SourceDocument;
use regex::Regex;

use crate::mixins::text::indentation;

lazy_static! {
    static ref CASE_LABEL: Regex = Regex::new(r"^(case\b.*:|default\s*:)").unwrap();
}

/// Lines scanned backward for the enclosing label.
const MAX_LABEL_DISTANCE: usize = 200;

/// Fallback for one indentation level when the clause body gives no hint.
const DEFAULT_INDENT_UNIT: &str = "  ";

/// A `case`/`default` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
struct CaseClause<'a> {
    label_line: usize,
    label_indent: &'a str,
    /// Last non-blank body line, if the body has any content.
    last_body_line: Option<usize>,
    /// Indentation of the first body line.
    body_indent: Option<&'a str>,
}

impl<'a> CaseClause<'a> {
    /// Find the clause enclosing `line`.
    fn enclosing(document: &'a SourceDocument, line: usize) -> Option<Self> {
        let floor = line.saturating_sub(MAX_LABEL_DISTANCE);
        let label_line = (floor..=line)
            .rev()
            .find(|index| document.line(*index).is_some_and(|text| is_label(text.trim())))?;
        let label_indent = indentation(document.line(label_line)?);

        let mut last_body_line = None;
        let mut body_indent = None;
        for index in label_line + 1..document.line_count() {
            let Some(text) = document.line(index) else {
                break;
            };
            let trimmed = text.trim();
            let indent = indentation(text);
            if trimmed.is_empty() {
                continue;
            }
            if (is_label(trimmed) && indent.len() <= label_indent.len())
                || (trimmed.starts_with('}') && indent.len() <= label_indent.len())
            {
                break;
            }
            body_indent.get_or_insert(indent);
            last_body_line = Some(index);
        }

        Some(Self {
            label_line,
            label_indent,
            last_body_line,
            body_indent,
        })
    }

    /// Indentation for a statement at the clause body level.
    fn statement_indent(&self) -> String {
        match self.body_indent {
            Some(indent) if indent.len() > self.label_indent.len() => indent.to_string(),
            _ if self.label_indent.contains('\t') => format!("{}\t", self.label_indent),
            _ => format!("{}{DEFAULT_INDENT_UNIT}", self.label_indent),
        }
    }
}

fn is_label(trimmed: &str) -> bool {
    CASE_LABEL.is_match(trimmed)
}
