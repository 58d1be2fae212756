//! Parsing of `deno lint --json` output and conversion into [`Diagnostic`]s.
//!
//! The tool reports 1-based lines and 0-based columns:
//!
//! ```json
//! {
//!   "diagnostics": [{
//!     "range": { "start": { "line": 1, "col": 0 }, "end": { "line": 1, "col": 3 } },
//!     "filename": "main.ts",
//!     "message": "`var` keyword is not allowed.",
//!     "code": "no-var",
//!     "hint": "Use `let` or `const` instead"
//!   }],
//!   "errors": [{ "file_path": "broken.ts", "message": "Expected ';'" }]
//! }
//! ```

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use quickfix_source_file::{Position, Range, SourceDocument};
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{Diagnostic, Severity};

/// Documentation base used when the tool does not provide a link.
pub const DEFAULT_DOCS_URL: &str = "https://docs.deno.com/lint/rules/";

/// Documentation link for `code` under `base`, with or without a trailing `/`.
pub fn rule_docs_url(base: &str, code: &str) -> String {
    format!("{}/{code}", base.trim_end_matches('/'))
}

lazy_static! {
    static ref HINT_PREFIX: Regex = Regex::new(r"^(Hint:|💡) ").unwrap();
}

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to parse lint output: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A 1-based line, 0-based column location as reported by the tool.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolPosition {
    pub line: i64,
    pub col: i64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolRange {
    pub start: ToolPosition,
    pub end: ToolPosition,
}

/// One diagnostic entry of the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintMessage {
    pub range: ToolRange,
    pub filename: String,
    pub message: String,
    pub code: String,
    #[serde(default)]
    pub hint: Option<String>,
    #[serde(default)]
    pub docs: Option<String>,
    /// Auxiliary notes; prefixed ones may carry the hint.
    #[serde(default, rename = "relatedInformation", alias = "related")]
    pub related_information: Vec<String>,
}

/// A file the tool failed to analyze.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintError {
    pub file_path: String,
    pub message: String,
}

/// The full report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LintReport {
    pub diagnostics: Vec<LintMessage>,
    pub errors: Vec<LintError>,
}

#[derive(Deserialize)]
struct RawReport {
    #[serde(default)]
    diagnostics: Vec<serde_json::Value>,
    #[serde(default)]
    errors: Vec<serde_json::Value>,
}

impl LintReport {
    /// Parse the tool's stdout.
    ///
    /// Blank output is an empty report. Entries that do not have the
    /// expected shape are skipped rather than failing the whole report.
    pub fn parse(output: &str) -> Result<Self, ReportError> {
        if output.trim().is_empty() {
            return Ok(Self::default());
        }
        let raw: RawReport = serde_json::from_str(output)?;
        Ok(Self {
            diagnostics: raw.diagnostics.into_iter().filter_map(decode_entry).collect(),
            errors: raw.errors.into_iter().filter_map(decode_entry).collect(),
        })
    }

    /// Diagnostics grouped by file name, in file name order.
    pub fn by_file(&self) -> BTreeMap<&str, Vec<&LintMessage>> {
        let mut files: BTreeMap<&str, Vec<&LintMessage>> = BTreeMap::new();
        for message in &self.diagnostics {
            files.entry(message.filename.as_str()).or_default().push(message);
        }
        files
    }
}

fn decode_entry<T: serde::de::DeserializeOwned>(value: serde_json::Value) -> Option<T> {
    match serde_json::from_value(value) {
        Ok(entry) => Some(entry),
        Err(err) => {
            tracing::warn!("Skipping malformed lint report entry: {err}");
            None
        }
    }
}

impl LintMessage {
    /// Convert into a document-space diagnostic.
    ///
    /// Coordinates are clamped to the document and an end before the start
    /// collapses onto the start.
    pub fn to_diagnostic(
        &self,
        document: &SourceDocument,
        severity: Severity,
        docs_base_url: &str,
    ) -> Diagnostic {
        let start = convert_position(document, self.range.start);
        let end = convert_position(document, self.range.end);
        let docs_url = self
            .docs
            .clone()
            .unwrap_or_else(|| rule_docs_url(docs_base_url, &self.code));

        let mut diagnostic = Diagnostic::new(&self.code, &self.message, Range::new(start, end))
            .with_severity(severity)
            .with_docs_url(docs_url);
        if let Some(hint) = self.hint.clone().or_else(|| extract_hint(&self.related_information)) {
            diagnostic = diagnostic.with_hint(hint);
        }
        diagnostic
    }
}

fn convert_position(document: &SourceDocument, position: ToolPosition) -> Position {
    let line = usize::try_from(position.line.saturating_sub(1)).unwrap_or(0);
    let column = usize::try_from(position.col).unwrap_or(0);
    document.clamp(Position::new(line, column))
}

/// The first related note carrying a hint prefix, with the prefix removed.
pub fn extract_hint(related: &[String]) -> Option<String> {
    related.iter().find_map(|note| {
        HINT_PREFIX
            .find(note)
            .map(|prefix| note[prefix.end()..].to_string())
    })
}
