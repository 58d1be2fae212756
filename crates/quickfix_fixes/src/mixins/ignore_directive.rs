//! Parsing and rewriting of `deno-lint-ignore` comment directives.
//!
//! A directive occupies a whole line:
//!
//! ```text
//! <indent>// deno-lint-ignore <code1> <code2> ...
//! <indent>// deno-lint-ignore-file <code1> ...
//! ```
//!
//! Rewrites keep the indentation and the comment prefix exactly as written.

use std::ops::RangeInclusive;

use lazy_static::lazy_static;
use quickfix_diagnostics::Edit;
use quickfix_source_file::{Range, SourceDocument};
use regex::Regex;

/// The directive marker recognized by the linter.
pub const IGNORE_MARKER: &str = "deno-lint-ignore";

lazy_static! {
    static ref DIRECTIVE: Regex = Regex::new(
        r"^(?P<indent>\s*)(?P<prefix>//\s*deno-lint-ignore(?P<file>-file)?)(?:\s+(?P<codes>.*?))?\s*$"
    )
    .unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveScope {
    /// Applies to the next line.
    Line,
    /// Applies to the whole file.
    File,
}

/// A parsed ignore directive borrowing from its line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IgnoreDirective<'a> {
    indent: &'a str,
    prefix: &'a str,
    scope: DirectiveScope,
    codes: Vec<&'a str>,
}

/// Outcome of removing a code from a directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Removal {
    /// No codes remain; the line should go.
    DeleteLine,
    /// The directive rewritten without the code.
    Rewrite(String),
}

impl<'a> IgnoreDirective<'a> {
    /// Parse a line consisting solely of a directive comment.
    pub fn parse(line: &'a str) -> Option<Self> {
        let captures = DIRECTIVE.captures(line)?;
        let indent = captures.name("indent")?.as_str();
        let prefix = captures.name("prefix")?.as_str();
        let scope = if captures.name("file").is_some() {
            DirectiveScope::File
        } else {
            DirectiveScope::Line
        };
        let codes = captures
            .name("codes")
            .map(|codes| codes.as_str().split_whitespace().collect())
            .unwrap_or_default();
        Some(Self {
            indent,
            prefix,
            scope,
            codes,
        })
    }

    pub fn scope(&self) -> DirectiveScope {
        self.scope
    }

    pub fn indent(&self) -> &'a str {
        self.indent
    }

    pub fn codes(&self) -> &[&'a str] {
        &self.codes
    }

    pub fn contains(&self, code: &str) -> bool {
        self.codes.contains(&code)
    }

    /// A directive without any codes.
    pub fn is_bare(&self) -> bool {
        self.codes.is_empty()
    }

    fn render(&self, codes: &[&str]) -> String {
        if codes.is_empty() {
            format!("{}{}", self.indent, self.prefix)
        } else {
            format!("{}{} {}", self.indent, self.prefix, codes.join(" "))
        }
    }

    /// Remove every occurrence of `code`; `None` when it is not listed.
    pub fn remove(&self, code: &str) -> Option<Removal> {
        if !self.contains(code) {
            return None;
        }
        let remaining: Vec<&str> = self.codes.iter().copied().filter(|c| *c != code).collect();
        if remaining.is_empty() {
            Some(Removal::DeleteLine)
        } else {
            Some(Removal::Rewrite(self.render(&remaining)))
        }
    }

    /// The directive with `code` appended; `None` when already listed.
    pub fn with_code(&self, code: &str) -> Option<String> {
        if self.contains(code) {
            return None;
        }
        let mut codes = self.codes.clone();
        codes.push(code);
        Some(self.render(&codes))
    }
}

/// Lines `[start - before, end + after]` around `range`, clamped to the document.
pub fn scan_window(
    document: &SourceDocument,
    range: &Range,
    before: usize,
    after: usize,
) -> RangeInclusive<usize> {
    let first = range.start.line.saturating_sub(before);
    let last = (range.end.line + after).min(document.last_line());
    first..=last
}

/// Find the nearest directive within the window that lists `code`.
pub fn find_directive_listing<'a>(
    document: &'a SourceDocument,
    range: &Range,
    before: usize,
    after: usize,
    code: &str,
) -> Option<(usize, IgnoreDirective<'a>)> {
    scan_window(document, range, before, after)
        .filter_map(|line| {
            let directive = IgnoreDirective::parse(document.line(line)?)?;
            directive.contains(code).then_some((line, directive))
        })
        .min_by_key(|(line, _)| line.abs_diff(range.start.line))
}

/// The edit that removes `code` from the directive on `line`.
pub fn removal_edit(
    document: &SourceDocument,
    line: usize,
    directive: &IgnoreDirective,
    code: &str,
) -> Option<Edit> {
    match directive.remove(code)? {
        Removal::DeleteLine => Some(Edit::deletion(document.full_line_deletion_range(line))),
        Removal::Rewrite(text) => Some(Edit::range_replacement(text, document.line_range(line))),
    }
}
