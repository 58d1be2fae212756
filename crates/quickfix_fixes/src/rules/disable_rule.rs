//! "Disable this rule" actions, offered for every diagnostic.
//!
//! Both actions prefer extending an existing directive over adding a new
//! one:
//!
//! ```text
//! // deno-lint-ignore-file no-explicit-any      <- file action appends here
//!
//! function f() {
//!   // deno-lint-ignore no-var                  <- line action appends here
//!   var x: any = 1;
//! }
//! ```

use quickfix_diagnostics::{Edit, Fix};
use quickfix_source_file::{Position, SourceDocument};

use crate::mixins::IgnoreDirective;
use crate::mixins::ignore_directive::DirectiveScope;
use crate::mixins::text::{indentation, insert_after_line, is_comment};
use crate::{FixContext, FixProvider, WILDCARD};

/// Lines above the diagnostic searched for a line directive.
const LINE_DIRECTIVE_LOOKBACK: usize = 3;
/// Lines at the top of the file that may hold the file directive.
const FILE_HEADER_LINES: usize = 10;

/// Outcome of looking for an existing directive.
enum Existing<'a> {
    Found(usize, IgnoreDirective<'a>),
    Missing,
}

impl Existing<'_> {
    /// Edit adding `code`; `None` when the directive already lists it.
    fn append(&self, document: &SourceDocument, code: &str) -> Option<Edit> {
        match self {
            Existing::Found(line, directive) => directive
                .with_code(code)
                .map(|text| Edit::range_replacement(text, document.line_range(*line))),
            Existing::Missing => None,
        }
    }
}

fn line_directive_above(document: &SourceDocument, line: usize) -> Existing<'_> {
    for index in (line.saturating_sub(LINE_DIRECTIVE_LOOKBACK)..line).rev() {
        let Some(text) = document.line(index) else {
            break;
        };
        if let Some(directive) = IgnoreDirective::parse(text)
            && directive.scope() == DirectiveScope::Line
        {
            return Existing::Found(index, directive);
        }
        let trimmed = text.trim();
        if !(trimmed.is_empty() || is_comment(trimmed)) {
            break;
        }
    }
    Existing::Missing
}

/// The leading header of the file: an existing file directive, and the last
/// shebang or comment line before the first statement.
fn scan_header(document: &SourceDocument) -> (Existing<'_>, Option<usize>) {
    let mut last_comment = None;
    let mut in_block_comment = false;
    for (index, text) in document.lines().take(FILE_HEADER_LINES) {
        let trimmed = text.trim();
        if in_block_comment {
            in_block_comment = !trimmed.contains("*/");
            last_comment = Some(index);
            continue;
        }
        if let Some(directive) = IgnoreDirective::parse(text) {
            match directive.scope() {
                DirectiveScope::File => return (Existing::Found(index, directive), last_comment),
                // Belongs to the statement below it.
                DirectiveScope::Line => break,
            }
        }
        if (index == 0 && trimmed.starts_with("#!")) || trimmed.starts_with("//") {
            last_comment = Some(index);
        } else if trimmed.starts_with("/*") {
            in_block_comment = !trimmed.contains("*/");
            last_comment = Some(index);
        } else if !trimmed.is_empty() {
            break;
        }
    }
    (Existing::Missing, last_comment)
}

/// Offers to silence the diagnostic's rule on its line or in the whole file.
#[derive(Debug, Clone, Default)]
pub struct DisableRule;

impl DisableRule {
    fn line_fix(ctx: &FixContext) -> Option<Fix> {
        let document = ctx.document();
        let code = ctx.code();
        let line = ctx.start_line();
        let existing = line_directive_above(document, line);
        let edit = match &existing {
            Existing::Found(..) => existing.append(document, code)?,
            Existing::Missing => Edit::insertion(
                format!("{}// deno-lint-ignore {code}\n", indentation(ctx.line_text())),
                Position::new(line, 0),
            ),
        };
        Some(
            Fix::single(format!("Disable '{code}' for this line"), ctx.diagnostic(), edit)
                .not_preferred(),
        )
    }

    fn file_fix(ctx: &FixContext) -> Option<Fix> {
        let document = ctx.document();
        let code = ctx.code();
        let (existing, last_comment) = scan_header(document);
        let directive = format!("// deno-lint-ignore-file {code}\n");
        let edit = match (&existing, last_comment) {
            (Existing::Found(..), _) => existing.append(document, code)?,
            (Existing::Missing, Some(line)) => insert_after_line(document, line, &directive),
            (Existing::Missing, None) => Edit::insertion(directive, Position::new(0, 0)),
        };
        Some(
            Fix::single(format!("Disable '{code}' for the entire file"), ctx.diagnostic(), edit)
                .not_preferred(),
        )
    }
}

impl FixProvider for DisableRule {
    fn rule_codes(&self) -> &'static [&'static str] {
        &[WILDCARD]
    }

    fn create_fixes(&self, ctx: &FixContext) -> Vec<Fix> {
        if ctx.code().is_empty() {
            return Vec::new();
        }
        [Self::line_fix(ctx), Self::file_fix(ctx)]
            .into_iter()
            .flatten()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_utils::{apply_all, diagnostic_on, fixes_for};

    #[test]
    fn test_inserts_both_directives() {
        let source = "function f() {\n  var x = 1;\n}\n";
        let diagnostic = diagnostic_on("no-var", source, "var x = 1;");
        let results = apply_all(&DisableRule, source, &diagnostic);
        assert_eq!(
            results,
            vec![
                (
                    "Disable 'no-var' for this line".to_string(),
                    "function f() {\n  // deno-lint-ignore no-var\n  var x = 1;\n}\n".to_string()
                ),
                (
                    "Disable 'no-var' for the entire file".to_string(),
                    "// deno-lint-ignore-file no-var\nfunction f() {\n  var x = 1;\n}\n".to_string()
                ),
            ]
        );
    }

    #[test]
    fn test_appends_to_existing_directives() {
        let source = "#!/usr/bin/env -S deno run\n// deno-lint-ignore-file eqeqeq\n\n// deno-lint-ignore no-explicit-any\nvar x: any = 1;\n";
        let diagnostic = diagnostic_on("no-var", source, "var x");
        let results = apply_all(&DisableRule, source, &diagnostic);
        assert_eq!(
            results[0].1,
            "#!/usr/bin/env -S deno run\n// deno-lint-ignore-file eqeqeq\n\n// deno-lint-ignore no-explicit-any no-var\nvar x: any = 1;\n"
        );
        assert_eq!(
            results[1].1,
            "#!/usr/bin/env -S deno run\n// deno-lint-ignore-file eqeqeq no-var\n\n// deno-lint-ignore no-explicit-any\nvar x: any = 1;\n"
        );
    }

    #[test]
    fn test_file_directive_after_header_comments() {
        let source = "// Copyright 2026\n/*\n * MIT\n */\n\nvar x = 1;\n";
        let diagnostic = diagnostic_on("no-var", source, "var x = 1;");
        let results = apply_all(&DisableRule, source, &diagnostic);
        assert_eq!(
            results[1].1,
            "// Copyright 2026\n/*\n * MIT\n */\n// deno-lint-ignore-file no-var\n\nvar x = 1;\n"
        );
    }

    #[test]
    fn test_file_directive_not_between_line_directive_and_target() {
        let source = "// deno-lint-ignore eqeqeq\nvar x = a == b;\n";
        let diagnostic = diagnostic_on("no-var", source, "var x");
        let results = apply_all(&DisableRule, source, &diagnostic);
        assert_eq!(
            results[1].1,
            "// deno-lint-ignore-file no-var\n// deno-lint-ignore eqeqeq\nvar x = a == b;\n"
        );
    }

    #[test]
    fn test_line_search_stops_at_code() {
        let source = "// deno-lint-ignore no-var\nvar a = 1;\nvar b = 2;\n";
        let diagnostic = diagnostic_on("no-var", source, "var b");
        let results = apply_all(&DisableRule, source, &diagnostic);
        assert_eq!(
            results[0].1,
            "// deno-lint-ignore no-var\nvar a = 1;\n// deno-lint-ignore no-var\nvar b = 2;\n"
        );
    }

    #[test]
    fn test_already_listed_codes_are_skipped() {
        let source = "// deno-lint-ignore-file no-var\n// deno-lint-ignore no-var\nvar a = 1;\n";
        let diagnostic = diagnostic_on("no-var", source, "var a");
        assert!(fixes_for(&DisableRule, source, &diagnostic).is_empty());
    }

    #[test]
    fn test_actions_are_not_preferred() {
        let source = "var a = 1;";
        let diagnostic = diagnostic_on("no-var", source, "var a");
        let fixes = fixes_for(&DisableRule, source, &diagnostic);
        assert_eq!(fixes.len(), 2);
        assert!(fixes.iter().all(|fix| !fix.is_preferred()));
    }
}
