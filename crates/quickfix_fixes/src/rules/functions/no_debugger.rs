use lazy_static::lazy_static;
use quickfix_diagnostics::{Edit, Fix};
use quickfix_source_file::{Position, Range};
use regex::Regex;

use crate::mixins::{delete_line_fix, delete_range_fix};
use crate::{FixContext, FixProvider};

const TITLE: &str = "Remove `debugger` statement";
const KEYWORD: &str = "debugger";

lazy_static! {
    static ref STATEMENT: Regex = Regex::new(r"\bdebugger\b\s*;?\s*").unwrap();
}

/// Removes a `debugger` statement, taking the whole line when it stands
/// alone.
#[derive(Debug, Clone, Default)]
pub struct NoDebugger;

impl NoDebugger {
    fn fix(ctx: &FixContext) -> Fix {
        let line = ctx.line_text();
        let trimmed = line.trim();
        if trimmed == KEYWORD || trimmed == "debugger;" {
            return delete_line_fix(TITLE, ctx.diagnostic(), ctx.document());
        }

        // Search from the diagnostic so earlier identifiers are not touched.
        let from = ctx.range().start.column;
        let Some(statement) = line.get(from..).and_then(|rest| STATEMENT.find(rest)) else {
            return delete_range_fix(TITLE, ctx.diagnostic());
        };
        let start = from + statement.start();
        let end = from + statement.end();

        let row = ctx.start_line();
        Fix::single(
            TITLE,
            ctx.diagnostic(),
            Edit::deletion(Range::new(Position::new(row, start), Position::new(row, end))),
        )
    }
}

impl FixProvider for NoDebugger {
    fn rule_codes(&self) -> &'static [&'static str] {
        &["no-debugger"]
    }

    fn create_fixes(&self, ctx: &FixContext) -> Vec<Fix> {
        vec![Self::fix(ctx)]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_utils::{apply_single, diagnostic_on};

    #[test]
    fn test_whole_line() {
        let source = "function f() {\n  debugger;\n  return 1;\n}\n";
        let diagnostic = diagnostic_on("no-debugger", source, "debugger;");
        let (title, fixed) = apply_single(&NoDebugger, source, &diagnostic);
        assert_eq!(title, "Remove `debugger` statement");
        assert_eq!(fixed, "function f() {\n  return 1;\n}\n");
    }

    #[test]
    fn test_inline() {
        let source = "if (x) { debugger;   call(); }";
        let diagnostic = diagnostic_on("no-debugger", source, "debugger;");
        let (_, fixed) = apply_single(&NoDebugger, source, &diagnostic);
        assert_eq!(fixed, "if (x) { call(); }");
    }

    #[test]
    fn test_identifier_before_statement_untouched() {
        let source = "const debuggerOn = true; debugger;";
        let diagnostic = diagnostic_on("no-debugger", source, "debugger;");
        let (_, fixed) = apply_single(&NoDebugger, source, &diagnostic);
        assert_eq!(fixed, "const debuggerOn = true; ");
    }

    #[test]
    fn test_last_line_without_newline() {
        let source = "a();\ndebugger";
        let diagnostic = diagnostic_on("no-debugger", source, "debugger");
        let (_, fixed) = apply_single(&NoDebugger, source, &diagnostic);
        assert_eq!(fixed, "a();");
    }
}
