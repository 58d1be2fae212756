//! NoCaseDeclarations fix: wrap the clause body in braces so its lexical
//! declarations get their own scope.

use quickfix_diagnostics::{Edit, Fix};

use super::CaseClause;
use crate::mixins::text::insert_after_line;
use crate::{FixContext, FixProvider};

#[derive(Debug, Clone, Default)]
pub struct NoCaseDeclarations;

impl NoCaseDeclarations {
    fn fix(ctx: &FixContext) -> Option<Fix> {
        let document = ctx.document();
        let clause = CaseClause::enclosing(document, ctx.start_line())?;
        // Labels carrying code or an opening brace are left alone.
        if !document.line(clause.label_line)?.trim_end().ends_with(':') {
            return None;
        }
        let last = clause.last_body_line?;
        let edits = vec![
            Edit::insertion(" {", document.line_end(clause.label_line)),
            insert_after_line(document, last, &format!("{}}}\n", clause.label_indent)),
        ];
        Some(Fix::new("Add braces to case clause", ctx.diagnostic(), edits))
    }
}

impl FixProvider for NoCaseDeclarations {
    fn rule_codes(&self) -> &'static [&'static str] {
        &["no-case-declarations"]
    }

    fn create_fixes(&self, ctx: &FixContext) -> Vec<Fix> {
        Self::fix(ctx).into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_utils::{apply_single, diagnostic_on, fixes_for};

    #[test]
    fn test_wraps_clause_in_braces() {
        let source = "switch (x) {\n  case 1:\n    let y = 1;\n    foo(y);\n    break;\n  default:\n    bar();\n}\n";
        let diagnostic = diagnostic_on("no-case-declarations", source, "let y = 1;");
        let (title, fixed) = apply_single(&NoCaseDeclarations, source, &diagnostic);
        assert_eq!(title, "Add braces to case clause");
        assert_eq!(
            fixed,
            "switch (x) {\n  case 1: {\n    let y = 1;\n    foo(y);\n    break;\n  }\n  default:\n    bar();\n}\n"
        );
    }

    #[test]
    fn test_last_clause_closes_before_switch_end() {
        let source = "switch (x) {\n  default:\n    const z = 2;\n\n}\n";
        let diagnostic = diagnostic_on("no-case-declarations", source, "const z = 2;");
        let (_, fixed) = apply_single(&NoCaseDeclarations, source, &diagnostic);
        assert_eq!(
            fixed,
            "switch (x) {\n  default: {\n    const z = 2;\n  }\n\n}\n"
        );
    }

    #[test]
    fn test_no_fix_when_already_braced() {
        let source = "switch (x) {\n  case 1: {\n    let y = 1;\n  }\n}\n";
        let diagnostic = diagnostic_on("no-case-declarations", source, "let y = 1;");
        assert!(fixes_for(&NoCaseDeclarations, source, &diagnostic).is_empty());
    }
}
