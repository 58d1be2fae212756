//! JsxBooleanValue fix: `<Foo enabled={true} />` becomes `<Foo enabled />`.

use quickfix_diagnostics::{Edit, Fix};
use quickfix_source_file::{Position, Range};

use crate::{FixContext, FixProvider};

#[derive(Debug, Clone, Default)]
pub struct JsxBooleanValue;

impl JsxBooleanValue {
    fn fix(ctx: &FixContext) -> Option<Fix> {
        let range = ctx.range();
        if !range.is_single_line() || ctx.text()?.trim() != "{true}" {
            return None;
        }
        let before = ctx.document().text_before(&range);
        let equals = before.rfind('=')?;
        if !before[equals + 1..].trim().is_empty() {
            return None;
        }
        let from = before[..equals].trim_end().len();
        let deletion = Range::new(Position::new(range.start.line, from), range.end);
        Some(Fix::single(
            "Simplify JSX boolean attribute",
            ctx.diagnostic(),
            Edit::deletion(deletion),
        ))
    }
}

impl FixProvider for JsxBooleanValue {
    fn rule_codes(&self) -> &'static [&'static str] {
        &["jsx-boolean-value"]
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
    fn test_removes_explicit_true() {
        let source = "const el = <Foo enabled={true} />;\n";
        let diagnostic = diagnostic_on("jsx-boolean-value", source, "{true}");
        let (title, fixed) = apply_single(&JsxBooleanValue, source, &diagnostic);
        assert_eq!(title, "Simplify JSX boolean attribute");
        assert_eq!(fixed, "const el = <Foo enabled />;\n");
    }

    #[test]
    fn test_spaces_around_equals() {
        let source = "<Foo enabled = {true} />";
        let diagnostic = diagnostic_on("jsx-boolean-value", source, "{true}");
        let (_, fixed) = apply_single(&JsxBooleanValue, source, &diagnostic);
        assert_eq!(fixed, "<Foo enabled />");
    }

    #[test]
    fn test_no_equals_no_fix() {
        let source = "<Foo {true} />";
        let diagnostic = diagnostic_on("jsx-boolean-value", source, "{true}");
        assert!(fixes_for(&JsxBooleanValue, source, &diagnostic).is_empty());
    }

    #[test]
    fn test_non_true_value_no_fix() {
        let source = "<Foo enabled={false} />";
        let diagnostic = diagnostic_on("jsx-boolean-value", source, "{false}");
        assert!(fixes_for(&JsxBooleanValue, source, &diagnostic).is_empty());
    }
}
