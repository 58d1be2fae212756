use quickfix_diagnostics::Fix;

use crate::mixins::replace_range_fix;
use crate::{FixContext, FixProvider};

/// Turns a comment rendered as text into a JSX comment: `/* x */` becomes
/// `{/* x */}`.
#[derive(Debug, Clone, Default)]
pub struct JsxNoCommentTextNodes;

impl FixProvider for JsxNoCommentTextNodes {
    fn rule_codes(&self) -> &'static [&'static str] {
        &["jsx-no-comment-text-nodes"]
    }

    fn create_fixes(&self, ctx: &FixContext) -> Vec<Fix> {
        let Some(text) = ctx.text() else {
            return Vec::new();
        };
        let trimmed = text.trim();
        if !(trimmed.starts_with("/*") && trimmed.ends_with("*/")) {
            return Vec::new();
        }
        vec![replace_range_fix(
            "Wrap comment in curly braces",
            ctx.diagnostic(),
            format!("{{{trimmed}}}"),
        )]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_utils::{apply_single, diagnostic_on, fixes_for};

    #[test]
    fn test_wraps_block_comment() {
        let source = "<div>/* todo */</div>";
        let diagnostic = diagnostic_on("jsx-no-comment-text-nodes", source, "/* todo */");
        let (title, fixed) = apply_single(&JsxNoCommentTextNodes, source, &diagnostic);
        assert_eq!(title, "Wrap comment in curly braces");
        assert_eq!(fixed, "<div>{/* todo */}</div>");
    }

    #[test]
    fn test_line_comment_no_fix() {
        let source = "<div>// todo</div>";
        let diagnostic = diagnostic_on("jsx-no-comment-text-nodes", source, "// todo");
        assert!(fixes_for(&JsxNoCommentTextNodes, source, &diagnostic).is_empty());
    }
}
