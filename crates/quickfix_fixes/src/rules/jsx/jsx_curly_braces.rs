//! JsxCurlyBraces fix.
//!
//! Adds braces around a bare JSX element used as an attribute value, or
//! removes braces around a string literal. A string in child content loses
//! its quotes as well; in an attribute it keeps them.
//!
//! ## Examples
//!
//! ```tsx
//! <Foo bar={"baz"} />   // -> <Foo bar="baz" />
//! <div>{"hello"}</div>  // -> <div>hello</div>
//! <Foo icon=<Icon /> /> // -> <Foo icon={<Icon />} />
//! ```

use quickfix_diagnostics::Fix;
use quickfix_source_file::{Range, SourceDocument};

use crate::mixins::replace_range_fix;
use crate::mixins::text::string_literal_body;
use crate::{FixContext, FixProvider};

/// Lines scanned backward to decide between attribute and child context.
const CONTEXT_LINES: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum JsxPosition {
    Attribute,
    Child,
}

/// Whether the text before `range` ends inside a tag (after `=`) or in
/// element content (after `>`).
fn jsx_position(document: &SourceDocument, range: &Range) -> JsxPosition {
    let first = range.start.line.saturating_sub(CONTEXT_LINES);
    for line in (first..=range.start.line).rev() {
        let text = if line == range.start.line {
            document.text_before(range)
        } else {
            document.line(line).unwrap_or_default()
        };
        match (text.rfind('>'), text.rfind('=')) {
            (None, None) => {}
            (Some(gt), Some(eq)) if gt > eq => return JsxPosition::Child,
            (Some(_), None) => return JsxPosition::Child,
            _ => return JsxPosition::Attribute,
        }
    }
    JsxPosition::Attribute
}

#[derive(Debug, Clone, Default)]
pub struct JsxCurlyBraces;

impl JsxCurlyBraces {
    fn fix(ctx: &FixContext) -> Option<Fix> {
        let text = ctx.text()?;
        let trimmed = text.trim();
        let leading = &text[..text.len() - text.trim_start().len()];
        let trailing = &text[text.trim_end().len()..];

        if trimmed.starts_with('<') {
            return Some(replace_range_fix(
                "Add curly braces around the JSX expression",
                ctx.diagnostic(),
                format!("{leading}{{{trimmed}}}{trailing}"),
            ));
        }

        let inner = trimmed.strip_prefix('{')?.strip_suffix('}')?.trim();
        let body = string_literal_body(inner)?;
        let replacement = match jsx_position(ctx.document(), &ctx.range()) {
            JsxPosition::Attribute if inner.starts_with(['"', '\'']) => inner.to_string(),
            // Attribute values cannot be template literals.
            JsxPosition::Attribute => {
                if body.contains("${") || body.contains(['"', '\\', '\n']) {
                    return None;
                }
                format!("\"{body}\"")
            }
            JsxPosition::Child => {
                if body.contains(['{', '}', '<', '>']) {
                    return None;
                }
                body.to_string()
            }
        };
        Some(replace_range_fix(
            "Remove unnecessary curly braces",
            ctx.diagnostic(),
            format!("{leading}{replacement}{trailing}"),
        ))
    }
}

impl FixProvider for JsxCurlyBraces {
    fn rule_codes(&self) -> &'static [&'static str] {
        &["jsx-curly-braces"]
    }

    fn create_fixes(&self, ctx: &FixContext) -> Vec<Fix> {
        Self::fix(ctx).into_iter().collect()
    }
}
