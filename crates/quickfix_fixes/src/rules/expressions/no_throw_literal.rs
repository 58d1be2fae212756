//! NoThrowLiteral fix: `throw "oops";` becomes `throw new Error("oops");`.

use lazy_static::lazy_static;
use quickfix_diagnostics::Fix;
use regex::Regex;

use crate::mixins::replace_range_fix;
use crate::mixins::text::string_literal_body;
use crate::{FixContext, FixProvider};

lazy_static! {
    static ref THROW_STATEMENT: Regex = Regex::new(r"(?s)^throw\s+(.+?)(;?)\s*$").unwrap();
}

const TITLE: &str = "Wrap the string in `new Error()`";

#[derive(Debug, Clone, Default)]
pub struct NoThrowLiteral;

impl NoThrowLiteral {
    fn fix(ctx: &FixContext) -> Option<Fix> {
        let text = ctx.text()?.trim();
        if let Some(captures) = THROW_STATEMENT.captures(text) {
            let expression = captures.get(1)?.as_str().trim();
            let semicolon = captures.get(2).map_or("", |m| m.as_str());
            string_literal_body(expression)?;
            return Some(replace_range_fix(
                TITLE,
                ctx.diagnostic(),
                format!("throw new Error({expression}){semicolon}"),
            ));
        }

        // Range on the thrown value only.
        string_literal_body(text)?;
        if !ctx.document().text_before(&ctx.range()).trim_end().ends_with("throw") {
            return None;
        }
        Some(replace_range_fix(
            TITLE,
            ctx.diagnostic(),
            format!("new Error({text})"),
        ))
    }
}

impl FixProvider for NoThrowLiteral {
    fn rule_codes(&self) -> &'static [&'static str] {
        &["no-throw-literal"]
    }

    fn create_fixes(&self, ctx: &FixContext) -> Vec<Fix> {
        Self::fix(ctx).into_iter().collect()
    }
}
