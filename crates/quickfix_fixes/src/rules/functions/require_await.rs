use lazy_static::lazy_static;
use quickfix_diagnostics::Fix;
use regex::Regex;

use crate::mixins::replace_line_fix;
use crate::{FixContext, FixProvider};

lazy_static! {
    static ref ASYNC_KEYWORD: Regex = Regex::new(r"\basync\s+").unwrap();
}

/// Drops the first `async` keyword on the diagnostic line.
#[derive(Debug, Clone, Default)]
pub struct RequireAwait;

impl FixProvider for RequireAwait {
    fn rule_codes(&self) -> &'static [&'static str] {
        &["require-await"]
    }

    fn create_fixes(&self, ctx: &FixContext) -> Vec<Fix> {
        let line = ctx.line_text();
        if !ASYNC_KEYWORD.is_match(line) {
            return Vec::new();
        }
        let updated = ASYNC_KEYWORD.replace(line, "");
        vec![replace_line_fix(
            "Remove `async` keyword",
            ctx.diagnostic(),
            ctx.document(),
            updated.into_owned(),
        )]
    }
}
