use lazy_static::lazy_static;
use quickfix_diagnostics::Fix;
use regex::Regex;

use crate::mixins::replace_line_fix;
use crate::{FixContext, FixProvider};

lazy_static! {
    static ref VAR_KEYWORD: Regex = Regex::new(r"\bvar\b").unwrap();
}

/// Replaces the first `var` on the diagnostic's line with `let`.
#[derive(Debug, Clone, Default)]
pub struct NoVar;

impl FixProvider for NoVar {
    fn rule_codes(&self) -> &'static [&'static str] {
        &["no-var"]
    }

    fn create_fixes(&self, ctx: &FixContext) -> Vec<Fix> {
        let line = ctx.line_text();
        if !VAR_KEYWORD.is_match(line) {
            return Vec::new();
        }
        let title = ctx.hint().unwrap_or("Use `let` instead");
        vec![replace_line_fix(
            title,
            ctx.diagnostic(),
            ctx.document(),
            VAR_KEYWORD.replace(line, "let"),
        )]
    }
}
