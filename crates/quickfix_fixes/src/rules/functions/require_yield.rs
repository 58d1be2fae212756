use lazy_static::lazy_static;
use quickfix_diagnostics::Fix;
use regex::{Captures, Regex};

use crate::mixins::replace_line_fix;
use crate::{FixContext, FixProvider};

lazy_static! {
    static ref GENERATOR_STAR: Regex = Regex::new(r"\bfunction(\s*)\*(\s*)").unwrap();
}

/// Turns a generator without `yield` back into a plain function.
#[derive(Debug, Clone, Default)]
pub struct RequireYield;

impl FixProvider for RequireYield {
    fn rule_codes(&self) -> &'static [&'static str] {
        &["require-yield"]
    }

    fn create_fixes(&self, ctx: &FixContext) -> Vec<Fix> {
        let line = ctx.line_text();
        if !GENERATOR_STAR.is_match(line) {
            return Vec::new();
        }
        // `function*()` keeps no space, `function* f` and `function *f` keep one.
        let updated = GENERATOR_STAR.replace(line, |captures: &Captures| {
            if captures[1].is_empty() && captures[2].is_empty() {
                "function"
            } else {
                "function "
            }
        });
        vec![replace_line_fix(
            "Remove `*` from the function",
            ctx.diagnostic(),
            ctx.document(),
            updated.into_owned(),
        )]
    }
}
