//! PreferConst fix: `let` becomes `const` for a never-reassigned binding.
//!
//! Only declarations with a single binding are rewritten; `let a = 1, b;`
//! would also turn `b` into a constant.

use lazy_static::lazy_static;
use quickfix_diagnostics::Fix;
use regex::Regex;

use crate::mixins::text::split_top_level;
use crate::mixins::{replace_line_fix, replacement_from_hint};
use crate::{FixContext, FixProvider};

lazy_static! {
    static ref LET_KEYWORD: Regex = Regex::new(r"\blet\b").unwrap();
    static ref LET_DECLARATION: Regex = Regex::new(r"^\s*let\s+(.*?);?\s*$").unwrap();
    static ref FOR_LET: Regex = Regex::new(r"\bfor\s*\(\s*let\b").unwrap();
}

#[derive(Debug, Clone, Default)]
pub struct PreferConst;

impl PreferConst {
    fn fix(ctx: &FixContext) -> Option<Fix> {
        if ctx
            .hint()
            .is_some_and(|hint| replacement_from_hint(hint) != Some("const"))
        {
            return None;
        }
        let line = ctx.line_text();
        if LET_KEYWORD.find_iter(line).count() != 1 {
            return None;
        }
        let single_binding = match LET_DECLARATION.captures(line) {
            Some(captures) => split_top_level(captures.get(1)?.as_str(), ',').len() == 1,
            None => FOR_LET.is_match(line),
        };
        if !single_binding {
            return None;
        }
        let rewritten = LET_KEYWORD.replace(line, "const");
        Some(replace_line_fix(
            "Use `const` instead",
            ctx.diagnostic(),
            ctx.document(),
            rewritten,
        ))
    }
}

impl FixProvider for PreferConst {
    fn rule_codes(&self) -> &'static [&'static str] {
        &["prefer-const"]
    }

    fn create_fixes(&self, ctx: &FixContext) -> Vec<Fix> {
        Self::fix(ctx).into_iter().collect()
    }
}
