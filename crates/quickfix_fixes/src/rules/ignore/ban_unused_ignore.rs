//! BanUnusedIgnore fix.
//!
//! Drops a code from an ignore directive that suppresses nothing.

use lazy_static::lazy_static;
use quickfix_diagnostics::Fix;
use regex::Regex;

use super::{DIRECTIVE_LINES_AFTER, DIRECTIVE_LINES_BEFORE, remove_code_fix};
use crate::{FixContext, FixProvider};

lazy_static! {
    static ref QUOTED: Regex = Regex::new(r#"["'`]([^"'`]+)["'`]"#).unwrap();
}

fn quoted_code(text: &str) -> Option<&str> {
    QUOTED
        .captures(text)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}

#[derive(Debug, Clone, Default)]
pub struct BanUnusedIgnore;

impl FixProvider for BanUnusedIgnore {
    fn rule_codes(&self) -> &'static [&'static str] {
        &["ban-unused-ignore"]
    }

    fn create_fixes(&self, ctx: &FixContext) -> Vec<Fix> {
        let Some(code) = quoted_code(&ctx.diagnostic().message).or_else(|| ctx.hint().and_then(quoted_code))
        else {
            return Vec::new();
        };
        remove_code_fix(
            ctx,
            code,
            DIRECTIVE_LINES_BEFORE,
            DIRECTIVE_LINES_AFTER,
            &format!("Remove unused ignore rule '{code}'"),
        )
        .into_iter()
        .collect()
    }
}
