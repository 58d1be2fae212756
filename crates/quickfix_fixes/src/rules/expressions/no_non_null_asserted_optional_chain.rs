use quickfix_diagnostics::Fix;

use crate::mixins::replace_range_fix;
use crate::{FixContext, FixProvider};

/// Drops the `!` after an optional chain: `foo?.bar!` becomes `foo?.bar`.
#[derive(Debug, Clone, Default)]
pub struct NoNonNullAssertedOptionalChain;

impl FixProvider for NoNonNullAssertedOptionalChain {
    fn rule_codes(&self) -> &'static [&'static str] {
        &["no-non-null-asserted-optional-chain"]
    }

    fn create_fixes(&self, ctx: &FixContext) -> Vec<Fix> {
        let Some(text) = ctx.text() else {
            return Vec::new();
        };
        let trimmed = text.trim_end();
        let Some(chain) = trimmed.strip_suffix('!') else {
            return Vec::new();
        };
        if !chain.contains("?.") {
            return Vec::new();
        }
        let title = ctx.hint().unwrap_or("Remove non-null assertion");
        vec![replace_range_fix(
            title,
            ctx.diagnostic(),
            format!("{chain}{}", &text[trimmed.len()..]),
        )]
    }
}
