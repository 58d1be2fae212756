//! BanTypes fix.
//!
//! The replacement comes from the "Use `X` instead" hint. Without one, the
//! two types that have no primitive counterpart get a fixed replacement.

use quickfix_diagnostics::Fix;

use crate::mixins::{replace_range_fix, use_instead_fix};
use crate::{FixContext, FixProvider};

fn default_replacement(banned: &str) -> Option<&'static str> {
    match banned {
        "Function" => Some("(...args: unknown[]) => unknown"),
        "{}" => Some("Record<PropertyKey, never>"),
        _ => None,
    }
}

#[derive(Debug, Clone, Default)]
pub struct BanTypes;

impl BanTypes {
    fn fix(ctx: &FixContext) -> Option<Fix> {
        if let Some(fix) = ctx.hint().and_then(|hint| use_instead_fix(hint, ctx.diagnostic())) {
            return Some(fix);
        }
        let replacement = default_replacement(ctx.text()?.trim())?;
        Some(replace_range_fix(
            format!("Use `{replacement}` instead"),
            ctx.diagnostic(),
            replacement,
        ))
    }
}

impl FixProvider for BanTypes {
    fn rule_codes(&self) -> &'static [&'static str] {
        &["ban-types"]
    }

    fn create_fixes(&self, ctx: &FixContext) -> Vec<Fix> {
        Self::fix(ctx).into_iter().collect()
    }
}
