//! Fallback provider for rules without a dedicated fix.

use quickfix_diagnostics::{Command, Fix, rule_docs_url};

use crate::mixins::use_instead_fix;
use crate::{FixContext, FixProvider, WILDCARD};

/// Documentation link for a diagnostic: its own URL, else `base` + code.
pub fn docs_url(ctx: &FixContext) -> String {
    ctx.diagnostic()
        .docs_url
        .clone()
        .unwrap_or_else(|| rule_docs_url(&ctx.config().linter.docs_url, ctx.code()))
}

/// Applies a "Use `X` instead" hint when there is one and always links the
/// rule documentation.
#[derive(Debug, Clone, Default)]
pub struct GeneralFix;

impl FixProvider for GeneralFix {
    fn rule_codes(&self) -> &'static [&'static str] {
        &[WILDCARD]
    }

    fn create_fixes(&self, ctx: &FixContext) -> Vec<Fix> {
        let mut fixes: Vec<Fix> = ctx
            .hint()
            .and_then(|hint| use_instead_fix(hint, ctx.diagnostic()))
            .into_iter()
            .collect();
        fixes.push(Fix::command(
            "Learn more about this rule",
            ctx.diagnostic(),
            Command::OpenUrl(docs_url(ctx)),
        ));
        fixes
    }
}
