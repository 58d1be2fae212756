//! BanUnknownRuleCode fix.
//!
//! Removes a rule code the linter does not know from the ignore directive
//! that lists it. The directive line is deleted if no codes remain.
//!
//! ## Examples
//!
//! ```ts
//! // deno-lint-ignore no-var not-a-rule   // before
//! // deno-lint-ignore no-var              // after
//! ```

use lazy_static::lazy_static;
use quickfix_diagnostics::Fix;
use regex::Regex;

use super::{DIRECTIVE_LINES_AFTER, DIRECTIVE_LINES_BEFORE, remove_code_fix};
use crate::{FixContext, FixProvider};

lazy_static! {
    static ref UNKNOWN_RULE: Regex =
        Regex::new(r#"[Uu]nknown rule (for code )?['"`]([^'"`]+)['"`]"#).unwrap();
}

#[derive(Debug, Clone, Default)]
pub struct BanUnknownRuleCode;

impl FixProvider for BanUnknownRuleCode {
    fn rule_codes(&self) -> &'static [&'static str] {
        &["ban-unknown-rule-code"]
    }

    fn create_fixes(&self, ctx: &FixContext) -> Vec<Fix> {
        let Some(code) = UNKNOWN_RULE
            .captures(&ctx.diagnostic().message)
            .and_then(|captures| captures.get(2))
        else {
            return Vec::new();
        };
        remove_code_fix(
            ctx,
            code.as_str(),
            DIRECTIVE_LINES_BEFORE,
            DIRECTIVE_LINES_AFTER,
            &format!("Remove unknown rule '{}'", code.as_str()),
        )
        .into_iter()
        .collect()
    }
}
