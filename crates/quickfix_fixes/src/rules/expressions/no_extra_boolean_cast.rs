//! NoExtraBooleanCast fix: drops `!!` or `Boolean(...)` where the value is
//! already used as a boolean.

use quickfix_diagnostics::Fix;

use crate::mixins::replace_range_fix;
use crate::mixins::text::is_balanced;
use crate::{FixContext, FixProvider};

fn uncast(text: &str) -> Option<&str> {
    if let Some(operand) = text.strip_prefix("!!") {
        let operand = operand.trim_start();
        return (!operand.is_empty()).then_some(operand);
    }
    let argument = text.strip_prefix("Boolean(")?.strip_suffix(')')?.trim();
    (!argument.is_empty() && is_balanced(argument)).then_some(argument)
}

#[derive(Debug, Clone, Default)]
pub struct NoExtraBooleanCast;

impl FixProvider for NoExtraBooleanCast {
    fn rule_codes(&self) -> &'static [&'static str] {
        &["no-extra-boolean-cast"]
    }

    fn create_fixes(&self, ctx: &FixContext) -> Vec<Fix> {
        ctx.text()
            .and_then(|text| uncast(text.trim()))
            .map(|operand| {
                replace_range_fix("Remove unnecessary boolean cast", ctx.diagnostic(), operand)
            })
            .into_iter()
            .collect()
    }
}
