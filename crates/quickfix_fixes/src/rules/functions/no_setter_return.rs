use quickfix_diagnostics::Fix;

use crate::mixins::delete_range_fix;
use crate::{FixContext, FixProvider};

#[derive(Debug, Clone, Default)]
pub struct NoSetterReturn;

impl FixProvider for NoSetterReturn {
    fn rule_codes(&self) -> &'static [&'static str] {
        &["no-setter-return"]
    }

    fn create_fixes(&self, ctx: &FixContext) -> Vec<Fix> {
        vec![delete_range_fix("Remove the return statement", ctx.diagnostic())]
    }
}
