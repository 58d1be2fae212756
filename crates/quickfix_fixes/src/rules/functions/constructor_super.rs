use quickfix_diagnostics::Fix;

use crate::mixins::delete_range_fix;
use crate::{FixContext, FixProvider};

/// Deletes a `super()` call the hint says does not belong.
#[derive(Debug, Clone, Default)]
pub struct ConstructorSuper;

impl FixProvider for ConstructorSuper {
    fn rule_codes(&self) -> &'static [&'static str] {
        &["constructor-super"]
    }

    fn create_fixes(&self, ctx: &FixContext) -> Vec<Fix> {
        if !ctx.hint().is_some_and(|hint| hint.contains("Remove call to super()")) {
            return Vec::new();
        }
        vec![delete_range_fix("Remove super()", ctx.diagnostic())]
    }
}
