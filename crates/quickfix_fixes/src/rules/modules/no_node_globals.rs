use quickfix_diagnostics::Fix;

use super::import_from_hint;
use crate::mixins::{import_fix, use_instead_fix};
use crate::{FixContext, FixProvider};

/// Offers the import named by the hint, the replacement it names, or both.
#[derive(Debug, Clone, Default)]
pub struct NoNodeGlobals;

impl FixProvider for NoNodeGlobals {
    fn rule_codes(&self) -> &'static [&'static str] {
        &["no-node-globals"]
    }

    fn create_fixes(&self, ctx: &FixContext) -> Vec<Fix> {
        let Some(hint) = ctx.hint() else {
            return Vec::new();
        };
        let mut fixes = Vec::new();
        if let Some(statement) = import_from_hint(hint) {
            fixes.push(import_fix(
                ctx.diagnostic(),
                ctx.document(),
                statement,
                Some(hint),
            ));
        }
        fixes.extend(use_instead_fix(hint, ctx.diagnostic()));
        fixes
    }
}
