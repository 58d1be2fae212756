use lazy_static::lazy_static;
use quickfix_diagnostics::Fix;
use regex::Regex;

use crate::mixins::replace_range_fix;
use crate::{FixContext, FixProvider};

lazy_static! {
    static ref REFERENCE_ATTRIBUTE: Regex = Regex::new(r"<reference\s+([A-Za-z-]+)\s*=").unwrap();
}

const VALID_ATTRIBUTES: [&str; 4] = ["types", "path", "lib", "no-default-lib"];

/// Offers each valid `<reference>` attribute in place of the invalid one.
#[derive(Debug, Clone, Default)]
pub struct NoInvalidTripleSlashReference;

impl FixProvider for NoInvalidTripleSlashReference {
    fn rule_codes(&self) -> &'static [&'static str] {
        &["no-invalid-triple-slash-reference"]
    }

    fn create_fixes(&self, ctx: &FixContext) -> Vec<Fix> {
        let Some(directive) = ctx.text() else {
            return Vec::new();
        };
        let Some(attribute) = REFERENCE_ATTRIBUTE
            .captures(directive)
            .and_then(|captures| captures.get(1))
        else {
            return Vec::new();
        };

        VALID_ATTRIBUTES
            .iter()
            .filter(|valid| **valid != attribute.as_str())
            .map(|valid| {
                let fixed = format!(
                    "{}{valid}{}",
                    &directive[..attribute.start()],
                    &directive[attribute.end()..]
                );
                replace_range_fix(
                    format!("Change to `<reference {valid}=\"...\" />`"),
                    ctx.diagnostic(),
                    fixed,
                )
            })
            .collect()
    }
}
