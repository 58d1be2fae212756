//! NoOctal fix: legacy octal literals get the explicit `0o` prefix.

use lazy_static::lazy_static;
use quickfix_diagnostics::Fix;
use regex::Regex;

use crate::mixins::replace_range_fix;
use crate::{FixContext, FixProvider};

lazy_static! {
    static ref LEGACY_OCTAL: Regex = Regex::new(r"^0([0-7]+)$").unwrap();
}

#[derive(Debug, Clone, Default)]
pub struct NoOctal;

impl FixProvider for NoOctal {
    fn rule_codes(&self) -> &'static [&'static str] {
        &["no-octal"]
    }

    fn create_fixes(&self, ctx: &FixContext) -> Vec<Fix> {
        let Some(digits) = ctx
            .text()
            .and_then(|text| LEGACY_OCTAL.captures(text.trim()))
            .and_then(|captures| captures.get(1))
        else {
            return Vec::new();
        };
        vec![replace_range_fix(
            "Use `0o` prefix for the octal number",
            ctx.diagnostic(),
            format!("0o{}", digits.as_str()),
        )]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_utils::{apply_single, diagnostic_on, fixes_for};

    #[test]
    fn test_adds_prefix() {
        let source = "Deno.chmodSync(path, 0755);";
        let diagnostic = diagnostic_on("no-octal", source, "0755");
        let (_, fixed) = apply_single(&NoOctal, source, &diagnostic);
        assert_eq!(fixed, "Deno.chmodSync(path, 0o755);");
    }

    #[test]
    fn test_non_octal_digits_no_fix() {
        let source = "const n = 089;";
        let diagnostic = diagnostic_on("no-octal", source, "089");
        assert!(fixes_for(&NoOctal, source, &diagnostic).is_empty());
    }
}
