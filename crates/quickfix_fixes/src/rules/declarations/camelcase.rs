use lazy_static::lazy_static;
use quickfix_diagnostics::Fix;
use regex::Regex;

use crate::mixins::replace_range_fix;
use crate::{FixContext, FixProvider};

lazy_static! {
    static ref RENAME_HINT: Regex = Regex::new(r"[Rr]enam(?:e|ing) `([^`]+)` to `([^`]+)`").unwrap();
}

/// Applies the rename suggested by the hint, e.g. "Consider renaming
/// `snake_case` to `snakeCase`". Only the reported occurrence is renamed.
#[derive(Debug, Clone, Default)]
pub struct Camelcase;

impl FixProvider for Camelcase {
    fn rule_codes(&self) -> &'static [&'static str] {
        &["camelcase"]
    }

    fn create_fixes(&self, ctx: &FixContext) -> Vec<Fix> {
        let Some(captures) = ctx.hint().and_then(|hint| RENAME_HINT.captures(hint)) else {
            return Vec::new();
        };
        let (from, to) = (&captures[1], &captures[2]);
        if ctx.text() != Some(from) {
            return Vec::new();
        }
        vec![replace_range_fix(
            format!("Rename `{from}` to `{to}`"),
            ctx.diagnostic(),
            to,
        )]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_utils::{apply_single, diagnostic_on, fixes_for};

    #[test]
    fn test_renames_identifier() {
        let source = "const snake_case = 1;";
        let diagnostic = diagnostic_on("camelcase", source, "snake_case")
            .with_hint("Consider renaming `snake_case` to `snakeCase`");
        let (title, fixed) = apply_single(&Camelcase, source, &diagnostic);
        assert_eq!(title, "Rename `snake_case` to `snakeCase`");
        assert_eq!(fixed, "const snakeCase = 1;");
    }

    #[test]
    fn test_mismatched_range_no_fix() {
        let source = "const { snake_case } = obj;";
        let diagnostic = diagnostic_on("camelcase", source, "{ snake_case }")
            .with_hint("Consider renaming `snake_case` to `snakeCase`");
        assert!(fixes_for(&Camelcase, source, &diagnostic).is_empty());
    }
}
