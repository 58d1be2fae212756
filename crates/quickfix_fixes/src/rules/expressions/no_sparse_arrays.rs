//! NoSparseArrays fix: `[1, , 2]` becomes `[1, 2]`.

use lazy_static::lazy_static;
use quickfix_diagnostics::Fix;
use regex::Regex;

use crate::mixins::replace_range_fix;
use crate::mixins::text::split_top_level;
use crate::{FixContext, FixProvider};

lazy_static! {
    static ref ARRAY_LITERAL: Regex = Regex::new(r"(?s)^\s*\[(.*)\]\s*$").unwrap();
}

#[derive(Debug, Clone, Default)]
pub struct NoSparseArrays;

impl NoSparseArrays {
    fn fix(ctx: &FixContext) -> Option<Fix> {
        let text = ctx.text()?;
        let inner = ARRAY_LITERAL.captures(text)?.get(1)?.as_str();
        let elements: Vec<&str> = split_top_level(inner, ',')
            .into_iter()
            .map(str::trim)
            .filter(|element| !element.is_empty())
            .collect();
        let compacted = format!("[{}]", elements.join(", "));
        if compacted == text.trim() {
            return None;
        }
        Some(replace_range_fix(
            "Remove empty slots from the array",
            ctx.diagnostic(),
            compacted,
        ))
    }
}

impl FixProvider for NoSparseArrays {
    fn rule_codes(&self) -> &'static [&'static str] {
        &["no-sparse-arrays"]
    }

    fn create_fixes(&self, ctx: &FixContext) -> Vec<Fix> {
        Self::fix(ctx).into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_utils::{apply_single, diagnostic_on, fixes_for};

    fn compact(array: &str) -> String {
        let source = format!("const a = {array};");
        let diagnostic = diagnostic_on("no-sparse-arrays", &source, array);
        let (title, fixed) = apply_single(&NoSparseArrays, &source, &diagnostic);
        assert_eq!(title, "Remove empty slots from the array");
        fixed
    }

    #[test]
    fn test_removes_holes() {
        assert_eq!(compact("[1, , 2]"), "const a = [1, 2];");
        assert_eq!(compact("[, , 3]"), "const a = [3];");
        assert_eq!(compact("[1,,]"), "const a = [1];");
    }

    #[test]
    fn test_keeps_nested_commas() {
        assert_eq!(
            compact("[f(a, b), , \"x,,y\", [1, , 2]]"),
            "const a = [f(a, b), \"x,,y\", [1, , 2]];"
        );
    }

    #[test]
    fn test_dense_array_no_fix() {
        let source = "const a = [1, 2];";
        let diagnostic = diagnostic_on("no-sparse-arrays", source, "[1, 2]");
        assert!(fixes_for(&NoSparseArrays, source, &diagnostic).is_empty());
    }
}
