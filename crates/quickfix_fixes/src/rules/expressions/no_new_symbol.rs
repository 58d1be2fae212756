use lazy_static::lazy_static;
use quickfix_diagnostics::Fix;
use regex::Regex;

use crate::mixins::{replace_line_fix, replace_range_fix};
use crate::{FixContext, FixProvider};

lazy_static! {
    static ref NEW_SYMBOL: Regex = Regex::new(r"\bnew\s+(Symbol\s*\()").unwrap();
}

const TITLE: &str = "Remove `new` keyword";

/// `new Symbol("x")` throws at runtime; `Symbol` is called without `new`.
#[derive(Debug, Clone, Default)]
pub struct NoNewSymbol;

impl FixProvider for NoNewSymbol {
    fn rule_codes(&self) -> &'static [&'static str] {
        &["no-new-symbol"]
    }

    fn create_fixes(&self, ctx: &FixContext) -> Vec<Fix> {
        if let Some(text) = ctx.text()
            && NEW_SYMBOL.is_match(text)
        {
            let rewritten = NEW_SYMBOL.replace_all(text, "${1}");
            return vec![replace_range_fix(TITLE, ctx.diagnostic(), rewritten)];
        }
        let line = ctx.line_text();
        if !NEW_SYMBOL.is_match(line) {
            return Vec::new();
        }
        let rewritten = NEW_SYMBOL.replace_all(line, "${1}");
        vec![replace_line_fix(TITLE, ctx.diagnostic(), ctx.document(), rewritten)]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_utils::{apply_single, diagnostic_on};

    #[test]
    fn test_removes_new() {
        let source = "const s = new Symbol(\"id\");";
        let diagnostic = diagnostic_on("no-new-symbol", source, "new Symbol(\"id\")");
        let (title, fixed) = apply_single(&NoNewSymbol, source, &diagnostic);
        assert_eq!(title, "Remove `new` keyword");
        assert_eq!(fixed, "const s = Symbol(\"id\");");
    }

    #[test]
    fn test_range_on_callee_uses_line() {
        let source = "const s = new Symbol();";
        let diagnostic = diagnostic_on("no-new-symbol", source, "Symbol");
        let (_, fixed) = apply_single(&NoNewSymbol, source, &diagnostic);
        assert_eq!(fixed, "const s = Symbol();");
    }
}
