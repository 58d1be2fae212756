//! NoPrototypeBuiltins fix: `obj.hasOwnProperty(key)` becomes
//! `Object.hasOwn(obj, key)`.
//!
//! Receivers may be member chains (`a.b[i].c`) or a bracketed expression.
//! A chain that continues a call or another expression (`f().a`) is left
//! alone.

use lazy_static::lazy_static;
use quickfix_diagnostics::Fix;
use regex::{Captures, Regex};

use crate::mixins::replace_line_fix;
use crate::{FixContext, FixProvider};

lazy_static! {
    static ref HAS_OWN_PROPERTY: Regex = Regex::new(
        r"([a-zA-Z_$][a-zA-Z0-9_$]*(?:\.[a-zA-Z_$][a-zA-Z0-9_$]*|\[[^\]]+\])*|\[[^\]]+\])\s*\.\s*hasOwnProperty\s*\(\s*([^)]+?)\s*\)"
    )
    .unwrap();
}

#[derive(Debug, Clone, Default)]
pub struct NoPrototypeBuiltins;

impl FixProvider for NoPrototypeBuiltins {
    fn rule_codes(&self) -> &'static [&'static str] {
        &["no-prototype-builtins"]
    }

    fn create_fixes(&self, ctx: &FixContext) -> Vec<Fix> {
        let line = ctx.line_text();
        let rewritten = HAS_OWN_PROPERTY.replace_all(line, |caps: &Captures| {
            let whole = &caps[0];
            let start = caps.get(0).map_or(0, |m| m.start());
            if line[..start].trim_end().ends_with('.') {
                whole.to_string()
            } else {
                format!("Object.hasOwn({}, {})", &caps[1], &caps[2])
            }
        });
        if rewritten == line {
            return Vec::new();
        }
        vec![replace_line_fix(
            "Use `Object.hasOwn()` instead",
            ctx.diagnostic(),
            ctx.document(),
            rewritten,
        )]
    }
}
