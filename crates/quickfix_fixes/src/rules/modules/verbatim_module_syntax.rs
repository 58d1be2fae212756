//! VerbatimModuleSyntax fixes.
//!
//! The hint says which of the two rewrites applies: marking one specifier
//! with `type`, or turning the whole declaration into `import type`.

use lazy_static::lazy_static;
use quickfix_diagnostics::{Edit, Fix};
use regex::Regex;

use crate::mixins::replace_line_fix;
use crate::{FixContext, FixProvider};

lazy_static! {
    static ref ADD_TYPE_HINT: Regex = Regex::new(r"[Aa]dd\s+(?:a\s+)?`type`\s+keyword").unwrap();
    static ref IMPORT_TYPE_HINT: Regex = Regex::new(r"`import`\s+to\s+`import\s+type`").unwrap();
    static ref IMPORT_KEYWORD: Regex = Regex::new(r"^(\s*)import(\s+)").unwrap();
}

#[derive(Debug, Clone, Default)]
pub struct VerbatimModuleSyntax;

impl FixProvider for VerbatimModuleSyntax {
    fn rule_codes(&self) -> &'static [&'static str] {
        &["verbatim-module-syntax"]
    }

    fn create_fixes(&self, ctx: &FixContext) -> Vec<Fix> {
        let Some(hint) = ctx.hint() else {
            return Vec::new();
        };
        let mut fixes = Vec::new();

        if ADD_TYPE_HINT.is_match(hint) {
            fixes.push(Fix::single(
                "Add `type` keyword",
                ctx.diagnostic(),
                Edit::insertion("type ", ctx.range().start),
            ));
        }

        let line = ctx.line_text();
        if IMPORT_TYPE_HINT.is_match(hint) && IMPORT_KEYWORD.is_match(line) {
            let updated = IMPORT_KEYWORD.replace(line, "${1}import type$2");
            fixes.push(replace_line_fix(
                "Change `import` to `import type`",
                ctx.diagnostic(),
                ctx.document(),
                updated.into_owned(),
            ));
        }
        fixes
    }
}
