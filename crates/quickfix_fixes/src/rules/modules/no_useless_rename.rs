use std::borrow::Cow;

use lazy_static::lazy_static;
use quickfix_diagnostics::Fix;
use regex::{Captures, Regex};

use crate::mixins::replace_line_fix;
use crate::{FixContext, FixProvider};

lazy_static! {
    static ref AS_RENAME: Regex = Regex::new(r"\b([\w$]+)\s+as\s+([\w$]+)\b").unwrap();
    static ref PROPERTY_RENAME: Regex = Regex::new(r"\b([\w$]+):\s*([\w$]+)\b").unwrap();
}

/// Collapse `a as a` / `a: a` pairs; other pairs are kept verbatim.
fn collapse<'a>(pattern: &Regex, line: &'a str) -> Cow<'a, str> {
    pattern.replace_all(line, |captures: &Captures| {
        if captures[1] == captures[2] {
            captures[1].to_string()
        } else {
            captures[0].to_string()
        }
    })
}

/// Removes `{ foo as foo }` and `{ bar: bar }` renames on the diagnostic line.
#[derive(Debug, Clone, Default)]
pub struct NoUselessRename;

impl FixProvider for NoUselessRename {
    fn rule_codes(&self) -> &'static [&'static str] {
        &["no-useless-rename"]
    }

    fn create_fixes(&self, ctx: &FixContext) -> Vec<Fix> {
        let line = ctx.line_text();
        let updated = collapse(&PROPERTY_RENAME, &collapse(&AS_RENAME, line)).into_owned();
        if updated == line {
            return Vec::new();
        }
        vec![replace_line_fix(
            "Remove useless rename",
            ctx.diagnostic(),
            ctx.document(),
            updated,
        )]
    }
}
