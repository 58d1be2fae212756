use lazy_static::lazy_static;
use quickfix_diagnostics::Fix;
use regex::Regex;

use crate::mixins::replace_line_fix;
use crate::{FixContext, FixProvider};

lazy_static! {
    static ref CLASS_HEADER: Regex =
        Regex::new(r"^\s*(?:export\s+)?(?:default\s+)?(?:declare\s+)?(?:abstract\s+)?class\b").unwrap();
    static ref INTERFACE_HEADER: Regex =
        Regex::new(r"^\s*(?:export\s+)?(?:declare\s+)?(?:interface\b|type\s+\w+.*=\s*\{)").unwrap();
    static ref NEW_SIGNATURE: Regex = Regex::new(r"\bnew\s*(\(|<)").unwrap();
    static ref CONSTRUCTOR_SIGNATURE: Regex = Regex::new(r"\bconstructor\s*(\(|<)").unwrap();
}

/// Lines scanned upward for the enclosing declaration.
const MAX_HEADER_DISTANCE: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Owner {
    Class,
    Interface,
}

fn enclosing_owner(ctx: &FixContext) -> Option<Owner> {
    let document = ctx.document();
    let line = ctx.start_line();
    (line.saturating_sub(MAX_HEADER_DISTANCE)..=line)
        .rev()
        .filter_map(|index| document.line(index))
        .find_map(|text| {
            if CLASS_HEADER.is_match(text) {
                Some(Owner::Class)
            } else if INTERFACE_HEADER.is_match(text) {
                Some(Owner::Interface)
            } else {
                None
            }
        })
}

/// Swaps `new()` and `constructor()` depending on whether the member sits
/// in a class or in an interface.
#[derive(Debug, Clone, Default)]
pub struct NoMisusedNew;

impl NoMisusedNew {
    fn fix(ctx: &FixContext) -> Option<Fix> {
        let line = ctx.line_text();
        let (pattern, keyword, title) = match enclosing_owner(ctx)? {
            Owner::Class => (&*NEW_SIGNATURE, "constructor", "Change to constructor()"),
            Owner::Interface => (&*CONSTRUCTOR_SIGNATURE, "new", "Change to new()"),
        };
        if !pattern.is_match(line) {
            return None;
        }
        let replaced = pattern.replacen(line, 1, format!("{keyword}$1"));
        Some(replace_line_fix(
            title,
            ctx.diagnostic(),
            ctx.document(),
            replaced.into_owned(),
        ))
    }
}

impl FixProvider for NoMisusedNew {
    fn rule_codes(&self) -> &'static [&'static str] {
        &["no-misused-new"]
    }

    fn create_fixes(&self, ctx: &FixContext) -> Vec<Fix> {
        Self::fix(ctx).into_iter().collect()
    }
}
