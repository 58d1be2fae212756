//! Fixes driven by hints of the form "Use `X` instead".

use lazy_static::lazy_static;
use quickfix_diagnostics::{Diagnostic, Edit, Fix};
use regex::Regex;

lazy_static! {
    static ref USE_INSTEAD: Regex =
        Regex::new(r"(?i)\buse\s+(?:`([^`]+)`|([^`\s]+))\s+instead").unwrap();
}

/// The replacement named by a "Use X instead" hint.
pub fn replacement_from_hint(hint: &str) -> Option<&str> {
    let captures = USE_INSTEAD.captures(hint)?;
    captures
        .get(1)
        .or_else(|| captures.get(2))
        .map(|m| m.as_str())
}

/// Replace the diagnostic range with the replacement named by `hint`.
pub fn use_instead_fix(hint: &str, diagnostic: &Diagnostic) -> Option<Fix> {
    let replacement = replacement_from_hint(hint)?;
    Some(Fix::single(
        format!("Use `{replacement}` instead"),
        diagnostic,
        Edit::range_replacement(replacement, diagnostic.range),
    ))
}
