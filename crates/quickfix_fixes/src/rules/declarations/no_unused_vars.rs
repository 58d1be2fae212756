//! NoUnusedVars fixes.
//!
//! Always offers prefixing the variable with `_`. When the variable is
//! declared by a single-line `const`/`let`/`var` statement, also offers
//! removing its binding, or the whole statement if it was the only one.
//!
//! ## Examples
//!
//! ```ts
//! const unused = 1;          // -> const _unused = 1;  or removed
//! let a = 1, unused = 2;     // -> let a = 1;
//! ```

use lazy_static::lazy_static;
use quickfix_diagnostics::{Edit, Fix};
use quickfix_source_file::SourceDocument;
use regex::Regex;

use crate::mixins::text::{is_balanced, is_identifier, split_top_level};
use crate::mixins::underscore_prefix_fix;
use crate::{FixContext, FixProvider};

lazy_static! {
    static ref DECLARATION: Regex = Regex::new(
        r"^(?P<indent>\s*)(?P<kind>const|let|var)\s+(?P<bindings>.*?)\s*(?P<semi>;?)\s*$"
    )
    .unwrap();
}

/// Name declared by one binding such as `a: number = 1`.
fn binding_name(binding: &str) -> &str {
    binding.split(['=', ':']).next().unwrap_or_default().trim()
}

/// The edit removing `name` from the declaration on `line`.
fn removal_edit(document: &SourceDocument, line: usize, name: &str) -> Option<Edit> {
    let text = document.line(line)?;
    if !is_balanced(text) {
        return None;
    }
    let captures = DECLARATION.captures(text)?;
    let bindings = captures.name("bindings")?.as_str();
    // More statements follow the declaration on this line.
    if split_top_level(bindings, ';').len() > 1 {
        return None;
    }
    let bindings = split_top_level(bindings, ',');
    let remaining: Vec<&str> = bindings
        .iter()
        .map(|binding| binding.trim())
        .filter(|binding| binding_name(binding) != name)
        .collect();
    if remaining.len() + 1 != bindings.len() {
        return None;
    }
    if remaining.is_empty() {
        return Some(Edit::deletion(document.full_line_deletion_range(line)));
    }
    let rewritten = format!(
        "{}{} {}{}",
        &captures["indent"],
        &captures["kind"],
        remaining.join(", "),
        &captures["semi"],
    );
    Some(Edit::range_replacement(rewritten, document.line_range(line)))
}

#[derive(Debug, Clone, Default)]
pub struct NoUnusedVars;

impl FixProvider for NoUnusedVars {
    fn rule_codes(&self) -> &'static [&'static str] {
        &["no-unused-vars"]
    }

    fn create_fixes(&self, ctx: &FixContext) -> Vec<Fix> {
        let Some(name) = ctx.text().filter(|text| is_identifier(text)) else {
            return Vec::new();
        };
        let mut fixes: Vec<Fix> = underscore_prefix_fix(ctx.diagnostic(), ctx.document(), None)
            .into_iter()
            .collect();
        if let Some(edit) = removal_edit(ctx.document(), ctx.start_line(), name) {
            fixes.push(
                Fix::single(format!("Remove unused variable '{name}'"), ctx.diagnostic(), edit)
                    .not_preferred(),
            );
        }
        fixes
    }
}
