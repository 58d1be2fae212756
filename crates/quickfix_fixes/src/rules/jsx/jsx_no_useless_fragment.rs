//! JsxNoUselessFragment fix.
//!
//! Replaces a fragment with its children. Handles the short form `<>...</>`
//! and `<Fragment>` / `<React.Fragment>`, with or without attributes.
//!
//! ## Examples
//!
//! ```tsx
//! <><div /></>          // -> <div />
//! <p>foo <>bar</> baz</p> // -> <p>foo bar baz</p>
//! <></>                 // -> (removed)
//! ```

use quickfix_diagnostics::Fix;

use crate::mixins::replace_range_fix;
use crate::{FixContext, FixProvider};

const NAMED_FRAGMENTS: [(&str, &str); 2] = [
    ("<React.Fragment", "</React.Fragment>"),
    ("<Fragment", "</Fragment>"),
];

fn short_fragments_balanced(children: &str) -> bool {
    let mut depth = 0usize;
    let mut rest = children;
    while let Some(index) = rest.find('<') {
        rest = &rest[index..];
        if let Some(after) = rest.strip_prefix("<>") {
            depth += 1;
            rest = after;
        } else if let Some(after) = rest.strip_prefix("</>") {
            let Some(inner) = depth.checked_sub(1) else {
                return false;
            };
            depth = inner;
            rest = after;
        } else {
            rest = &rest[1..];
        }
    }
    depth == 0
}

/// Children of the fragment spanning all of `text`.
fn fragment_children(text: &str) -> Option<&str> {
    if let Some(rest) = text.strip_prefix("<>") {
        let children = rest.strip_suffix("</>")?;
        // `<>a</><>b</>` is two fragments, not one.
        return short_fragments_balanced(children).then_some(children);
    }

    for (open, close) in NAMED_FRAGMENTS {
        let Some(rest) = text.strip_prefix(open) else {
            continue;
        };
        // `<Fragmentation>` is some other component.
        if !rest.starts_with(|c: char| c == '>' || c.is_whitespace()) {
            continue;
        }
        let body = rest.strip_suffix(close)?;
        let open_end = body.find('>')?;
        if body[..open_end].ends_with('/') {
            return None;
        }
        let children = &body[open_end + 1..];
        if children.contains(open) {
            return None;
        }
        return Some(children);
    }
    None
}

#[derive(Debug, Clone, Default)]
pub struct JsxNoUselessFragment;

impl FixProvider for JsxNoUselessFragment {
    fn rule_codes(&self) -> &'static [&'static str] {
        &["jsx-no-useless-fragment"]
    }

    fn create_fixes(&self, ctx: &FixContext) -> Vec<Fix> {
        let Some(children) = ctx.text().and_then(|text| fragment_children(text.trim())) else {
            return Vec::new();
        };
        let replacement = if children.trim().is_empty() { "" } else { children };
        vec![replace_range_fix(
            "Remove this Fragment",
            ctx.diagnostic(),
            replacement,
        )]
    }
}
