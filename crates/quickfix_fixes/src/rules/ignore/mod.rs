//! Fixes for problems with `deno-lint-ignore` directives themselves.

mod ban_unknown_rule_code;
mod ban_untagged_ignore;
mod ban_unused_ignore;

pub use ban_unknown_rule_code::BanUnknownRuleCode;
pub use ban_untagged_ignore::BanUntaggedIgnore;
pub use ban_unused_ignore::BanUnusedIgnore;

use quickfix_diagnostics::Fix;

use crate::FixContext;
use crate::mixins::ignore_directive::{find_directive_listing, removal_edit};

/// Lines searched above a diagnostic for the directive it refers to.
const DIRECTIVE_LINES_BEFORE: usize = 10;
/// Lines searched below a diagnostic for the directive it refers to.
const DIRECTIVE_LINES_AFTER: usize = 3;

/// Remove `code` from the nearest directive around the diagnostic.
fn remove_code_fix(
    ctx: &FixContext,
    code: &str,
    before: usize,
    after: usize,
    title: &str,
) -> Option<Fix> {
    let document = ctx.document();
    let (line, directive) = find_directive_listing(document, &ctx.range(), before, after, code)?;
    let edit = removal_edit(document, line, &directive, code)?;
    Some(Fix::single(title, ctx.diagnostic(), edit))
}
