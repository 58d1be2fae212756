//! BanUntaggedIgnore fix: delete a `// deno-lint-ignore` that names no rules.

use quickfix_diagnostics::{Edit, Fix};

use crate::mixins::ignore_directive::{DirectiveScope, IgnoreDirective, scan_window};
use crate::{FixContext, FixProvider};

const LINES_BEFORE: usize = 5;
const LINES_AFTER: usize = 2;

#[derive(Debug, Clone, Default)]
pub struct BanUntaggedIgnore;

impl FixProvider for BanUntaggedIgnore {
    fn rule_codes(&self) -> &'static [&'static str] {
        &["ban-untagged-ignore"]
    }

    fn create_fixes(&self, ctx: &FixContext) -> Vec<Fix> {
        let document = ctx.document();
        let range = ctx.range();
        let bare_line = scan_window(document, &range, LINES_BEFORE, LINES_AFTER)
            .filter(|line| {
                document
                    .line(*line)
                    .and_then(IgnoreDirective::parse)
                    .is_some_and(|d| d.scope() == DirectiveScope::Line && d.is_bare())
            })
            .min_by_key(|line| line.abs_diff(range.start.line));

        bare_line
            .map(|line| {
                Fix::single(
                    "Remove bare 'deno-lint-ignore' comment",
                    ctx.diagnostic(),
                    Edit::deletion(document.full_line_deletion_range(line)),
                )
            })
            .into_iter()
            .collect()
    }
}
