//! NoExplicitAny fixes.
//!
//! Assertions to `any` (`x as any`, `<any>x`) can simply be dropped. Any
//! other `any` may be replaced by `unknown`.

use lazy_static::lazy_static;
use quickfix_diagnostics::{Edit, Fix};
use quickfix_source_file::{Position, Range};
use regex::Regex;

use crate::mixins::replace_range_fix;
use crate::{FixContext, FixProvider};

lazy_static! {
    static ref AS_BEFORE: Regex = Regex::new(r"\s+as\s*$").unwrap();
    static ref ANGLE_OPEN_BEFORE: Regex = Regex::new(r"(^|[^A-Za-z0-9_$\s])\s*(<\s*)$").unwrap();
    static ref ANGLE_CLOSE_AFTER: Regex = Regex::new(r"^\s*>").unwrap();
}

const REMOVE_ASSERTION: &str = "Remove type assertion";

/// Range of the whole `as any` / `<any>` assertion, if the diagnostic is one.
fn assertion_range(ctx: &FixContext) -> Option<Range> {
    let range = ctx.range();
    if !range.is_single_line() {
        return None;
    }
    let document = ctx.document();
    let before = document.text_before(&range);
    let line = range.start.line;

    if let Some(found) = AS_BEFORE.find(before) {
        return Some(Range::new(Position::new(line, found.start()), range.end));
    }

    let open = ANGLE_OPEN_BEFORE.captures(before)?.get(2)?;
    let close = ANGLE_CLOSE_AFTER.find(document.text_after(&range))?;
    Some(Range::new(
        Position::new(line, open.start()),
        Position::new(line, range.end.column + close.end()),
    ))
}

#[derive(Debug, Clone, Default)]
pub struct NoExplicitAny;

impl FixProvider for NoExplicitAny {
    fn rule_codes(&self) -> &'static [&'static str] {
        &["no-explicit-any"]
    }

    fn create_fixes(&self, ctx: &FixContext) -> Vec<Fix> {
        if ctx.text().map(str::trim) != Some("any") {
            return Vec::new();
        }
        let mut fixes = Vec::new();
        if let Some(assertion) = assertion_range(ctx) {
            fixes.push(Fix::single(
                REMOVE_ASSERTION,
                ctx.diagnostic(),
                Edit::deletion(assertion),
            ));
        }
        fixes.push(replace_range_fix(
            "Use `unknown` instead",
            ctx.diagnostic(),
            "unknown",
        ));
        fixes
    }
}
