//! NoFallthrough fix.
//!
//! Terminates a case clause with `break;`, placed after the clause's last
//! statement at body indentation.
//!
//! ## Examples
//!
//! ```ts
//! switch (x) {
//!   case 1:
//!     foo();
//!     break; // inserted
//!   case 2:
//!     bar();
//! }
//! ```

use lazy_static::lazy_static;
use quickfix_diagnostics::Fix;
use regex::Regex;

use super::CaseClause;
use crate::mixins::text::insert_after_line;
use crate::{FixContext, FixProvider};

lazy_static! {
    static ref TERMINATOR: Regex = Regex::new(r"^(break|return|throw)\b").unwrap();
}

#[derive(Debug, Clone, Default)]
pub struct NoFallthrough;

impl NoFallthrough {
    fn fix(ctx: &FixContext) -> Option<Fix> {
        let document = ctx.document();
        let clause = CaseClause::enclosing(document, ctx.start_line())?;
        let last = clause.last_body_line?;
        if TERMINATOR.is_match(document.line(last)?.trim()) {
            return None;
        }
        let edit = insert_after_line(
            document,
            last,
            &format!("{}break;\n", clause.statement_indent()),
        );
        Some(Fix::single("Add `break`", ctx.diagnostic(), edit))
    }
}

impl FixProvider for NoFallthrough {
    fn rule_codes(&self) -> &'static [&'static str] {
        &["no-fallthrough"]
    }

    fn create_fixes(&self, ctx: &FixContext) -> Vec<Fix> {
        Self::fix(ctx).into_iter().collect()
    }
}
