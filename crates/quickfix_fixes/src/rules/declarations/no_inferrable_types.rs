//! NoInferrableTypes fix: drops a type annotation the initializer already
//! implies, e.g. `const n: number = 5` becomes `const n = 5`.

use quickfix_diagnostics::{Edit, Fix};
use quickfix_source_file::{Position, Range};

use crate::mixins::replace_range_fix;
use crate::{FixContext, FixProvider};

const TITLE: &str = "Remove unnecessary type annotation";

/// Offset of the first assignment `=` (not `==`, `=>`, `<=`, ...).
fn assignment_index(text: &str) -> Option<usize> {
    let bytes = text.as_bytes();
    (0..bytes.len()).find(|&index| {
        bytes[index] == b'='
            && !matches!(bytes.get(index + 1), Some(b'=' | b'>'))
            && !matches!(index.checked_sub(1).map(|i| bytes[i]), Some(b'=' | b'!' | b'<' | b'>'))
    })
}

#[derive(Debug, Clone, Default)]
pub struct NoInferrableTypes;

impl NoInferrableTypes {
    fn fix(ctx: &FixContext) -> Option<Fix> {
        let text = ctx.text()?;
        let range = ctx.range();

        // `name: T = value`
        if let (Some(colon), Some(equals)) = (text.find(':'), assignment_index(text))
            && colon < equals
        {
            let name = text[..colon].trim_end();
            let value = text[equals + 1..].trim_start();
            return Some(replace_range_fix(
                TITLE,
                ctx.diagnostic(),
                format!("{name} = {value}"),
            ));
        }

        // `: T` alone
        if text.trim_start().starts_with(':') {
            return Some(Fix::single(TITLE, ctx.diagnostic(), Edit::deletion(range)));
        }

        // `T` after a colon on the same line
        let before = ctx.document().text_before(&range);
        if range.is_single_line() && before.trim_end().ends_with(':') {
            let colon = before.trim_end().len() - 1;
            let from = before[..colon].trim_end().len();
            let deletion = Range::new(Position::new(range.start.line, from), range.end);
            return Some(Fix::single(TITLE, ctx.diagnostic(), Edit::deletion(deletion)));
        }
        None
    }
}

impl FixProvider for NoInferrableTypes {
    fn rule_codes(&self) -> &'static [&'static str] {
        &["no-inferrable-types"]
    }

    fn create_fixes(&self, ctx: &FixContext) -> Vec<Fix> {
        Self::fix(ctx).into_iter().collect()
    }
}
