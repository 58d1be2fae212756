//! Eqeqeq fix: loose equality operators become strict ones.
//!
//! One fix per operator kind found in the diagnostic range; operators inside
//! string literals are left alone.

use quickfix_diagnostics::Fix;

use crate::mixins::replace_range_fix;
use crate::{FixContext, FixProvider};

const OPERATORS: [(&str, &str); 2] = [("==", "==="), ("!=", "!==")];

/// Byte offsets of loose `operator` occurrences outside strings.
fn loose_operators(text: &str, operator: &str) -> Vec<usize> {
    let bytes = text.as_bytes();
    let mut found = Vec::new();
    let mut quote: Option<u8> = None;
    let mut index = 0;
    while index < bytes.len() {
        let byte = bytes[index];
        if let Some(open) = quote {
            if byte == b'\\' {
                index += 1;
            } else if byte == open {
                quote = None;
            }
            index += 1;
            continue;
        }
        if matches!(byte, b'"' | b'\'' | b'`') {
            quote = Some(byte);
        } else if bytes[index..].starts_with(operator.as_bytes())
            && !matches!(index.checked_sub(1).map(|i| bytes[i]), Some(b'=' | b'!' | b'<' | b'>'))
            && bytes.get(index + 2) != Some(&b'=')
        {
            found.push(index);
            index += 2;
            continue;
        }
        index += 1;
    }
    found
}

#[derive(Debug, Clone, Default)]
pub struct Eqeqeq;

impl FixProvider for Eqeqeq {
    fn rule_codes(&self) -> &'static [&'static str] {
        &["eqeqeq"]
    }

    fn create_fixes(&self, ctx: &FixContext) -> Vec<Fix> {
        let Some(text) = ctx.text() else {
            return Vec::new();
        };
        OPERATORS
            .iter()
            .filter_map(|(loose, strict)| {
                let positions = loose_operators(text, loose);
                if positions.is_empty() {
                    return None;
                }
                let mut rewritten = String::with_capacity(text.len() + positions.len());
                let mut last = 0;
                for position in positions {
                    rewritten.push_str(&text[last..position]);
                    rewritten.push_str(strict);
                    last = position + loose.len();
                }
                rewritten.push_str(&text[last..]);
                Some(replace_range_fix(
                    format!("Replace {loose} with {strict}"),
                    ctx.diagnostic(),
                    rewritten,
                ))
            })
            .collect()
    }
}
