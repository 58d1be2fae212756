//! Bracket- and quote-aware scanning helpers for single lines of source.

use lazy_static::lazy_static;
use quickfix_diagnostics::Edit;
use quickfix_source_file::{Position, SourceDocument};
use regex::Regex;

lazy_static! {
    static ref IDENTIFIER: Regex = Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").unwrap();
}

/// Leading whitespace of a line.
pub fn indentation(line: &str) -> &str {
    &line[..line.len() - line.trim_start().len()]
}

pub fn is_identifier(text: &str) -> bool {
    IDENTIFIER.is_match(text)
}

/// Whether a trimmed line starts or continues a comment.
pub fn is_comment(trimmed: &str) -> bool {
    trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with('*')
}

/// Body of a string literal delimited by matching `'`, `"` or `` ` ``.
///
/// The body may not contain its own delimiter, so `"a" + "b"` is rejected.
pub fn string_literal_body(text: &str) -> Option<&str> {
    let quote = text.chars().next().filter(|c| matches!(c, '\'' | '"' | '`'))?;
    let body = text.get(1..text.len().checked_sub(1)?)?;
    (text.len() >= 2 && text.ends_with(quote) && !body.contains(quote)).then_some(body)
}

/// Walks `text` and reports the nesting depth of brackets at each
/// character that is outside of a string literal.
fn scan_top_level(text: &str, mut visit: impl FnMut(usize, char, i32) -> bool) -> Option<i32> {
    let mut depth = 0i32;
    let mut quote: Option<char> = None;
    let mut escaped = false;
    for (index, c) in text.char_indices() {
        if let Some(open) = quote {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == open {
                quote = None;
            }
            continue;
        }
        match c {
            '\'' | '"' | '`' => quote = Some(c),
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => {
                depth -= 1;
                if depth < 0 {
                    return None;
                }
            }
            _ => {
                if !visit(index, c, depth) {
                    return Some(depth);
                }
            }
        }
    }
    quote.is_none().then_some(depth)
}

/// Whether brackets are balanced and strings terminated.
pub fn is_balanced(text: &str) -> bool {
    scan_top_level(text, |_, _, _| true) == Some(0)
}

/// Split on `separator` occurrences that are outside brackets and strings.
pub fn split_top_level(text: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut last = 0;
    scan_top_level(text, |index, c, depth| {
        if depth == 0 && c == separator {
            parts.push(&text[last..index]);
            last = index + c.len_utf8();
        }
        true
    });
    parts.push(&text[last..]);
    parts
}

/// Insert whole lines after `line`.
///
/// `text` must end in a newline. After the last line of the document the
/// newline moves to the front instead.
pub fn insert_after_line(document: &SourceDocument, line: usize, text: &str) -> Edit {
    if line < document.last_line() {
        Edit::insertion(text, Position::new(line + 1, 0))
    } else {
        let body = text.strip_suffix('\n').unwrap_or(text);
        Edit::insertion(format!("\n{body}"), document.line_end(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indentation() {
        assert_eq!(indentation("    case 1:"), "    ");
        assert_eq!(indentation("\tfoo"), "\t");
        assert_eq!(indentation("bar"), "");
    }

    #[test]
    fn test_string_literal_body() {
        assert_eq!(string_literal_body("\"hello\""), Some("hello"));
        assert_eq!(string_literal_body("'a'"), Some("a"));
        assert_eq!(string_literal_body("`tpl`"), Some("tpl"));
        assert_eq!(string_literal_body("\"\""), Some(""));
        assert_eq!(string_literal_body("\"a\" + \"b\""), None);
        assert_eq!(string_literal_body("\"mismatch'"), None);
        assert_eq!(string_literal_body("\""), None);
        assert_eq!(string_literal_body("value"), None);
    }

    #[test]
    fn test_split_top_level() {
        assert_eq!(split_top_level("1, , 2", ','), vec!["1", " ", " 2"]);
        assert_eq!(
            split_top_level("f(a, b), \"x,y\", [1, 2]", ','),
            vec!["f(a, b)", " \"x,y\"", " [1, 2]"]
        );
    }

    #[test]
    fn test_is_balanced() {
        assert!(is_balanced("const x = { a: [1, 2] };"));
        assert!(is_balanced("const s = \"{\";"));
        assert!(!is_balanced("const x = {"));
        assert!(!is_balanced("}"));
        assert!(!is_balanced("const s = \"open"));
    }

    #[test]
    fn test_insert_after_line() {
        let doc = SourceDocument::new("a\nb");
        assert_eq!(
            insert_after_line(&doc, 0, "x\n"),
            Edit::insertion("x\n", Position::new(1, 0))
        );
        assert_eq!(
            insert_after_line(&doc, 1, "x\n"),
            Edit::insertion("\nx", Position::new(1, 1))
        );
    }
}
