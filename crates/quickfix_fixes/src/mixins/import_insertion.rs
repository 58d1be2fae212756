//! Insertion of a new import statement at the top of a module.
//!
//! The statement goes after a leading shebang, comments and blank lines. If
//! the module already starts with a run of imports, it goes after the last
//! of them.

use lazy_static::lazy_static;
use quickfix_diagnostics::{Diagnostic, Edit, Fix};
use quickfix_source_file::{Position, SourceDocument};
use regex::Regex;

lazy_static! {
    static ref IMPORT_START: Regex = Regex::new(r#"^import(\s|\{|\*|'|"|$)"#).unwrap();
    static ref REEXPORT_START: Regex = Regex::new(r"^export\s*(\{|\*|type\s*\{)").unwrap();
    static ref FROM_CLAUSE: Regex = Regex::new(
        r#"\bfrom\s*['"][^'"]+['"]\s*((with|assert)\s*\{[^}]*\})?\s*;?$"#
    )
    .unwrap();
    static ref SIDE_EFFECT_IMPORT: Regex = Regex::new(r#"^import\s*['"][^'"]+['"]"#).unwrap();
}

/// Lines a single import statement may span before we give up on it.
const MAX_STATEMENT_LINES: usize = 50;

fn is_import_start(trimmed: &str) -> bool {
    IMPORT_START.is_match(trimmed) || REEXPORT_START.is_match(trimmed)
}

/// First line that is neither shebang, comment nor blank.
fn first_substantive_line(document: &SourceDocument) -> Option<usize> {
    let mut in_block_comment = false;
    for (index, line) in document.lines() {
        let trimmed = line.trim();
        if in_block_comment {
            if trimmed.contains("*/") {
                in_block_comment = false;
            }
            continue;
        }
        if (index == 0 && trimmed.starts_with("#!")) || trimmed.is_empty() || trimmed.starts_with("//") {
            continue;
        }
        if let Some(rest) = trimmed.strip_prefix("/*") {
            match rest.find("*/") {
                Some(end) if !rest[end + 2..].trim().is_empty() => return Some(index),
                Some(_) => {}
                None => in_block_comment = true,
            }
            continue;
        }
        return Some(index);
    }
    None
}

/// Last line of the statement starting at `start`.
fn statement_end(document: &SourceDocument, start: usize) -> usize {
    let last = (start + MAX_STATEMENT_LINES).min(document.last_line());
    for index in start..=last {
        let Some(line) = document.line(index) else {
            break;
        };
        let trimmed = line.trim_end();
        if trimmed.ends_with(';')
            || FROM_CLAUSE.is_match(trimmed)
            || (index == start && SIDE_EFFECT_IMPORT.is_match(trimmed.trim_start()))
        {
            return index;
        }
    }
    start
}

/// Line before which the new import is inserted.
///
/// May equal `line_count()` when the document has no room left.
pub fn import_insertion_line(document: &SourceDocument) -> usize {
    let Some(first) = first_substantive_line(document) else {
        let last = document.last_line();
        return if document.line(last).is_some_and(str::is_empty) {
            last
        } else {
            last + 1
        };
    };

    let mut line = first;
    let mut last_import = None;
    while let Some(text) = document.line(line)
        && is_import_start(text.trim_start())
    {
        let end = statement_end(document, line);
        last_import = Some(end);
        line = end + 1;
    }
    last_import.map_or(first, |end| end + 1)
}

fn needs_separator(next_line: &str) -> bool {
    let trimmed = next_line.trim();
    !(trimmed.is_empty()
        || trimmed.starts_with("//")
        || trimmed.starts_with("/*")
        || is_import_start(trimmed)
        || (trimmed.starts_with("export") && trimmed.contains(" from ")))
}

/// Normalize an import statement to end in a semicolon.
pub fn normalize_import(statement: &str) -> String {
    let statement = statement.trim();
    if statement.ends_with(';') {
        statement.to_string()
    } else {
        format!("{statement};")
    }
}

/// The edit inserting `statement` at the import insertion point.
pub fn import_insertion_edit(document: &SourceDocument, statement: &str) -> Edit {
    let statement = normalize_import(statement);
    let line = import_insertion_line(document);
    if line > document.last_line() {
        return Edit::insertion(format!("\n{statement}"), document.line_end(document.last_line()));
    }
    let mut text = format!("{statement}\n");
    if document.line(line).is_some_and(needs_separator) {
        text.push('\n');
    }
    Edit::insertion(text, Position::new(line, 0))
}

/// A fix adding `statement`, titled by `title` or `Add <statement>`.
pub fn import_fix(
    diagnostic: &Diagnostic,
    document: &SourceDocument,
    statement: &str,
    title: Option<&str>,
) -> Fix {
    let title = title.map_or_else(
        || format!("Add {}", normalize_import(statement)),
        str::to_string,
    );
    Fix::single(title, diagnostic, import_insertion_edit(document, statement))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const PROCESS: &str = "import process from \"node:process\"";

    fn insert(source: &str) -> String {
        let doc = SourceDocument::new(source);
        let edit = import_insertion_edit(&doc, PROCESS);
        quickfix_diagnostics::apply_edits(&doc, &[edit]).unwrap()
    }

    #[test]
    fn test_insert_before_code_with_separator() {
        assert_eq!(
            insert("console.log(process.env);\n"),
            "import process from \"node:process\";\n\nconsole.log(process.env);\n"
        );
    }

    #[test]
    fn test_insert_after_header_comments() {
        assert_eq!(
            insert("#!/usr/bin/env -S deno run\n// Copyright\n/*\n * Licensed\n */\nfoo();\n"),
            "#!/usr/bin/env -S deno run\n// Copyright\n/*\n * Licensed\n */\nimport process from \"node:process\";\n\nfoo();\n"
        );
    }

    #[test]
    fn test_insert_after_existing_imports() {
        assert_eq!(
            insert("import a from \"./a.ts\";\nimport {\n  b,\n  c,\n} from \"./b.ts\";\n\nfoo();\n"),
            "import a from \"./a.ts\";\nimport {\n  b,\n  c,\n} from \"./b.ts\";\nimport process from \"node:process\";\n\nfoo();\n"
        );
    }

    #[test]
    fn test_insert_into_import_only_file_without_newline() {
        assert_eq!(
            insert("import a from \"./a.ts\";"),
            "import a from \"./a.ts\";\nimport process from \"node:process\";"
        );
    }

    #[test]
    fn test_insert_into_empty_file() {
        assert_eq!(insert(""), "import process from \"node:process\";\n");
    }

    #[test]
    fn test_import_fix_title() {
        let doc = SourceDocument::new("process.exit(1);\n");
        let diagnostic = Diagnostic::new("no-process-global", "process", quickfix_source_file::Range::default());
        let fix = import_fix(&diagnostic, &doc, PROCESS, None);
        assert_eq!(fix.title(), "Add import process from \"node:process\";");
        let titled = import_fix(&diagnostic, &doc, PROCESS, Some("Add `import process from \"node:process\";`"));
        assert_eq!(titled.title(), "Add `import process from \"node:process\";`");
    }
}
