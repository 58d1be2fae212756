//! Fixes that swap out the diagnostic range or its whole line.

use quickfix_diagnostics::{Diagnostic, Edit, Fix};
use quickfix_source_file::SourceDocument;

/// Replace exactly the diagnostic range.
pub fn replace_range_fix(
    title: impl Into<String>,
    diagnostic: &Diagnostic,
    new_text: impl Into<String>,
) -> Fix {
    Fix::single(
        title,
        diagnostic,
        Edit::range_replacement(new_text, diagnostic.range),
    )
}

/// Replace the full line the diagnostic starts on, terminator excluded.
pub fn replace_line_fix(
    title: impl Into<String>,
    diagnostic: &Diagnostic,
    document: &SourceDocument,
    new_text: impl Into<String>,
) -> Fix {
    Fix::single(
        title,
        diagnostic,
        Edit::range_replacement(new_text, document.line_range(diagnostic.range.start.line)),
    )
}

/// Delete the diagnostic range.
pub fn delete_range_fix(title: impl Into<String>, diagnostic: &Diagnostic) -> Fix {
    Fix::single(title, diagnostic, Edit::deletion(diagnostic.range))
}

/// Delete the line the diagnostic starts on, terminator included.
pub fn delete_line_fix(
    title: impl Into<String>,
    diagnostic: &Diagnostic,
    document: &SourceDocument,
) -> Fix {
    Fix::single(
        title,
        diagnostic,
        Edit::deletion(document.full_line_deletion_range(diagnostic.range.start.line)),
    )
}
