use quickfix_diagnostics::{Diagnostic, Fix};
use quickfix_source_file::SourceDocument;

use super::text::is_identifier;
use super::text_replacement::replace_range_fix;

/// Rename the identifier under the diagnostic to `_<name>`.
///
/// Only offered when the range holds a plain identifier that is not already
/// prefixed.
pub fn underscore_prefix_fix(
    diagnostic: &Diagnostic,
    document: &SourceDocument,
    title: Option<&str>,
) -> Option<Fix> {
    let name = document.text_in(&diagnostic.range)?;
    if !is_identifier(name) || name.starts_with('_') {
        return None;
    }
    let title = title.map_or_else(
        || format!("Prefix '{name}' with underscore: _{name}"),
        str::to_string,
    );
    Some(replace_range_fix(title, diagnostic, format!("_{name}")))
}
