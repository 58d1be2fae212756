use lazy_static::lazy_static;
use quickfix_diagnostics::Fix;
use regex::Regex;

use crate::mixins::replace_line_fix;
use crate::{FixContext, FixProvider};

lazy_static! {
    static ref ASSERT_CLAUSE: Regex =
        Regex::new(r"(\bimport\s+[^;]+?)\s+assert(\s*\{[^}]*\})").unwrap();
}

const DEFAULT_TITLE: &str = "Replace \"assert\" with \"with\" in import";

/// Rewrites the deprecated `assert { ... }` import attribute clause to
/// `with { ... }`.
#[derive(Debug, Clone, Default)]
pub struct NoImportAssertions;

impl FixProvider for NoImportAssertions {
    fn rule_codes(&self) -> &'static [&'static str] {
        &["no-import-assertions"]
    }

    fn create_fixes(&self, ctx: &FixContext) -> Vec<Fix> {
        let line = ctx.line_text();
        if !ASSERT_CLAUSE.is_match(line) {
            return Vec::new();
        }
        let updated = ASSERT_CLAUSE.replace_all(line, "$1 with$2");
        vec![replace_line_fix(
            ctx.hint().unwrap_or(DEFAULT_TITLE),
            ctx.diagnostic(),
            ctx.document(),
            updated.into_owned(),
        )]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_utils::{apply_single, diagnostic_on, fixes_for};

    #[test]
    fn test_assert_becomes_with() {
        let source = "import data from \"./data.json\" assert { type: \"json\" };\n";
        let diagnostic = diagnostic_on("no-import-assertions", source, "assert");
        let (title, fixed) = apply_single(&NoImportAssertions, source, &diagnostic);
        assert_eq!(title, "Replace \"assert\" with \"with\" in import");
        assert_eq!(fixed, "import data from \"./data.json\" with { type: \"json\" };\n");
    }

    #[test]
    fn test_hint_is_title() {
        let source = "import * as config from './config.json' assert{ type: 'json' }";
        let diagnostic = diagnostic_on("no-import-assertions", source, "assert")
            .with_hint("Instead use the with keyword");
        let (title, fixed) = apply_single(&NoImportAssertions, source, &diagnostic);
        assert_eq!(title, "Instead use the with keyword");
        assert_eq!(fixed, "import * as config from './config.json' with{ type: 'json' }");
    }

    #[test]
    fn test_non_import_line() {
        let source = "assert { ok: true };";
        let diagnostic = diagnostic_on("no-import-assertions", source, "assert");
        assert!(fixes_for(&NoImportAssertions, source, &diagnostic).is_empty());
    }
}
