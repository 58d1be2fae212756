use quickfix_diagnostics::{Edit, Fix};
use quickfix_source_file::Position;

use crate::{FixContext, FixProvider};

/// Inserts `.ts` before the closing quote of a sloppy import specifier.
#[derive(Debug, Clone, Default)]
pub struct NoSloppyImports;

impl NoSloppyImports {
    fn fix(ctx: &FixContext) -> Option<Fix> {
        let text = ctx.text()?;
        let range = ctx.range();
        if !(text.len() >= 2 && text.ends_with(['"', '\'', '`'])) {
            return None;
        }
        let at = Position::new(range.end.line, range.end.column - 1);
        Some(Fix::single(
            "Add .ts extension to import",
            ctx.diagnostic(),
            Edit::insertion(".ts", at),
        ))
    }
}

impl FixProvider for NoSloppyImports {
    fn rule_codes(&self) -> &'static [&'static str] {
        &["no-sloppy-imports"]
    }

    fn create_fixes(&self, ctx: &FixContext) -> Vec<Fix> {
        Self::fix(ctx).into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_utils::{apply_single, diagnostic_on, fixes_for};

    #[test]
    fn test_adds_extension() {
        let source = "import { x } from \"./utils/x\";";
        let diagnostic = diagnostic_on("no-sloppy-imports", source, "\"./utils/x\"");
        let (title, fixed) = apply_single(&NoSloppyImports, source, &diagnostic);
        assert_eq!(title, "Add .ts extension to import");
        assert_eq!(fixed, "import { x } from \"./utils/x.ts\";");
    }

    #[test]
    fn test_range_without_quotes() {
        let source = "import { x } from \"./utils/x\";";
        let diagnostic = diagnostic_on("no-sloppy-imports", source, "./utils/x");
        assert!(fixes_for(&NoSloppyImports, source, &diagnostic).is_empty());
    }
}
