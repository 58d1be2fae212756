use quickfix_diagnostics::Fix;

use super::import_from_hint;
use crate::mixins::import_fix;
use crate::{FixContext, FixProvider};

/// Adds the `node:process` import the hint asks for.
#[derive(Debug, Clone, Default)]
pub struct NoProcessGlobal;

impl FixProvider for NoProcessGlobal {
    fn rule_codes(&self) -> &'static [&'static str] {
        &["no-process-global"]
    }

    fn create_fixes(&self, ctx: &FixContext) -> Vec<Fix> {
        let Some(hint) = ctx.hint() else {
            return Vec::new();
        };
        import_from_hint(hint)
            .map(|statement| import_fix(ctx.diagnostic(), ctx.document(), statement, Some(hint)))
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::test_utils::{apply_single, diagnostic_on, fixes_for};

    const HINT: &str = "Add `import process from \"node:process\";`";

    #[test]
    fn test_import_after_existing_imports() {
        let source = "import { a } from \"./a.ts\";\n\nprocess.exit(a);\n";
        let diagnostic = diagnostic_on("no-process-global", source, "process").with_hint(HINT);
        let (title, fixed) = apply_single(&NoProcessGlobal, source, &diagnostic);
        assert_eq!(title, HINT);
        assert_eq!(
            fixed,
            "import { a } from \"./a.ts\";\nimport process from \"node:process\";\n\nprocess.exit(a);\n"
        );
    }

    #[test]
    fn test_hint_without_import() {
        let source = "process.exit(1);\n";
        let diagnostic = diagnostic_on("no-process-global", source, "process")
            .with_hint("Avoid the process global");
        assert!(fixes_for(&NoProcessGlobal, source, &diagnostic).is_empty());
    }
}
