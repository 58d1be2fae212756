//! Import and module-level fixes.

mod no_import_assertions;
mod no_invalid_triple_slash_reference;
mod no_node_globals;
mod no_process_global;
mod no_sloppy_imports;
mod no_useless_rename;
mod verbatim_module_syntax;

pub use no_import_assertions::NoImportAssertions;
pub use no_invalid_triple_slash_reference::NoInvalidTripleSlashReference;
pub use no_node_globals::NoNodeGlobals;
pub use no_process_global::NoProcessGlobal;
pub use no_sloppy_imports::NoSloppyImports;
pub use no_useless_rename::NoUselessRename;
pub use verbatim_module_syntax::VerbatimModuleSyntax;

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ADD_IMPORT_HINT: Regex = Regex::new(r"Add `([^`]+)`").unwrap();
}

/// The statement named by a hint like ``Add `import process from "node:process";` ``.
fn import_from_hint(hint: &str) -> Option<&str> {
    ADD_IMPORT_HINT
        .captures(hint)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
        .filter(|statement| statement.trim_start().starts_with("import"))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_import_from_hint() {
        assert_eq!(
            import_from_hint("Add `import process from \"node:process\";`"),
            Some("import process from \"node:process\";")
        );
        assert_eq!(import_from_hint("Add `type` keyword"), None);
        assert_eq!(import_from_hint("Use `globalThis` instead"), None);
    }
}
