//! Routing diagnostics to fix providers.

use std::panic::{AssertUnwindSafe, catch_unwind};

use quickfix_config::{QuickfixConfig, RuleMode};
use quickfix_diagnostics::{DIAGNOSTIC_SOURCE, Diagnostic, Fix};
use quickfix_source_file::{Range, SourceDocument};

use crate::registry::ProviderRegistry;
use crate::relevance::select_relevant;
use crate::{FixContext, FixProvider};

/// Computes the fixes offered for a cursor or selection.
pub struct FixDispatcher {
    registry: ProviderRegistry,
    config: QuickfixConfig,
}

impl FixDispatcher {
    pub fn new(config: QuickfixConfig) -> Self {
        Self::with_registry(ProviderRegistry::builtin(), config)
    }

    pub fn with_registry(registry: ProviderRegistry, config: QuickfixConfig) -> Self {
        Self { registry, config }
    }

    pub fn config(&self) -> &QuickfixConfig {
        &self.config
    }

    pub fn registry(&self) -> &ProviderRegistry {
        &self.registry
    }

    /// Fixes for the diagnostics relevant to `requested`.
    ///
    /// Rule fixes come first, in diagnostic order. Disable-rule actions
    /// follow all of them.
    pub fn list_fixes(
        &self,
        diagnostics: &[Diagnostic],
        requested: Range,
        document: &SourceDocument,
    ) -> Vec<Fix> {
        let ours = diagnostics
            .iter()
            .filter(|diagnostic| diagnostic.source == DIAGNOSTIC_SOURCE);
        let relevant = select_relevant(ours, requested);

        let mut fixes = Vec::new();
        let mut disable_fixes = Vec::new();
        for diagnostic in relevant {
            let mode = self.config.rule_mode(&diagnostic.code);
            if mode == RuleMode::Off {
                tracing::trace!(code = %diagnostic.code, "rule is off");
                continue;
            }
            if mode == RuleMode::Fix {
                fixes.extend(self.rule_fixes(diagnostic, document));
            }
            if self.config.offers_disable_actions(diagnostic.severity) {
                disable_fixes.extend(self.disable_fixes(diagnostic, document));
            }
        }
        fixes.extend(disable_fixes);
        fixes
    }

    /// Fixes from the first provider that produces any for `diagnostic`.
    pub fn rule_fixes(&self, diagnostic: &Diagnostic, document: &SourceDocument) -> Vec<Fix> {
        let ctx = FixContext::new(diagnostic, document, &self.config);
        for provider in self.registry.providers_for(diagnostic) {
            let fixes = valid_fixes(run_provider(provider, &ctx), document);
            if !fixes.is_empty() {
                return fixes;
            }
        }
        Vec::new()
    }

    /// The "disable this rule" actions for `diagnostic`.
    pub fn disable_fixes(&self, diagnostic: &Diagnostic, document: &SourceDocument) -> Vec<Fix> {
        let ctx = FixContext::new(diagnostic, document, &self.config);
        valid_fixes(run_provider(self.registry.disable_rule(), &ctx), document)
    }
}

/// Call a provider, treating a panic as "no fix".
fn run_provider(provider: &dyn FixProvider, ctx: &FixContext) -> Vec<Fix> {
    catch_unwind(AssertUnwindSafe(|| provider.create_fixes(ctx))).unwrap_or_else(|_| {
        tracing::warn!(
            code = ctx.code(),
            range = %ctx.range(),
            "fix provider panicked; offering no fix"
        );
        Vec::new()
    })
}

/// Drop fixes whose edits overlap or do not fit the document.
fn valid_fixes(fixes: Vec<Fix>, document: &SourceDocument) -> Vec<Fix> {
    fixes
        .into_iter()
        .filter(|fix| {
            let in_bounds = fix
                .edits()
                .iter()
                .all(|edit| document.contains_range(&edit.range()));
            let usable = in_bounds && !fix.has_overlapping_edits();
            if !usable {
                tracing::debug!(title = fix.title(), in_bounds, "discarding invalid fix");
            }
            usable
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use quickfix_config::DisableRuleActions;
    use quickfix_diagnostics::{Edit, Severity};
    use quickfix_source_file::Position;

    use super::*;

    #[derive(Default)]
    struct Panicking;

    impl FixProvider for Panicking {
        fn rule_codes(&self) -> &'static [&'static str] {
            &["no-var"]
        }

        fn create_fixes(&self, _ctx: &FixContext) -> Vec<Fix> {
            panic!("provider bug");
        }
    }

    #[derive(Default)]
    struct OutOfBounds;

    impl FixProvider for OutOfBounds {
        fn rule_codes(&self) -> &'static [&'static str] {
            &["no-var"]
        }

        fn create_fixes(&self, ctx: &FixContext) -> Vec<Fix> {
            vec![Fix::single(
                "Broken",
                ctx.diagnostic(),
                Edit::deletion(Range::from_coords(40, 0, 41, 0)),
            )]
        }
    }

    const SOURCE: &str = "var x = 1;\n";

    fn no_var() -> Diagnostic {
        Diagnostic::new("no-var", "`var` keyword is not allowed.", Range::from_coords(0, 0, 0, 10))
    }

    fn titles(fixes: &[Fix]) -> Vec<&str> {
        fixes.iter().map(Fix::title).collect()
    }

    fn cursor() -> Range {
        Range::empty(Position::new(0, 1))
    }

    #[test]
    fn test_rule_fixes_then_disable_actions() {
        let dispatcher = FixDispatcher::new(QuickfixConfig::default());
        let document = SourceDocument::new(SOURCE);
        let fixes = dispatcher.list_fixes(&[no_var()], cursor(), &document);
        assert_eq!(
            titles(&fixes),
            vec![
                "Use `let` instead",
                "Disable 'no-var' for this line",
                "Disable 'no-var' for the entire file",
            ]
        );
    }

    #[test]
    fn test_foreign_source_ignored() {
        let dispatcher = FixDispatcher::new(QuickfixConfig::default());
        let document = SourceDocument::new(SOURCE);
        let foreign = no_var().with_source("typescript");
        assert!(dispatcher.list_fixes(&[foreign], cursor(), &document).is_empty());
    }

    #[test]
    fn test_rule_modes() {
        let config = QuickfixConfig::parse("[rules]\nno-var = \"disable-only\"\n").unwrap();
        let dispatcher = FixDispatcher::new(config);
        let document = SourceDocument::new(SOURCE);
        let fixes = dispatcher.list_fixes(&[no_var()], cursor(), &document);
        assert_eq!(
            titles(&fixes),
            vec!["Disable 'no-var' for this line", "Disable 'no-var' for the entire file"]
        );

        let config = QuickfixConfig::parse("[rules]\nno-var = \"off\"\n").unwrap();
        let dispatcher = FixDispatcher::new(config);
        assert!(dispatcher.list_fixes(&[no_var()], cursor(), &document).is_empty());
    }

    #[test]
    fn test_disable_actions_gated_by_severity() {
        let dispatcher = FixDispatcher::new(QuickfixConfig::default());
        let document = SourceDocument::new(SOURCE);
        let warning = no_var().with_severity(Severity::Warning);
        let fixes = dispatcher.list_fixes(&[warning.clone()], cursor(), &document);
        assert_eq!(titles(&fixes), vec!["Use `let` instead"]);

        let mut config = QuickfixConfig::default();
        config.linter.disable_rule_actions = DisableRuleActions::Always;
        let dispatcher = FixDispatcher::new(config);
        assert_eq!(dispatcher.list_fixes(&[warning], cursor(), &document).len(), 3);
    }

    #[test]
    fn test_panicking_provider_falls_through() {
        let mut registry = ProviderRegistry::new();
        registry.register::<Panicking>();
        let dispatcher = FixDispatcher::with_registry(registry, QuickfixConfig::default());
        let document = SourceDocument::new(SOURCE);
        let fixes = dispatcher.rule_fixes(&no_var(), &document);
        assert_eq!(titles(&fixes), vec!["Learn more about this rule"]);
    }

    #[test]
    fn test_out_of_bounds_fix_discarded() {
        let mut registry = ProviderRegistry::new();
        registry.register::<OutOfBounds>();
        let dispatcher = FixDispatcher::with_registry(registry, QuickfixConfig::default());
        let document = SourceDocument::new(SOURCE);
        let fixes = dispatcher.rule_fixes(&no_var(), &document);
        assert_eq!(titles(&fixes), vec!["Learn more about this rule"]);
    }
}
