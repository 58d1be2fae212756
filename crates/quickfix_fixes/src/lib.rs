//! Quick-fix synthesis for `deno lint` diagnostics.
//!
//! Every supported rule has a [`FixProvider`] that turns a diagnostic and the
//! surrounding source text into zero or more [`Fix`]es. Providers work on raw
//! text with line-window scans and regular expressions; they never parse the
//! module. The [`FixDispatcher`] picks the relevant diagnostics for a cursor
//! or selection and routes each to the first provider that can fix it.

pub mod dispatcher;
pub mod mixins;
pub mod registry;
pub mod relevance;
pub mod rules;

pub use dispatcher::FixDispatcher;
pub use registry::ProviderRegistry;
pub use relevance::select_relevant;

use quickfix_config::QuickfixConfig;
use quickfix_diagnostics::{Diagnostic, Fix};
use quickfix_source_file::{Range, SourceDocument};

/// Rule code claimed by providers that handle every diagnostic.
pub const WILDCARD: &str = "*";

/// Everything a provider may look at while building fixes.
pub struct FixContext<'a> {
    diagnostic: &'a Diagnostic,
    document: &'a SourceDocument,
    config: &'a QuickfixConfig,
}

impl<'a> FixContext<'a> {
    pub fn new(
        diagnostic: &'a Diagnostic,
        document: &'a SourceDocument,
        config: &'a QuickfixConfig,
    ) -> Self {
        Self {
            diagnostic,
            document,
            config,
        }
    }

    pub fn diagnostic(&self) -> &'a Diagnostic {
        self.diagnostic
    }

    pub fn document(&self) -> &'a SourceDocument {
        self.document
    }

    pub fn config(&self) -> &'a QuickfixConfig {
        self.config
    }

    pub fn range(&self) -> Range {
        self.diagnostic.range
    }

    pub fn code(&self) -> &'a str {
        &self.diagnostic.code
    }

    pub fn hint(&self) -> Option<&'a str> {
        self.diagnostic.hint()
    }

    /// Text covered by the diagnostic.
    pub fn text(&self) -> Option<&'a str> {
        self.document.text_in(&self.diagnostic.range)
    }

    /// Index of the line the diagnostic starts on.
    pub fn start_line(&self) -> usize {
        self.diagnostic.range.start.line
    }

    /// Text of the line the diagnostic starts on.
    pub fn line_text(&self) -> &'a str {
        self.document
            .line(self.start_line())
            .unwrap_or_default()
    }
}

/// Builds fixes for the rules it claims.
///
/// Providers are stateless; "no fix" is an empty vector, never an error.
pub trait FixProvider: Send + Sync {
    /// Rule codes this provider handles. [`WILDCARD`] claims all of them.
    fn rule_codes(&self) -> &'static [&'static str];

    fn can_handle(&self, diagnostic: &Diagnostic) -> bool {
        self.rule_codes()
            .iter()
            .any(|code| *code == WILDCARD || *code == diagnostic.code)
    }

    fn create_fixes(&self, ctx: &FixContext) -> Vec<Fix>;
}
