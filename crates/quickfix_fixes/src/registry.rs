//! Ordered registry of fix providers.

use quickfix_diagnostics::Diagnostic;

use crate::FixProvider;
use crate::rules::{DisableRule, GeneralFix};

/// Providers in priority order, followed by the catch-all fallback.
///
/// The disable-rule provider is kept apart: its actions are not competing
/// fixes but are appended after whatever the rule providers produce.
pub struct ProviderRegistry {
    providers: Vec<Box<dyn FixProvider>>,
    fallback: Box<dyn FixProvider>,
    disable_rule: DisableRule,
}

impl ProviderRegistry {
    /// Create a registry holding only the fallback.
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
            fallback: Box::new(GeneralFix),
            disable_rule: DisableRule,
        }
    }

    /// Create a registry with all built-in providers registered.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register_builtins();
        registry
    }

    /// Register a provider after the ones already present.
    pub fn register<P: FixProvider + Default + 'static>(&mut self) {
        self.providers.push(Box::new(P::default()));
    }

    fn register_builtins(&mut self) {
        use crate::rules::{
            BanTypes, BanUnknownRuleCode, BanUntaggedIgnore, BanUnusedIgnore, Camelcase,
            ConstructorSuper, Eqeqeq, JsxBooleanValue, JsxCurlyBraces, JsxNoCommentTextNodes,
            JsxNoUselessFragment, NoCaseDeclarations, NoDebugger, NoExplicitAny,
            NoExtraBooleanCast, NoFallthrough, NoImportAssertions, NoInferrableTypes,
            NoInvalidTripleSlashReference, NoMisusedNew, NoNewSymbol,
            NoNonNullAssertedOptionalChain, NoNodeGlobals, NoOctal, NoProcessGlobal,
            NoPrototypeBuiltins, NoSetterReturn, NoSloppyImports, NoSparseArrays, NoThrowLiteral,
            NoUnusedVars, NoUselessRename, NoVar, PreferConst, RequireAwait, RequireYield,
            VerbatimModuleSyntax,
        };
        // Ignore directives
        self.register::<BanUnusedIgnore>();
        self.register::<BanUntaggedIgnore>();
        self.register::<BanUnknownRuleCode>();
        // Declarations
        self.register::<NoUnusedVars>();
        self.register::<PreferConst>();
        self.register::<NoVar>();
        self.register::<Camelcase>();
        self.register::<NoInferrableTypes>();
        // Switch statements
        self.register::<NoFallthrough>();
        self.register::<NoCaseDeclarations>();
        // JSX
        self.register::<JsxBooleanValue>();
        self.register::<JsxCurlyBraces>();
        self.register::<JsxNoCommentTextNodes>();
        self.register::<JsxNoUselessFragment>();
        // Expressions
        self.register::<Eqeqeq>();
        self.register::<NoExtraBooleanCast>();
        self.register::<NoNewSymbol>();
        self.register::<NoNonNullAssertedOptionalChain>();
        self.register::<NoOctal>();
        self.register::<NoPrototypeBuiltins>();
        self.register::<NoSparseArrays>();
        self.register::<NoThrowLiteral>();
        // Types
        self.register::<BanTypes>();
        self.register::<NoExplicitAny>();
        self.register::<NoMisusedNew>();
        // Modules
        self.register::<NoProcessGlobal>();
        self.register::<NoNodeGlobals>();
        self.register::<NoImportAssertions>();
        self.register::<NoSloppyImports>();
        self.register::<NoUselessRename>();
        self.register::<VerbatimModuleSyntax>();
        self.register::<NoInvalidTripleSlashReference>();
        // Functions
        self.register::<ConstructorSuper>();
        self.register::<NoDebugger>();
        self.register::<NoSetterReturn>();
        self.register::<RequireAwait>();
        self.register::<RequireYield>();
    }

    /// Providers claiming `diagnostic`, in priority order, fallback last.
    pub fn providers_for<'a>(
        &'a self,
        diagnostic: &'a Diagnostic,
    ) -> impl Iterator<Item = &'a dyn FixProvider> + 'a {
        self.providers
            .iter()
            .map(|provider| provider.as_ref())
            .chain(std::iter::once(self.fallback.as_ref()))
            .filter(move |provider| provider.can_handle(diagnostic))
    }

    /// Check if a rule code has a dedicated provider.
    pub fn has_provider(&self, code: &str) -> bool {
        self.providers
            .iter()
            .any(|provider| provider.rule_codes().contains(&code))
    }

    /// Get all rule codes with a dedicated provider, in registration order.
    pub fn rule_codes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.providers
            .iter()
            .flat_map(|provider| provider.rule_codes().iter().copied())
    }

    pub fn disable_rule(&self) -> &dyn FixProvider {
        &self.disable_rule
    }
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
