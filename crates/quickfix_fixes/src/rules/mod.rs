//! Fix providers organized by category.

pub mod declarations;
pub mod disable_rule;
pub mod expressions;
pub mod functions;
pub mod general;
pub mod ignore;
pub mod jsx;
pub mod modules;
pub mod switch;
pub mod types;

// Re-export all providers
pub use declarations::{Camelcase, NoInferrableTypes, NoUnusedVars, NoVar, PreferConst};
pub use disable_rule::DisableRule;
pub use expressions::{
    Eqeqeq, NoExtraBooleanCast, NoNewSymbol, NoNonNullAssertedOptionalChain, NoOctal,
    NoPrototypeBuiltins, NoSparseArrays, NoThrowLiteral,
};
pub use functions::*;
pub use general::GeneralFix;
pub use ignore::{BanUnknownRuleCode, BanUntaggedIgnore, BanUnusedIgnore};
pub use jsx::*;
pub use modules::{
    NoImportAssertions, NoInvalidTripleSlashReference, NoNodeGlobals, NoProcessGlobal,
    NoSloppyImports, NoUselessRename, VerbatimModuleSyntax,
};
pub use switch::{NoCaseDeclarations, NoFallthrough};
pub use types::*;
