//! Variable declaration fixes.

mod camelcase;
mod no_inferrable_types;
mod no_unused_vars;
mod no_var;
mod prefer_const;

pub use camelcase::Camelcase;
pub use no_inferrable_types::NoInferrableTypes;
pub use no_unused_vars::NoUnusedVars;
pub use no_var::NoVar;
pub use prefer_const::PreferConst;
