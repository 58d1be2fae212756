//! Expression-level rewrites.

mod eqeqeq;
mod no_extra_boolean_cast;
mod no_new_symbol;
mod no_non_null_asserted_optional_chain;
mod no_octal;
mod no_prototype_builtins;
mod no_sparse_arrays;
mod no_throw_literal;

pub use eqeqeq::Eqeqeq;
pub use no_extra_boolean_cast::NoExtraBooleanCast;
pub use no_new_symbol::NoNewSymbol;
pub use no_non_null_asserted_optional_chain::NoNonNullAssertedOptionalChain;
pub use no_octal::NoOctal;
pub use no_prototype_builtins::NoPrototypeBuiltins;
pub use no_sparse_arrays::NoSparseArrays;
pub use no_throw_literal::NoThrowLiteral;
