//! Fixes inside function and class bodies.

mod constructor_super;
mod no_debugger;
mod no_setter_return;
mod require_await;
mod require_yield;

pub use constructor_super::ConstructorSuper;
pub use no_debugger::NoDebugger;
pub use no_setter_return::NoSetterReturn;
pub use require_await::RequireAwait;
pub use require_yield::RequireYield;
