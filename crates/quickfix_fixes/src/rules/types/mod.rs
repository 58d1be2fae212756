//! Type annotation fixes.

mod ban_types;
mod no_explicit_any;
mod no_misused_new;

pub use ban_types::BanTypes;
pub use no_explicit_any::NoExplicitAny;
pub use no_misused_new::NoMisusedNew;
