//! Edit-construction building blocks shared by the rule providers.

pub mod ignore_directive;
pub mod import_insertion;
pub mod text;
pub mod text_replacement;
pub mod underscore_prefix;
pub mod use_instead;

pub use ignore_directive::{IGNORE_MARKER, IgnoreDirective};
pub use import_insertion::import_fix;
pub use text_replacement::{delete_line_fix, delete_range_fix, replace_line_fix, replace_range_fix};
pub use underscore_prefix::underscore_prefix_fix;
pub use use_instead::{replacement_from_hint, use_instead_fix};
