//! Line-addressable source text and the line/column coordinates used by
//! diagnostics and edits.

mod document;
mod position;

pub use document::SourceDocument;
pub use position::{Position, Range};
