//! JSX fixes.

mod jsx_boolean_value;
mod jsx_curly_braces;
mod jsx_no_comment_text_nodes;
mod jsx_no_useless_fragment;

pub use jsx_boolean_value::JsxBooleanValue;
pub use jsx_curly_braces::JsxCurlyBraces;
pub use jsx_no_comment_text_nodes::JsxNoCommentTextNodes;
pub use jsx_no_useless_fragment::JsxNoUselessFragment;
