//! Lightweight markup for the note editor: a preview renderer producing a
//! typed tree, an HTML serializer for that tree, and the toolbar transforms.

mod html;
mod parse;
mod toolbar;
mod tree;

pub use html::SafeHtml;
pub use parse::render_markup;
pub use toolbar::{ToolbarCommand, apply_toolbar_command};
pub use tree::{Block, HeadingLevel, Inline, Preview};
