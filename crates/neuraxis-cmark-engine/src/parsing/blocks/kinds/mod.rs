//! # Block Kinds
//!
//! Each block construct owns its syntax: the builder asks these types whether a
//! line starts, continues or ends a block and never matches markers itself.

pub mod block_quote;
pub mod code_fence;
pub mod heading;
pub mod html_block;
pub mod indented_code;
pub mod list_item;
pub mod paragraph;
pub mod thematic_break;

pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use heading::{AtxHeading, SetextUnderline};
pub use html_block::HtmlBlock;
pub use indented_code::IndentedCode;
pub use list_item::ListItem;
pub use paragraph::Paragraph;
pub use thematic_break::ThematicBreak;
