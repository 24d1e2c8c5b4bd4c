//! # Inline Kinds
//!
//! Inline constructs that own their syntax. The parser asks these types whether
//! a construct starts at the cursor; it never hardcodes their delimiters.
//!
//! - **`CodeSpan`**: backtick strings, a raw zone that suppresses other parsing
//! - **`Autolink`**: `<scheme:...>` and `<user@host>`
//! - **`RawHtml`**: tags, comments, processing instructions, declarations, CDATA
//! - **`Entity`**: named and numeric character references
//! - **`Escape`**: backslash escapes of ASCII punctuation

pub mod autolink;
pub mod code_span;
pub mod entity;
pub mod escape;
pub mod raw_html;

pub use autolink::Autolink;
pub use code_span::{CodeSpan, TickCache, TickRun};
pub use entity::Entity;
pub use escape::Escape;
pub use raw_html::RawHtml;
