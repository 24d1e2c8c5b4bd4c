//! # neuraxis-cmark-engine
//!
//! A CommonMark parser producing an arena document tree.
//!
//! ```
//! use neuraxis_cmark_engine::{BlockKind, parse};
//!
//! let doc = parse("# Title\n\nSome *emphasis*.");
//! let first = doc.children(doc.root())[0];
//! assert_eq!(doc.kind(first), &BlockKind::AtxHeading { level: 1 });
//! ```
//!
//! Parsing is total: every string is a document. The only fallible entry point
//! is [`parse_bytes`], which has to decode its input first.

pub mod error;
pub mod options;
pub mod parsing;

use std::borrow::Cow;

pub use error::ParseError;
pub use options::ParseOptions;
pub use parsing::{
    blocks::{BlockKind, FenceData, HtmlBlockKind, ListData, ListMarker},
    inline::{Autolink, AutolinkKind, Inline, Link},
    lines::LineSpan,
    refs::{LinkRefMap, LinkReference},
    tree::{BlockNode, Content, Document, NodeId},
};

/// Parses `text` with default options.
pub fn parse(text: &str) -> Document {
    parse_with_options(text, &ParseOptions::default())
}

/// Parses `text`: block structure first, then the inline content of every leaf.
pub fn parse_with_options(text: &str, options: &ParseOptions) -> Document {
    let mut doc = parsing::parse_blocks(text);
    parsing::parse_inlines(&mut doc, options);
    doc
}

/// Decodes `bytes` as UTF-8 and parses the result.
///
/// With [`ParseOptions::lossy_utf8`] invalid sequences become U+FFFD; otherwise
/// they are reported as [`ParseError::InvalidEncoding`].
pub fn parse_bytes(bytes: &[u8], options: &ParseOptions) -> Result<Document, ParseError> {
    let text = if options.lossy_utf8 {
        String::from_utf8_lossy(bytes)
    } else {
        Cow::Borrowed(std::str::from_utf8(bytes)?)
    };
    Ok(parse_with_options(&text, options))
}
