//! # Inline Parsing
//!
//! Phase two: each paragraph or heading's raw text becomes a list of
//! [`Inline`] nodes, with references resolved against the frozen
//! [`LinkRefMap`](crate::parsing::refs::LinkRefMap).
//!
//! ## Architecture
//!
//! The parser walks the text once with a byte [`cursor::Cursor`]. Constructs
//! that are decided on the spot (code spans, autolinks, raw HTML, entities,
//! escapes, line breaks) become nodes immediately. `*`, `_`, `[` and `![` are
//! emitted as text and pushed on the [`delimiters`] stack; brackets resolve when
//! their `]` arrives and emphasis resolves at the end.
//!
//! Nodes are kept in a block-local [`arena`] while links and emphasis move them
//! around, so blocks can be parsed on different threads without sharing state.
//!
//! ## Modules
//!
//! - **`types`**: `Inline`, `Link`, `Autolink`
//! - **`kinds`**: constructs that own their syntax (code spans, autolinks, raw HTML, entities, escapes)
//! - **`links`**: label, destination and title scanners shared with reference definitions
//! - **`delimiters`**: the delimiter stack and emphasis resolution
//! - **`arena`**: the block-local node arena
//! - **`parser`**: `parse_inline()`
//!
//! ## Raw Zone Precedence
//!
//! Code spans take precedence: `` `*not emph*` `` parses as a single CodeSpan.

pub(crate) mod arena;
pub mod cursor;
pub(crate) mod delimiters;
pub mod kinds;
pub mod links;
pub mod parser;
pub mod types;

pub use parser::parse_inline;
pub use types::{Autolink, AutolinkKind, Inline, Link};

#[cfg(test)]
mod tests;
