//! # Block Parsing
//!
//! Phase one of the parse: lines go in one at a time and come out as a tree of
//! container and leaf blocks, with link reference definitions collected on the way.
//!
//! ## Per-line steps
//!
//! 1. **Continuation** (`containers`): walk the open path from the root and let
//!    each open block consume its markers; stop at the first block that does not
//!    continue
//! 2. **Block starts** (`open`): below the deepest match, try the start
//!    conditions in precedence order, opening containers until a leaf starts or
//!    nothing matches
//! 3. **Text** (`builder`): the rest of the line goes to a lazy paragraph, to
//!    the open leaf that accepts lines, or into a new paragraph
//!
//! ## Modules
//!
//! - **`types`**: `BlockKind` and per-kind attributes
//! - **`kinds`**: block types with owned delimiters (BlockQuote, CodeFence, ListItem, ...)
//! - **`containers`**: continuation rules per open block
//! - **`open`**: ordered block start table
//! - **`builder`**: `BlockBuilder`, the open path and closing logic
//!
//! ## Key Invariants
//!
//! - The open blocks form a single path from the root to the tip
//! - Closed blocks are never reopened and their content never changes
//! - Fenced code and HTML blocks are raw zones: no block parsing inside

pub mod builder;
pub mod containers;
pub mod kinds;
pub mod open;
pub mod types;

pub use builder::BlockBuilder;
pub use types::{BlockKind, FenceData, HtmlBlockKind, ListData, ListMarker};
