//! # Snapshot Testing Support
//!
//! Utilities for testing the parser via snapshot assertions and invariant checks.
//!
//! ## Modules
//!
//! - **`outline`**: Renders a document as an indented, position-free text tree
//!   for `insta` snapshots
//! - **`invariants`**: Runtime checks for tree consistency (parent links, nesting
//!   rules, closed blocks, content shape per kind, merged text)
//!
//! ## Testing Strategy
//!
//! "Tests are the spec": parsing behavior is pinned by snapshot tests of the
//! outline rather than by a separate formal grammar.

pub mod invariants;
pub mod outline;

pub use invariants::check as invariants;
pub use outline::outline;
