//! # Line Scanning
//!
//! Splits decoded text into logical lines and tracks tab-aware columns while the
//! block builder consumes container markers.
//!
//! - **`split_lines`**: LF, CR and CRLF terminators, stripped; `U+0000` becomes `U+FFFD`
//! - **`column`**: `LineState`, the per-line offset/column cursor
//! - **`span`**: `LineSpan`, 1-based inclusive source line ranges

pub mod column;
pub mod span;

use std::borrow::Cow;

pub use column::{LineState, TAB_STOP};
pub use span::LineSpan;

/// Iterator over the logical lines of a document.
///
/// A terminator at the very end of the input does not produce a trailing empty line.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    rest: &'a str,
}

/// Returns an iterator over the lines of `text` with terminators removed.
pub fn split_lines(text: &str) -> Lines<'_> {
    Lines { rest: text }
}

impl<'a> Iterator for Lines<'a> {
    type Item = Cow<'a, str>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let (line, rest) = match self.rest.find(['\n', '\r']) {
            Some(i) => {
                let terminator = if self.rest[i..].starts_with("\r\n") { 2 } else { 1 };
                (&self.rest[..i], &self.rest[i + terminator..])
            }
            None => (self.rest, ""),
        };
        self.rest = rest;
        Some(replace_nul(line))
    }
}

fn replace_nul(line: &str) -> Cow<'_, str> {
    if line.contains('\0') {
        Cow::Owned(line.replace('\0', "\u{FFFD}"))
    } else {
        Cow::Borrowed(line)
    }
}
