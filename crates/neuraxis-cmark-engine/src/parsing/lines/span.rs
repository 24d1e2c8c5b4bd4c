use serde::Serialize;

/// A 1-based, inclusive range of source lines `[start, end]`.
///
/// Blocks record the lines they were built from; list tightness is decided by
/// comparing where one sibling ends and the next begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct LineSpan {
    /// First source line of the block.
    pub start: u32,
    /// Last source line of the block.
    pub end: u32,
}

impl LineSpan {
    /// A span covering the single line `line`.
    #[must_use]
    pub fn at(line: u32) -> Self {
        Self {
            start: line,
            end: line,
        }
    }

    /// True when `next` does not start on the line directly after this span.
    #[must_use]
    pub fn gap_before(self, next: LineSpan) -> bool {
        self.end + 1 != next.start
    }
}
