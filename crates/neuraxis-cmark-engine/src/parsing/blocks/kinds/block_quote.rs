use crate::parsing::lines::{LineState, column::is_space_or_tab};

/// Blockquote block type with owned delimiter constant.
///
/// All blockquote syntax knowledge lives here: the builder only asks whether
/// a line carries the marker and lets this type consume it.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: u8 = b'>';

    /// True when the line's next non-space character is `>` at an indent of at most three.
    pub fn has_marker(line: &LineState) -> bool {
        !line.indented && line.peek_nonspace() == Some(Self::PREFIX)
    }

    /// Consumes `>` and the optional single space (or one column of a tab) after it.
    pub fn consume_marker(line: &mut LineState) {
        line.advance_next_nonspace();
        line.advance_offset(1, false);
        if is_space_or_tab(line.peek()) {
            line.advance_offset(1, true);
        }
    }
}
