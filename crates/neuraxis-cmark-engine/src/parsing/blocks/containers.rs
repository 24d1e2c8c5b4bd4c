use crate::parsing::{
    lines::column::{CODE_INDENT, is_space_or_tab},
    tree::NodeId,
};

use super::{
    builder::BlockBuilder,
    kinds::{BlockQuote, CodeFence},
    types::BlockKind,
};

/// Outcome of testing an open block against the current line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Continuation {
    /// The block continues; its markers have been consumed.
    Matched,
    /// The block does not continue on this line.
    Unmatched,
    /// The block used the whole line and closed itself (a closing code fence).
    LineConsumed,
}

impl BlockBuilder {
    /// Checks whether the open block `id` continues on the current line,
    /// consuming its continuation markers on success.
    pub(super) fn continue_block(&mut self, id: NodeId) -> Continuation {
        let line = &mut self.line;
        match self.doc.kind(id) {
            BlockKind::Document | BlockKind::List(_) => Continuation::Matched,
            BlockKind::BlockQuote => {
                if BlockQuote::has_marker(line) {
                    BlockQuote::consume_marker(line);
                    Continuation::Matched
                } else {
                    Continuation::Unmatched
                }
            }
            BlockKind::ListItem(data) => {
                if line.blank {
                    if self.doc.children(id).is_empty() {
                        // An item can begin with at most one blank line.
                        return Continuation::Unmatched;
                    }
                    line.advance_next_nonspace();
                    Continuation::Matched
                } else if line.indent >= data.content_indent() {
                    line.advance_offset(data.content_indent(), true);
                    Continuation::Matched
                } else {
                    Continuation::Unmatched
                }
            }
            BlockKind::FencedCode(fence) => {
                if line.indent <= 3 && CodeFence::closes(fence, line.rest_nonspace()) {
                    let end = self.line_number;
                    self.finalize(id, end);
                    return Continuation::LineConsumed;
                }
                let mut strip = fence.fence_offset;
                while strip > 0 && is_space_or_tab(line.peek()) {
                    line.advance_offset(1, true);
                    strip -= 1;
                }
                Continuation::Matched
            }
            BlockKind::IndentedCode => {
                if line.indented {
                    line.advance_offset(CODE_INDENT, true);
                    Continuation::Matched
                } else if line.blank {
                    line.advance_next_nonspace();
                    Continuation::Matched
                } else {
                    Continuation::Unmatched
                }
            }
            BlockKind::HtmlBlock { kind } => {
                if line.blank && kind.ends_at_blank_line() {
                    Continuation::Unmatched
                } else {
                    Continuation::Matched
                }
            }
            BlockKind::Paragraph => {
                if line.blank {
                    Continuation::Unmatched
                } else {
                    Continuation::Matched
                }
            }
            BlockKind::AtxHeading { .. }
            | BlockKind::SetextHeading { .. }
            | BlockKind::ThematicBreak => Continuation::Unmatched,
        }
    }
}
