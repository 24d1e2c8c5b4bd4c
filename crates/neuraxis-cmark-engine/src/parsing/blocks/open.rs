use crate::parsing::{
    lines::column::CODE_INDENT,
    tree::{Content, NodeId},
};

use super::{
    builder::BlockBuilder,
    kinds::{
        AtxHeading, BlockQuote, CodeFence, HtmlBlock, ListItem, Paragraph, SetextUnderline,
        ThematicBreak,
    },
    types::BlockKind,
};

/// Result of trying the block starts against the current line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockStart {
    NoMatch,
    /// A container opened; keep looking for starts inside it.
    Container,
    /// A leaf opened or a paragraph became a heading; the rest of the line is content.
    Leaf,
}

type StartFn = fn(&mut BlockBuilder, NodeId) -> BlockStart;

/// Tried in order; the first match wins.
const BLOCK_STARTS: [StartFn; 8] = [
    start_block_quote,
    start_atx_heading,
    start_fenced_code,
    start_html_block,
    start_setext_heading,
    start_thematic_break,
    start_list_item,
    start_indented_code,
];

/// Cheap filter: a non-indented line can only start a block with one of these bytes.
pub fn may_start_block(rest: &str) -> bool {
    matches!(
        rest.as_bytes().first(),
        Some(b'#' | b'`' | b'~' | b'*' | b'+' | b'_' | b'=' | b'<' | b'>' | b'-' | b'0'..=b'9')
    )
}

/// Tries every block start against the current line, with `container` the
/// deepest block matched so far.
pub(super) fn try_start(builder: &mut BlockBuilder, container: NodeId) -> BlockStart {
    for start in BLOCK_STARTS {
        let result = start(builder, container);
        if result != BlockStart::NoMatch {
            return result;
        }
    }
    BlockStart::NoMatch
}

fn start_block_quote(b: &mut BlockBuilder, _container: NodeId) -> BlockStart {
    if !BlockQuote::has_marker(&b.line) {
        return BlockStart::NoMatch;
    }
    BlockQuote::consume_marker(&mut b.line);
    b.close_unmatched();
    b.add_child(BlockKind::BlockQuote);
    BlockStart::Container
}

fn start_atx_heading(b: &mut BlockBuilder, _container: NodeId) -> BlockStart {
    if b.line.indented {
        return BlockStart::NoMatch;
    }
    let Some((level, marker_len)) = AtxHeading::opening(b.line.rest_nonspace()) else {
        return BlockStart::NoMatch;
    };
    b.line.advance_next_nonspace();
    b.line.advance_offset(marker_len, false);
    b.close_unmatched();
    let heading = b.add_child(BlockKind::AtxHeading { level });
    b.doc.node_mut(heading).content = Content::Raw(AtxHeading::content(b.line.rest()));
    b.line.advance_to_end();
    BlockStart::Leaf
}

fn start_fenced_code(b: &mut BlockBuilder, _container: NodeId) -> BlockStart {
    if b.line.indented {
        return BlockStart::NoMatch;
    }
    let Some(fence) = CodeFence::opening(b.line.rest_nonspace(), b.line.indent) else {
        return BlockStart::NoMatch;
    };
    let length = fence.fence_length;
    b.close_unmatched();
    b.add_child(BlockKind::FencedCode(fence));
    b.line.advance_next_nonspace();
    b.line.advance_offset(length, false);
    BlockStart::Leaf
}

fn start_html_block(b: &mut BlockBuilder, container: NodeId) -> BlockStart {
    if b.line.indented || b.line.peek_nonspace() != Some(HtmlBlock::OPEN) {
        return BlockStart::NoMatch;
    }
    let may_interrupt_paragraph =
        !matches!(b.doc.kind(container), BlockKind::Paragraph) && !b.lazy_paragraph_pending();
    let Some(kind) = HtmlBlock::start(b.line.rest_nonspace(), may_interrupt_paragraph) else {
        return BlockStart::NoMatch;
    };
    b.close_unmatched();
    // Leading spaces are kept as part of the block's content.
    b.add_child(BlockKind::HtmlBlock { kind });
    BlockStart::Leaf
}

fn start_setext_heading(b: &mut BlockBuilder, container: NodeId) -> BlockStart {
    if b.line.indented || !matches!(b.doc.kind(container), BlockKind::Paragraph) {
        return BlockStart::NoMatch;
    }
    let Some(level) = SetextUnderline::level(b.line.rest_nonspace()) else {
        return BlockStart::NoMatch;
    };
    b.close_unmatched();

    let mut raw = match std::mem::take(&mut b.doc.node_mut(container).content) {
        Content::Raw(raw) => raw,
        _ => String::new(),
    };
    Paragraph::extract_definitions(&mut raw, b.doc.link_refs_mut());
    let has_text = !raw.is_empty();
    let node = b.doc.node_mut(container);
    node.content = Content::Raw(raw);
    if !has_text {
        return BlockStart::NoMatch;
    }
    node.kind = BlockKind::SetextHeading { level };
    log::trace!("paragraph {container:?} became a level {level} setext heading");
    b.tip = container;
    b.line.advance_to_end();
    BlockStart::Leaf
}

fn start_thematic_break(b: &mut BlockBuilder, _container: NodeId) -> BlockStart {
    if b.line.indented || !ThematicBreak::matches(b.line.rest_nonspace()) {
        return BlockStart::NoMatch;
    }
    b.close_unmatched();
    b.add_child(BlockKind::ThematicBreak);
    b.line.advance_to_end();
    BlockStart::Leaf
}

fn start_list_item(b: &mut BlockBuilder, container: NodeId) -> BlockStart {
    let container_kind = b.doc.kind(container);
    if b.line.indented && !matches!(container_kind, BlockKind::List(_)) {
        return BlockStart::NoMatch;
    }
    let interrupts_paragraph = matches!(container_kind, BlockKind::Paragraph);
    let Some(data) = ListItem::parse_marker(&mut b.line, interrupts_paragraph) else {
        return BlockStart::NoMatch;
    };
    b.close_unmatched();
    let continues_list = match b.doc.kind(b.tip) {
        BlockKind::List(list) => list.marker.same_list(data.marker),
        _ => false,
    };
    if !continues_list {
        b.add_child(BlockKind::List(data.clone()));
    }
    b.add_child(BlockKind::ListItem(data));
    BlockStart::Container
}

fn start_indented_code(b: &mut BlockBuilder, _container: NodeId) -> BlockStart {
    if !b.line.indented
        || b.line.blank
        || matches!(b.doc.kind(b.tip), BlockKind::Paragraph)
    {
        return BlockStart::NoMatch;
    }
    b.line.advance_offset(CODE_INDENT, true);
    b.close_unmatched();
    b.add_child(BlockKind::IndentedCode);
    BlockStart::Leaf
}
