use crate::parsing::{
    inline::kinds::Escape,
    lines::{LineSpan, LineState},
    tree::{Content, Document, NodeId},
};

use super::{
    containers::Continuation,
    kinds::{HtmlBlock, IndentedCode, Paragraph},
    open::{self, BlockStart},
    types::BlockKind,
};

/// Phase one: consumes lines in order and grows the block tree.
///
/// The open blocks always form a single path from the root down to `tip`.
/// Each line first walks that path testing continuation, then looks for new
/// block starts below the deepest match, and finally hands what is left of the
/// line to the block that accepts text.
pub struct BlockBuilder {
    pub(super) doc: Document,
    pub(super) line: LineState,
    /// 1-based number of the line being consumed.
    pub(super) line_number: u32,
    /// Deepest open block.
    pub(super) tip: NodeId,
    /// `tip` as it was before the current line.
    pub(super) old_tip: NodeId,
    /// Deepest block whose continuation matched on the current line.
    pub(super) last_matched: NodeId,
    /// Whether the blocks between `last_matched` and `old_tip` have been closed.
    pub(super) all_closed: bool,
}

impl BlockBuilder {
    pub fn new() -> Self {
        let doc = Document::new();
        let root = doc.root();
        Self {
            doc,
            line: LineState::default(),
            line_number: 0,
            tip: root,
            old_tip: root,
            last_matched: root,
            all_closed: true,
        }
    }

    /// Incorporates one line, terminator already stripped.
    pub fn push(&mut self, text: &str) {
        self.line_number += 1;
        self.line.reset(text);
        self.old_tip = self.tip;

        let mut container = self.doc.root();
        while let Some(child) = self
            .doc
            .last_child(container)
            .filter(|&c| self.doc.node(c).open)
        {
            container = child;
            self.line.find_next_nonspace();
            match self.continue_block(container) {
                Continuation::Matched => {}
                Continuation::Unmatched => {
                    if let Some(parent) = self.doc.parent(container) {
                        container = parent;
                    }
                    break;
                }
                Continuation::LineConsumed => return,
            }
        }

        self.all_closed = container == self.old_tip;
        self.last_matched = container;

        let mut matched_leaf = {
            let kind = self.doc.kind(container);
            !matches!(kind, BlockKind::Paragraph) && kind.accepts_lines()
        };
        while !matched_leaf {
            self.line.find_next_nonspace();
            if !self.line.indented && !open::may_start_block(self.line.rest_nonspace()) {
                self.line.advance_next_nonspace();
                break;
            }
            match open::try_start(self, container) {
                BlockStart::Container => container = self.tip,
                BlockStart::Leaf => {
                    container = self.tip;
                    matched_leaf = true;
                }
                BlockStart::NoMatch => {
                    self.line.advance_next_nonspace();
                    break;
                }
            }
        }

        if self.lazy_paragraph_pending() {
            log::trace!("line {} continues paragraph lazily", self.line_number);
            self.add_line();
            return;
        }

        self.close_unmatched();
        let kind = self.doc.kind(container);
        if kind.accepts_lines() {
            let html_kind = match kind {
                BlockKind::HtmlBlock { kind } => Some(*kind),
                _ => None,
            };
            self.add_line();
            if let Some(html) = html_kind
                && !html.ends_at_blank_line()
                && HtmlBlock::ends(html, self.line.rest())
            {
                self.finalize(container, self.line_number);
            }
        } else if self.line.offset < self.line.text.len() && !self.line.blank {
            self.add_child(BlockKind::Paragraph);
            self.line.advance_next_nonspace();
            self.add_line();
        }
    }

    /// Closes every open block and returns the finished tree.
    pub fn finish(mut self) -> Document {
        let root = self.doc.root();
        loop {
            let tip = self.tip;
            self.finalize(tip, self.line_number);
            if tip == root {
                break;
            }
        }
        log::debug!(
            "block phase done: {} lines, {} nodes, {} link references",
            self.line_number,
            self.doc.arena_len(),
            self.doc.link_refs().len()
        );
        self.doc
    }

    /// True when the current line can only continue the open paragraph lazily.
    pub(super) fn lazy_paragraph_pending(&self) -> bool {
        !self.all_closed && !self.line.blank && matches!(self.doc.kind(self.tip), BlockKind::Paragraph)
    }

    /// Closes the blocks left unmatched by the current line.
    pub(super) fn close_unmatched(&mut self) {
        if self.all_closed {
            return;
        }
        let end = self.line_number.saturating_sub(1);
        while self.old_tip != self.last_matched {
            let Some(parent) = self.doc.parent(self.old_tip) else {
                break;
            };
            self.finalize(self.old_tip, end);
            self.old_tip = parent;
        }
        self.all_closed = true;
    }

    /// Opens a new block under the tip, closing blocks that cannot hold it.
    pub(super) fn add_child(&mut self, kind: BlockKind) -> NodeId {
        let root = self.doc.root();
        let end = self.line_number.saturating_sub(1);
        while self.tip != root && !self.doc.kind(self.tip).can_contain(&kind) {
            self.finalize(self.tip, end);
        }
        log::trace!("line {}: open {}", self.line_number, kind.name());
        let id = self.doc.append_child(self.tip, kind, self.line_number);
        self.tip = id;
        id
    }

    /// Appends the rest of the current line to the tip's raw text.
    pub(super) fn add_line(&mut self) {
        let text = self.line.take_remainder();
        if let Content::Raw(raw) = &mut self.doc.node_mut(self.tip).content {
            raw.push_str(&text);
            raw.push('\n');
        }
    }

    /// Closes `id` at source line `end` and makes its parent the tip.
    pub(super) fn finalize(&mut self, id: NodeId, end: u32) {
        let parent = self.doc.parent(id);
        {
            let node = self.doc.node_mut(id);
            node.open = false;
            node.lines.end = end;
        }
        self.close_kind(id);
        log::trace!(
            "close {} {:?} at line {}",
            self.doc.kind(id).name(),
            id,
            self.doc.node(id).lines.end
        );
        if let Some(parent) = parent {
            self.tip = parent;
        }
    }

    /// Per-kind work done once a block can no longer change.
    fn close_kind(&mut self, id: NodeId) {
        match self.doc.kind(id) {
            BlockKind::Paragraph => {
                let mut raw = self.take_raw(id);
                let had_definitions =
                    Paragraph::extract_definitions(&mut raw, self.doc.link_refs_mut());
                // Also empty when a failed setext underline already took the definitions.
                if Paragraph::is_blank(&raw) {
                    log::trace!("paragraph {id:?} left empty, definitions: {had_definitions}");
                    self.doc.detach(id);
                } else {
                    self.doc.node_mut(id).content = Content::Raw(raw);
                }
            }
            BlockKind::FencedCode(_) => {
                let raw = self.take_raw(id);
                let (first, rest) = raw.split_once('\n').unwrap_or((raw.as_str(), ""));
                let info = Escape::unescape(first.trim()).into_owned();
                let literal = rest.to_string();
                let node = self.doc.node_mut(id);
                if let BlockKind::FencedCode(fence) = &mut node.kind {
                    fence.info = info;
                }
                node.content = Content::Literal(literal);
            }
            BlockKind::IndentedCode => {
                let raw = self.take_raw(id);
                self.exclude_blank_tail(id, &raw);
                self.doc.node_mut(id).content = Content::Literal(IndentedCode::literal(&raw));
            }
            BlockKind::HtmlBlock { .. } => {
                let raw = self.take_raw(id);
                self.exclude_blank_tail(id, &raw);
                self.doc.node_mut(id).content = Content::Literal(strip_trailing_blank_lines(&raw));
            }
            BlockKind::ListItem(_) => {
                let span = self.doc.node(id).lines;
                let end = self
                    .doc
                    .last_child(id)
                    .map_or(span.start, |c| self.doc.node(c).lines.end);
                self.doc.node_mut(id).lines.end = end;
            }
            BlockKind::List(_) => {
                let tight = self.list_is_tight(id);
                let end = self.doc.last_child(id).map(|c| self.doc.node(c).lines.end);
                let node = self.doc.node_mut(id);
                if let BlockKind::List(data) = &mut node.kind {
                    data.tight = tight;
                }
                if let Some(end) = end {
                    node.lines.end = end;
                }
            }
            _ => {}
        }
    }

    /// A list is loose when a blank line separates two items, or two blocks inside an item.
    fn list_is_tight(&self, list: NodeId) -> bool {
        let items = self.doc.children(list);
        !has_gap(&self.doc, items)
            && items
                .iter()
                .all(|&item| !has_gap(&self.doc, self.doc.children(item)))
    }

    /// Leaves that accepted blank lines end at their last non-blank line, so a
    /// blank line at the end of a list item still counts as a gap.
    fn exclude_blank_tail(&mut self, id: NodeId, raw: &str) {
        let blank = trailing_blank_lines(raw);
        let span = &mut self.doc.node_mut(id).lines;
        span.end = span.end.saturating_sub(blank).max(span.start);
    }

    fn take_raw(&mut self, id: NodeId) -> String {
        match std::mem::take(&mut self.doc.node_mut(id).content) {
            Content::Raw(raw) => raw,
            _ => String::new(),
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn has_gap(doc: &Document, siblings: &[NodeId]) -> bool {
    siblings.windows(2).any(|pair| {
        let (a, b): (LineSpan, LineSpan) = (doc.node(pair[0]).lines, doc.node(pair[1]).lines);
        a.gap_before(b)
    })
}

/// Number of whitespace-only lines at the end of `raw`.
fn trailing_blank_lines(raw: &str) -> u32 {
    let Some(body) = raw.strip_suffix('\n') else {
        return 0;
    };
    body.rsplit('\n').take_while(|line| Paragraph::is_blank(line)).count() as u32
}

/// Drops the final line ending and any blank lines made of spaces before it.
fn strip_trailing_blank_lines(raw: &str) -> String {
    let mut end = raw.len();
    loop {
        let trimmed = raw[..end].trim_end_matches(' ');
        match trimmed.strip_suffix('\n') {
            Some(rest) => end = rest.len(),
            None => break,
        }
    }
    raw[..end].to_string()
}
