//! # Document Tree
//!
//! Arena of block nodes addressed by [`NodeId`]. Parent and child links are
//! indices into the arena, so the open path kept by the builder is just a
//! stack of handles.

use serde::Serialize;

use super::{
    blocks::BlockKind,
    inline::Inline,
    lines::LineSpan,
    refs::LinkRefMap,
};

/// Handle to a block node inside a [`Document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NodeId(u32);

impl NodeId {
    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// What a block holds besides its children.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub enum Content {
    /// Containers and thematic breaks.
    #[default]
    None,
    /// Text waiting for the inline phase.
    Raw(String),
    /// Final text of code and HTML blocks.
    Literal(String),
    /// Resolved inline children of paragraphs and headings.
    Inlines(Vec<Inline>),
}

impl Content {
    pub fn raw(&self) -> Option<&str> {
        match self {
            Content::Raw(s) => Some(s),
            _ => None,
        }
    }

    pub fn literal(&self) -> Option<&str> {
        match self {
            Content::Literal(s) => Some(s),
            _ => None,
        }
    }

    pub fn inlines(&self) -> Option<&[Inline]> {
        match self {
            Content::Inlines(v) => Some(v),
            _ => None,
        }
    }
}

/// One block of the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockNode {
    pub kind: BlockKind,
    /// `None` for the root and for detached nodes.
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
    /// Source lines this block was built from.
    pub lines: LineSpan,
    pub content: Content,
    #[serde(skip)]
    pub(crate) open: bool,
}

/// A parsed document: the block arena plus the link reference definitions it declared.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    nodes: Vec<BlockNode>,
    refs: LinkRefMap,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// An empty document holding only the open root node.
    pub fn new() -> Self {
        Self {
            nodes: vec![BlockNode {
                kind: BlockKind::Document,
                parent: None,
                children: Vec::new(),
                lines: LineSpan { start: 1, end: 0 },
                content: Content::None,
                open: true,
            }],
            refs: LinkRefMap::default(),
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &BlockNode {
        &self.nodes[id.index()]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut BlockNode {
        &mut self.nodes[id.index()]
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).parent
    }

    pub fn kind(&self, id: NodeId) -> &BlockKind {
        &self.node(id).kind
    }

    pub fn last_child(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).children.last().copied()
    }

    /// Link reference definitions collected while building the blocks.
    pub fn link_refs(&self) -> &LinkRefMap {
        &self.refs
    }

    pub(crate) fn link_refs_mut(&mut self) -> &mut LinkRefMap {
        &mut self.refs
    }

    /// Number of nodes in the arena, detached ones included.
    pub fn arena_len(&self) -> usize {
        self.nodes.len()
    }

    /// Pre-order walk over every node reachable from the root.
    pub fn descendants(&self) -> Descendants<'_> {
        Descendants {
            doc: self,
            stack: vec![self.root()],
        }
    }

    /// Creates an open node and appends it to `parent`'s children.
    pub(crate) fn append_child(&mut self, parent: NodeId, kind: BlockKind, line: u32) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        let content = if kind.accepts_lines() {
            Content::Raw(String::new())
        } else {
            Content::None
        };
        self.nodes.push(BlockNode {
            kind,
            parent: Some(parent),
            children: Vec::new(),
            lines: LineSpan::at(line),
            content,
            open: true,
        });
        self.node_mut(parent).children.push(id);
        id
    }

    /// Unlinks `id` from its parent. The node stays in the arena, unreachable.
    pub(crate) fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.nodes[id.index()].parent.take() {
            self.node_mut(parent).children.retain(|&c| c != id);
        }
    }

    /// Leaf blocks whose raw text still has to go through the inline phase.
    pub(crate) fn pending_inline_blocks(&self) -> Vec<NodeId> {
        self.descendants()
            .filter(|&id| {
                let n = self.node(id);
                n.kind.has_inlines() && matches!(n.content, Content::Raw(_))
            })
            .collect()
    }
}

/// Iterator returned by [`Document::descendants`].
pub struct Descendants<'a> {
    doc: &'a Document,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        self.stack
            .extend(self.doc.children(id).iter().rev().copied());
        Some(id)
    }
}
