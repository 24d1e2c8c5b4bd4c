//! Block-local arena for inline nodes while they are being resolved.
//!
//! Emphasis and link resolution move runs of siblings under new parents and
//! delete delimiter text, so nodes live in a doubly-linked tree of indices.
//! When the block is done the arena is turned into owned [`Inline`] values.

use super::types::{Autolink, Inline, Link};

pub(crate) type InlineIdx = usize;

/// Payload of an arena node.
#[derive(Debug, Clone)]
pub(crate) enum Slot {
    Root,
    Str(String),
    Emph,
    Strong,
    CodeSpan(String),
    Link {
        destination: String,
        title: Option<String>,
    },
    Image {
        destination: String,
        title: Option<String>,
    },
    HtmlInline(String),
    Autolink(Autolink),
    SoftBreak,
    HardBreak,
}

#[derive(Debug)]
struct Entry {
    slot: Slot,
    parent: Option<InlineIdx>,
    prev: Option<InlineIdx>,
    next: Option<InlineIdx>,
    first_child: Option<InlineIdx>,
    last_child: Option<InlineIdx>,
}

#[derive(Debug)]
pub(crate) struct InlineArena {
    entries: Vec<Entry>,
}

impl InlineArena {
    pub(crate) const ROOT: InlineIdx = 0;

    pub(crate) fn new() -> Self {
        let mut arena = Self {
            entries: Vec::new(),
        };
        arena.alloc(Slot::Root);
        arena
    }

    fn alloc(&mut self, slot: Slot) -> InlineIdx {
        self.entries.push(Entry {
            slot,
            parent: None,
            prev: None,
            next: None,
            first_child: None,
            last_child: None,
        });
        self.entries.len() - 1
    }

    /// Allocates `slot` as the last child of the root.
    pub(crate) fn append(&mut self, slot: Slot) -> InlineIdx {
        let idx = self.alloc(slot);
        self.append_child(Self::ROOT, idx);
        idx
    }

    /// Allocates `slot` without linking it anywhere.
    pub(crate) fn detached(&mut self, slot: Slot) -> InlineIdx {
        self.alloc(slot)
    }

    pub(crate) fn append_child(&mut self, parent: InlineIdx, child: InlineIdx) {
        self.unlink(child);
        let last = self.entries[parent].last_child;
        {
            let entry = &mut self.entries[child];
            entry.parent = Some(parent);
            entry.prev = last;
        }
        match last {
            Some(last) => self.entries[last].next = Some(child),
            None => self.entries[parent].first_child = Some(child),
        }
        self.entries[parent].last_child = Some(child);
    }

    /// Links `node` as the sibling directly after `sibling`.
    pub(crate) fn insert_after(&mut self, sibling: InlineIdx, node: InlineIdx) {
        self.unlink(node);
        let parent = self.entries[sibling].parent;
        let next = self.entries[sibling].next;
        {
            let entry = &mut self.entries[node];
            entry.parent = parent;
            entry.prev = Some(sibling);
            entry.next = next;
        }
        self.entries[sibling].next = Some(node);
        match next {
            Some(next) => self.entries[next].prev = Some(node),
            None => {
                if let Some(parent) = parent {
                    self.entries[parent].last_child = Some(node);
                }
            }
        }
    }

    pub(crate) fn unlink(&mut self, node: InlineIdx) {
        let Entry {
            parent, prev, next, ..
        } = self.entries[node];
        match prev {
            Some(prev) => self.entries[prev].next = next,
            None => {
                if let Some(parent) = parent {
                    self.entries[parent].first_child = next;
                }
            }
        }
        match next {
            Some(next) => self.entries[next].prev = prev,
            None => {
                if let Some(parent) = parent {
                    self.entries[parent].last_child = prev;
                }
            }
        }
        let entry = &mut self.entries[node];
        entry.parent = None;
        entry.prev = None;
        entry.next = None;
    }

    pub(crate) fn next_sibling(&self, node: InlineIdx) -> Option<InlineIdx> {
        self.entries[node].next
    }

    pub(crate) fn last_child(&self, node: InlineIdx) -> Option<InlineIdx> {
        self.entries[node].last_child
    }

    /// Moves every sibling after `start` up to, not including, `stop` under `parent`.
    pub(crate) fn adopt_siblings(
        &mut self,
        start: InlineIdx,
        stop: Option<InlineIdx>,
        parent: InlineIdx,
    ) {
        let mut cursor = self.next_sibling(start);
        while let Some(node) = cursor {
            if Some(node) == stop {
                break;
            }
            cursor = self.next_sibling(node);
            self.append_child(parent, node);
        }
    }

    pub(crate) fn text_mut(&mut self, node: InlineIdx) -> Option<&mut String> {
        match &mut self.entries[node].slot {
            Slot::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Converts the tree under the root into owned inlines, merging adjacent text.
    pub(crate) fn into_inlines(mut self) -> Vec<Inline> {
        // Explicit stack so deeply nested emphasis cannot exhaust the call stack.
        struct Frame {
            node: InlineIdx,
            next_child: Option<InlineIdx>,
            out: Vec<Inline>,
        }

        let mut stack = vec![Frame {
            node: Self::ROOT,
            next_child: self.entries[Self::ROOT].first_child,
            out: Vec::new(),
        }];
        loop {
            let Some(frame) = stack.last_mut() else {
                return Vec::new();
            };
            if let Some(child) = frame.next_child {
                frame.next_child = self.entries[child].next;
                if is_container(&self.entries[child].slot) {
                    let first = self.entries[child].first_child;
                    stack.push(Frame {
                        node: child,
                        next_child: first,
                        out: Vec::new(),
                    });
                } else {
                    let slot = std::mem::replace(&mut self.entries[child].slot, Slot::Root);
                    push_merged(&mut frame.out, leaf(slot));
                }
                continue;
            }
            let Some(done) = stack.pop() else {
                return Vec::new();
            };
            let slot = std::mem::replace(&mut self.entries[done.node].slot, Slot::Root);
            let Some(parent) = stack.last_mut() else {
                return done.out;
            };
            let node = match slot {
                Slot::Emph => Inline::Emph(done.out),
                Slot::Strong => Inline::Strong(done.out),
                Slot::Link { destination, title } => Inline::Link(Link {
                    destination,
                    title,
                    children: done.out,
                }),
                Slot::Image { destination, title } => Inline::Image(Link {
                    destination,
                    title,
                    children: done.out,
                }),
                other => leaf(other),
            };
            push_merged(&mut parent.out, node);
        }
    }
}

fn is_container(slot: &Slot) -> bool {
    matches!(
        slot,
        Slot::Emph | Slot::Strong | Slot::Link { .. } | Slot::Image { .. }
    )
}

fn leaf(slot: Slot) -> Inline {
    match slot {
        Slot::Str(s) => Inline::Str(s),
        Slot::CodeSpan(s) => Inline::CodeSpan(s),
        Slot::HtmlInline(s) => Inline::HtmlInline(s),
        Slot::Autolink(a) => Inline::Autolink(a),
        Slot::SoftBreak => Inline::SoftBreak,
        Slot::HardBreak => Inline::HardBreak,
        Slot::Emph => Inline::Emph(Vec::new()),
        Slot::Strong => Inline::Strong(Vec::new()),
        Slot::Link { destination, title } => Inline::Link(Link {
            destination,
            title,
            children: Vec::new(),
        }),
        Slot::Image { destination, title } => Inline::Image(Link {
            destination,
            title,
            children: Vec::new(),
        }),
        Slot::Root => Inline::Str(String::new()),
    }
}

fn push_merged(out: &mut Vec<Inline>, node: Inline) {
    if let Inline::Str(s) = &node {
        if s.is_empty() {
            return;
        }
        if let Some(Inline::Str(prev)) = out.last_mut() {
            prev.push_str(s);
            return;
        }
    }
    out.push(node);
}
