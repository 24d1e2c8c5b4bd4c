//! The delimiter stack: `*`/`_` runs and `[`/`![` openers waiting for a partner.
//!
//! Entries live in a `Vec` and are chained with `prev`/`next` indices, so an
//! entry can be removed from the middle while a scan keeps its place. Bracket
//! openers are also chained among themselves, so finding the nearest one does
//! not walk over emphasis runs.

use unicode_categories::UnicodeCategories;

use super::arena::{InlineArena, InlineIdx, Slot};

/// What a stack entry stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DelimKind {
    Asterisk,
    Underscore,
    /// `[`
    Bracket,
    /// `![`
    ImageBracket,
}

impl DelimKind {
    pub(crate) fn is_bracket(self) -> bool {
        matches!(self, DelimKind::Bracket | DelimKind::ImageBracket)
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Delimiter {
    pub kind: DelimKind,
    /// The `Str` node holding the run's characters.
    pub node: InlineIdx,
    /// Characters left in the run.
    pub count: usize,
    /// Run length at tokenization, for the multiple-of-3 rule.
    pub orig_count: usize,
    pub can_open: bool,
    pub can_close: bool,
    /// Brackets only: another bracket opener followed this one.
    pub bracket_after: bool,
    /// Brackets only: byte position just after the opener, start of the link text.
    pub text_start: usize,
    prev: Option<usize>,
    next: Option<usize>,
    /// Brackets only: the bracket opener pushed before this one.
    prev_bracket: Option<usize>,
}

#[derive(Debug, Default)]
pub(crate) struct DelimiterStack {
    entries: Vec<Delimiter>,
    top: Option<usize>,
    top_bracket: Option<usize>,
    /// `[` openers with an index below this sit inside a formed link and are inactive.
    link_floor: usize,
}

/// Flanking classification of a delimiter run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Flanking {
    pub can_open: bool,
    pub can_close: bool,
}

/// Decides whether a run of `*` or `_` can open and/or close emphasis.
///
/// `before` and `after` are the characters around the run; the edges of the
/// text count as a line ending.
pub(crate) fn flanking(kind: DelimKind, before: char, after: char) -> Flanking {
    let after_ws = after.is_whitespace();
    let after_punct = is_punctuation(after);
    let before_ws = before.is_whitespace();
    let before_punct = is_punctuation(before);

    let left = !after_ws && (!after_punct || before_ws || before_punct);
    let right = !before_ws && (!before_punct || after_ws || after_punct);

    match kind {
        DelimKind::Underscore => Flanking {
            can_open: left && (!right || before_punct),
            can_close: right && (!left || after_punct),
        },
        _ => Flanking {
            can_open: left,
            can_close: right,
        },
    }
}

/// ASCII punctuation, or a character in the Unicode P (punctuation) or S (symbol) categories.
pub(crate) fn is_punctuation(c: char) -> bool {
    if c.is_ascii() {
        c.is_ascii_punctuation()
    } else {
        c.is_punctuation() || c.is_symbol()
    }
}

impl DelimiterStack {
    #[cfg(test)]
    fn top(&self) -> Option<usize> {
        self.top
    }

    pub(crate) fn get(&self, idx: usize) -> &Delimiter {
        &self.entries[idx]
    }

    #[cfg(test)]
    fn prev(&self, idx: usize) -> Option<usize> {
        self.entries[idx].prev
    }

    /// Pushes an emphasis run.
    pub(crate) fn push_run(&mut self, kind: DelimKind, node: InlineIdx, count: usize, f: Flanking) {
        self.push(Delimiter {
            kind,
            node,
            count,
            orig_count: count,
            can_open: f.can_open,
            can_close: f.can_close,
            bracket_after: false,
            text_start: 0,
            prev: None,
            next: None,
            prev_bracket: None,
        });
    }

    /// Pushes a `[` or `![` opener whose link text starts at `text_start`.
    pub(crate) fn push_bracket(&mut self, image: bool, node: InlineIdx, text_start: usize) {
        if let Some(prev) = self.top_bracket {
            self.entries[prev].bracket_after = true;
        }
        self.top_bracket = Some(self.entries.len());
        self.push(Delimiter {
            kind: if image {
                DelimKind::ImageBracket
            } else {
                DelimKind::Bracket
            },
            node,
            count: 1,
            orig_count: 1,
            can_open: false,
            can_close: false,
            bracket_after: false,
            text_start,
            prev: None,
            next: None,
            prev_bracket: self.top_bracket,
        });
    }

    fn push(&mut self, mut entry: Delimiter) {
        let idx = self.entries.len();
        entry.prev = self.top;
        if let Some(top) = self.top {
            self.entries[top].next = Some(idx);
        }
        self.entries.push(entry);
        self.top = Some(idx);
    }

    /// The nearest bracket opener still on the stack.
    pub(crate) fn last_bracket(&self) -> Option<usize> {
        self.top_bracket
    }

    /// `![` openers are always active; `[` openers stop being active once a
    /// link has formed after them.
    pub(crate) fn is_active(&self, idx: usize) -> bool {
        self.entries[idx].kind == DelimKind::ImageBracket || idx >= self.link_floor
    }

    /// Brackets leave the stack from the top while tokenizing; a bracket
    /// removed from below only happens in the final emphasis pass.
    pub(crate) fn remove(&mut self, idx: usize) {
        if self.top_bracket == Some(idx) {
            self.top_bracket = self.entries[idx].prev_bracket;
        }
        let (prev, next) = (self.entries[idx].prev, self.entries[idx].next);
        if let Some(prev) = prev {
            self.entries[prev].next = next;
        }
        match next {
            Some(next) => self.entries[next].prev = prev,
            None => self.top = prev,
        }
        self.entries[idx].prev = None;
        self.entries[idx].next = None;
    }

    /// Deactivates every `[` opener pushed so far, so no link can contain a link.
    pub(crate) fn deactivate_link_openers(&mut self) {
        self.link_floor = self.entries.len();
    }

    fn remove_between(&mut self, opener: usize, closer: usize) {
        let mut cursor = self.entries[closer].prev;
        while let Some(idx) = cursor {
            if idx == opener {
                break;
            }
            cursor = self.entries[idx].prev;
            self.remove(idx);
        }
    }

    /// Resolves emphasis among the entries above `bottom` (the whole stack for `None`),
    /// then drops those entries. Unmatched runs stay as literal text.
    pub(crate) fn process_emphasis(&mut self, arena: &mut InlineArena, bottom: Option<usize>) {
        // Per character, closer-can-open and length mod 3: the floor below which
        // no opener was found last time.
        let mut openers_bottom = [bottom; 12];

        let mut closer = self.first_above(bottom);
        while let Some(c) = closer {
            let entry = &self.entries[c];
            if !entry.can_close || entry.kind.is_bracket() {
                closer = entry.next;
                continue;
            }
            let class = bottom_class(entry);
            let opener = self.find_opener(c, bottom, openers_bottom[class]);

            match opener {
                Some(o) => closer = self.match_pair(arena, o, c),
                None => {
                    openers_bottom[class] = self.entries[c].prev;
                    let next = self.entries[c].next;
                    if !self.entries[c].can_open {
                        self.remove(c);
                    }
                    closer = next;
                }
            }
        }

        while let Some(top) = self.top {
            if Some(top) == bottom {
                break;
            }
            self.remove(top);
        }
    }

    fn first_above(&self, bottom: Option<usize>) -> Option<usize> {
        let mut cursor = self.top;
        let mut first = None;
        while let Some(idx) = cursor {
            if Some(idx) == bottom {
                break;
            }
            first = Some(idx);
            cursor = self.entries[idx].prev;
        }
        first
    }

    fn find_opener(
        &self,
        closer: usize,
        bottom: Option<usize>,
        class_bottom: Option<usize>,
    ) -> Option<usize> {
        let c = &self.entries[closer];
        let mut cursor = c.prev;
        while let Some(idx) = cursor {
            if Some(idx) == bottom || Some(idx) == class_bottom {
                break;
            }
            let o = &self.entries[idx];
            let odd_match = (c.can_open || o.can_close)
                && c.orig_count % 3 != 0
                && (o.orig_count + c.orig_count) % 3 == 0;
            if o.kind == c.kind && o.can_open && !odd_match {
                return Some(idx);
            }
            cursor = o.prev;
        }
        None
    }

    /// Wraps the nodes between `opener` and `closer` in Emph or Strong.
    /// Returns the entry to continue scanning from.
    fn match_pair(&mut self, arena: &mut InlineArena, opener: usize, closer: usize) -> Option<usize> {
        let used = if self.entries[opener].count >= 2 && self.entries[closer].count >= 2 {
            2
        } else {
            1
        };
        let opener_node = self.entries[opener].node;
        let closer_node = self.entries[closer].node;
        self.entries[opener].count -= used;
        self.entries[closer].count -= used;
        for node in [opener_node, closer_node] {
            if let Some(text) = arena.text_mut(node) {
                text.truncate(text.len().saturating_sub(used));
            }
        }

        let emph = arena.detached(if used == 1 { Slot::Emph } else { Slot::Strong });
        arena.adopt_siblings(opener_node, Some(closer_node), emph);
        arena.insert_after(opener_node, emph);

        self.remove_between(opener, closer);

        if self.entries[opener].count == 0 {
            arena.unlink(opener_node);
            self.remove(opener);
        }
        if self.entries[closer].count == 0 {
            arena.unlink(closer_node);
            let next = self.entries[closer].next;
            self.remove(closer);
            next
        } else {
            Some(closer)
        }
    }
}

fn bottom_class(closer: &Delimiter) -> usize {
    let base = match closer.kind {
        DelimKind::Underscore => 0,
        _ => 6,
    };
    base + if closer.can_open { 3 } else { 0 } + closer.orig_count % 3
}
