use crate::parsing::refs::LinkRefMap;

use super::{
    arena::{InlineArena, Slot},
    cursor::Cursor,
    delimiters::{DelimKind, DelimiterStack, flanking},
    kinds::{Autolink, CodeSpan, Entity, Escape, RawHtml, TickCache, TickRun},
    links::{MAX_LABEL_CHARS, scan_destination, scan_label, scan_title, skip_spnl},
    types::Inline,
};

/// Parses one leaf block's raw text into inline nodes.
///
/// Leading and trailing spaces, tabs and line endings of `text` are ignored.
/// Reference links resolve against `refs`, which is only read.
///
/// # Precedence
/// Code spans, autolinks and raw HTML are matched as soon as the cursor reaches
/// them, so their characters never become emphasis or bracket delimiters.
/// Emphasis is resolved after tokenization with the delimiter stack; brackets
/// are resolved as each `]` is reached.
pub fn parse_inline(text: &str, refs: &LinkRefMap) -> Vec<Inline> {
    let subject = text.trim_matches([' ', '\t', '\n']);
    let mut parser = InlineParser {
        cur: Cursor::new(subject),
        arena: InlineArena::new(),
        delims: DelimiterStack::default(),
        ticks: TickCache::default(),
        refs,
    };
    while !parser.cur.eof() {
        parser.parse_one();
    }
    parser.delims.process_emphasis(&mut parser.arena, None);
    parser.arena.into_inlines()
}

struct InlineParser<'a> {
    cur: Cursor<'a>,
    arena: InlineArena,
    delims: DelimiterStack,
    ticks: TickCache,
    refs: &'a LinkRefMap,
}

impl InlineParser<'_> {
    fn parse_one(&mut self) {
        let Some(b) = self.cur.peek() else {
            return;
        };
        let handled = match b {
            b'\n' => self.parse_newline(),
            Escape::BACKSLASH => self.parse_backslash(),
            CodeSpan::TICK => self.parse_backticks(),
            b'*' | b'_' => self.parse_delim_run(b),
            b'[' => self.parse_open_bracket(),
            b'!' => self.parse_bang(),
            b']' => self.parse_close_bracket(),
            Autolink::OPEN => self.parse_autolink() || self.parse_raw_html(),
            Entity::AMP => self.parse_entity(),
            _ => self.parse_text(),
        };
        if !handled {
            let c = self.cur.bump_char();
            self.push_text(c.encode_utf8(&mut [0; 4]));
        }
    }

    fn push_text(&mut self, text: &str) {
        self.arena.append(Slot::Str(text.to_string()));
    }

    fn parse_text(&mut self) -> bool {
        let start = self.cur.i;
        self.cur.skip_while(|b| !is_special(b));
        if self.cur.i == start {
            return false;
        }
        let s = self.cur.s;
        self.push_text(&s[start..self.cur.i]);
        true
    }

    fn parse_newline(&mut self) -> bool {
        self.cur.bump();
        let mut hard = false;
        if let Some(last) = self.arena.last_child(InlineArena::ROOT)
            && let Some(text) = self.arena.text_mut(last)
            && text.ends_with(' ')
        {
            hard = text.ends_with("  ");
            let trimmed = text.trim_end_matches(' ').len();
            text.truncate(trimmed);
        }
        self.arena.append(if hard { Slot::HardBreak } else { Slot::SoftBreak });
        self.skip_line_start();
        true
    }

    fn skip_line_start(&mut self) {
        self.cur.skip_while(|b| b == b' ' || b == b'\t');
    }

    fn parse_backslash(&mut self) -> bool {
        self.cur.bump();
        match self.cur.peek() {
            Some(b'\n') => {
                self.cur.bump();
                self.arena.append(Slot::HardBreak);
                self.skip_line_start();
            }
            Some(b) if Escape::is_escapable(b) => {
                self.cur.bump();
                self.push_text((b as char).encode_utf8(&mut [0; 4]));
            }
            _ => self.push_text("\\"),
        }
        true
    }

    fn parse_backticks(&mut self) -> bool {
        let start = self.cur.i;
        match CodeSpan::scan(self.cur.s, start, &mut self.ticks) {
            TickRun::Span { content, end } => {
                self.cur.i = end;
                self.arena.append(Slot::CodeSpan(content));
            }
            TickRun::Literal { end } => {
                self.cur.i = end;
                let s = self.cur.s;
                self.push_text(&s[start..end]);
            }
        }
        true
    }

    fn parse_delim_run(&mut self, b: u8) -> bool {
        let kind = if b == b'*' {
            DelimKind::Asterisk
        } else {
            DelimKind::Underscore
        };
        let start = self.cur.i;
        let before = self.cur.char_before(start).unwrap_or('\n');
        self.cur.skip_while(|x| x == b);
        let count = self.cur.i - start;
        let after = self.cur.peek_char().unwrap_or('\n');

        let s = self.cur.s;
        let node = self.arena.append(Slot::Str(s[start..self.cur.i].to_string()));
        let f = flanking(kind, before, after);
        if f.can_open || f.can_close {
            self.delims.push_run(kind, node, count, f);
        }
        true
    }

    fn parse_open_bracket(&mut self) -> bool {
        self.cur.bump();
        let node = self.arena.append(Slot::Str("[".to_string()));
        self.delims.push_bracket(false, node, self.cur.i);
        true
    }

    fn parse_bang(&mut self) -> bool {
        self.cur.bump();
        if self.cur.peek() == Some(b'[') {
            self.cur.bump();
            let node = self.arena.append(Slot::Str("![".to_string()));
            self.delims.push_bracket(true, node, self.cur.i);
        } else {
            self.push_text("!");
        }
        true
    }

    fn parse_close_bracket(&mut self) -> bool {
        let close_pos = self.cur.i;
        self.cur.bump();
        let after_close = self.cur.i;

        let Some(opener) = self.delims.last_bracket() else {
            self.push_text("]");
            return true;
        };
        if !self.delims.is_active(opener) {
            self.delims.remove(opener);
            self.push_text("]");
            return true;
        }

        let target = self
            .inline_target()
            .or_else(|| self.reference_target(opener, close_pos));
        let Some((destination, title)) = target else {
            self.delims.remove(opener);
            self.cur.i = after_close;
            self.push_text("]");
            return true;
        };

        let entry = self.delims.get(opener);
        let (opener_node, image) = (entry.node, entry.kind == DelimKind::ImageBracket);
        let slot = if image {
            Slot::Image { destination, title }
        } else {
            Slot::Link { destination, title }
        };
        let link = self.arena.detached(slot);
        self.arena.adopt_siblings(opener_node, None, link);
        self.arena.append_child(InlineArena::ROOT, link);

        self.delims.process_emphasis(&mut self.arena, Some(opener));
        self.delims.remove(opener);
        self.arena.unlink(opener_node);
        if !image {
            self.delims.deactivate_link_openers();
        }
        true
    }

    /// `(destination "title")` directly after the `]`.
    fn inline_target(&mut self) -> Option<(String, Option<String>)> {
        let s = self.cur.s;
        let start = self.cur.i;
        if s.as_bytes().get(start) != Some(&b'(') {
            return None;
        }
        let mut pos = skip_spnl(s, start + 1);
        let (destination, after_dest) = scan_destination(s, pos)?;
        pos = skip_spnl(s, after_dest);
        let mut title = None;
        if pos > after_dest
            && let Some((t, after_title)) = scan_title(s, pos)
        {
            title = Some(t);
            pos = skip_spnl(s, after_title);
        }
        if s.as_bytes().get(pos) != Some(&b')') {
            return None;
        }
        self.cur.i = pos + 1;
        Some((destination, title))
    }

    /// Full, collapsed or shortcut reference.
    fn reference_target(&mut self, opener: usize, close_pos: usize) -> Option<(String, Option<String>)> {
        let s = self.cur.s;
        let before_label = self.cur.i;
        let label_end = scan_label(s, before_label);
        let label = match label_end {
            Some(end) if end - before_label > 2 => &s[before_label + 1..end - 1],
            _ => {
                let entry = self.delims.get(opener);
                let text = &s[entry.text_start..close_pos];
                if entry.bracket_after || text.chars().count() > MAX_LABEL_CHARS {
                    return None;
                }
                text
            }
        };
        let reference = self.refs.lookup(label)?;
        self.cur.i = label_end.unwrap_or(before_label);
        Some((reference.destination.clone(), reference.title.clone()))
    }

    fn parse_autolink(&mut self) -> bool {
        let Some((link, len)) = Autolink::scan(self.cur.rest()) else {
            return false;
        };
        self.cur.bump_n(len);
        self.arena.append(Slot::Autolink(link));
        true
    }

    fn parse_raw_html(&mut self) -> bool {
        let Some(len) = RawHtml::scan(self.cur.rest()) else {
            return false;
        };
        let html = self.cur.rest()[..len].to_string();
        self.cur.bump_n(len);
        self.arena.append(Slot::HtmlInline(html));
        true
    }

    fn parse_entity(&mut self) -> bool {
        let Some((decoded, len)) = Entity::decode_at(self.cur.rest()) else {
            return false;
        };
        self.cur.bump_n(len);
        self.arena.append(Slot::Str(decoded));
        true
    }
}

/// Bytes that may start something other than plain text.
fn is_special(b: u8) -> bool {
    matches!(
        b,
        b'\n' | b'`' | b'[' | b']' | b'\\' | b'!' | b'<' | b'&' | b'*' | b'_'
    )
}
