use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::{
    blocks::types::{ListData, ListMarker},
    lines::{LineState, column::{CODE_INDENT, is_space_or_tab}},
};

/// List item markers: bullets `-`, `+`, `*` and ordered `1.` / `1)`.
pub struct ListItem;

/// Spaces after a marker beyond which the item content counts as indented code.
const MAX_MARKER_GAP: usize = 4;

fn ordered_marker_regex() -> &'static Regex {
    static ORDERED_MARKER_REGEX: OnceLock<Regex> = OnceLock::new();
    ORDERED_MARKER_REGEX
        .get_or_init(|| Regex::new(r"^([0-9]{1,9})([.)])").expect("Invalid ordered marker regex"))
}

impl ListItem {
    pub const BULLETS: [u8; 3] = [b'-', b'+', b'*'];

    /// Matches a list marker at the line's next non-space position and, on
    /// success, consumes it together with the spaces that make up its padding.
    ///
    /// When `interrupts_paragraph` is set, the item must have content and an
    /// ordered item must start at 1. Nothing is consumed on failure.
    pub fn parse_marker(line: &mut LineState, interrupts_paragraph: bool) -> Option<ListData> {
        if line.indent >= CODE_INDENT {
            return None;
        }
        let rest = line.rest_nonspace();
        let (marker, marker_len) = match rest.as_bytes().first() {
            Some(b) if Self::BULLETS.contains(b) => (ListMarker::Bullet { bullet: *b as char }, 1),
            _ => {
                let caps = ordered_marker_regex().captures(rest)?;
                let start: u32 = caps[1].parse().ok()?;
                if interrupts_paragraph && start != 1 {
                    return None;
                }
                let delimiter = caps[2].chars().next()?;
                (ListMarker::Ordered { start, delimiter }, caps[0].len())
            }
        };

        let after = &rest[marker_len..];
        if !(after.is_empty() || after.starts_with([' ', '\t'])) {
            return None;
        }
        if interrupts_paragraph && after.bytes().all(|b| b == b' ' || b == b'\t') {
            return None;
        }

        let marker_offset = line.indent;
        line.advance_next_nonspace();
        line.advance_offset(marker_len, true);
        let spaces_start_column = line.column;
        let spaces_start_offset = line.offset;
        loop {
            line.advance_offset(1, true);
            if line.column - spaces_start_column > MAX_MARKER_GAP || !is_space_or_tab(line.peek()) {
                break;
            }
        }
        let blank_item = line.peek().is_none();
        let spaces_after_marker = line.column - spaces_start_column;
        let padding = if spaces_after_marker > MAX_MARKER_GAP || spaces_after_marker < 1 || blank_item {
            line.column = spaces_start_column;
            line.offset = spaces_start_offset;
            line.partially_consumed_tab = false;
            if is_space_or_tab(line.peek()) {
                line.advance_offset(1, true);
            }
            marker_len + 1
        } else {
            marker_len + spaces_after_marker
        };

        Some(ListData {
            marker,
            tight: true,
            marker_offset,
            padding,
        })
    }
}
