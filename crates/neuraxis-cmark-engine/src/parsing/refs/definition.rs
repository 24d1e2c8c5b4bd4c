use super::{LinkRefMap, LinkReference, normalize_label};
use crate::parsing::inline::links::{scan_destination, scan_label, scan_title, skip_spaces, skip_spnl};

/// Parses one link reference definition at the start of `s` and registers it in `refs`.
///
/// `s` is a paragraph's raw text. Returns the number of bytes consumed, up to
/// and including the line ending after the definition, or `None` when `s` does
/// not start with a definition. A definition whose label is already known is
/// still consumed; the earlier one keeps its target.
pub fn parse_definition(s: &str, refs: &mut LinkRefMap) -> Option<usize> {
    let label_end = scan_label(s, 0)?;
    if s.as_bytes().get(label_end) != Some(&b':') {
        return None;
    }
    let label = &s[1..label_end - 1];

    let dest_start = skip_spnl(s, label_end + 1);
    let (destination, after_dest) = scan_destination(s, dest_start)?;
    if after_dest == dest_start && !s[dest_start..].starts_with("<>") {
        return None;
    }

    let mut title = None;
    let mut end = None;
    let title_start = skip_spnl(s, after_dest);
    if title_start > after_dest
        && let Some((t, after_title)) = scan_title(s, title_start)
    {
        // A title that does not end its line is dropped, and the destination
        // must end the line instead.
        if let Some(line_end) = line_end_after(s, after_title) {
            title = Some(t);
            end = Some(line_end);
        }
    }
    let end = match end {
        Some(end) => end,
        None => line_end_after(s, after_dest)?,
    };

    if normalize_label(label).is_empty() {
        return None;
    }
    refs.define(label, LinkReference { destination, title });
    Some(end)
}

/// Position after trailing spaces and one line ending, if nothing else follows `pos` on its line.
fn line_end_after(s: &str, pos: usize) -> Option<usize> {
    let bytes = s.as_bytes();
    let i = skip_spaces(bytes, pos);
    match bytes.get(i) {
        None => Some(i),
        Some(b'\n') => Some(i + 1),
        Some(_) => None,
    }
}
