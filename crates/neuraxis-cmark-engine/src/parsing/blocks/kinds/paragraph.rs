use crate::parsing::refs::{LinkRefMap, parse_definition};

/// Paragraph block type (marker struct).
///
/// Paragraphs have no delimiters: they are the default leaf block when no
/// other block start matches. Link reference definitions at their start are
/// taken out before inline parsing.
pub struct Paragraph;

impl Paragraph {
    /// Removes leading link reference definitions from `raw`, registering each
    /// in `refs`. Returns true if at least one was removed.
    pub fn extract_definitions(raw: &mut String, refs: &mut LinkRefMap) -> bool {
        let mut consumed = 0;
        while raw[consumed..].starts_with('[') {
            match parse_definition(&raw[consumed..], refs) {
                Some(len) => consumed += len,
                None => break,
            }
        }
        raw.drain(..consumed);
        consumed > 0
    }

    /// True when nothing but whitespace is left.
    pub fn is_blank(raw: &str) -> bool {
        raw.bytes().all(|b| matches!(b, b' ' | b'\t' | b'\n'))
    }
}
