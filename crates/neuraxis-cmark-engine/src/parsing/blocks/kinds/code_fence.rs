use crate::parsing::blocks::types::FenceData;

/// Fenced code blocks: three or more backticks or tildes.
///
/// Fenced code is a raw zone: no block or inline parsing happens inside.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICK: u8 = b'`';
    pub const TILDE: u8 = b'~';
    pub const MIN_LENGTH: usize = 3;

    /// Matches an opening fence at the start of `rest`.
    ///
    /// A backtick fence may not have backticks in its info string.
    pub fn opening(rest: &str, indent: usize) -> Option<FenceData> {
        let bytes = rest.as_bytes();
        let &fence = bytes.first()?;
        if fence != Self::BACKTICK && fence != Self::TILDE {
            return None;
        }
        let length = bytes.iter().take_while(|&&b| b == fence).count();
        if length < Self::MIN_LENGTH {
            return None;
        }
        if fence == Self::BACKTICK && bytes[length..].contains(&Self::BACKTICK) {
            return None;
        }
        Some(FenceData {
            fence_char: fence as char,
            fence_length: length,
            fence_offset: indent,
            info: String::new(),
        })
    }

    /// Whether `rest` closes the block opened by `open`: same character, at least
    /// as long, nothing after it but spaces and tabs.
    pub fn closes(open: &FenceData, rest: &str) -> bool {
        let bytes = rest.as_bytes();
        let fence = open.fence_char as u8;
        let length = bytes.iter().take_while(|&&b| b == fence).count();
        length >= open.fence_length.max(Self::MIN_LENGTH)
            && bytes[length..].iter().all(|&b| b == b' ' || b == b'\t')
    }
}
