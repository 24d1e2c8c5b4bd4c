/// `***`, `---`, `___`: three or more of one character, spaces and tabs allowed between.
pub struct ThematicBreak;

impl ThematicBreak {
    pub const CHARS: [u8; 3] = [b'*', b'-', b'_'];

    /// Whether `rest` (the line from its first non-space character) is a thematic break.
    pub fn matches(rest: &str) -> bool {
        let bytes = rest.as_bytes();
        let Some(&first) = bytes.first() else {
            return false;
        };
        if !Self::CHARS.contains(&first) {
            return false;
        }
        let mut count = 0;
        for &b in bytes {
            match b {
                b' ' | b'\t' => {}
                _ if b == first => count += 1,
                _ => return false,
            }
        }
        count >= 3
    }
}
