use std::borrow::Cow;

use super::Entity;

/// Backslash escapes of ASCII punctuation.
pub struct Escape;

impl Escape {
    pub const BACKSLASH: u8 = b'\\';

    /// Characters a backslash can make literal.
    pub fn is_escapable(b: u8) -> bool {
        b.is_ascii_punctuation()
    }

    /// Resolves backslash escapes and entity references in `s`.
    ///
    /// Used for link destinations, titles and fenced code info strings, where the
    /// text is taken literally apart from these two constructs.
    pub fn unescape(s: &str) -> Cow<'_, str> {
        if !s.contains(['\\', '&']) {
            return Cow::Borrowed(s);
        }
        let bytes = s.as_bytes();
        let mut out = String::with_capacity(s.len());
        let mut i = 0;
        let mut copied = 0;
        while i < bytes.len() {
            match bytes[i] {
                Self::BACKSLASH if bytes.get(i + 1).is_some_and(|&b| Self::is_escapable(b)) => {
                    out.push_str(&s[copied..i]);
                    out.push(bytes[i + 1] as char);
                    i += 2;
                    copied = i;
                }
                Entity::AMP => match Entity::decode_at(&s[i..]) {
                    Some((decoded, len)) => {
                        out.push_str(&s[copied..i]);
                        out.push_str(&decoded);
                        i += len;
                        copied = i;
                    }
                    None => i += 1,
                },
                _ => i += 1,
            }
        }
        out.push_str(&s[copied..]);
        Cow::Owned(out)
    }
}
