/// A byte cursor over one block's inline text.
///
/// Positions are byte offsets into `s`. Bytes below 0x80 are single
/// characters, so byte-level dispatch is safe; multi-byte characters are
/// only consumed whole through [`Cursor::bump_char`].
#[derive(Clone)]
pub struct Cursor<'a> {
    /// The string being parsed.
    pub s: &'a str,
    /// Current byte index into `s`.
    pub i: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a new cursor at the start of `s`.
    pub fn new(s: &'a str) -> Self {
        Self { s, i: 0 }
    }

    /// Returns true if at end of string.
    pub fn eof(&self) -> bool {
        self.i >= self.s.len()
    }

    /// Peeks at the current byte without advancing.
    pub fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.i).copied()
    }

    /// The character at the cursor.
    pub fn peek_char(&self) -> Option<char> {
        self.s[self.i..].chars().next()
    }

    /// The character ending just before byte `pos`.
    pub fn char_before(&self, pos: usize) -> Option<char> {
        self.s[..pos].chars().next_back()
    }

    /// Unconsumed text.
    pub fn rest(&self) -> &'a str {
        &self.s[self.i..]
    }

    /// Advances by one byte, returning the consumed byte.
    pub fn bump(&mut self) -> Option<u8> {
        let b = self.s.as_bytes().get(self.i).copied()?;
        self.i += 1;
        Some(b)
    }

    /// Advances past one whole character. At end of input returns `'\0'` without moving.
    pub fn bump_char(&mut self) -> char {
        match self.peek_char() {
            Some(c) => {
                self.i += c.len_utf8();
                c
            }
            None => '\0',
        }
    }

    /// Advances by `n` bytes.
    pub fn bump_n(&mut self, n: usize) {
        self.i += n;
    }

    /// Advances while `pred` holds for the current byte.
    pub fn skip_while(&mut self, pred: impl Fn(u8) -> bool) {
        while let Some(b) = self.peek() {
            if !pred(b) {
                break;
            }
            self.i += 1;
        }
    }
}
