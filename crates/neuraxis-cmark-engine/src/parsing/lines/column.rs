/// Columns advanced by a tab when it is treated as indentation.
pub const TAB_STOP: usize = 4;

/// Indentation at which a line stops being a block start and becomes code.
pub const CODE_INDENT: usize = 4;

/// The line currently being consumed by the block builder.
///
/// Tracks a byte `offset` into the line alongside the visual `column`, so that
/// tabs can be consumed partially: a tab that is only half used by a container
/// marker leaves its remaining columns behind as literal spaces.
#[derive(Debug, Clone, Default)]
pub struct LineState {
    /// The line text, terminator stripped.
    pub text: String,
    /// Byte offset of the next unconsumed character.
    pub offset: usize,
    /// Visual column of `offset`.
    pub column: usize,
    /// Byte offset of the first non-space/tab character at or after `offset`.
    pub next_nonspace: usize,
    /// Visual column of `next_nonspace`.
    pub next_nonspace_column: usize,
    /// Columns between `column` and `next_nonspace_column`.
    pub indent: usize,
    /// `indent >= CODE_INDENT`.
    pub indented: bool,
    /// Nothing but spaces and tabs remain.
    pub blank: bool,
    /// The tab at `offset` has been consumed for some, but not all, of its columns.
    pub partially_consumed_tab: bool,
}

impl LineState {
    /// Resets the state for a new line.
    pub fn reset(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.offset = 0;
        self.column = 0;
        self.next_nonspace = 0;
        self.next_nonspace_column = 0;
        self.indent = 0;
        self.indented = false;
        self.blank = false;
        self.partially_consumed_tab = false;
    }

    /// Byte at `offset`, if any.
    pub fn peek(&self) -> Option<u8> {
        self.text.as_bytes().get(self.offset).copied()
    }

    /// Byte at `next_nonspace`, if any.
    pub fn peek_nonspace(&self) -> Option<u8> {
        self.text.as_bytes().get(self.next_nonspace).copied()
    }

    /// Text from `offset` to the end of the line.
    pub fn rest(&self) -> &str {
        &self.text[self.offset..]
    }

    /// Text from `next_nonspace` to the end of the line.
    pub fn rest_nonspace(&self) -> &str {
        &self.text[self.next_nonspace..]
    }

    /// Scans forward from `offset` over spaces and tabs, updating the
    /// `next_nonspace*`, `indent`, `indented` and `blank` fields.
    pub fn find_next_nonspace(&mut self) {
        let bytes = self.text.as_bytes();
        let mut i = self.offset;
        let mut cols = self.column;
        while let Some(&b) = bytes.get(i) {
            match b {
                b' ' => {
                    i += 1;
                    cols += 1;
                }
                b'\t' => {
                    i += 1;
                    cols += TAB_STOP - (cols % TAB_STOP);
                }
                _ => break,
            }
        }
        self.blank = i >= bytes.len();
        self.next_nonspace = i;
        self.next_nonspace_column = cols;
        self.indent = cols - self.column;
        self.indented = self.indent >= CODE_INDENT;
    }

    /// Moves `offset` to `next_nonspace`.
    pub fn advance_next_nonspace(&mut self) {
        self.offset = self.next_nonspace;
        self.column = self.next_nonspace_column;
        self.partially_consumed_tab = false;
    }

    /// Consumes `count` characters, or `count` columns when `columns` is set.
    ///
    /// In column mode a tab wider than the remaining count is consumed partially:
    /// `offset` stays on the tab and `partially_consumed_tab` is raised.
    pub fn advance_offset(&mut self, mut count: usize, columns: bool) {
        while count > 0 {
            let Some(c) = self.text[self.offset..].chars().next() else {
                break;
            };
            if c == '\t' {
                let chars_to_tab = TAB_STOP - (self.column % TAB_STOP);
                if columns {
                    self.partially_consumed_tab = chars_to_tab > count;
                    let advance = chars_to_tab.min(count);
                    self.column += advance;
                    if !self.partially_consumed_tab {
                        self.offset += 1;
                    }
                    count -= advance;
                } else {
                    self.partially_consumed_tab = false;
                    self.column += chars_to_tab;
                    self.offset += 1;
                    count -= 1;
                }
            } else {
                self.partially_consumed_tab = false;
                self.offset += c.len_utf8();
                self.column += 1;
                count -= 1;
            }
        }
    }

    /// Consumes the rest of the line.
    pub fn advance_to_end(&mut self) {
        self.offset = self.text.len();
        self.partially_consumed_tab = false;
    }

    /// The unconsumed remainder, with the unused columns of a partially
    /// consumed tab materialised as spaces.
    pub fn take_remainder(&self) -> String {
        if self.partially_consumed_tab {
            let spaces = TAB_STOP - (self.column % TAB_STOP);
            let mut out = " ".repeat(spaces);
            out.push_str(&self.text[self.offset + 1..]);
            out
        } else {
            self.rest().to_string()
        }
    }
}

/// True for the two indentation characters.
pub fn is_space_or_tab(b: Option<u8>) -> bool {
    matches!(b, Some(b' ' | b'\t'))
}
