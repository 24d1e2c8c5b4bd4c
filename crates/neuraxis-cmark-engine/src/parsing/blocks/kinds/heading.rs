/// `#` headings: one to six `#` followed by a space, a tab or the end of the line.
pub struct AtxHeading;

impl AtxHeading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: usize = 6;

    /// Matches the opening sequence of `rest`.
    ///
    /// Returns the level and the byte length of the marker including the
    /// spaces after it.
    pub fn opening(rest: &str) -> Option<(u8, usize)> {
        let bytes = rest.as_bytes();
        let level = bytes.iter().take_while(|&&b| b == Self::MARKER).count();
        if level == 0 || level > Self::MAX_LEVEL {
            return None;
        }
        let spaces = bytes[level..]
            .iter()
            .take_while(|&&b| b == b' ' || b == b'\t')
            .count();
        if spaces == 0 && level < bytes.len() {
            return None;
        }
        Some((level as u8, level + spaces))
    }

    /// Heading text with the optional closing `#` sequence removed.
    ///
    /// The closing sequence only counts when preceded by a space or tab, or
    /// when it is all the line has.
    pub fn content(after_marker: &str) -> String {
        let trimmed = after_marker.trim_end_matches([' ', '\t']);
        let without_hashes = trimmed.trim_end_matches(Self::MARKER as char);
        if without_hashes.len() == trimmed.len() {
            return trimmed.to_string();
        }
        if without_hashes.trim_start_matches([' ', '\t']).is_empty() {
            return String::new();
        }
        if without_hashes.ends_with([' ', '\t']) {
            without_hashes.trim_end_matches([' ', '\t']).to_string()
        } else {
            trimmed.to_string()
        }
    }
}

/// The `===` or `---` line that turns a paragraph into a heading.
pub struct SetextUnderline;

impl SetextUnderline {
    /// Level 1 for `=`, 2 for `-`; trailing spaces and tabs allowed.
    pub fn level(rest: &str) -> Option<u8> {
        let bytes = rest.as_bytes();
        let first = *bytes.first()?;
        let level = match first {
            b'=' => 1,
            b'-' => 2,
            _ => return None,
        };
        let run = bytes.iter().take_while(|&&b| b == first).count();
        if bytes[run..].iter().all(|&b| b == b' ' || b == b'\t') {
            Some(level)
        } else {
            None
        }
    }
}
