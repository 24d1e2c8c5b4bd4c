//! Scanners for the pieces of links and link reference definitions.
//!
//! Every scanner takes the full text and a byte position, and returns the
//! position just past what it matched. Nothing is consumed on failure.

use super::kinds::Escape;

/// Upper bound on the characters inside a link label.
pub const MAX_LABEL_CHARS: usize = 999;

/// Matches a link label `[...]` at `pos` and returns the end position.
///
/// Labels may not contain unescaped brackets. Whether the label has any
/// non-whitespace content is left to the caller.
pub fn scan_label(s: &str, pos: usize) -> Option<usize> {
    let rest = s.get(pos..)?;
    let mut chars = rest.char_indices();
    if chars.next()?.1 != '[' {
        return None;
    }
    let mut count = 0;
    while let Some((i, c)) = chars.next() {
        match c {
            ']' => return Some(pos + i + 1),
            '[' => return None,
            '\\' => {
                chars.next()?;
                count += 2;
            }
            _ => count += 1,
        }
        if count > MAX_LABEL_CHARS {
            return None;
        }
    }
    None
}

/// Matches a link destination at `pos`.
///
/// Returns the destination with escapes and entities resolved, and the end position.
/// A bare destination may be empty only when followed by `)`.
pub fn scan_destination(s: &str, pos: usize) -> Option<(String, usize)> {
    let bytes = s.as_bytes();
    if bytes.get(pos) == Some(&b'<') {
        let mut i = pos + 1;
        while let Some(&b) = bytes.get(i) {
            match b {
                b'>' => {
                    let inner = &s[pos + 1..i];
                    return Some((Escape::unescape(inner).into_owned(), i + 1));
                }
                b'<' | b'\n' => return None,
                b'\\' if bytes.get(i + 1).is_some_and(|&n| n != b'\n') => i += 2,
                _ => i += 1,
            }
        }
        return None;
    }

    let mut i = pos;
    let mut open_parens = 0usize;
    while let Some(&b) = bytes.get(i) {
        match b {
            b'\\' if bytes.get(i + 1).is_some_and(|&n| Escape::is_escapable(n)) => i += 2,
            b'(' => {
                open_parens += 1;
                i += 1;
            }
            b')' => {
                if open_parens == 0 {
                    break;
                }
                open_parens -= 1;
                i += 1;
            }
            b if b <= b' ' || b == 0x7f => break,
            _ => i += 1,
        }
    }
    if open_parens != 0 || (i == pos && bytes.get(i) != Some(&b')')) {
        return None;
    }
    Some((Escape::unescape(&s[pos..i]).into_owned(), i))
}

/// Matches a link title in `"..."`, `'...'` or `(...)` at `pos`.
pub fn scan_title(s: &str, pos: usize) -> Option<(String, usize)> {
    let bytes = s.as_bytes();
    let close = match bytes.get(pos)? {
        b'"' => b'"',
        b'\'' => b'\'',
        b'(' => b')',
        _ => return None,
    };
    let mut i = pos + 1;
    while let Some(&b) = bytes.get(i) {
        if b == close {
            let inner = &s[pos + 1..i];
            return Some((Escape::unescape(inner).into_owned(), i + 1));
        }
        match b {
            b'\\' if i + 1 < bytes.len() => i += 2,
            b'(' if close == b')' => return None,
            _ => i += 1,
        }
    }
    None
}

/// Skips spaces and tabs with at most one line ending among them.
pub fn skip_spnl(s: &str, pos: usize) -> usize {
    let bytes = s.as_bytes();
    let mut i = skip_spaces(bytes, pos);
    if bytes.get(i) == Some(&b'\n') {
        i = skip_spaces(bytes, i + 1);
    }
    i
}

/// Skips spaces and tabs.
pub fn skip_spaces(bytes: &[u8], mut i: usize) -> usize {
    while matches!(bytes.get(i), Some(b' ' | b'\t')) {
        i += 1;
    }
    i
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("[foo]", Some(5))]
    #[case("[foo\\]bar] x", Some(10))]
    #[case("[fo[o]", None)]
    #[case("[unclosed", None)]
    #[case("[]", Some(2))]
    #[case("[a\nb]", Some(5))]
    fn labels(#[case] input: &str, #[case] expected: Option<usize>) {
        assert_eq!(scan_label(input, 0), expected);
    }

    #[test]
    fn label_length_limit() {
        let ok = format!("[{}]", "a".repeat(MAX_LABEL_CHARS));
        let too_long = format!("[{}]", "a".repeat(MAX_LABEL_CHARS + 1));
        assert_eq!(scan_label(&ok, 0), Some(ok.len()));
        assert_eq!(scan_label(&too_long, 0), None);
    }

    #[rstest]
    #[case("/url)", "/url", 4)]
    #[case("<my url>", "my url", 8)]
    #[case("foo(and(bar)) x", "foo(and(bar))", 13)]
    #[case(r"foo\)\: x", "foo):", 7)]
    #[case("<>", "", 2)]
    #[case(")", "", 0)]
    #[case("f&ouml;", "fö", 7)]
    fn destinations(#[case] input: &str, #[case] dest: &str, #[case] end: usize) {
        assert_eq!(scan_destination(input, 0), Some((dest.to_string(), end)));
    }

    #[rstest]
    #[case("<a\nb>")]
    #[case("<a<b>")]
    #[case("foo(bar")]
    #[case("")]
    fn bad_destinations(#[case] input: &str) {
        assert_eq!(scan_destination(input, 0), None);
    }

    #[rstest]
    #[case("\"title\"", "title")]
    #[case("'it''s", "it")]
    #[case("(paren)", "paren")]
    #[case(r#""say \"hi\"""#, "say \"hi\"")]
    fn titles(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(scan_title(input, 0).map(|(t, _)| t), Some(expected.to_string()));
    }

    #[test]
    fn paren_title_cannot_nest() {
        assert_eq!(scan_title("(a(b)", 0), None);
    }

    #[test]
    fn spnl_allows_one_newline() {
        assert_eq!(skip_spnl("  \n  x", 0), 5);
        assert_eq!(skip_spnl(" \n\nx", 0), 2);
    }
}
