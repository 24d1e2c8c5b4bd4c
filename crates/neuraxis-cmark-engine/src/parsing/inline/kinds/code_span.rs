use std::collections::HashMap;

/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw zones: no other inline parsing occurs inside them.
pub struct CodeSpan;

/// Backtick runs already seen in one subject, keyed by run length.
///
/// Once a scan has reached the end of the subject, an opener whose length has
/// no recorded run after it is literal without scanning again.
#[derive(Debug, Default)]
pub struct TickCache {
    scanned_to_end: bool,
    last_run: HashMap<usize, usize>,
}

impl TickCache {
    fn record(&mut self, len: usize, at: usize) {
        let last = self.last_run.entry(len).or_insert(at);
        *last = (*last).max(at);
    }

    fn has_run_after(&self, len: usize, pos: usize) -> bool {
        self.last_run.get(&len).is_some_and(|&at| at > pos)
    }
}

/// Outcome of scanning a backtick string.
#[derive(Debug, PartialEq, Eq)]
pub enum TickRun {
    /// A closed span: its normalized content and the end position.
    Span { content: String, end: usize },
    /// No closing run of the same length; the opening ticks are literal text.
    Literal { end: usize },
}

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';

    /// Scans the backtick string at `pos` and looks for a closing string of equal length.
    ///
    /// `cache` must belong to `s` and see openers in increasing position order.
    pub fn scan(s: &str, pos: usize, cache: &mut TickCache) -> TickRun {
        let bytes = s.as_bytes();
        let open_len = run_length(bytes, pos);
        let after_open = pos + open_len;
        if cache.scanned_to_end && !cache.has_run_after(open_len, pos) {
            return TickRun::Literal { end: after_open };
        }

        let mut i = after_open;
        while i < bytes.len() {
            if bytes[i] == Self::TICK {
                let len = run_length(bytes, i);
                cache.record(len, i);
                if len == open_len {
                    return TickRun::Span {
                        content: normalize(&s[after_open..i]),
                        end: i + len,
                    };
                }
                i += len;
            } else {
                i += 1;
            }
        }
        cache.scanned_to_end = true;
        TickRun::Literal { end: after_open }
    }
}

fn run_length(bytes: &[u8], start: usize) -> usize {
    bytes[start..]
        .iter()
        .take_while(|&&b| b == CodeSpan::TICK)
        .count()
}

/// Line endings become spaces; one space is stripped from each side when both
/// sides have one and the content is not all spaces.
fn normalize(raw: &str) -> String {
    let content = raw.replace('\n', " ");
    let bytes = content.as_bytes();
    if bytes.len() >= 2
        && bytes[0] == b' '
        && bytes[bytes.len() - 1] == b' '
        && bytes.iter().any(|&b| b != b' ')
    {
        content[1..content.len() - 1].to_string()
    } else {
        content
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn span(content: &str, end: usize) -> TickRun {
        TickRun::Span {
            content: content.to_string(),
            end,
        }
    }

    #[rstest]
    #[case("`foo`", span("foo", 5))]
    #[case("`` foo ` bar ``", span("foo ` bar", 15))]
    #[case("` `` `", span("``", 6))]
    #[case("`  ``  `", span(" `` ", 8))]
    #[case("` a`", span(" a", 4))]
    #[case("`\u{a0}b\u{a0}`", span("\u{a0}b\u{a0}", 7))]
    #[case("`  `", span("  ", 4))]
    #[case("``\nfoo\nbar  \nbaz\n``", span("foo bar   baz", 19))]
    fn closed_spans(#[case] input: &str, #[case] expected: TickRun) {
        assert_eq!(CodeSpan::scan(input, 0, &mut TickCache::default()), expected);
    }

    #[test]
    fn unmatched_run_is_literal() {
        assert_eq!(
            CodeSpan::scan("```foo``", 0, &mut TickCache::default()),
            TickRun::Literal { end: 3 }
        );
    }

    #[test]
    fn longer_closing_run_is_skipped() {
        assert_eq!(
            CodeSpan::scan("`foo``bar``", 0, &mut TickCache::default()),
            TickRun::Literal { end: 1 }
        );
    }

    #[test]
    fn cache_answers_after_a_full_scan() {
        let s = "```a`b``c`";
        let mut cache = TickCache::default();
        assert_eq!(CodeSpan::scan(s, 0, &mut cache), TickRun::Literal { end: 3 });
        assert!(cache.scanned_to_end);
        assert!(!cache.has_run_after(3, 0));
        assert_eq!(CodeSpan::scan(s, 4, &mut cache), span("b``c", 10));
    }

    #[test]
    fn earlier_match_keeps_later_run_recorded() {
        // Single ticks at 3, 5, 7 and 9; the match at 5 must not hide the run at 9.
        let s = "``x`a`b`c`";
        let mut cache = TickCache::default();
        assert_eq!(CodeSpan::scan(s, 0, &mut cache), TickRun::Literal { end: 2 });
        assert_eq!(CodeSpan::scan(s, 3, &mut cache), span("a", 6));
        assert_eq!(CodeSpan::scan(s, 7, &mut cache), span("c", 10));
    }
}
