use std::sync::OnceLock;

use regex::Regex;

/// Tag name: ASCII letter, then letters, digits and `-`.
pub(crate) const TAG_NAME: &str = r"[A-Za-z][A-Za-z0-9-]*";
const ATTRIBUTE_NAME: &str = r"[a-zA-Z_:][a-zA-Z0-9:._-]*";
const ATTRIBUTE_VALUE: &str = r#"(?:[^"'=<>`\x00-\x20]+|'[^']*'|"[^"]*")"#;

/// `<tag attr="value" ... />`.
pub(crate) fn open_tag_pattern() -> String {
    format!(r"<{TAG_NAME}(?:\s+{ATTRIBUTE_NAME}(?:\s*=\s*{ATTRIBUTE_VALUE})?)*\s*/?>")
}

/// `</tag >`.
pub(crate) fn close_tag_pattern() -> String {
    format!(r"</{TAG_NAME}\s*>")
}

/// Raw inline HTML: tags, comments, processing instructions, declarations and CDATA.
pub struct RawHtml;

impl RawHtml {
    fn regex() -> &'static Regex {
        static HTML_TAG_REGEX: OnceLock<Regex> = OnceLock::new();
        HTML_TAG_REGEX.get_or_init(|| {
            let comment = r"<!-->|<!--->|<!--[\s\S]*?-->";
            let processing = r"<\?[\s\S]*?\?>";
            let declaration = r"<![A-Za-z][^>]*>";
            let cdata = r"<!\[CDATA\[[\s\S]*?\]\]>";
            let pattern = format!(
                "(?i)^(?:{}|{}|{comment}|{processing}|{declaration}|{cdata})",
                open_tag_pattern(),
                close_tag_pattern(),
            );
            Regex::new(&pattern).expect("Invalid raw HTML regex")
        })
    }

    /// Length of the raw HTML construct at the start of `s`, if any.
    pub fn scan(s: &str) -> Option<usize> {
        Self::regex().find(s).map(|m| m.end())
    }
}
