use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::blocks::types::HtmlBlockKind;
use crate::parsing::inline::kinds::raw_html::{close_tag_pattern, open_tag_pattern};

/// HTML blocks: seven start conditions, each with its own end condition.
pub struct HtmlBlock;

const BLOCK_TAGS: &str = "address|article|aside|base|basefont|blockquote|body|caption|center|col|colgroup|dd|details|dialog|dir|div|dl|dt|fieldset|figcaption|figure|footer|form|frame|frameset|h[123456]|head|header|hr|html|iframe|legend|li|link|main|menu|menuitem|nav|noframes|ol|optgroup|option|p|param|search|section|summary|table|tbody|td|tfoot|th|thead|title|tr|track|ul";

const RAW_TEXT_TAGS: [&str; 4] = ["pre", "script", "style", "textarea"];

fn start_regexes() -> &'static [Regex; 7] {
    static START_REGEXES: OnceLock<[Regex; 7]> = OnceLock::new();
    START_REGEXES.get_or_init(|| {
        let build = |p: &str| Regex::new(p).expect("Invalid HTML block start regex");
        [
            build(r"(?i)^<(?:script|pre|textarea|style)(?:\s|>|$)"),
            build(r"^<!--"),
            build(r"^<\?"),
            build(r"^<![A-Za-z]"),
            build(r"^<!\[CDATA\["),
            build(&format!(r"(?i)^</?(?:{BLOCK_TAGS})(?:\s|/?>|$)")),
            build(&format!(
                r"(?i)^(?:{}|{})\s*$",
                open_tag_pattern(),
                close_tag_pattern()
            )),
        ]
    })
}

fn end_regexes() -> &'static [Regex; 5] {
    static END_REGEXES: OnceLock<[Regex; 5]> = OnceLock::new();
    END_REGEXES.get_or_init(|| {
        let build = |p: &str| Regex::new(p).expect("Invalid HTML block end regex");
        [
            build(r"(?i)</(?:script|pre|textarea|style)>"),
            build(r"-->"),
            build(r"\?>"),
            build(r">"),
            build(r"\]\]>"),
        ]
    })
}

impl HtmlBlock {
    pub const OPEN: u8 = b'<';

    /// Which start condition `rest` satisfies, if any.
    ///
    /// Kind 7 is skipped when `may_interrupt_paragraph` is false.
    pub fn start(rest: &str, may_interrupt_paragraph: bool) -> Option<HtmlBlockKind> {
        if rest.as_bytes().first() != Some(&Self::OPEN) {
            return None;
        }
        let regexes = start_regexes();
        HtmlBlockKind::ALL
            .into_iter()
            .zip(regexes.iter())
            .find(|(kind, re)| {
                if *kind == HtmlBlockKind::AnyTag
                    && (!may_interrupt_paragraph || names_raw_text_tag(rest))
                {
                    return false;
                }
                re.is_match(rest)
            })
            .map(|(kind, _)| kind)
    }

    /// Whether `line` contains the end marker of a kind 1 to 5 block.
    pub fn ends(kind: HtmlBlockKind, line: &str) -> bool {
        let idx = usize::from(kind.number()) - 1;
        end_regexes().get(idx).is_some_and(|re| re.is_match(line))
    }
}

fn names_raw_text_tag(rest: &str) -> bool {
    let name_start = if rest.starts_with("</") { 2 } else { 1 };
    let name: String = rest[name_start..]
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect();
    RAW_TEXT_TAGS
        .iter()
        .any(|t| t.eq_ignore_ascii_case(&name))
}
