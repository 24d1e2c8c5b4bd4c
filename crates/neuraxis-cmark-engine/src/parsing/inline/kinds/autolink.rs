use std::sync::OnceLock;

use regex::Regex;

use crate::parsing::inline::types::{Autolink as AutolinkNode, AutolinkKind};

/// `<scheme:target>` and `<user@example.com>` autolinks.
pub struct Autolink;

impl Autolink {
    pub const OPEN: u8 = b'<';

    fn uri_regex() -> &'static Regex {
        static URI_REGEX: OnceLock<Regex> = OnceLock::new();
        URI_REGEX.get_or_init(|| {
            Regex::new(r"^<([A-Za-z][A-Za-z0-9.+-]{1,31}:[^<>\x00-\x20]*)>")
                .expect("Invalid autolink regex")
        })
    }

    fn email_regex() -> &'static Regex {
        static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
        EMAIL_REGEX.get_or_init(|| {
            Regex::new(
                r"^<([a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*)>",
            )
            .expect("Invalid email autolink regex")
        })
    }

    /// Matches an autolink at the start of `s`, returning the node and bytes consumed.
    pub fn scan(s: &str) -> Option<(AutolinkNode, usize)> {
        if let Some(caps) = Self::email_regex().captures(s) {
            let text = caps[1].to_string();
            let end = caps[0].len();
            return Some((
                AutolinkNode {
                    destination: format!("mailto:{text}"),
                    text,
                    kind: AutolinkKind::Email,
                },
                end,
            ));
        }
        let caps = Self::uri_regex().captures(s)?;
        let text = caps[1].to_string();
        let end = caps[0].len();
        Some((
            AutolinkNode {
                destination: text.clone(),
                text,
                kind: AutolinkKind::Uri,
            },
            end,
        ))
    }
}
