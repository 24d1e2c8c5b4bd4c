use std::{collections::HashMap, sync::OnceLock};

use regex::Regex;

/// Entity and numeric character references: `&amp;`, `&#35;`, `&#X22;`.
pub struct Entity;

impl Entity {
    pub const AMP: u8 = b'&';

    fn regex() -> &'static Regex {
        static ENTITY_REGEX: OnceLock<Regex> = OnceLock::new();
        ENTITY_REGEX.get_or_init(|| {
            Regex::new(r"(?i)^&(?:#x[a-f0-9]{1,6}|#[0-9]{1,7}|[a-z][a-z0-9]{1,31});")
                .expect("Invalid entity regex")
        })
    }

    /// Decodes a reference at the start of `s`.
    ///
    /// Returns the replacement text and the number of bytes consumed, or `None`
    /// if `s` does not start with a reference that resolves.
    pub fn decode_at(s: &str) -> Option<(String, usize)> {
        let m = Self::regex().find(s)?;
        let raw = m.as_str();
        let body = &raw[1..raw.len() - 1];
        let decoded = match body.strip_prefix('#') {
            Some(num) => {
                let code = match num.strip_prefix(['x', 'X']) {
                    Some(hex) => u32::from_str_radix(hex, 16).ok(),
                    None => num.parse::<u32>().ok(),
                };
                let ch = code
                    .filter(|&c| c != 0)
                    .and_then(char::from_u32)
                    .unwrap_or('\u{FFFD}');
                ch.to_string()
            }
            None => Self::named(raw)?,
        };
        Some((decoded, m.end()))
    }

    /// Looks up `&name;` in the HTML5 entity table.
    fn named(raw: &str) -> Option<String> {
        Self::table().get(raw).map(|chars| chars.to_string())
    }

    /// Full expansions keyed by `&name;`. Legacy names without a `;` are left out.
    fn table() -> &'static HashMap<&'static str, &'static str> {
        static ENTITY_TABLE: OnceLock<HashMap<&'static str, &'static str>> = OnceLock::new();
        ENTITY_TABLE.get_or_init(|| {
            entities::ENTITIES
                .iter()
                .filter(|e| e.entity.ends_with(';'))
                .map(|e| (e.entity, e.characters))
                .collect()
        })
    }
}
