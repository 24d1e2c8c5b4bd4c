//! # Link Reference Definitions
//!
//! `[label]: destination "title"` lines are pulled out of paragraphs as they
//! close (see [`definition`]) and registered here. The map is filled during the
//! block phase and only read during the inline phase.

pub mod definition;

use std::collections::BTreeMap;

use serde::Serialize;

pub use definition::parse_definition;

/// Target of a link reference definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkReference {
    pub destination: String,
    pub title: Option<String>,
}

/// Normalized label → definition. The first definition of a label wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LinkRefMap {
    entries: BTreeMap<String, LinkReference>,
}

impl LinkRefMap {
    /// Registers a definition. Returns false if the label was already defined.
    pub fn define(&mut self, label: &str, reference: LinkReference) -> bool {
        let key = normalize_label(label);
        if key.is_empty() {
            return false;
        }
        if self.entries.contains_key(&key) {
            log::trace!("duplicate link reference [{key}] ignored");
            return false;
        }
        log::trace!("link reference [{key}] -> {}", reference.destination);
        self.entries.insert(key, reference);
        true
    }

    pub fn lookup(&self, label: &str) -> Option<&LinkReference> {
        self.entries.get(&normalize_label(label))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Definitions in label order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &LinkReference)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Case-folds a label and collapses internal whitespace to single spaces.
///
/// Lower-then-upper casing approximates Unicode case folding closely enough
/// that `ẞ`, `ß` and `SS` all compare equal.
pub fn normalize_label(label: &str) -> String {
    let mut out = String::with_capacity(label.len());
    for word in label.split([' ', '\t', '\n', '\r']).filter(|w| !w.is_empty()) {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out.to_lowercase().to_uppercase()
}
