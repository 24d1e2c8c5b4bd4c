//! # Parsing
//!
//! CommonMark in two phases over one shared tree:
//!
//! 1. **Blocks** (`blocks`): lines are consumed in order by a `BlockBuilder`,
//!    producing the block tree and the link reference definitions
//! 2. **Inlines** (`inline`): each paragraph and heading's raw text is parsed
//!    against the finished reference map; blocks do not depend on each other
//!    here, so this phase may run in parallel

pub mod blocks;
pub mod inline;
pub mod lines;
pub mod refs;
pub mod snapshot;
pub mod tree;

#[cfg(test)]
mod tests;

use rayon::prelude::*;

use crate::options::ParseOptions;

use blocks::BlockBuilder;
use inline::{Inline, parse_inline};
use lines::split_lines;
use tree::{Content, Document, NodeId};

/// Phase one only: builds the block tree. Paragraphs and headings still hold raw text.
pub fn parse_blocks(text: &str) -> Document {
    let mut builder = BlockBuilder::new();
    for line in split_lines(text) {
        builder.push(&line);
    }
    builder.finish()
}

/// Phase two: replaces the raw text of every paragraph and heading with its inline nodes.
///
/// Blocks already holding inlines are left alone, so running this twice is harmless.
pub fn parse_inlines(doc: &mut Document, options: &ParseOptions) {
    let pending = doc.pending_inline_blocks();
    let parse_one = |&id: &NodeId| -> (NodeId, Vec<Inline>) {
        let raw = doc.node(id).content.raw().unwrap_or_default();
        (id, parse_inline(raw, doc.link_refs()))
    };
    let parsed: Vec<(NodeId, Vec<Inline>)> = if options.parallel_inlines {
        pending.par_iter().map(parse_one).collect()
    } else {
        pending.iter().map(parse_one).collect()
    };
    log::debug!(
        "inline phase done: {} blocks{}",
        parsed.len(),
        if options.parallel_inlines { " (parallel)" } else { "" }
    );
    for (id, inlines) in parsed {
        doc.node_mut(id).content = Content::Inlines(inlines);
    }
}
