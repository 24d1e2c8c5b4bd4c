use std::fmt::Write;

use crate::parsing::{
    blocks::{BlockKind, ListMarker},
    inline::{AutolinkKind, Inline, Link},
    tree::{Content, Document, NodeId},
};

const INDENT: &str = "  ";

/// Renders every reachable block and inline node, one per line, children
/// indented under their parent.
///
/// Literal text is shown with Rust string escapes so line endings stay visible.
pub fn outline(doc: &Document) -> String {
    let mut out = String::new();
    block(doc, doc.root(), 0, &mut out);
    out
}

fn block(doc: &Document, id: NodeId, depth: usize, out: &mut String) {
    let node = doc.node(id);
    push_indent(depth, out);
    out.push_str(node.kind.name());
    match &node.kind {
        BlockKind::List(data) => {
            match data.marker {
                ListMarker::Bullet { bullet } => {
                    let _ = write!(out, " bullet={bullet:?}");
                }
                ListMarker::Ordered { start, delimiter } => {
                    let _ = write!(out, " start={start} delimiter={delimiter:?}");
                }
            }
            out.push_str(if data.tight { " tight" } else { " loose" });
        }
        BlockKind::AtxHeading { level } | BlockKind::SetextHeading { level } => {
            let _ = write!(out, " level={level}");
        }
        BlockKind::FencedCode(fence) if !fence.info.is_empty() => {
            let _ = write!(out, " info={:?}", fence.info);
        }
        BlockKind::HtmlBlock { kind } => {
            let _ = write!(out, " kind={}", kind.number());
        }
        _ => {}
    }
    match &node.content {
        Content::None | Content::Inlines(_) => {}
        Content::Raw(raw) => {
            let _ = write!(out, " raw={raw:?}");
        }
        Content::Literal(text) => {
            let _ = write!(out, " {text:?}");
        }
    }
    out.push('\n');

    if let Content::Inlines(inlines) = &node.content {
        for node in inlines {
            inline(node, depth + 1, out);
        }
    }
    for &child in doc.children(id) {
        block(doc, child, depth + 1, out);
    }
}

fn inline(node: &Inline, depth: usize, out: &mut String) {
    push_indent(depth, out);
    match node {
        Inline::Str(s) => {
            let _ = write!(out, "Str {s:?}");
        }
        Inline::Emph(_) => out.push_str("Emph"),
        Inline::Strong(_) => out.push_str("Strong"),
        Inline::CodeSpan(s) => {
            let _ = write!(out, "CodeSpan {s:?}");
        }
        Inline::Link(link) => link_line("Link", link, out),
        Inline::Image(link) => link_line("Image", link, out),
        Inline::HtmlInline(s) => {
            let _ = write!(out, "HtmlInline {s:?}");
        }
        Inline::Autolink(a) => {
            let kind = match a.kind {
                AutolinkKind::Uri => "uri",
                AutolinkKind::Email => "email",
            };
            let _ = write!(out, "Autolink {kind} {:?}", a.destination);
        }
        Inline::SoftBreak => out.push_str("SoftBreak"),
        Inline::HardBreak => out.push_str("HardBreak"),
    }
    out.push('\n');
    for child in node.children() {
        inline(child, depth + 1, out);
    }
}

fn link_line(name: &str, link: &Link, out: &mut String) {
    let _ = write!(out, "{name} {:?}", link.destination);
    if let Some(title) = &link.title {
        let _ = write!(out, " title={title:?}");
    }
}

fn push_indent(depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}
