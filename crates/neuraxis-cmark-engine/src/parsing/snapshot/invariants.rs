use crate::parsing::{
    blocks::BlockKind,
    inline::Inline,
    tree::{Content, Document},
};

/// Validates the structural invariants of a parsed document.
///
/// Asserts that:
/// - The root is a `Document` with no parent
/// - Every child points back at its parent, and the parent may hold it
/// - Every block is closed
/// - Leaf blocks have no children and their content matches their kind
/// - Line spans of children lie within their parent's span
/// - Inline text is merged (no empty or adjacent `Str`) and links do not nest
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(doc: &Document) {
    let root = doc.root();
    assert_eq!(doc.kind(root), &BlockKind::Document, "root must be a Document");
    assert_eq!(doc.parent(root), None, "root must not have a parent");

    for id in doc.descendants() {
        let node = doc.node(id);
        assert!(!node.open, "block {id:?} ({}) left open", node.kind.name());

        for &child in doc.children(id) {
            let c = doc.node(child);
            assert_eq!(c.parent, Some(id), "child {child:?} does not point back at {id:?}");
            assert!(
                node.kind.can_contain(&c.kind),
                "{} cannot contain {}",
                node.kind.name(),
                c.kind.name()
            );
            if id != root {
                assert!(
                    c.lines.start >= node.lines.start && c.lines.end <= node.lines.end,
                    "{} {:?} outside parent {} {:?}",
                    c.kind.name(),
                    c.lines,
                    node.kind.name(),
                    node.lines
                );
            }
        }

        if !node.kind.is_container() {
            assert!(node.children.is_empty(), "leaf {id:?} has children");
        }

        match (&node.kind, &node.content) {
            (k, Content::Raw(_) | Content::Inlines(_)) if k.has_inlines() => {}
            (
                BlockKind::IndentedCode | BlockKind::FencedCode(_) | BlockKind::HtmlBlock { .. },
                Content::Literal(_),
            ) => {}
            (k, Content::None) if k.is_container() || *k == BlockKind::ThematicBreak => {}
            (k, content) => panic!("{} has unexpected content {content:?}", k.name()),
        }

        if let Content::Inlines(inlines) = &node.content {
            check_inlines(inlines, false);
        }
    }
}

fn check_inlines(nodes: &[Inline], inside_link: bool) {
    for pair in nodes.windows(2) {
        assert!(
            !matches!(pair, [Inline::Str(_), Inline::Str(_)]),
            "adjacent Str nodes: {pair:?}"
        );
    }
    for node in nodes {
        match node {
            Inline::Str(s) => assert!(!s.is_empty(), "empty Str node"),
            Inline::Link(_) => assert!(!inside_link, "link nested inside a link: {node:?}"),
            _ => {}
        }
        check_inlines(node.children(), inside_link || matches!(node, Inline::Link(_)));
    }
}
