//! Parser-level tests: whole documents through both phases.
//!
//! Each test pins the tree with an inline `insta` snapshot of the outline and
//! runs the structural invariant checks.

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::{
    options::ParseOptions,
    parse,
    parsing::{
        blocks::BlockKind,
        parse_blocks, parse_inlines,
        snapshot::{invariants, outline},
        tree::Document,
    },
};

fn checked(text: &str) -> String {
    let doc = parse(text);
    invariants(&doc);
    outline(&doc)
}

fn top_level_kinds(doc: &Document) -> Vec<&'static str> {
    doc.children(doc.root())
        .iter()
        .map(|&id| doc.kind(id).name())
        .collect()
}

#[test]
fn tab_continues_list_item() {
    insta::assert_snapshot!(checked("- foo\n\n\tbar"), @r#"
    Document
      List bullet='-' loose
        ListItem
          Paragraph
            Str "foo"
          Paragraph
            Str "bar"
    "#);
}

#[test]
fn three_thematic_breaks() {
    insta::assert_snapshot!(checked("***\n---\n___"), @r"
    Document
      ThematicBreak
      ThematicBreak
      ThematicBreak
    ");
}

#[test]
fn lazy_continuation_in_block_quote() {
    insta::assert_snapshot!(checked("> # Foo\n> bar\nbaz"), @r#"
    Document
      BlockQuote
        AtxHeading level=1
          Str "Foo"
        Paragraph
          Str "bar"
          SoftBreak
          Str "baz"
    "#);
}

#[test]
fn first_reference_definition_wins() {
    insta::assert_snapshot!(
        checked("[foo][bar]\n\n[bar]: /url \"title\"\n[bar]: /url2"),
        @r#"
    Document
      Paragraph
        Link "/url" title="title"
          Str "foo"
    "#);
}

#[test]
fn setext_heading_spans_lines() {
    insta::assert_snapshot!(checked("Foo\nbar\n---\nbaz"), @r#"
    Document
      SetextHeading level=2
        Str "Foo"
        SoftBreak
        Str "bar"
      Paragraph
        Str "baz"
    "#);
}

#[test]
fn indented_code_drops_trailing_blank_lines() {
    insta::assert_snapshot!(checked("    a\n\n    b\n\n"), @r#"
    Document
      IndentedCode "a\n\nb\n"
    "#);
}

#[test]
fn blank_line_after_indented_code_loosens_list() {
    insta::assert_snapshot!(checked("-     code\n\n  b"), @r#"
    Document
      List bullet='-' loose
        ListItem
          IndentedCode "code\n"
          Paragraph
            Str "b"
    "#);
}

#[test]
fn fenced_code_in_ordered_list() {
    insta::assert_snapshot!(checked("1. a\n\n   ```\n   x\n   ```\n2) b"), @r#"
    Document
      List start=1 delimiter='.' loose
        ListItem
          Paragraph
            Str "a"
          FencedCode "x\n"
      List start=2 delimiter=')' tight
        ListItem
          Paragraph
            Str "b"
    "#);
}

#[test]
fn html_block_ends_at_blank_line() {
    insta::assert_snapshot!(checked("<div>\n*x*\n\n*y*"), @r#"
    Document
      HtmlBlock kind=6 "<div>\n*x*"
      Paragraph
        Emph
          Str "y"
    "#);
}

#[test]
fn html_comment_ends_on_marker_line() {
    insta::assert_snapshot!(checked("<!-- a\n\nb -->\nc"), @r#"
    Document
      HtmlBlock kind=2 "<!-- a\n\nb -->"
      Paragraph
        Str "c"
    "#);
}

#[test]
fn tab_after_block_quote_marker() {
    insta::assert_snapshot!(checked(">\t\tfoo"), @r#"
    Document
      BlockQuote
        IndentedCode "  foo\n"
    "#);
}

#[test]
fn unclosed_fence_runs_to_end() {
    insta::assert_snapshot!(checked("~~~ py\na\n\n"), @r#"
    Document
      FencedCode info="py" "a\n\n"
    "#);
}

#[test]
fn unclosed_fence_ends_with_its_container() {
    insta::assert_snapshot!(checked("> ```\n> a\n\nb"), @r#"
    Document
      BlockQuote
        FencedCode "a\n"
      Paragraph
        Str "b"
    "#);
}

#[test]
fn definition_cannot_interrupt_paragraph() {
    insta::assert_snapshot!(checked("Foo\n[bar]: /baz\n\n[bar]"), @r#"
    Document
      Paragraph
        Str "Foo"
        SoftBreak
        Str "[bar]: /baz"
      Paragraph
        Str "[bar]"
    "#);
}

#[test]
fn definitions_before_setext_underline() {
    insta::assert_snapshot!(checked("[foo]: /url\n===\n\n[foo]"), @r#"
    Document
      Paragraph
        Str "==="
      Paragraph
        Link "/url"
          Str "foo"
    "#);
}

#[test]
fn item_starts_with_at_most_one_blank_line() {
    insta::assert_snapshot!(checked("-\n\n  foo"), @r#"
    Document
      List bullet='-' tight
        ListItem
      Paragraph
        Str "foo"
    "#);
}

#[test]
fn nested_lists_by_indentation() {
    insta::assert_snapshot!(checked("- a\n  - b\n    - c\n- d"), @r#"
    Document
      List bullet='-' tight
        ListItem
          Paragraph
            Str "a"
          List bullet='-' tight
            ListItem
              Paragraph
                Str "b"
              List bullet='-' tight
                ListItem
                  Paragraph
                    Str "c"
        ListItem
          Paragraph
            Str "d"
    "#);
}

#[rstest]
#[case("a\n2. b", vec!["Paragraph"])]
#[case("a\n1. b", vec!["Paragraph", "List"])]
#[case("foo\n*\nbar", vec!["Paragraph"])]
#[case("Foo\n<a href=\"x\">\nbar", vec!["Paragraph"])]
#[case("Foo\n<div>\nbar", vec!["Paragraph", "HtmlBlock"])]
#[case("> a\n---", vec!["BlockQuote", "ThematicBreak"])]
#[case("a\n---", vec!["SetextHeading"])]
#[case("[foo]: /url\n---", vec!["ThematicBreak"])]
#[case("    foo\nbar", vec!["IndentedCode", "Paragraph"])]
#[case("a\n    b", vec!["Paragraph"])]
#[case("- a\n- b\n+ c", vec!["List", "List"])]
#[case("\n\n", vec![])]
fn block_precedence(#[case] input: &str, #[case] expected: Vec<&str>) {
    let doc = parse(input);
    invariants(&doc);
    assert_eq!(top_level_kinds(&doc), expected);
}

#[rstest]
#[case("# foo", 1, "foo")]
#[case("###### six", 6, "six")]
#[case("## foo ##", 2, "foo")]
#[case("#   spaced   ", 1, "spaced")]
#[case("### foo ### b", 3, "foo ### b")]
#[case("# foo#", 1, "foo#")]
fn atx_headings(#[case] input: &str, #[case] level: u8, #[case] text: &str) {
    let doc = parse(input);
    let heading = doc.children(doc.root())[0];
    assert_eq!(doc.kind(heading), &BlockKind::AtxHeading { level });
    let plain: String = doc
        .node(heading)
        .content
        .inlines()
        .unwrap_or_default()
        .iter()
        .map(|i| i.plain_text())
        .collect();
    assert_eq!(plain, text);
}

#[test]
fn seven_hashes_is_a_paragraph() {
    let doc = parse("####### foo");
    assert_eq!(top_level_kinds(&doc), vec!["Paragraph"]);
}

#[test]
fn list_lines_cover_items() {
    let doc = parse("- a\n\n- b\n  c\n");
    let list = doc.children(doc.root())[0];
    let node = doc.node(list);
    assert_eq!((node.lines.start, node.lines.end), (1, 4));
    match &node.kind {
        BlockKind::List(data) => assert!(!data.tight),
        other => panic!("expected a list, got {other:?}"),
    }
}

#[test]
fn phases_can_run_separately() {
    let text = "[a]\n\n[a]: /x";
    let mut doc = parse_blocks(text);
    let para = doc.children(doc.root())[0];
    assert_eq!(doc.node(para).content.raw(), Some("[a]\n"));

    parse_inlines(&mut doc, &ParseOptions::default());
    assert_eq!(doc, parse(text));

    // A second inline pass finds nothing left to do.
    let before = doc.clone();
    parse_inlines(&mut doc, &ParseOptions::default());
    assert_eq!(doc, before);
}
