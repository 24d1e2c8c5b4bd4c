use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;
use rstest::rstest;

use super::{Autolink, AutolinkKind, Inline, Link, parse_inline};
use crate::parsing::refs::{LinkRefMap, LinkReference};

fn s(text: &str) -> Inline {
    Inline::Str(text.to_string())
}

fn emph(children: Vec<Inline>) -> Inline {
    Inline::Emph(children)
}

fn strong(children: Vec<Inline>) -> Inline {
    Inline::Strong(children)
}

fn link(dest: &str, title: Option<&str>, children: Vec<Inline>) -> Inline {
    Inline::Link(Link {
        destination: dest.to_string(),
        title: title.map(str::to_string),
        children,
    })
}

fn parse(text: &str) -> Vec<Inline> {
    parse_inline(text, &LinkRefMap::default())
}

fn refs(defs: &[(&str, &str, Option<&str>)]) -> LinkRefMap {
    let mut map = LinkRefMap::default();
    for (label, dest, title) in defs {
        map.define(
            label,
            LinkReference {
                destination: dest.to_string(),
                title: title.map(str::to_string),
            },
        );
    }
    map
}

#[test]
fn plain_text_is_one_str() {
    assert_eq!(parse("hello world"), vec![s("hello world")]);
}

#[test]
fn surrounding_whitespace_is_trimmed() {
    assert_eq!(parse("  hi \n"), vec![s("hi")]);
}

#[test]
fn empty_input() {
    assert_eq!(parse(""), vec![]);
}

#[test]
fn code_span_then_literal_tick() {
    assert_eq!(
        parse("`hi`lo`"),
        vec![Inline::CodeSpan("hi".into()), s("lo`")]
    );
}

#[test]
fn nested_strong_in_emph() {
    assert_eq!(
        parse("*foo **bar** baz*"),
        vec![emph(vec![s("foo "), strong(vec![s("bar")]), s(" baz")])]
    );
}

#[rstest]
#[case("*foo bar*", vec![emph(vec![s("foo bar")])])]
#[case("_foo bar_", vec![emph(vec![s("foo bar")])])]
#[case("**foo**", vec![strong(vec![s("foo")])])]
#[case("__foo__", vec![strong(vec![s("foo")])])]
#[case("a * foo bar*", vec![s("a * foo bar*")])]
#[case("foo_bar_", vec![s("foo_bar_")])]
#[case("5*6*78", vec![s("5"), emph(vec![s("6")]), s("78")])]
#[case("*foo*bar", vec![emph(vec![s("foo")]), s("bar")])]
#[case("***strong emph***", vec![emph(vec![strong(vec![s("strong emph")])])])]
#[case("**foo*", vec![s("*"), emph(vec![s("foo")])])]
#[case("*foo**", vec![emph(vec![s("foo")]), s("*")])]
#[case("*foo**bar**baz*", vec![emph(vec![s("foo"), strong(vec![s("bar")]), s("baz")])])]
#[case("*foo**bar*", vec![emph(vec![s("foo**bar")])])]
#[case("foo***bar***baz", vec![s("foo"), emph(vec![strong(vec![s("bar")])]), s("baz")])]
#[case("*(**foo**)*", vec![emph(vec![s("("), strong(vec![s("foo")]), s(")")])])]
#[case("__foo, __bar__, baz__", vec![strong(vec![s("foo, "), strong(vec![s("bar")]), s(", baz")])])]
fn emphasis(#[case] input: &str, #[case] expected: Vec<Inline>) {
    assert_eq!(parse(input), expected);
}

#[test]
fn emphasis_wrapping_is_symmetric() {
    for inner in ["foo", "foo `x` bar", "a **b** c", "[x](/y)"] {
        for delim in ["*", "_"] {
            let wrapped = format!("{delim}{inner}{delim}");
            assert_eq!(parse(&wrapped), vec![emph(parse(inner))], "{wrapped}");
        }
    }
}

#[test]
fn soft_and_hard_breaks() {
    assert_eq!(
        parse("foo\nbar"),
        vec![s("foo"), Inline::SoftBreak, s("bar")]
    );
    assert_eq!(
        parse("foo  \n  bar"),
        vec![s("foo"), Inline::HardBreak, s("bar")]
    );
    assert_eq!(
        parse("foo\\\nbar"),
        vec![s("foo"), Inline::HardBreak, s("bar")]
    );
    assert_eq!(
        parse("foo \nbar"),
        vec![s("foo"), Inline::SoftBreak, s("bar")]
    );
}

#[test]
fn trailing_hard_break_markers_at_end_are_dropped() {
    assert_eq!(parse("foo  "), vec![s("foo")]);
    assert_eq!(parse("foo\\"), vec![s("foo\\")]);
}

#[rstest]
#[case(r"\*not emphasized*", "*not emphasized*")]
#[case(r"\\", r"\")]
#[case(r"\a\b", r"\a\b")]
#[case(r"\[foo]", "[foo]")]
#[case("&amp; &copy; &#35;", "& © #")]
#[case("&nosuch; &", "&nosuch; &")]
#[case("&#0;", "\u{FFFD}")]
fn escapes_and_entities(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(parse(input), vec![s(expected)]);
}

#[test]
fn entity_is_not_a_delimiter() {
    assert_eq!(parse("&#42;foo&#42;"), vec![s("*foo*")]);
}

#[test]
fn inline_link() {
    assert_eq!(
        parse("[link](/uri \"title\")"),
        vec![link("/uri", Some("title"), vec![s("link")])]
    );
    assert_eq!(
        parse("[link](</my uri>)"),
        vec![link("/my uri", None, vec![s("link")])]
    );
    assert_eq!(parse("[link]()"), vec![link("", None, vec![s("link")])]);
}

#[test]
fn title_needs_whitespace_before_it() {
    assert_eq!(
        parse("[a](<b>\"t\")"),
        vec![
            s("[a]("),
            Inline::HtmlInline("<b>".into()),
            s("\"t\")"),
        ]
    );
}

#[test]
fn link_text_keeps_emphasis() {
    assert_eq!(
        parse("[*foo* bar](/u)"),
        vec![link("/u", None, vec![emph(vec![s("foo")]), s(" bar")])]
    );
}

#[test]
fn links_cannot_nest() {
    assert_eq!(
        parse("[foo [bar](/uri)](/uri)"),
        vec![s("[foo "), link("/uri", None, vec![s("bar")]), s("](/uri)")]
    );
}

#[test]
fn images_may_contain_links() {
    assert_eq!(
        parse("![[foo](/u)](/img)"),
        vec![Inline::Image(Link {
            destination: "/img".into(),
            title: None,
            children: vec![link("/u", None, vec![s("foo")])],
        })]
    );
}

#[test]
fn brackets_bind_tighter_than_emphasis() {
    assert_eq!(
        parse("*[foo*](/u)"),
        vec![s("*"), link("/u", None, vec![s("foo*")])]
    );
}

#[test]
fn code_span_beats_link() {
    assert_eq!(
        parse("[foo`](/uri)`"),
        vec![s("[foo"), Inline::CodeSpan("](/uri)".into())]
    );
}

#[test]
fn reference_links() {
    let map = refs(&[("bar", "/url", Some("title")), ("foo", "/foo", None)]);
    assert_eq!(
        parse_inline("[foo][bar]", &map),
        vec![link("/url", Some("title"), vec![s("foo")])]
    );
    assert_eq!(
        parse_inline("[foo][]", &map),
        vec![link("/foo", None, vec![s("foo")])]
    );
    assert_eq!(
        parse_inline("[Foo]", &map),
        vec![link("/foo", None, vec![s("Foo")])]
    );
    assert_eq!(
        parse_inline("[foo][nope]", &map),
        vec![s("[foo][nope]")]
    );
}

#[test]
fn shortcut_reference_followed_by_label_is_not_a_link() {
    let map = refs(&[("foo", "/foo", None), ("baz", "/baz", None)]);
    assert_eq!(
        parse_inline("[foo][bar][baz]", &map),
        vec![s("[foo]"), link("/baz", None, vec![s("bar")])]
    );
}

#[test]
fn unmatched_brackets_are_literal() {
    assert_eq!(parse("[foo] ]bar["), vec![s("[foo] ]bar[")]);
    assert_eq!(parse("![not an image]"), vec![s("![not an image]")]);
}

#[test]
fn autolinks_and_html() {
    assert_eq!(
        parse("<https://x.org> and <a@b.co>"),
        vec![
            Inline::Autolink(Autolink {
                destination: "https://x.org".into(),
                text: "https://x.org".into(),
                kind: AutolinkKind::Uri,
            }),
            s(" and "),
            Inline::Autolink(Autolink {
                destination: "mailto:a@b.co".into(),
                text: "a@b.co".into(),
                kind: AutolinkKind::Email,
            }),
        ]
    );
    assert_eq!(
        parse("a <b class=\"x\">*c*</b>"),
        vec![
            s("a "),
            Inline::HtmlInline("<b class=\"x\">".into()),
            emph(vec![s("c")]),
            Inline::HtmlInline("</b>".into()),
        ]
    );
    assert_eq!(parse("1 < 2"), vec![s("1 < 2")]);
}

#[test]
fn html_attribute_hides_delimiters() {
    assert_eq!(
        parse("*<img src=\"*\">"),
        vec![s("*"), Inline::HtmlInline("<img src=\"*\">".into())]
    );
}

#[test]
fn pathological_runs_terminate() {
    let input = "*a **a ".repeat(2000) + &"_".repeat(3000) + &"[".repeat(3000);
    let out = parse(&input);
    assert!(!out.is_empty());

    let nested = "*".repeat(500) + "a" + &"*".repeat(500);
    assert!(!parse(&nested).is_empty());

    let n = 20_000;
    let unclosed_ticks: String = (1..600).map(|k| format!("e{}", "`".repeat(k))).collect();
    for input in [
        "[".to_string() + &"a* ".repeat(n) + &"]".repeat(n),
        "*a [x](y) ".repeat(n),
        "[a ![b](c) ".repeat(n),
        unclosed_ticks,
    ] {
        let started = Instant::now();
        assert!(!parse(&input).is_empty());
        assert!(
            started.elapsed() < Duration::from_secs(5),
            "took {:?} on {} bytes",
            started.elapsed(),
            input.len()
        );
    }
}

#[rstest]
#[case("*a\u{301}*b", "a\u{301}", "b")]
#[case("*a\u{200d}*b", "a\u{200d}", "b")]
#[case("*a\u{ad}*b", "a\u{ad}", "b")]
fn format_and_mark_characters_are_not_punctuation(
    #[case] input: &str,
    #[case] inner: &str,
    #[case] after: &str,
) {
    assert_eq!(parse(input), vec![emph(vec![s(inner)]), s(after)]);
}

#[test]
fn link_inside_link_text_leaves_outer_opener_inactive() {
    assert_eq!(
        parse("[a [b](c) d](e)"),
        vec![s("[a "), link("c", None, vec![s("b")]), s(" d](e)")]
    );
}

#[rstest]
#[case("``` a `` b ` c", vec![s("``` a `` b ` c")])]
#[case("``` a ` b `` c `", vec![s("``` a "), Inline::CodeSpan("b `` c".into())])]
#[case("`` a ``` b `` c ``", vec![Inline::CodeSpan("a ``` b".into()), s(" c ``")])]
fn unmatched_tick_runs_stay_literal(#[case] input: &str, #[case] expected: Vec<Inline>) {
    assert_eq!(parse(input), expected);
}

#[test]
fn overlong_shortcut_label_is_text() {
    let label = "a".repeat(1000);
    let map = refs(&[(label.as_str(), "/long", None)]);
    let input = format!("[{label}]");
    assert_eq!(parse_inline(&input, &map), vec![s(&input)]);
}
