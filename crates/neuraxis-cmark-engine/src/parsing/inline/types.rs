use serde::Serialize;

/// A resolved inline node.
///
/// Containers (`Emph`, `Strong`, `Link`, `Image`) own their children; every
/// other variant is a leaf carrying literal text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Inline {
    /// Literal text, escapes and entities already resolved.
    Str(String),
    /// Emphasis, one delimiter each side.
    Emph(Vec<Inline>),
    /// Strong emphasis, two delimiters each side.
    Strong(Vec<Inline>),
    /// A code span. Raw zone: no other inline parsing inside.
    CodeSpan(String),
    /// An inline or reference link.
    Link(Link),
    /// An inline or reference image. Children form the alt text.
    Image(Link),
    /// Raw inline HTML passed through untouched.
    HtmlInline(String),
    /// `<scheme:...>` or `<user@host>`.
    Autolink(Autolink),
    /// A line ending inside a paragraph.
    SoftBreak,
    /// Two trailing spaces or a backslash before a line ending.
    HardBreak,
}

/// Target and content of a link or image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    /// Escapes and entities resolved, not percent-encoded.
    pub destination: String,
    pub title: Option<String>,
    pub children: Vec<Inline>,
}

/// An autolink and what it points at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Autolink {
    /// The href; email autolinks carry a `mailto:` prefix.
    pub destination: String,
    /// The text between the angle brackets.
    pub text: String,
    pub kind: AutolinkKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AutolinkKind {
    Uri,
    Email,
}

impl Inline {
    /// Child nodes of container variants; empty for leaves.
    pub fn children(&self) -> &[Inline] {
        match self {
            Inline::Emph(children) | Inline::Strong(children) => children,
            Inline::Link(link) | Inline::Image(link) => &link.children,
            _ => &[],
        }
    }

    /// The text a renderer would show with all markup stripped, e.g. for image alt text.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        self.push_plain_text(&mut out);
        out
    }

    fn push_plain_text(&self, out: &mut String) {
        match self {
            Inline::Str(s) | Inline::CodeSpan(s) | Inline::HtmlInline(s) => out.push_str(s),
            Inline::Autolink(a) => out.push_str(&a.text),
            Inline::SoftBreak | Inline::HardBreak => out.push('\n'),
            Inline::Emph(_) | Inline::Strong(_) | Inline::Link(_) | Inline::Image(_) => {
                for child in self.children() {
                    child.push_plain_text(out);
                }
            }
        }
    }
}
