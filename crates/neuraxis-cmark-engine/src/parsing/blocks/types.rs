use serde::Serialize;

/// The kind of a block node, with its type-specific attributes.
///
/// Containers (`Document`, `BlockQuote`, `List`, `ListItem`) hold child blocks;
/// every other kind is a leaf holding text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum BlockKind {
    /// The root of every tree.
    Document,
    /// A `>` block quote.
    BlockQuote,
    /// A run of list items sharing a marker type.
    List(ListData),
    /// One item of a list. Carries the marker data it was opened with.
    ListItem(ListData),
    /// A paragraph. Inline content.
    Paragraph,
    /// A `#` heading. Inline content.
    AtxHeading {
        /// 1 to 6.
        level: u8,
    },
    /// A paragraph underlined with `=` (level 1) or `-` (level 2). Inline content.
    SetextHeading {
        /// 1 or 2.
        level: u8,
    },
    /// `***`, `---` or `___`.
    ThematicBreak,
    /// Code indented by four columns. Literal content.
    IndentedCode,
    /// Code between backtick or tilde fences. Literal content.
    FencedCode(FenceData),
    /// Raw HTML passed through untouched. Literal content.
    HtmlBlock {
        /// Which of the seven start conditions opened the block.
        kind: HtmlBlockKind,
    },
}

impl BlockKind {
    /// True for the kinds that hold child blocks.
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            BlockKind::Document | BlockKind::BlockQuote | BlockKind::List(_) | BlockKind::ListItem(_)
        )
    }

    /// True for the kinds that absorb raw lines while open.
    pub fn accepts_lines(&self) -> bool {
        matches!(
            self,
            BlockKind::Paragraph
                | BlockKind::IndentedCode
                | BlockKind::FencedCode(_)
                | BlockKind::HtmlBlock { .. }
        )
    }

    /// True for the kinds whose content goes through inline parsing.
    pub fn has_inlines(&self) -> bool {
        matches!(
            self,
            BlockKind::Paragraph | BlockKind::AtxHeading { .. } | BlockKind::SetextHeading { .. }
        )
    }

    /// Whether a block of this kind may hold `child` directly.
    pub fn can_contain(&self, child: &BlockKind) -> bool {
        match self {
            BlockKind::Document | BlockKind::BlockQuote | BlockKind::ListItem(_) => {
                !matches!(child, BlockKind::ListItem(_))
            }
            BlockKind::List(_) => matches!(child, BlockKind::ListItem(_)),
            _ => false,
        }
    }

    /// Short, stable name used in outlines and log messages.
    pub fn name(&self) -> &'static str {
        match self {
            BlockKind::Document => "Document",
            BlockKind::BlockQuote => "BlockQuote",
            BlockKind::List(_) => "List",
            BlockKind::ListItem(_) => "ListItem",
            BlockKind::Paragraph => "Paragraph",
            BlockKind::AtxHeading { .. } => "AtxHeading",
            BlockKind::SetextHeading { .. } => "SetextHeading",
            BlockKind::ThematicBreak => "ThematicBreak",
            BlockKind::IndentedCode => "IndentedCode",
            BlockKind::FencedCode(_) => "FencedCode",
            BlockKind::HtmlBlock { .. } => "HtmlBlock",
        }
    }
}

/// Marker data shared by a list and its items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListData {
    /// Bullet or ordered marker.
    pub marker: ListMarker,
    /// Decided when the list closes; meaningless on items.
    pub tight: bool,
    /// Columns of indentation before the marker.
    pub marker_offset: usize,
    /// Marker width plus the spaces up to the item's content.
    pub padding: usize,
}

impl ListData {
    /// Column at which an item's continuation content must start.
    pub fn content_indent(&self) -> usize {
        self.marker_offset + self.padding
    }
}

/// The marker that opened a list item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ListMarker {
    /// `-`, `+` or `*`.
    Bullet {
        /// The bullet character.
        bullet: char,
    },
    /// `1.` or `1)` style.
    Ordered {
        /// Number of the first item.
        start: u32,
        /// `.` or `)`.
        delimiter: char,
    },
}

impl ListMarker {
    /// Two markers continue the same list when type and punctuation agree.
    pub fn same_list(self, other: ListMarker) -> bool {
        match (self, other) {
            (ListMarker::Bullet { bullet: a }, ListMarker::Bullet { bullet: b }) => a == b,
            (
                ListMarker::Ordered { delimiter: a, .. },
                ListMarker::Ordered { delimiter: b, .. },
            ) => a == b,
            _ => false,
        }
    }
}

/// Attributes of a fenced code block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FenceData {
    /// `` ` `` or `~`.
    pub fence_char: char,
    /// Length of the opening fence.
    pub fence_length: usize,
    /// Indentation of the opening fence, stripped from content lines.
    pub fence_offset: usize,
    /// Info string with escapes and entities resolved. Filled when the block closes.
    pub info: String,
}

/// The seven HTML block start conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HtmlBlockKind {
    /// `<script`, `<pre`, `<style`, `<textarea`.
    RawText,
    /// `<!--`.
    Comment,
    /// `<?`.
    ProcessingInstruction,
    /// `<!` followed by a letter.
    Declaration,
    /// `<![CDATA[`.
    Cdata,
    /// A known block-level tag name.
    BlockTag,
    /// Any other complete open or closing tag alone on its line.
    AnyTag,
}

impl HtmlBlockKind {
    /// All kinds in start-condition order.
    pub const ALL: [HtmlBlockKind; 7] = [
        HtmlBlockKind::RawText,
        HtmlBlockKind::Comment,
        HtmlBlockKind::ProcessingInstruction,
        HtmlBlockKind::Declaration,
        HtmlBlockKind::Cdata,
        HtmlBlockKind::BlockTag,
        HtmlBlockKind::AnyTag,
    ];

    /// The CommonMark condition number, 1 to 7.
    pub fn number(self) -> u8 {
        match self {
            HtmlBlockKind::RawText => 1,
            HtmlBlockKind::Comment => 2,
            HtmlBlockKind::ProcessingInstruction => 3,
            HtmlBlockKind::Declaration => 4,
            HtmlBlockKind::Cdata => 5,
            HtmlBlockKind::BlockTag => 6,
            HtmlBlockKind::AnyTag => 7,
        }
    }

    /// Kinds 6 and 7 end at a blank line instead of an end marker.
    pub fn ends_at_blank_line(self) -> bool {
        matches!(self, HtmlBlockKind::BlockTag | HtmlBlockKind::AnyTag)
    }
}
