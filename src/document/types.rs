//! Core tag range types.

use std::ops::Range;

/// One parsed markdown construct together with its source span.
///
/// Spans are half-open byte ranges into the UTF-8 source text
/// (`0 <= start <= end <= text.len()`). Ranges may nest (a `ListItem`
/// inside a `List`); well-formedness is the parser's contract and is not
/// revalidated here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagRange {
    /// ATX or setext heading, level 1-6.
    Heading { level: u8, start: usize, end: usize },
    /// Emphasis (`*italic*`), including the delimiters.
    Emphasis { start: usize, end: usize },
    /// Strong emphasis (`**bold**`), including the delimiters.
    Strong { start: usize, end: usize },
    /// Strikethrough (`~~gone~~`), including the delimiters.
    Strikethrough { start: usize, end: usize },
    /// Inline code span, including the backticks.
    InlineCode { start: usize, end: usize },
    /// A single list item, marker included.
    ListItem {
        ordered: bool,
        start: usize,
        end: usize,
    },
    /// A whole list. `order` is the first item number for ordered lists
    /// and 0 for bullet lists; `nested_level` is 0 for top-level lists.
    List {
        order: u64,
        nested_level: usize,
        start: usize,
        end: usize,
    },
    /// A paragraph. Structural only; never styled.
    Paragraph { start: usize, end: usize },
    /// Inline link `[text](url)`. `url_offset` is the byte offset of the
    /// first url byte, i.e. just past the opening paren.
    Link {
        url_offset: usize,
        start: usize,
        end: usize,
    },
    /// Inline image `![alt](url)`, same shape as `Link` with a two-byte
    /// opening marker.
    Image {
        url_offset: usize,
        start: usize,
        end: usize,
    },
    /// Thematic break (`---`).
    Rule { start: usize, end: usize },
    /// Block quote, marker included.
    BlockQuote { start: usize, end: usize },
    /// Task list checkbox (`[ ]` / `[x]`).
    TaskListMarker { start: usize, end: usize },
    /// Fenced or indented code block, fences included.
    CodeBlock { start: usize, end: usize },
}

impl TagRange {
    /// The construct's source span.
    pub const fn span(&self) -> Range<usize> {
        let (start, end) = match self {
            Self::Heading { start, end, .. }
            | Self::Emphasis { start, end }
            | Self::Strong { start, end }
            | Self::Strikethrough { start, end }
            | Self::InlineCode { start, end }
            | Self::ListItem { start, end, .. }
            | Self::List { start, end, .. }
            | Self::Paragraph { start, end }
            | Self::Link { start, end, .. }
            | Self::Image { start, end, .. }
            | Self::Rule { start, end }
            | Self::BlockQuote { start, end }
            | Self::TaskListMarker { start, end }
            | Self::CodeBlock { start, end } => (*start, *end),
        };
        start..end
    }
}

/// Ordered result of one parse.
///
/// The order is parser-encounter order and is semantically significant:
/// it is the application order for style overlays, so later entries win
/// attribute conflicts over the same byte.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedTags {
    ranges: Vec<TagRange>,
}

impl ParsedTags {
    /// Wrap a parser-ordered sequence of tag ranges.
    pub const fn new(ranges: Vec<TagRange>) -> Self {
        Self { ranges }
    }

    /// The tag ranges in application order.
    pub fn ranges(&self) -> &[TagRange] {
        &self.ranges
    }

    /// Number of tag ranges.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// True when the parse produced no constructs (plain text).
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Iterate over the tag ranges in application order.
    pub fn iter(&self) -> std::slice::Iter<'_, TagRange> {
        self.ranges.iter()
    }
}

impl<'a> IntoIterator for &'a ParsedTags {
    type Item = &'a TagRange;
    type IntoIter = std::slice::Iter<'a, TagRange>;

    fn into_iter(self) -> Self::IntoIter {
        self.ranges.iter()
    }
}
