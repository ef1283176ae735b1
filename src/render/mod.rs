//! Style rendering: tag ranges over source text to content-preserving
//! styled text.
//!
//! The renderer only ever adds presentation attributes; the character
//! content and length of the output always equal the source, so the
//! offset mapping exposed to the host is identity.

mod cache;

pub use cache::RenderCache;

use std::ops::Range;

use crate::document::{ParsedTags, TagRange};
use crate::style::{SpanStyle, Theme};

/// One attribute overlay over a byte range of the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSpan {
    range: Range<usize>,
    style: SpanStyle,
}

impl StyledSpan {
    /// The byte range the attributes apply to.
    pub const fn range(&self) -> &Range<usize> {
        &self.range
    }

    /// The attributes.
    pub const fn style(&self) -> SpanStyle {
        self.style
    }
}

/// Source text plus non-destructive attribute overlays.
///
/// Overlays are kept in application order. [`StyledText::style_at`] gives
/// the merged view of one byte: different attribute kinds combine,
/// same-kind conflicts resolve last-applied-wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledText {
    text: String,
    spans: Vec<StyledSpan>,
}

impl StyledText {
    /// Create styled text with no overlays.
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            spans: Vec::new(),
        }
    }

    /// Add an attribute overlay.
    ///
    /// The range is clamped to the text bounds; empty, inverted, or
    /// attribute-free spans are dropped. Out-of-range input is a parser
    /// contract violation and degrades to a clamped span rather than a
    /// failure.
    pub fn push_span(&mut self, range: Range<usize>, style: SpanStyle) {
        let start = range.start.min(self.text.len());
        let end = range.end.min(self.text.len());
        if start >= end || style.is_plain() {
            return;
        }
        self.spans.push(StyledSpan {
            range: start..end,
            style,
        });
    }

    /// The unmodified source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The overlays in application order.
    pub fn spans(&self) -> &[StyledSpan] {
        &self.spans
    }

    /// The merged attributes at one byte offset.
    pub fn style_at(&self, index: usize) -> SpanStyle {
        self.spans
            .iter()
            .filter(|span| span.range.contains(&index))
            .fold(SpanStyle::new(), |merged, span| merged.patch(span.style))
    }

    /// Byte length of the text.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// True when the text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Render a parse result over its source text.
///
/// Total over all tag range variants; the match below is exhaustive, so a
/// new construct is a compile error here rather than a runtime gap.
pub fn render(tags: &ParsedTags, text: &str, theme: &Theme) -> StyledText {
    let mut out = StyledText::new(text);
    for tag in tags {
        match *tag {
            TagRange::Heading { level, start, end } => heading(&mut out, theme, level, start, end),
            TagRange::Emphasis { start, end } => emphasis(&mut out, theme, start, end),
            TagRange::Strong { start, end } => strong(&mut out, theme, start, end),
            TagRange::Strikethrough { start, end } => {
                out.push_span(start..end, theme.strikethrough);
            }
            TagRange::InlineCode { start, end } => inline_code(&mut out, theme, start, end),
            TagRange::ListItem {
                ordered,
                start,
                end,
            } => list_item(&mut out, theme, ordered, start, end),
            // Lists carry no direct style; their spans feed the list
            // range index consumed by the continuation engine.
            TagRange::List { .. } | TagRange::Paragraph { .. } => {}
            TagRange::Link {
                url_offset,
                start,
                end,
            } => link(&mut out, theme, 1, url_offset, start, end),
            TagRange::Image {
                url_offset,
                start,
                end,
            } => link(&mut out, theme, 2, url_offset, start, end),
            TagRange::Rule { start, end }
            | TagRange::TaskListMarker { start, end }
            | TagRange::CodeBlock { start, end } => {
                out.push_span(start..end, marker_style(theme));
            }
            TagRange::BlockQuote { start, end } => block_quote(&mut out, theme, start, end),
        }
    }
    tracing::trace!(tags = tags.len(), spans = out.spans().len(), "rendered");
    out
}

fn marker_style(theme: &Theme) -> SpanStyle {
    SpanStyle::new()
        .color(theme.tertiary)
        .family(crate::style::FontFamily::Monospace)
}

fn heading(out: &mut StyledText, theme: &Theme, level: u8, start: usize, end: usize) {
    out.push_span(
        start..start + usize::from(level),
        SpanStyle::new().color(theme.primary),
    );
    out.push_span(start..end, theme.title(level));
}

fn emphasis(out: &mut StyledText, theme: &Theme, start: usize, end: usize) {
    let accent = SpanStyle::new().color(theme.primary);
    out.push_span(start..start + 1, accent);
    out.push_span(end.saturating_sub(1)..end, accent);
    out.push_span(start..end, theme.emphasis);
}

fn strong(out: &mut StyledText, theme: &Theme, start: usize, end: usize) {
    let accent = SpanStyle::new().color(theme.primary);
    out.push_span(start..start + 2, accent);
    out.push_span(end.saturating_sub(2)..end, accent);
    out.push_span(start..end, theme.bold);
}

fn inline_code(out: &mut StyledText, theme: &Theme, start: usize, end: usize) {
    // Monospace and the background wash cover the backticks too; only the
    // accent color singles the delimiters out.
    let accent = SpanStyle::new().color(theme.primary);
    out.push_span(start..end, theme.inline_code);
    out.push_span(start..start + 1, accent);
    out.push_span(end.saturating_sub(1)..end, accent);
}

fn list_item(out: &mut StyledText, theme: &Theme, ordered: bool, start: usize, end: usize) {
    // "1. " for ordered items, "- " for bullets; clamped so a bare marker
    // at end of text never overruns the item span.
    let marker = if ordered { 3 } else { 2 };
    out.push_span(start..(start + marker).min(end), theme.list_marker);
}

fn link(
    out: &mut StyledText,
    theme: &Theme,
    opener: usize,
    url_offset: usize,
    start: usize,
    end: usize,
) {
    let marker = SpanStyle::new().color(theme.tertiary);
    let paren = SpanStyle::new().color(theme.secondary);
    let url = SpanStyle::new().color(theme.primary);

    // "[" (or "![") and "]"
    out.push_span(start..start + opener, marker);
    out.push_span(url_offset.saturating_sub(2)..url_offset.saturating_sub(1), marker);
    // "(" and ")"
    out.push_span(url_offset.saturating_sub(1)..url_offset, paren);
    out.push_span(end.saturating_sub(1)..end, paren);
    // the url itself
    out.push_span(url_offset..end.saturating_sub(1), url);
}

fn block_quote(out: &mut StyledText, theme: &Theme, start: usize, end: usize) {
    out.push_span(start..start + 1, marker_style(theme));
    out.push_span(start + 1..end, SpanStyle::new().color(theme.secondary));
}
