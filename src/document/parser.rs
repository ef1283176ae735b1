//! Markdown parsing with pulldown-cmark.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

use super::types::{ParsedTags, TagRange};

/// Parse markdown source into an ordered tag range sequence.
///
/// Total over all inputs: malformed or ambiguous markdown simply produces
/// fewer tag ranges (plain text), never an error. All spans are byte
/// offsets into `text`.
///
/// # Example
///
/// ```
/// use overmark::document::{parse_tags, TagRange};
///
/// let tags = parse_tags("# Hello");
/// assert!(tags
///     .iter()
///     .any(|t| matches!(t, TagRange::Heading { level: 1, .. })));
/// ```
pub fn parse_tags(text: &str) -> ParsedTags {
    let mut ranges = Vec::new();
    // Stack of enclosing lists: `true` for ordered. Drives both the item
    // marker width and the nesting level reported on `List`.
    let mut list_stack: Vec<bool> = Vec::new();

    for (event, range) in Parser::new_ext(text, parse_options()).into_offset_iter() {
        match event {
            Event::Start(tag) => match tag {
                Tag::Heading { level, .. } => ranges.push(TagRange::Heading {
                    level: level as u8,
                    start: range.start,
                    end: range.end,
                }),
                Tag::Emphasis => ranges.push(TagRange::Emphasis {
                    start: range.start,
                    end: range.end,
                }),
                Tag::Strong => ranges.push(TagRange::Strong {
                    start: range.start,
                    end: range.end,
                }),
                Tag::Strikethrough => ranges.push(TagRange::Strikethrough {
                    start: range.start,
                    end: range.end,
                }),
                Tag::List(first) => {
                    ranges.push(TagRange::List {
                        order: first.unwrap_or(0),
                        nested_level: list_stack.len(),
                        start: range.start,
                        end: range.end,
                    });
                    list_stack.push(first.is_some());
                }
                Tag::Item => ranges.push(TagRange::ListItem {
                    ordered: list_stack.last().copied().unwrap_or(false),
                    start: range.start,
                    end: range.end,
                }),
                Tag::Paragraph => ranges.push(TagRange::Paragraph {
                    start: range.start,
                    end: range.end,
                }),
                Tag::Link { dest_url, .. } => ranges.push(TagRange::Link {
                    url_offset: url_offset(&range, dest_url.len()),
                    start: range.start,
                    end: range.end,
                }),
                Tag::Image { dest_url, .. } => ranges.push(TagRange::Image {
                    url_offset: url_offset(&range, dest_url.len()),
                    start: range.start,
                    end: range.end,
                }),
                Tag::BlockQuote(_) => ranges.push(TagRange::BlockQuote {
                    start: range.start,
                    end: range.end,
                }),
                Tag::CodeBlock(_) => ranges.push(TagRange::CodeBlock {
                    start: range.start,
                    end: range.end,
                }),
                _ => {}
            },
            Event::End(TagEnd::List(_)) => {
                list_stack.pop();
            }
            Event::Code(_) => ranges.push(TagRange::InlineCode {
                start: range.start,
                end: range.end,
            }),
            Event::Rule => ranges.push(TagRange::Rule {
                start: range.start,
                end: range.end,
            }),
            Event::TaskListMarker(_) => ranges.push(TagRange::TaskListMarker {
                start: range.start,
                end: range.end,
            }),
            _ => {}
        }
    }

    tracing::trace!(bytes = text.len(), tags = ranges.len(), "parsed markdown");
    ParsedTags::new(ranges)
}

fn parse_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options
}

/// Byte offset of the url inside an inline link/image span.
///
/// For `[text](url)` the url occupies `[end - 1 - len, end - 1)`. Clamped
/// into the construct's span so reference-style links degrade to a harmless
/// (possibly empty) url span instead of an out-of-range offset.
fn url_offset(range: &std::ops::Range<usize>, dest_len: usize) -> usize {
    range
        .end
        .saturating_sub(1)
        .saturating_sub(dest_len)
        .max(range.start)
}
