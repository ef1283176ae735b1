//! Single-entry render cache with explicit invalidation.

use crate::document::{self, ParsedTags, TagRange};
use crate::editor::ListRangeIndex;
use crate::render::{self, StyledText};
use crate::style::Theme;

/// Everything produced by one parse+render pass, keyed by its inputs.
///
/// Entries are all-or-nothing: an entry is either absent or fully
/// populated, never partially updated.
#[derive(Debug, Clone)]
struct CacheEntry {
    text: String,
    theme: Theme,
    tags: ParsedTags,
    styled: StyledText,
    lists: ListRangeIndex,
}

impl CacheEntry {
    fn matches(&self, text: &str, theme: &Theme) -> bool {
        self.text == text && self.theme == *theme
    }
}

/// Holds at most one `(text, theme) → styled text` result.
///
/// Owned by a single editing session; single-threaded by design, so there
/// is no locking. The caller must call [`RenderCache::invalidate`]
/// whenever the displayed text or theme changes.
#[derive(Debug, Clone, Default)]
pub struct RenderCache {
    entry: Option<CacheEntry>,
}

impl RenderCache {
    /// Create an empty cache.
    pub const fn new() -> Self {
        Self { entry: None }
    }

    /// Return the styled text for `(text, theme)`, parsing and rendering
    /// only on a key mismatch.
    pub fn get_or_compute(&mut self, text: &str, theme: &Theme) -> &StyledText {
        self.get_or_compute_with(text, theme, document::parse_tags)
    }

    /// Like [`RenderCache::get_or_compute`] with an explicit parse
    /// function, so callers can observe or substitute the parser.
    pub fn get_or_compute_with(
        &mut self,
        text: &str,
        theme: &Theme,
        parse: impl FnOnce(&str) -> ParsedTags,
    ) -> &StyledText {
        let hit = self
            .entry
            .as_ref()
            .is_some_and(|entry| entry.matches(text, theme));
        if !hit {
            self.entry = None;
        }
        let entry = self.entry.get_or_insert_with(|| {
            tracing::debug!(bytes = text.len(), "render cache miss");
            let tags = parse(text);
            let styled = render::render(&tags, text, theme);
            let lists = ListRangeIndex::from_tags(&tags);
            CacheEntry {
                text: text.to_string(),
                theme: theme.clone(),
                tags,
                styled,
                lists,
            }
        });
        &entry.styled
    }

    /// Drop the entry (and with it the list range index) unconditionally.
    pub fn invalidate(&mut self) {
        if self.entry.take().is_some() {
            tracing::debug!("render cache invalidated");
        }
    }

    /// True when a computed entry is present.
    pub const fn is_valid(&self) -> bool {
        self.entry.is_some()
    }

    /// The cached parse result, if a valid entry exists.
    pub fn parsed(&self) -> Option<&ParsedTags> {
        self.entry.as_ref().map(|entry| &entry.tags)
    }

    /// The list range index from the most recent parse, if any.
    pub fn list_index(&self) -> Option<&ListRangeIndex> {
        self.entry.as_ref().map(|entry| &entry.lists)
    }

    /// The cached tag ranges of a given kind, mostly useful in tests.
    pub fn tags_matching(&self, pred: impl Fn(&TagRange) -> bool) -> usize {
        self.parsed()
            .map_or(0, |tags| tags.iter().filter(|tag| pred(tag)).count())
    }
}
