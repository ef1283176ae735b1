//! One editing session: theme + render cache + the edit loop.

use crate::editor::continuation::{EditState, continue_list};
use crate::render::{RenderCache, StyledText};
use crate::style::Theme;

/// Owns the render cache and theme for a single editing surface.
///
/// The host text field feeds every user edit through [`Session::on_edit`]
/// and displays what [`Session::styled`] returns. Single-threaded and
/// synchronous: each edit completes fully before the next is accepted,
/// so there is no locking and no cancellation model.
#[derive(Debug, Clone, Default)]
pub struct Session {
    theme: Theme,
    cache: RenderCache,
}

impl Session {
    /// Create a session with the given theme.
    pub const fn new(theme: Theme) -> Self {
        Self {
            theme,
            cache: RenderCache::new(),
        }
    }

    /// Process one host edit.
    ///
    /// Selection-only changes come back untouched and keep the cache
    /// warm. A text change first runs list continuation against the index
    /// captured from the prior parse, then invalidates the cache; the
    /// returned state is authoritative for the host.
    pub fn on_edit(&mut self, old: &EditState, new: EditState) -> EditState {
        if old.text == new.text {
            return new;
        }
        let adjusted = self
            .cache
            .list_index()
            .and_then(|lists| continue_list(old, &new, lists))
            .unwrap_or(new);
        self.cache.invalidate();
        adjusted
    }

    /// Styled text for display; parses and renders only when the cache
    /// is cold. The offset mapping to the host is identity.
    pub fn styled(&mut self, text: &str) -> &StyledText {
        self.cache.get_or_compute(text, &self.theme)
    }

    /// Replace the theme, invalidating any cached render.
    pub fn set_theme(&mut self, theme: Theme) {
        if self.theme != theme {
            self.theme = theme;
            self.cache.invalidate();
        }
    }

    /// The current theme.
    pub const fn theme(&self) -> &Theme {
        &self.theme
    }

    /// The render cache, for callers that drive it directly.
    pub const fn cache(&self) -> &RenderCache {
        &self.cache
    }
}
