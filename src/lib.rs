// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference
    clippy::module_name_repetitions
)]

//! # Overmark
//!
//! A live markdown annotation engine for plain-text editing surfaces.
//!
//! Overmark styles markdown source in place: the styled output always has
//! the exact character content of the input, so the host editor's cursor
//! and selection offsets need no translation. On top of that it implements
//! list continuation — pressing Enter inside a list item auto-inserts the
//! next marker, and pressing Enter on an empty item removes it.
//!
//! Nothing in this crate can fail: malformed markdown degrades to
//! unstyled text, out-of-range spans are clamped, and every guard in the
//! continuation engine resolves to a no-op.
//!
//! ## Modules
//!
//! - [`document`]: Tag range model and the markdown parser adapter
//! - [`render`]: Style renderer, styled text, and the render cache
//! - [`style`]: Presentation attributes and themes
//! - [`editor`]: List continuation and the editing session
//!
//! ## Example
//!
//! ```
//! use overmark::prelude::*;
//!
//! let mut session = Session::new(Theme::dark());
//! let styled = session.styled("- item");
//! assert_eq!(styled.text(), "- item");
//!
//! // The user presses Enter at the end of the item.
//! let old = EditState::new("- item", Selection::caret(6));
//! let new = EditState::new("- item\n", Selection::caret(7));
//! let adjusted = session.on_edit(&old, new);
//! assert_eq!(adjusted.text, "- item\n- ");
//! ```

pub mod document;
pub mod editor;
pub mod render;
pub mod style;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::document::{ParsedTags, TagRange, parse_tags};
    pub use crate::editor::{EditState, ListRangeIndex, Selection, Session};
    pub use crate::render::{RenderCache, StyledText, render};
    pub use crate::style::{SpanStyle, Theme};
}
