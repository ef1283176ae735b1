//! List continuation: the Enter-inside-a-list affordance.
//!
//! A single qualifying keystroke (one inserted newline with a collapsed
//! cursor) either continues the surrounding list with a fresh marker or,
//! on an empty item, removes the marker and ends the list. Every other
//! edit shape passes through untouched.

use std::ops::Range;

use crate::document::{ParsedTags, TagRange};

/// A selection over the text, as half-open byte offsets.
///
/// A caret is a collapsed selection (`start == end`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub start: usize,
    pub end: usize,
}

impl Selection {
    /// Create a selection.
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A collapsed selection at `offset`.
    pub const fn caret(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// True when the selection is a caret.
    pub const fn is_collapsed(&self) -> bool {
        self.start == self.end
    }
}

/// The host text field's state: full text plus selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditState {
    pub text: String,
    pub selection: Selection,
}

impl EditState {
    /// Create an edit state.
    pub fn new(text: impl Into<String>, selection: Selection) -> Self {
        Self {
            text: text.into(),
            selection,
        }
    }
}

/// Which list kind, if any, contains a byte offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMatch {
    None,
    Unordered,
    Ordered,
}

/// Interval sets over the list spans of the most recent parse.
///
/// Rebuilt on every parse and discarded on cache invalidation; consumed
/// only by [`continue_list`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListRangeIndex {
    unordered: Vec<Range<usize>>,
    ordered: Vec<Range<usize>>,
}

impl ListRangeIndex {
    /// Build the index from the `List` tag ranges of a parse result.
    /// `order == 0` means a bullet list, anything else an ordered list.
    pub fn from_tags(tags: &ParsedTags) -> Self {
        let mut index = Self::default();
        for tag in tags {
            if let TagRange::List { order, .. } = tag {
                if *order == 0 {
                    index.unordered.push(tag.span());
                } else {
                    index.ordered.push(tag.span());
                }
            }
        }
        index
    }

    /// Classify a byte offset: the unordered set is checked first, and the
    /// first containing interval wins.
    ///
    /// Containment treats the interval end as inclusive: the spans come
    /// from the parse of the pre-keystroke text, so a newline appended
    /// right at the end of a list (the common case) must still count as
    /// inside it.
    pub fn classify(&self, index: usize) -> ListMatch {
        let contains = |range: &Range<usize>| range.start <= index && index <= range.end;
        if self.unordered.iter().any(contains) {
            ListMatch::Unordered
        } else if self.ordered.iter().any(contains) {
            ListMatch::Ordered
        } else {
            ListMatch::None
        }
    }

    /// True when no list spans were recorded.
    pub fn is_empty(&self) -> bool {
        self.unordered.is_empty() && self.ordered.is_empty()
    }
}

/// Apply list continuation to one edit, if it qualifies.
///
/// Returns `Some(adjusted state)` when the edit was exactly one newline
/// inserted at a collapsed cursor inside a list span, and the list marker
/// was inserted or removed. Returns `None` for every other edit shape or
/// guard condition; the caller then keeps `new` as-is. The caller must
/// invalidate its render cache whenever the text changed.
pub fn continue_list(
    old: &EditState,
    new: &EditState,
    lists: &ListRangeIndex,
) -> Option<EditState> {
    let i = newline_insert_index(old, new)?;
    let matched = lists.classify(i);
    tracing::trace!(index = i, ?matched, "list continuation");
    match matched {
        ListMatch::None => None,
        ListMatch::Unordered => continue_marker(new, i, "- ", b'-'),
        ListMatch::Ordered => continue_marker(new, i, "1. ", b'.'),
    }
}

/// The activation precondition: both selections collapsed, the cursor
/// advanced by exactly one, and the byte before the new cursor is `\n`.
/// Returns the index of the inserted newline.
fn newline_insert_index(old: &EditState, new: &EditState) -> Option<usize> {
    if !old.selection.is_collapsed() || !new.selection.is_collapsed() {
        return None;
    }
    if old.selection.start + 1 != new.selection.start {
        return None;
    }
    let i = new.selection.end.checked_sub(1)?;
    (new.text.as_bytes().get(i) == Some(&b'\n')).then_some(i)
}

fn continue_marker(new: &EditState, i: usize, marker: &str, trigger: u8) -> Option<EditState> {
    let bytes = new.text.as_bytes();
    if i < 1 {
        return None;
    }
    // Enter on an already blank list line naturally ends the list.
    if bytes[i - 1] == b'\n' {
        return None;
    }
    if i >= 2 && bytes[i - 1] == b' ' && bytes[i - 2] == trigger {
        // Enter on an empty item: remove the marker (and the newline
        // before it) instead of continuing.
        delete_empty_item(new, i, marker.len() + 1)
    } else {
        insert_marker(new, marker)
    }
}

/// Insert the marker right after the newline and advance the selection.
fn insert_marker(new: &EditState, marker: &str) -> Option<EditState> {
    let at = new.selection.end;
    let mut text = new.text.clone();
    text.insert_str(at, marker);
    Some(EditState {
        text,
        selection: Selection::new(
            new.selection.start + marker.len(),
            new.selection.end + marker.len(),
        ),
    })
}

/// Delete `width` bytes ending at the inserted newline (clamped at the
/// start of text) and pull the selection back by the deleted count.
fn delete_empty_item(new: &EditState, i: usize, width: usize) -> Option<EditState> {
    let start = i.saturating_sub(width);
    // A deletion that would split a UTF-8 sequence means the index was
    // built against different text; degrade to a no-op.
    if !new.text.is_char_boundary(start) {
        return None;
    }
    let deleted = i - start;
    let mut text = new.text.clone();
    text.replace_range(start..i, "");
    Some(EditState {
        text,
        selection: Selection::new(
            new.selection.start - deleted,
            new.selection.end - deleted,
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parse_tags;

    fn index_of(text: &str) -> ListRangeIndex {
        ListRangeIndex::from_tags(&parse_tags(text))
    }

    fn enter(text_before: &str, at: usize) -> (EditState, EditState) {
        let mut text_after = text_before.to_string();
        text_after.insert(at, '\n');
        (
            EditState::new(text_before, Selection::caret(at)),
            EditState::new(text_after, Selection::caret(at + 1)),
        )
    }

    // --- Index construction and classification ---

    #[test]
    fn test_index_from_unordered_list() {
        let index = index_of("- item\n");
        assert_eq!(index.classify(3), ListMatch::Unordered);
        assert_eq!(index.classify(100), ListMatch::None);
    }

    #[test]
    fn test_index_from_ordered_list() {
        let index = index_of("1. item\n");
        assert_eq!(index.classify(3), ListMatch::Ordered);
    }

    #[test]
    fn test_index_end_is_inclusive() {
        // parse of the pre-keystroke text "- item" records [0,6)
        let index = index_of("- item");
        assert_eq!(index.classify(6), ListMatch::Unordered);
        assert_eq!(index.classify(7), ListMatch::None);
    }

    #[test]
    fn test_unordered_checked_before_ordered() {
        let index = ListRangeIndex {
            unordered: vec![0..10],
            ordered: vec![0..10],
        };
        assert_eq!(index.classify(5), ListMatch::Unordered);
    }

    #[test]
    fn test_empty_index() {
        let index = index_of("plain paragraph");
        assert!(index.is_empty());
        assert_eq!(index.classify(0), ListMatch::None);
    }

    // --- Continuation: insert ---

    #[test]
    fn test_enter_inside_bullet_item_inserts_marker() {
        let (old, new) = enter("- item", 6);
        let index = index_of("- item\n"); // prior parse recorded [0,7)
        let result = continue_list(&old, &new, &index).expect("continuation");
        assert_eq!(result.text, "- item\n- ");
        assert_eq!(result.selection, Selection::caret(9));
    }

    #[test]
    fn test_enter_inside_ordered_item_inserts_marker() {
        let (old, new) = enter("1. item", 7);
        let index = index_of("1. item");
        let result = continue_list(&old, &new, &index).expect("continuation");
        assert_eq!(result.text, "1. item\n1. ");
        assert_eq!(result.selection, Selection::caret(11));
    }

    #[test]
    fn test_enter_mid_item_inserts_marker_after_newline() {
        // cursor between "it" and "em"
        let (old, new) = enter("- item", 4);
        let index = index_of("- item");
        let result = continue_list(&old, &new, &index).expect("continuation");
        assert_eq!(result.text, "- it\n- em");
        assert_eq!(result.selection, Selection::caret(7));
    }

    // --- Continuation: delete ---

    #[test]
    fn test_enter_on_empty_bullet_removes_marker() {
        let (old, new) = enter("- item\n- ", 9);
        let index = index_of("- item\n- ");
        let result = continue_list(&old, &new, &index).expect("continuation");
        assert_eq!(result.text, "- item\n");
        assert_eq!(result.selection, Selection::caret(7));
    }

    #[test]
    fn test_enter_on_empty_ordered_item_removes_marker() {
        let (old, new) = enter("1. item\n1. ", 11);
        let index = index_of("1. item\n1. ");
        let result = continue_list(&old, &new, &index).expect("continuation");
        assert_eq!(result.text, "1. item\n");
        assert_eq!(result.selection, Selection::caret(8));
    }

    #[test]
    fn test_delete_clamps_at_start_of_text() {
        // Degenerate: an empty bullet as the whole text. The 3-byte
        // deletion window is clamped to [0,2) and the selection follows
        // the actually deleted count.
        let old = EditState::new("- ", Selection::caret(2));
        let new = EditState::new("- \n", Selection::caret(3));
        let index = ListRangeIndex {
            unordered: vec![0..3],
            ordered: vec![],
        };
        let result = continue_list(&old, &new, &index).expect("continuation");
        assert_eq!(result.text, "\n");
        assert_eq!(result.selection, Selection::caret(1));
    }

    // --- Guards resolving to pass-through ---

    #[test]
    fn test_enter_in_plain_paragraph_passes_through() {
        let (old, new) = enter("just words", 4);
        let index = index_of("just words");
        assert_eq!(continue_list(&old, &new, &index), None);
    }

    #[test]
    fn test_enter_on_blank_list_line_ends_list() {
        // "- a\n" with the cursor after the newline; another Enter
        // produces a blank line and must not re-add a marker.
        let (old, new) = enter("- a\n", 4);
        let index = index_of("- a\n");
        assert_eq!(continue_list(&old, &new, &index), None);
    }

    #[test]
    fn test_newline_at_offset_zero_passes_through() {
        let (old, new) = enter("- a", 0);
        let index = index_of("- a");
        assert_eq!(continue_list(&old, &new, &index), None);
    }

    #[test]
    fn test_non_collapsed_selection_passes_through() {
        let old = EditState::new("- item", Selection::new(2, 6));
        let new = EditState::new("- \n", Selection::caret(3));
        let index = index_of("- item");
        assert_eq!(continue_list(&old, &new, &index), None);
    }

    #[test]
    fn test_multi_byte_paste_passes_through() {
        let old = EditState::new("- item", Selection::caret(6));
        let new = EditState::new("- item\n\n", Selection::caret(8));
        let index = index_of("- item");
        assert_eq!(continue_list(&old, &new, &index), None);
    }

    #[test]
    fn test_deletion_passes_through() {
        let old = EditState::new("- item\n", Selection::caret(7));
        let new = EditState::new("- item", Selection::caret(6));
        let index = index_of("- item\n");
        assert_eq!(continue_list(&old, &new, &index), None);
    }

    #[test]
    fn test_non_newline_insert_passes_through() {
        let old = EditState::new("- item", Selection::caret(6));
        let new = EditState::new("- items", Selection::caret(7));
        let index = index_of("- item");
        assert_eq!(continue_list(&old, &new, &index), None);
    }

    #[test]
    fn test_cursor_move_passes_through() {
        let old = EditState::new("- item\n", Selection::caret(2));
        let new = EditState::new("- item\n", Selection::caret(7));
        let index = index_of("- item\n");
        assert_eq!(continue_list(&old, &new, &index), None);
    }
}
