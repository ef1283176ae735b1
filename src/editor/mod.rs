//! Editing affordances: list continuation and the session edit loop.

mod continuation;
mod session;

pub use continuation::{EditState, ListMatch, ListRangeIndex, Selection, continue_list};
pub use session::Session;
