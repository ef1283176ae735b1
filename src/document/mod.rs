//! Markdown tag range model and parser adapter.

mod parser;
mod types;

pub use parser::parse_tags;
pub use types::{ParsedTags, TagRange};
