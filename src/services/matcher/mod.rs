//! Fuzzy title matching — ranks catalog titles against operator input.
//!
//! The index is rebuilt whenever the catalog changes; matching itself is
//! synchronous and does no I/O, so it can run on every keystroke.

pub mod normalizer;
pub mod title_index;

pub use title_index::{MatcherConfig, TitleIndex};
