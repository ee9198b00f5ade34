//! Fixed lookup tables for category placeholders and difficulty levels

pub mod categories;
pub mod difficulty;

pub use categories::{category_placeholder, CATEGORY_PLACEHOLDERS};
pub use difficulty::Difficulty;
