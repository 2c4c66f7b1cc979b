pub mod stats;
pub mod tokenize;

pub use stats::{total_count, unique_count};
pub use tokenize::tokenize;
