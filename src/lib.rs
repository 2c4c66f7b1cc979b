//! Word statistics for UTF-8 text files: total token count and unique
//! vocabulary size.

pub mod analysis;
pub mod cli;
pub mod input;
