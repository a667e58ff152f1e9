//! Turning page text into ranked words
//!
//! - [`tokenizer`]: page text to lowercase words
//! - [`frequency`]: word counting and ranking

pub mod frequency;
pub mod tokenizer;

pub use frequency::{aggregate, FrequencyTable, RankedWord, RankedWordList};
pub use tokenizer::{tokenize, Tokenizer};
