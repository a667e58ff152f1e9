//! Output module for saving word lists and reporting runs
//!
//! This module handles:
//! - Writing the ranked word list to a file
//! - Recording and displaying run statistics

pub mod stats;
mod writer;

pub use stats::{format_statistics, print_statistics, RunStatistics};
pub use writer::{write_wordlist, write_words, OutputError, OutputResult};
