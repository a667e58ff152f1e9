//! Plain-text page tokenizer
//!
//! Page extracts come back as plain text where section headers are rendered
//! on their own line as `== Title ==`. Header lines and blank lines carry no
//! words; every other line is split on spaces after each delimiter character
//! has been turned into a space.

use crate::config::FetchConfig;
use std::collections::HashSet;

/// Splits page text into lowercase words under a delimiter set and length bounds
#[derive(Debug, Clone)]
pub struct Tokenizer {
    delimiters: HashSet<char>,
    min_length: usize,
    max_length: usize,
}

impl Tokenizer {
    /// Creates a tokenizer
    ///
    /// # Arguments
    ///
    /// * `delimiters` - Characters treated as word separators in addition to space
    /// * `min_length` - Shortest word kept, in characters
    /// * `max_length` - Longest word kept, in characters (0 for unbounded)
    pub fn new(delimiters: &str, min_length: usize, max_length: usize) -> Self {
        Self {
            delimiters: delimiters.chars().collect(),
            min_length,
            max_length,
        }
    }

    /// Creates a tokenizer from the word rules of a fetch configuration
    pub fn from_config(config: &FetchConfig) -> Self {
        Self::new(&config.delimiters, config.min_length, config.max_length)
    }

    /// Tokenizes a whole page, preserving line order
    pub fn tokenize(&self, page_text: &str) -> Vec<String> {
        let mut words = Vec::new();
        for line in page_text.split('\n') {
            if line.is_empty() || line.starts_with('=') {
                continue;
            }
            self.tokenize_line(line, &mut words);
        }
        words
    }

    fn tokenize_line(&self, line: &str, words: &mut Vec<String>) {
        let replaced: String = line
            .chars()
            .map(|c| if self.delimiters.contains(&c) { ' ' } else { c })
            .collect();

        for token in replaced.split(' ') {
            if self.accepts(token) {
                words.push(token.to_lowercase());
            }
        }
    }

    /// Whether a raw token satisfies the length bounds
    pub fn accepts(&self, token: &str) -> bool {
        let length = token.chars().count();
        length >= self.min_length && (self.max_length == 0 || length <= self.max_length)
    }
}

/// Tokenizes page text in one call
///
/// # Example
///
/// ```
/// use wiki_wordlist::tokenize;
///
/// let words = tokenize("== Intro ==\nCat,dog;fox.", ",;.", 1, 0);
/// assert_eq!(words, vec!["cat", "dog", "fox"]);
/// ```
pub fn tokenize(page_text: &str, delimiters: &str, min_length: usize, max_length: usize) -> Vec<String> {
    Tokenizer::new(delimiters, min_length, max_length).tokenize(page_text)
}
