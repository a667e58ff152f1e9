//! Word counting and frequency ranking

use std::cmp::Ordering;
use std::collections::HashMap;

/// Occurrence count of every distinct word
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, usize>,
}

impl FrequencyTable {
    /// Counts exact string matches in a word sequence
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut counts: HashMap<String, usize> = HashMap::new();
        for word in words {
            *counts.entry(word.into()).or_insert(0) += 1;
        }
        Self { counts }
    }

    /// Count for a word, 0 if it never occurred
    pub fn get(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, equal to the number of words counted
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Ranks the table, consuming it
    ///
    /// Words are ordered by count, highest first. Equal counts are ordered by
    /// the word itself, also descending, so `b` comes before `a`.
    pub fn into_ranked(self) -> RankedWordList {
        let mut entries: Vec<RankedWord> = self
            .counts
            .into_iter()
            .map(|(word, count)| RankedWord { count, word })
            .collect();

        entries.sort_by(|a, b| b.cmp(a));

        RankedWordList { entries }
    }
}

/// A word and how often it occurred
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedWord {
    pub count: usize,
    pub word: String,
}

impl Ord for RankedWord {
    fn cmp(&self, other: &Self) -> Ordering {
        self.count
            .cmp(&other.count)
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl PartialOrd for RankedWord {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Words in ranked order, most frequent first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankedWordList {
    entries: Vec<RankedWord>,
}

impl RankedWordList {
    /// The first `limit` entries, or all of them when `limit` is 0
    pub fn top(&self, limit: usize) -> &[RankedWord] {
        if limit == 0 || limit >= self.entries.len() {
            &self.entries
        } else {
            &self.entries[..limit]
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RankedWord> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[RankedWord] {
        &self.entries
    }
}

impl<'a> IntoIterator for &'a RankedWordList {
    type Item = &'a RankedWord;
    type IntoIter = std::slice::Iter<'a, RankedWord>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Counts words and ranks them by frequency
///
/// # Example
///
/// ```
/// use wiki_wordlist::aggregate;
///
/// let ranked = aggregate(vec!["a", "b", "b", "a", "c"]);
/// let words: Vec<&str> = ranked.iter().map(|w| w.word.as_str()).collect();
/// assert_eq!(words, vec!["b", "a", "c"]);
/// ```
pub fn aggregate<I, S>(words: I) -> RankedWordList
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    FrequencyTable::from_words(words).into_ranked()
}
