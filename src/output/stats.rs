//! Run statistics
//!
//! This module provides the counters collected during a run and a formatted
//! console report of them.

use std::time::Duration;

/// Run statistics summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunStatistics {
    /// Number of pages the run was asked for
    pub pages_requested: u32,

    /// Pages whose words made it into the result
    pub pages_fetched: u32,

    /// Pages that failed to fetch
    pub pages_failed: u32,

    /// Pages still outstanding when the timeout elapsed
    pub pages_abandoned: u32,

    /// Total words collected, duplicates included
    pub words_collected: usize,

    /// Distinct words collected
    pub unique_words: usize,

    /// Whether the run stopped waiting because of the timeout
    pub timed_out: bool,

    /// Wall-clock time of the run
    pub elapsed: Duration,
}

impl RunStatistics {
    /// Percentage of requested pages that were fetched
    pub fn success_rate(&self) -> f64 {
        if self.pages_requested == 0 {
            return 0.0;
        }
        (self.pages_fetched as f64 / self.pages_requested as f64) * 100.0
    }

    /// Average number of words per fetched page
    pub fn words_per_page(&self) -> f64 {
        if self.pages_fetched == 0 {
            return 0.0;
        }
        self.words_collected as f64 / self.pages_fetched as f64
    }
}

/// Formats statistics as a multi-line report
pub fn format_statistics(stats: &RunStatistics) -> String {
    let mut out = String::new();

    out.push_str("=== Run Statistics ===\n\n");

    out.push_str("Pages:\n");
    out.push_str(&format!("  Requested: {}\n", stats.pages_requested));
    out.push_str(&format!(
        "  Fetched: {} ({:.1}%)\n",
        stats.pages_fetched,
        stats.success_rate()
    ));
    out.push_str(&format!("  Failed: {}\n", stats.pages_failed));
    if stats.timed_out {
        out.push_str(&format!(
            "  Abandoned at timeout: {}\n",
            stats.pages_abandoned
        ));
    }
    out.push('\n');

    out.push_str("Words:\n");
    out.push_str(&format!("  Collected: {}\n", stats.words_collected));
    out.push_str(&format!("  Unique: {}\n", stats.unique_words));
    out.push_str(&format!("  Per page: {:.1}\n", stats.words_per_page()));
    out.push('\n');

    out.push_str(&format!("Elapsed: {:.2}s\n", stats.elapsed.as_secs_f64()));

    out
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &RunStatistics) {
    print!("{}", format_statistics(stats));
}
