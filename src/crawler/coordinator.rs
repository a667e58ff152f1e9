//! Run coordinator - wires fetching, scheduling and ranking together
//!
//! A run goes through these stages:
//! - Validating the configuration and building the HTTP client
//! - Fetching and tokenizing pages through the scheduler
//! - Counting and ranking the collected words
//! - Summarizing the run in statistics

use crate::config::{validate, Config};
use crate::crawler::fetcher::{build_http_client, PageFetcher};
use crate::crawler::scheduler::{PageSource, Scheduler};
use crate::output::RunStatistics;
use crate::words::{FrequencyTable, RankedWordList};
use crate::WordlistError;
use std::sync::Arc;
use std::time::Instant;

/// Everything a run produces
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Collected words, most frequent first
    pub ranked: RankedWordList,

    /// Counters describing the run
    pub statistics: RunStatistics,
}

/// Main run coordinator structure
pub struct Coordinator<S: PageSource = PageFetcher> {
    config: Arc<Config>,
    scheduler: Scheduler,
    source: Arc<S>,
}

impl Coordinator<PageFetcher> {
    /// Creates a coordinator fetching from the configured endpoints
    ///
    /// # Returns
    ///
    /// * `Ok(Coordinator)` - Configuration is valid and the client was built
    /// * `Err(WordlistError)` - Invalid configuration or HTTP client failure
    pub fn new(config: Config) -> Result<Self, WordlistError> {
        validate(&config)?;

        let client = build_http_client(&config.user_agent)?;
        let fetcher = PageFetcher::new(client, config.endpoints.clone(), &config.fetch);

        Self::with_source(config, fetcher)
    }
}

impl<S: PageSource> Coordinator<S> {
    /// Creates a coordinator around any page source
    pub fn with_source(config: Config, source: S) -> Result<Self, WordlistError> {
        let scheduler = Scheduler::new(&config.fetch)?;

        Ok(Self {
            config: Arc::new(config),
            scheduler,
            source: Arc::new(source),
        })
    }

    /// Runs the fetch-and-aggregate pipeline
    ///
    /// Page failures and a timeout only shrink the result; the run itself
    /// always produces a report.
    pub async fn run(&self) -> RunReport {
        let fetch = &self.config.fetch;
        tracing::info!(
            "Fetching {} random pages in \"{}\" with up to {} at a time",
            fetch.pages,
            fetch.language,
            fetch.concurrency
        );

        let start_time = Instant::now();
        let outcome = self.scheduler.run(Arc::clone(&self.source)).await;

        let pages_abandoned = outcome.pages_abandoned();
        let harvest = outcome.harvest;
        let words_collected = harvest.words.len();

        let table = FrequencyTable::from_words(harvest.words);
        tracing::info!("Sorting {} unique words by their frequency", table.len());

        let statistics = RunStatistics {
            pages_requested: fetch.pages,
            pages_fetched: harvest.pages_fetched,
            pages_failed: harvest.pages_failed,
            pages_abandoned,
            words_collected,
            unique_words: table.len(),
            timed_out: outcome.timed_out,
            elapsed: start_time.elapsed(),
        };

        tracing::info!(
            "Run finished: {} of {} pages fetched in {:?}",
            statistics.pages_fetched,
            statistics.pages_requested,
            statistics.elapsed
        );

        RunReport {
            ranked: table.into_ranked(),
            statistics,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}

/// Runs a complete word list generation against the configured endpoints
///
/// # Example
///
/// ```no_run
/// use wiki_wordlist::config::Config;
/// use wiki_wordlist::crawler::run_wordlist;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let report = run_wordlist(Config::default()).await?;
/// for entry in report.ranked.top(10) {
///     println!("{} {}", entry.count, entry.word);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn run_wordlist(config: Config) -> Result<RunReport, WordlistError> {
    let coordinator = Coordinator::new(config)?;
    Ok(coordinator.run().await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FetchConfig;
    use crate::crawler::scheduler::{PageResult, PageWords};
    use crate::FetchError;

    /// Even pages say "alpha beta", odd pages fail
    struct AlternatingSource;

    impl PageSource for AlternatingSource {
        async fn fetch_page(&self, index: u32) -> PageResult {
            if index % 2 == 1 {
                return Err(FetchError::MissingTitle);
            }
            Ok(PageWords {
                title: format!("Page {}", index),
                words: vec!["alpha".to_string(), "beta".to_string(), "alpha".to_string()],
            })
        }
    }

    fn create_test_config(pages: u32) -> Config {
        Config {
            fetch: FetchConfig {
                pages,
                concurrency: 2,
                timeout: 5,
                ..FetchConfig::default()
            },
            ..Config::default()
        }
    }

    #[test]
    fn test_coordinator_creation() {
        assert!(Coordinator::new(create_test_config(3)).is_ok());
    }

    #[test]
    fn test_coordinator_rejects_invalid_config() {
        let mut config = create_test_config(3);
        config.fetch.concurrency = 0;

        let result = Coordinator::with_source(config, AlternatingSource);
        assert!(matches!(result, Err(WordlistError::Config(_))));
    }

    #[tokio::test]
    async fn test_run_ranks_words_from_successful_pages() {
        let coordinator = Coordinator::with_source(create_test_config(4), AlternatingSource).unwrap();

        let report = coordinator.run().await;

        let ranked: Vec<(usize, &str)> = report
            .ranked
            .iter()
            .map(|w| (w.count, w.word.as_str()))
            .collect();
        assert_eq!(ranked, vec![(4, "alpha"), (2, "beta")]);

        let stats = &report.statistics;
        assert_eq!(stats.pages_requested, 4);
        assert_eq!(stats.pages_fetched, 2);
        assert_eq!(stats.pages_failed, 2);
        assert_eq!(stats.pages_abandoned, 0);
        assert_eq!(stats.words_collected, 6);
        assert_eq!(stats.unique_words, 2);
        assert!(!stats.timed_out);
    }
}
