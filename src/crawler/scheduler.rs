//! Bounded-concurrency page scheduler
//!
//! This module handles:
//! - Launching one unit of work per requested page
//! - Capping the number of units in flight with a semaphore
//! - Collecting words from every unit into a shared accumulator
//! - Bounding the final wait with the run timeout
//!
//! A unit holds one semaphore permit from launch until its words are
//! recorded. Once every page has been launched the scheduler waits until it
//! can take back the full capacity, which happens exactly when all units are
//! done. If the timeout elapses first the accumulator is frozen and anything
//! recorded afterwards is dropped.

use crate::config::{validate_fetch_config, FetchConfig};
use crate::{ConfigError, FetchError};
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;

/// Words extracted from one successfully fetched page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWords {
    /// Title the words were taken from, after any disambiguation
    pub title: String,

    /// Words in page order
    pub words: Vec<String>,
}

/// Outcome of one unit of work
pub type PageResult = Result<PageWords, FetchError>;

/// Something that can produce the words of one page
///
/// `index` is the zero-based position of the unit in the run and is only
/// used for logging.
pub trait PageSource: Send + Sync + 'static {
    fn fetch_page(&self, index: u32) -> impl Future<Output = PageResult> + Send;
}

#[derive(Debug, Default)]
struct AccumulatorState {
    words: Vec<String>,
    pages_fetched: u32,
    pages_failed: u32,
    frozen: bool,
}

fn lock_state(state: &Mutex<AccumulatorState>) -> MutexGuard<'_, AccumulatorState> {
    // A unit that panicked mid-append cannot leave a partial page behind:
    // words are extended in one call.
    match state.lock() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

/// Words gathered across all units of one run
///
/// Owned by the scheduler. Units only ever see an [`AccumulatorHandle`].
#[derive(Debug, Default)]
pub struct WordAccumulator {
    state: Arc<Mutex<AccumulatorState>>,
}

impl WordAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an append-only handle for a unit of work
    pub fn handle(&self) -> AccumulatorHandle {
        AccumulatorHandle {
            state: Arc::clone(&self.state),
        }
    }

    /// Closes the accumulator and takes its contents
    ///
    /// Handles outliving this call keep working but their records are
    /// discarded.
    pub fn freeze(self) -> Harvest {
        let mut state = lock_state(&self.state);
        state.frozen = true;

        Harvest {
            words: std::mem::take(&mut state.words),
            pages_fetched: state.pages_fetched,
            pages_failed: state.pages_failed,
        }
    }
}

/// Append handle given to each unit of work
#[derive(Debug, Clone)]
pub struct AccumulatorHandle {
    state: Arc<Mutex<AccumulatorState>>,
}

impl AccumulatorHandle {
    /// Records the outcome of one page
    ///
    /// Returns `false` if the accumulator was already frozen and the outcome
    /// was dropped.
    pub fn record(&self, result: PageResult) -> bool {
        let mut state = lock_state(&self.state);
        if state.frozen {
            return false;
        }

        match result {
            Ok(page) => {
                state.words.extend(page.words);
                state.pages_fetched += 1;
            }
            Err(_) => state.pages_failed += 1,
        }

        true
    }
}

/// Frozen contents of a [`WordAccumulator`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Harvest {
    /// Every recorded word, unordered across pages
    pub words: Vec<String>,

    /// Pages whose words were recorded
    pub pages_fetched: u32,

    /// Pages that failed before the freeze
    pub pages_failed: u32,
}

/// Result of a scheduler run
#[derive(Debug, Clone)]
pub struct SchedulerOutcome {
    pub harvest: Harvest,

    /// Number of units launched
    pub pages_launched: u32,

    /// Whether the timeout elapsed with units still outstanding
    pub timed_out: bool,
}

impl SchedulerOutcome {
    /// Units that had not finished when the scheduler stopped waiting
    pub fn pages_abandoned(&self) -> u32 {
        self.pages_launched
            .saturating_sub(self.harvest.pages_fetched + self.harvest.pages_failed)
    }
}

/// Scheduler launches units of work under a concurrency cap
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use wiki_wordlist::config::FetchConfig;
/// use wiki_wordlist::crawler::{PageResult, PageSource, PageWords, Scheduler};
///
/// struct Fixed;
///
/// impl PageSource for Fixed {
///     async fn fetch_page(&self, _index: u32) -> PageResult {
///         Ok(PageWords { title: "Fixed".to_string(), words: vec!["word".to_string()] })
///     }
/// }
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let scheduler = Scheduler::new(&FetchConfig { pages: 3, ..FetchConfig::default() })?;
/// let outcome = scheduler.run(Arc::new(Fixed)).await;
/// assert_eq!(outcome.harvest.words.len(), 3);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Scheduler {
    pages: u32,
    concurrency: u32,
    timeout: Option<Duration>,
}

impl Scheduler {
    /// Creates a scheduler, rejecting a structurally invalid configuration
    pub fn new(config: &FetchConfig) -> Result<Self, ConfigError> {
        validate_fetch_config(config)?;

        let timeout = (config.timeout > 0).then(|| Duration::from_secs(config.timeout));

        Ok(Self {
            pages: config.pages,
            concurrency: config.concurrency,
            timeout,
        })
    }

    /// Runs one unit of work per page and collects their words
    ///
    /// Never fails: page failures are logged and counted, and a timeout
    /// returns whatever was recorded up to that point.
    pub async fn run<S: PageSource>(&self, source: Arc<S>) -> SchedulerOutcome {
        let semaphore = Arc::new(Semaphore::new(self.concurrency as usize));
        let accumulator = WordAccumulator::new();
        let mut pages_launched = 0;

        for index in 0..self.pages {
            if semaphore.available_permits() == 0 {
                tracing::debug!(
                    "Reached concurrency limit of {}, waiting for a page to finish",
                    self.concurrency
                );
            }

            // The semaphore is never closed, so this only fails if it is dropped
            let permit = match Arc::clone(&semaphore).acquire_owned().await {
                Ok(permit) => permit,
                Err(_) => break,
            };
            tracing::trace!(
                "Launching page #{} ({} permits left)",
                index + 1,
                semaphore.available_permits()
            );

            let source = Arc::clone(&source);
            let handle = accumulator.handle();

            tokio::spawn(async move {
                let _permit = permit;
                let result = source.fetch_page(index).await;

                match &result {
                    Ok(page) => tracing::info!(
                        "Page #{}: \"{}\": retrieved {} words",
                        index + 1,
                        page.title,
                        page.words.len()
                    ),
                    Err(e) => tracing::warn!("Page #{}: {}", index + 1, e),
                }

                if !handle.record(result) {
                    tracing::debug!(
                        "Page #{} finished after the run stopped waiting, discarding it",
                        index + 1
                    );
                }
            });

            pages_launched += 1;
        }

        let timed_out = !self.wait_for_units(&semaphore).await;
        if timed_out {
            tracing::warn!(
                "Timed out after {:?} with {} pages still in flight",
                self.timeout.unwrap_or_default(),
                self.concurrency as usize - semaphore.available_permits()
            );
        }

        SchedulerOutcome {
            harvest: accumulator.freeze(),
            pages_launched,
            timed_out,
        }
    }

    /// Waits until every launched unit has released its permit
    ///
    /// Returns `false` if the timeout elapsed first.
    async fn wait_for_units(&self, semaphore: &Semaphore) -> bool {
        let started = Instant::now();
        let all_done = semaphore.acquire_many(self.concurrency);

        let finished = match self.timeout {
            Some(timeout) => matches!(tokio::time::timeout(timeout, all_done).await, Ok(Ok(_))),
            None => all_done.await.is_ok(),
        };

        tracing::debug!("Waited {:?} for outstanding pages", started.elapsed());
        finished
    }

    /// Configured timeout, `None` when waiting indefinitely
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}
