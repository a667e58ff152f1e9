//! Crawler module for page fetching and scheduling
//!
//! This module contains the core of a run, including:
//! - HTTP fetching of random pages and their plain text
//! - Bounded-concurrency scheduling with a shared word accumulator
//! - Overall run coordination

mod coordinator;
mod fetcher;
mod scheduler;

pub use coordinator::{run_wordlist, Coordinator, RunReport};
pub use fetcher::{build_http_client, user_agent_string, PageContent, PageFetcher};
pub use scheduler::{
    AccumulatorHandle, Harvest, PageResult, PageSource, PageWords, Scheduler, SchedulerOutcome,
    WordAccumulator,
};
