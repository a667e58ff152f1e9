//! Wiki-Wordlist: frequency-ranked word lists from random encyclopedia pages
//!
//! This crate fetches a number of random Wikipedia pages concurrently, splits
//! their plain-text bodies into words, counts them across all pages and ranks
//! them by frequency.

pub mod config;
pub mod crawler;
pub mod output;
pub mod words;

use thiserror::Error;

/// Main error type for Wiki-Wordlist operations
#[derive(Debug, Error)]
pub enum WordlistError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL in config: {0}")]
    InvalidUrl(String),
}

/// Failure of a single unit of work
///
/// These never abort a run. The scheduler logs them and counts the page as
/// failed.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request to {url} failed: {source}")]
    Transport { url: String, source: reqwest::Error },

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("Malformed response from {url}: {source}")]
    Decode { url: String, source: reqwest::Error },

    #[error("Random page response had no title")]
    MissingTitle,

    #[error("No content for page \"{title}\"")]
    MissingPage { title: String },

    #[error("Page \"{title}\" is still ambiguous after re-selection")]
    Ambiguous { title: String },

    #[error("Disambiguation page \"{title}\" offered no candidates")]
    NoCandidates { title: String },
}

/// Result type alias for Wiki-Wordlist operations
pub type Result<T> = std::result::Result<T, WordlistError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::{Config, FetchConfig};
pub use crawler::{run_wordlist, Coordinator, RunReport};
pub use words::{aggregate, tokenize, FrequencyTable, RankedWord, RankedWordList};
