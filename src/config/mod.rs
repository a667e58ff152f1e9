//! Configuration module for Wiki-Wordlist
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! Every table is optional, so an empty file (or no file at all) yields the
//! defaults the command line starts from.
//!
//! # Example
//!
//! ```no_run
//! use wiki_wordlist::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("wordlist.toml")).unwrap();
//! println!("Fetching {} pages", config.fetch.pages);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, EndpointConfig, FetchConfig, OutputConfig, UserAgentConfig, DEFAULT_DELIMITERS,
};

// Re-export parser and validation functions
pub use parser::{load_config, parse_config};
pub use validation::{validate, validate_fetch_config};
