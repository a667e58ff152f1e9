//! Wiki-Wordlist main entry point
//!
//! This is the command-line interface for the Wiki-Wordlist generator.

use clap::Parser;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use wiki_wordlist::config::{load_config, validate, Config};
use wiki_wordlist::crawler::Coordinator;
use wiki_wordlist::output::{print_statistics, write_wordlist};

/// Wiki-Wordlist: word lists from random Wikipedia pages
///
/// Creates a list of words from Wikipedia's random pages and saves them
/// sorted by their frequency.
///
/// Example: `wiki-wordlist -p 1000 -l it -m 8 -t 50 -w 100` saves the 100 most
/// common words of 8 or more characters out of 1000 Italian pages using 50
/// concurrent fetches.
#[derive(Parser, Debug)]
#[command(name = "wiki-wordlist")]
#[command(version)]
#[command(about = "Word lists from random Wikipedia pages", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file (flags override it)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Number of pages to process [default: 100]
    #[arg(short, long, value_name = "NUMBER")]
    pages: Option<u32>,

    /// Language of the pages to retrieve [default: en]
    #[arg(short, long, value_name = "ISO-CODE")]
    lang: Option<String>,

    /// Special characters used as splitters; space always splits
    #[arg(short, long, value_name = "CHARACTERS")]
    special: Option<String>,

    /// Minimum length of the words to keep [default: 1]
    #[arg(short = 'm', long = "min", value_name = "LENGTH")]
    min_length: Option<usize>,

    /// Maximum length of the words to keep, 0 for unbounded [default: 0]
    #[arg(short = 'M', long = "max", value_name = "LENGTH")]
    max_length: Option<usize>,

    /// Maximum number of pages fetched simultaneously [default: 1]
    #[arg(short = 't', long = "threads", value_name = "NUMBER")]
    threads: Option<u32>,

    /// Seconds to wait for pages once the last one started, 0 for unbounded [default: 30]
    #[arg(short = 'T', long, value_name = "SECONDS")]
    timeout: Option<u64>,

    /// Output file location [default: output.txt]
    #[arg(short, long, value_name = "PATH")]
    output: Option<String>,

    /// Maximum number of words to save, 0 for all [default: 0]
    #[arg(short, long, value_name = "NUMBER")]
    words: Option<usize>,

    /// Increase logging verbosity (-d, -dd)
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "debug")]
    quiet: bool,

    /// Validate the configuration and show it without fetching anything
    #[arg(long)]
    dry_run: bool,
}

impl Cli {
    /// Applies command-line flags on top of a loaded or default configuration
    fn apply_overrides(&self, config: &mut Config) {
        let fetch = &mut config.fetch;
        if let Some(pages) = self.pages {
            fetch.pages = pages;
        }
        if let Some(lang) = &self.lang {
            fetch.language = lang.clone();
        }
        if let Some(special) = &self.special {
            fetch.delimiters = special.clone();
        }
        if let Some(min_length) = self.min_length {
            fetch.min_length = min_length;
        }
        if let Some(max_length) = self.max_length {
            fetch.max_length = max_length;
        }
        if let Some(threads) = self.threads {
            fetch.concurrency = threads;
        }
        if let Some(timeout) = self.timeout {
            fetch.timeout = timeout;
        }
        if let Some(output) = &self.output {
            config.output.path = output.clone();
        }
        if let Some(words) = self.words {
            config.output.words = words;
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.debug, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            match load_config(path) {
                Ok(cfg) => cfg,
                Err(e) => {
                    tracing::error!("Failed to load configuration: {}", e);
                    return Err(e.into());
                }
            }
        }
        None => Config::default(),
    };

    cli.apply_overrides(&mut config);

    if let Err(e) = validate(&config) {
        tracing::error!("Invalid configuration: {}", e);
        return Err(e.into());
    }

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_run(config, cli.quiet).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(debug: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match debug {
            0 => EnvFilter::new("wiki_wordlist=info,warn"),
            1 => EnvFilter::new("wiki_wordlist=debug,info"),
            _ => EnvFilter::new("wiki_wordlist=trace,debug"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: shows the effective configuration
fn handle_dry_run(config: &Config) {
    let fetch = &config.fetch;

    println!("=== Wiki-Wordlist Dry Run ===\n");

    println!("Fetch Configuration:");
    println!("  Pages: {}", fetch.pages);
    println!("  Language: {}", fetch.language);
    println!("  Delimiters: {}", fetch.delimiters);
    println!("  Min length: {}", fetch.min_length);
    match fetch.max_length {
        0 => println!("  Max length: unbounded"),
        max => println!("  Max length: {}", max),
    }
    println!("  Concurrency: {}", fetch.concurrency);
    match fetch.timeout {
        0 => println!("  Timeout: none"),
        secs => println!("  Timeout: {}s", secs),
    }

    println!("\nEndpoints:");
    println!("  Random page: {}", config.endpoints.random_url_for(&fetch.language));
    println!("  Action API: {}", config.endpoints.api_url_for(&fetch.language));

    println!("\nOutput:");
    println!("  Path: {}", config.output.path);
    match config.output.words {
        0 => println!("  Words: all"),
        n => println!("  Words: {}", n),
    }

    println!("\n✓ Configuration is valid");
}

/// Handles the main run: fetch, rank, save
async fn handle_run(config: Config, quiet: bool) -> Result<(), Box<dyn std::error::Error>> {
    let output_path = config.output.path.clone();
    let limit = config.output.words;

    let coordinator = match Coordinator::new(config) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to start: {}", e);
            return Err(e.into());
        }
    };

    let report = coordinator.run().await;

    if let Err(e) = write_wordlist(&report.ranked, Path::new(&output_path), limit) {
        tracing::error!("Failed to save word list: {}", e);
        return Err(e.into());
    }

    if !quiet {
        println!();
        print_statistics(&report.statistics);
    }

    tracing::info!("Done!");
    Ok(())
}
