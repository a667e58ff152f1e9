use crate::config::types::Config;
use crate::config::validation::validate;
use crate::ConfigError;
use std::path::Path;

/// Loads and parses a configuration file from the given path
///
/// Every table and key is optional; anything missing takes its default.
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Returns
///
/// * `Ok(Config)` - Successfully loaded and validated configuration
/// * `Err(ConfigError)` - Failed to load, parse, or validate the configuration
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use wiki_wordlist::config::load_config;
///
/// let config = load_config(Path::new("wordlist.toml")).unwrap();
/// println!("Pages: {}", config.fetch.pages);
/// ```
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parses and validates configuration from TOML text
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(content)?;
    validate(&config)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::DEFAULT_DELIMITERS;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_load_valid_config() {
        let config_content = r#"
[fetch]
pages = 1000
language = "it"
min-length = 8
concurrency = 50
timeout = 10

[user-agent]
crawler-name = "TestWordlist"
crawler-version = "1.0"
contact-url = "https://example.com/about"
contact-email = "admin@example.com"

[output]
path = "./words.txt"
words = 100
"#;

        let file = create_temp_config(config_content);
        let config = load_config(file.path()).unwrap();

        assert_eq!(config.fetch.pages, 1000);
        assert_eq!(config.fetch.language, "it");
        assert_eq!(config.fetch.min_length, 8);
        assert_eq!(config.fetch.max_length, 0);
        assert_eq!(config.fetch.concurrency, 50);
        assert_eq!(config.user_agent.crawler_name, "TestWordlist");
        assert_eq!(config.output.words, 100);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = parse_config("[fetch]\npages = 5\n").unwrap();

        assert_eq!(config.fetch.pages, 5);
        assert_eq!(config.fetch.language, "en");
        assert_eq!(config.fetch.delimiters, DEFAULT_DELIMITERS);
        assert_eq!(config.fetch.min_length, 1);
        assert_eq!(config.fetch.concurrency, 1);
        assert_eq!(config.fetch.timeout, 30);
        assert_eq!(config.output.path, "output.txt");
    }

    #[test]
    fn test_empty_config_is_default() {
        let config = parse_config("").unwrap();
        assert_eq!(config.fetch, crate::config::FetchConfig::default());
    }

    #[test]
    fn test_load_config_with_invalid_path() {
        let result = load_config(Path::new("/nonexistent/wordlist.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_load_config_with_invalid_toml() {
        let file = create_temp_config("this is not valid TOML {{{");
        let result = load_config(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_config_with_validation_error() {
        let file = create_temp_config("[fetch]\nconcurrency = 0\n");
        let result = load_config(file.path());
        assert!(matches!(result.unwrap_err(), ConfigError::Validation(_)));
    }
}
