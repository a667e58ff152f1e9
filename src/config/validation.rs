use crate::config::types::{Config, EndpointConfig, FetchConfig, UserAgentConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_fetch_config(&config.fetch)?;
    validate_user_agent_config(&config.user_agent)?;
    validate_endpoint_config(&config.endpoints, &config.fetch.language)?;
    Ok(())
}

/// Validates the structural invariants of a fetch configuration
pub fn validate_fetch_config(config: &FetchConfig) -> Result<(), ConfigError> {
    if config.pages < 1 {
        return Err(ConfigError::Validation(format!(
            "pages must be >= 1, got {}",
            config.pages
        )));
    }

    if config.concurrency < 1 {
        return Err(ConfigError::Validation(format!(
            "concurrency must be >= 1, got {}",
            config.concurrency
        )));
    }

    if config.max_length != 0 && config.max_length < config.min_length {
        return Err(ConfigError::Validation(format!(
            "max_length must be 0 or >= min_length ({}), got {}",
            config.min_length, config.max_length
        )));
    }

    validate_language(&config.language)?;

    Ok(())
}

/// Language codes end up in a hostname, e.g. "en", "simple", "zh-min-nan"
fn validate_language(language: &str) -> Result<(), ConfigError> {
    if language.is_empty() {
        return Err(ConfigError::Validation(
            "language cannot be empty".to_string(),
        ));
    }

    if !language
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "language must contain only ASCII letters, digits and hyphens, got '{}'",
            language
        )));
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.crawler_name.is_empty() {
        return Err(ConfigError::Validation(
            "crawler_name cannot be empty".to_string(),
        ));
    }

    if !config
        .crawler_name
        .chars()
        .all(|c| c.is_alphanumeric() || c == '-')
    {
        return Err(ConfigError::Validation(format!(
            "crawler_name must contain only alphanumeric characters and hyphens, got '{}'",
            config.crawler_name
        )));
    }

    Url::parse(&config.contact_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact_url: {}", e)))?;

    validate_email(&config.contact_email)?;

    Ok(())
}

/// Both templates must be usable URLs once the language is substituted
fn validate_endpoint_config(config: &EndpointConfig, language: &str) -> Result<(), ConfigError> {
    Url::parse(&config.random_url_for(language))
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid random_url: {}", e)))?;

    Url::parse(&config.api_url_for(language))
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid api_url: {}", e)))?;

    Ok(())
}

/// Basic email validation
fn validate_email(email: &str) -> Result<(), ConfigError> {
    if email.is_empty() {
        return Err(ConfigError::Validation(
            "contact_email cannot be empty".to_string(),
        ));
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return Err(ConfigError::Validation(format!(
            "Invalid email format: '{}'",
            email
        )));
    }

    if !parts[1].contains('.') {
        return Err(ConfigError::Validation(format!(
            "Invalid email domain: '{}'",
            email
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_rejects_zero_concurrency() {
        let config = FetchConfig {
            concurrency: 0,
            ..FetchConfig::default()
        };
        assert!(matches!(
            validate_fetch_config(&config),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_rejects_zero_pages() {
        let config = FetchConfig {
            pages: 0,
            ..FetchConfig::default()
        };
        assert!(validate_fetch_config(&config).is_err());
    }

    #[test]
    fn test_length_bounds() {
        let unbounded = FetchConfig {
            min_length: 8,
            max_length: 0,
            ..FetchConfig::default()
        };
        assert!(validate_fetch_config(&unbounded).is_ok());

        let equal = FetchConfig {
            min_length: 4,
            max_length: 4,
            ..FetchConfig::default()
        };
        assert!(validate_fetch_config(&equal).is_ok());

        let inverted = FetchConfig {
            min_length: 5,
            max_length: 3,
            ..FetchConfig::default()
        };
        assert!(validate_fetch_config(&inverted).is_err());
    }

    #[test]
    fn test_validate_language() {
        assert!(validate_language("en").is_ok());
        assert!(validate_language("zh-min-nan").is_ok());

        assert!(validate_language("").is_err());
        assert!(validate_language("en.evil.com/").is_err());
        assert!(validate_language("e n").is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("user@example.com").is_ok());

        assert!(validate_email("").is_err());
        assert!(validate_email("invalid").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("user@").is_err());
        assert!(validate_email("user@domain").is_err());
    }

    #[test]
    fn test_rejects_unparseable_endpoint() {
        let config = Config {
            endpoints: EndpointConfig {
                random_url: "not a url".to_string(),
                ..EndpointConfig::default()
            },
            ..Config::default()
        };
        assert!(matches!(
            validate(&config),
            Err(ConfigError::InvalidUrl(_))
        ));
    }
}
