use serde::Deserialize;

/// Delimiters used when none are configured. Space always splits words too.
pub const DEFAULT_DELIMITERS: &str = "\\!\"/()[]{}=?'<>,;.:-—_+*@#«»";

/// Main configuration structure for Wiki-Wordlist
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default, rename = "user-agent")]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub endpoints: EndpointConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// What to fetch and how to split it into words
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Number of random pages to process
    pub pages: u32,

    /// Wikipedia language code, e.g. "en" or "it"
    pub language: String,

    /// Characters replaced by a space before splitting a line
    pub delimiters: String,

    /// Minimum word length in characters
    #[serde(rename = "min-length")]
    pub min_length: usize,

    /// Maximum word length in characters (0 for unbounded)
    #[serde(rename = "max-length")]
    pub max_length: usize,

    /// Maximum number of pages fetched simultaneously
    pub concurrency: u32,

    /// Seconds to wait for outstanding pages once the last one started (0 for unbounded)
    pub timeout: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            pages: 100,
            language: "en".to_string(),
            delimiters: DEFAULT_DELIMITERS.to_string(),
            min_length: 1,
            max_length: 0,
            concurrency: 1,
            timeout: 30,
        }
    }
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UserAgentConfig {
    /// Name of the client
    #[serde(rename = "crawler-name")]
    pub crawler_name: String,

    /// Version of the client
    #[serde(rename = "crawler-version")]
    pub crawler_version: String,

    /// URL with information about the client
    #[serde(rename = "contact-url")]
    pub contact_url: String,

    /// Email address for client-related contact
    #[serde(rename = "contact-email")]
    pub contact_email: String,
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            crawler_name: "wiki-wordlist".to_string(),
            crawler_version: env!("CARGO_PKG_VERSION").to_string(),
            contact_url: "https://github.com/wiki-wordlist/wiki-wordlist".to_string(),
            contact_email: "wiki-wordlist@users.noreply.github.com".to_string(),
        }
    }
}

/// Remote endpoints, as templates where `{lang}` is the language code
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Endpoint returning a JSON summary of one random page
    #[serde(rename = "random-url")]
    pub random_url: String,

    /// MediaWiki action API endpoint
    #[serde(rename = "api-url")]
    pub api_url: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            random_url: "https://{lang}.wikipedia.org/api/rest_v1/page/random/summary".to_string(),
            api_url: "https://{lang}.wikipedia.org/w/api.php".to_string(),
        }
    }
}

impl EndpointConfig {
    /// Random-page endpoint for a language
    pub fn random_url_for(&self, language: &str) -> String {
        self.random_url.replace("{lang}", language)
    }

    /// Action API endpoint for a language
    pub fn api_url_for(&self, language: &str) -> String {
        self.api_url.replace("{lang}", language)
    }
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path of the word list file
    pub path: String,

    /// Number of words to write (0 for all)
    pub words: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: "output.txt".to_string(),
            words: 0,
        }
    }
}
