//! HTTP page fetcher
//!
//! This module handles all HTTP requests for a run, including:
//! - Building the HTTP client with a descriptive user agent string
//! - Asking the random-page endpoint for a title
//! - Fetching the plain-text extract of that title from the action API
//! - Resolving disambiguation pages by picking one candidate at random
//!
//! The language code is passed explicitly to every lookup.

use crate::config::{EndpointConfig, FetchConfig, UserAgentConfig};
use crate::crawler::scheduler::{PageResult, PageSource, PageWords};
use crate::words::Tokenizer;
use crate::FetchError;
use rand::seq::SliceRandom;
use reqwest::Client;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::Deserialize;

/// Builds an HTTP client with proper configuration
///
/// No request timeout is set: a stalled request is only bounded by the run
/// timeout.
///
/// # Example
///
/// ```no_run
/// use wiki_wordlist::config::UserAgentConfig;
/// use wiki_wordlist::crawler::build_http_client;
///
/// let client = build_http_client(&UserAgentConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &UserAgentConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(user_agent_string(config))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Format: Name/Version (+ContactURL; ContactEmail)
pub fn user_agent_string(config: &UserAgentConfig) -> String {
    format!(
        "{}/{} (+{}; {})",
        config.crawler_name, config.crawler_version, config.contact_url, config.contact_email
    )
}

/// Page text together with the title it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContent {
    pub title: String,
    pub text: String,
}

/// What the action API says about a title
#[derive(Debug, Clone, PartialEq, Eq)]
enum PageLookup {
    Text(String),
    Disambiguation,
    Missing,
}

#[derive(Debug, Deserialize)]
struct RandomSummary {
    title: Option<String>,
}

#[derive(Debug, Deserialize)]
struct QueryResponse<P> {
    query: Option<QueryPages<P>>,
}

#[derive(Debug, Deserialize)]
struct QueryPages<P> {
    #[serde(default = "Vec::new")]
    pages: Vec<P>,
}

#[derive(Debug, Deserialize)]
struct ExtractPage {
    #[serde(default)]
    missing: bool,
    #[serde(default)]
    invalid: bool,
    extract: Option<String>,
    pageprops: Option<PageProps>,
}

#[derive(Debug, Deserialize)]
struct PageProps {
    disambiguation: Option<IgnoredAny>,
}

#[derive(Debug, Deserialize)]
struct LinksPage {
    #[serde(default)]
    links: Vec<Link>,
}

#[derive(Debug, Deserialize)]
struct Link {
    title: String,
}

/// Fetches random pages and turns them into words
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
    endpoints: EndpointConfig,
    language: String,
    tokenizer: Tokenizer,
}

impl PageFetcher {
    /// Creates a fetcher for the language and word rules of `config`
    pub fn new(client: Client, endpoints: EndpointConfig, config: &FetchConfig) -> Self {
        Self {
            client,
            endpoints,
            language: config.language.clone(),
            tokenizer: Tokenizer::from_config(config),
        }
    }

    /// Language this fetcher requests pages in
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Asks for the title of one random page
    pub async fn random_title(&self, language: &str) -> Result<String, FetchError> {
        let url = self.endpoints.random_url_for(language);
        let summary: RandomSummary = self.get_json(&url, &[]).await?;

        summary
            .title
            .filter(|title| !title.is_empty())
            .ok_or(FetchError::MissingTitle)
    }

    /// Fetches the plain text of a page
    ///
    /// A disambiguation page is resolved once by choosing one of its
    /// candidates at random. If that candidate cannot be fetched either, the
    /// page is given up on.
    pub async fn page_content(&self, language: &str, title: &str) -> Result<PageContent, FetchError> {
        match self.lookup_page(language, title).await? {
            PageLookup::Text(text) => {
                return Ok(PageContent {
                    title: title.to_string(),
                    text,
                })
            }
            PageLookup::Missing => {
                return Err(FetchError::MissingPage {
                    title: title.to_string(),
                })
            }
            PageLookup::Disambiguation => {}
        }

        tracing::debug!(
            "\"{}\" is a disambiguation page, choosing a random option",
            title
        );

        let candidates = self.disambiguation_candidates(language, title).await?;
        let choice = choose_candidate(&candidates).ok_or_else(|| FetchError::NoCandidates {
            title: title.to_string(),
        })?;

        match self.lookup_page(language, &choice).await? {
            PageLookup::Text(text) => Ok(PageContent { title: choice, text }),
            PageLookup::Missing => Err(FetchError::MissingPage { title: choice }),
            PageLookup::Disambiguation => Err(FetchError::Ambiguous { title: choice }),
        }
    }

    async fn lookup_page(&self, language: &str, title: &str) -> Result<PageLookup, FetchError> {
        let url = self.endpoints.api_url_for(language);
        let response: QueryResponse<ExtractPage> = self
            .get_json(
                &url,
                &[
                    ("action", "query"),
                    ("format", "json"),
                    ("formatversion", "2"),
                    ("redirects", "1"),
                    ("prop", "extracts|pageprops"),
                    ("explaintext", "1"),
                    ("ppprop", "disambiguation"),
                    ("titles", title),
                ],
            )
            .await?;

        let page = match response.query.and_then(|q| q.pages.into_iter().next()) {
            Some(page) => page,
            None => return Ok(PageLookup::Missing),
        };

        if page.missing || page.invalid {
            return Ok(PageLookup::Missing);
        }

        if page.pageprops.is_some_and(|props| props.disambiguation.is_some()) {
            return Ok(PageLookup::Disambiguation);
        }

        Ok(page.extract.map_or(PageLookup::Missing, PageLookup::Text))
    }

    async fn disambiguation_candidates(
        &self,
        language: &str,
        title: &str,
    ) -> Result<Vec<String>, FetchError> {
        let url = self.endpoints.api_url_for(language);
        let response: QueryResponse<LinksPage> = self
            .get_json(
                &url,
                &[
                    ("action", "query"),
                    ("format", "json"),
                    ("formatversion", "2"),
                    ("redirects", "1"),
                    ("prop", "links"),
                    ("plnamespace", "0"),
                    ("pllimit", "max"),
                    ("titles", title),
                ],
            )
            .await?;

        Ok(response
            .query
            .and_then(|q| q.pages.into_iter().next())
            .map(|page| page.links.into_iter().map(|link| link.title).collect())
            .unwrap_or_default())
    }

    /// Sends a GET request and decodes a JSON body
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, &str)],
    ) -> Result<T, FetchError> {
        let response = self
            .client
            .get(url)
            .query(query)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

impl PageSource for PageFetcher {
    async fn fetch_page(&self, index: u32) -> PageResult {
        let title = self.random_title(&self.language).await?;
        tracing::debug!("Page #{}: \"{}\"", index + 1, title);

        let content = self.page_content(&self.language, &title).await?;
        let words = self.tokenizer.tokenize(&content.text);

        Ok(PageWords {
            title: content.title,
            words,
        })
    }
}

/// Picks one candidate uniformly at random
fn choose_candidate(candidates: &[String]) -> Option<String> {
    candidates.choose(&mut rand::thread_rng()).cloned()
}
