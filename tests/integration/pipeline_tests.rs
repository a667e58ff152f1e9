//! Integration tests for the fetch-and-aggregate pipeline
//!
//! These tests use wiremock to stand in for the random-page endpoint and the
//! action API, and run the full pipeline end-to-end.

use serde_json::json;
use std::time::{Duration, Instant};
use wiki_wordlist::config::{Config, EndpointConfig, FetchConfig, OutputConfig};
use wiki_wordlist::crawler::Coordinator;
use wiki_wordlist::output::write_wordlist;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration pointing both endpoints at the mock server
fn create_test_config(base_url: &str, pages: u32, concurrency: u32, timeout: u64) -> Config {
    Config {
        fetch: FetchConfig {
            pages,
            concurrency,
            timeout,
            ..FetchConfig::default()
        },
        endpoints: EndpointConfig {
            random_url: format!("{}/{{lang}}/random/summary", base_url),
            api_url: format!("{}/{{lang}}/w/api.php", base_url),
        },
        output: OutputConfig::default(),
        ..Config::default()
    }
}

async fn mount_random_title(server: &MockServer, title: &str) {
    Mock::given(method("GET"))
        .and(path("/en/random/summary"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "title": title })))
        .mount(server)
        .await;
}

async fn mount_extract(server: &MockServer, title: &str, text: &str) {
    Mock::given(method("GET"))
        .and(path("/en/w/api.php"))
        .and(query_param("prop", "extracts|pageprops"))
        .and(query_param("titles", title))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "query": { "pages": [ { "pageid": 1, "ns": 0, "title": title, "extract": text } ] }
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_full_run_ranks_words() {
    let mock_server = MockServer::start().await;

    mount_random_title(&mock_server, "Cat").await;
    mount_extract(
        &mock_server,
        "Cat",
        "The cat is a small animal.\n\n== Behaviour ==\nThe cat sleeps; the cat eats.",
    )
    .await;

    let config = create_test_config(&mock_server.uri(), 3, 2, 10);
    let coordinator = Coordinator::new(config).expect("Failed to create coordinator");
    let report = coordinator.run().await;

    // Every page returns the same title, and repeats are not corrected
    assert_eq!(report.statistics.pages_fetched, 3);
    assert_eq!(report.statistics.words_collected, 3 * 12);

    let top: Vec<(usize, &str)> = report
        .ranked
        .top(3)
        .iter()
        .map(|w| (w.count, w.word.as_str()))
        .collect();
    assert_eq!(top, vec![(9, "the"), (9, "cat"), (3, "small")]);
}

#[tokio::test]
async fn test_run_survives_total_outage() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri(), 5, 3, 5);
    let coordinator = Coordinator::new(config).expect("Failed to create coordinator");
    let report = coordinator.run().await;

    assert!(report.ranked.is_empty());
    assert_eq!(report.statistics.pages_failed, 5);
    assert!(!report.statistics.timed_out);
}

#[tokio::test]
async fn test_failed_content_pages_are_skipped() {
    let mock_server = MockServer::start().await;

    mount_random_title(&mock_server, "Broken").await;
    Mock::given(method("GET"))
        .and(path("/en/w/api.php"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri(), 4, 4, 5);
    let report = Coordinator::new(config)
        .expect("Failed to create coordinator")
        .run()
        .await;

    assert_eq!(report.statistics.pages_fetched, 0);
    assert_eq!(report.statistics.pages_failed, 4);
    assert!(report.ranked.is_empty());
}

#[tokio::test]
async fn test_timeout_bounds_slow_pages() {
    let mock_server = MockServer::start().await;

    mount_random_title(&mock_server, "Slow").await;
    Mock::given(method("GET"))
        .and(path("/en/w/api.php"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({
                    "query": { "pages": [ { "title": "Slow", "extract": "slow words" } ] }
                }))
                .set_delay(Duration::from_secs(10)),
        )
        .mount(&mock_server)
        .await;

    let config = create_test_config(&mock_server.uri(), 2, 2, 1);
    let coordinator = Coordinator::new(config).expect("Failed to create coordinator");

    let started = Instant::now();
    let report = coordinator.run().await;

    assert!(
        started.elapsed() < Duration::from_secs(5),
        "run took {:?}",
        started.elapsed()
    );
    assert!(report.statistics.timed_out);
    assert_eq!(report.statistics.pages_abandoned, 2);
    assert!(report.ranked.is_empty());
}

#[tokio::test]
async fn test_run_and_save_top_words() {
    let mock_server = MockServer::start().await;

    mount_random_title(&mock_server, "Colours").await;
    mount_extract(&mock_server, "Colours", "red red red blue blue green").await;

    let config = create_test_config(&mock_server.uri(), 1, 1, 5);
    let report = Coordinator::new(config)
        .expect("Failed to create coordinator")
        .run()
        .await;

    let file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
    let written = write_wordlist(&report.ranked, file.path(), 2).expect("Failed to write");

    assert_eq!(written, 2);
    let content = std::fs::read_to_string(file.path()).expect("Failed to read output");
    assert_eq!(content, "red\nblue\n");
}

#[test]
fn test_invalid_config_is_rejected() {
    let mut config = create_test_config("http://127.0.0.1:1", 1, 1, 1);
    config.fetch.max_length = 2;
    config.fetch.min_length = 3;

    assert!(Coordinator::new(config).is_err());
}
