//! Integration tests for the page fetcher
//!
//! These tests use wiremock to serve pages and check how each kind of
//! response turns into a page result.

use page_tally::analysis::{MatchMode, WordMatcher};
use page_tally::batch::{build_http_client, fetch_page, FailureKind};
use page_tally::config::FetcherConfig;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn matchers() -> Vec<WordMatcher> {
    WordMatcher::compile_all(
        &["team".to_string(), "uniberg".to_string()],
        MatchMode::Substring,
    )
}

fn test_fetcher_config() -> FetcherConfig {
    FetcherConfig {
        max_in_flight: 4,
        request_timeout_ms: 2_000,
        connect_timeout_ms: 1_000,
        user_agent: "TestTally/1.0".to_string(),
    }
}

#[tokio::test]
async fn test_fetch_html_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/a"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            "<html><head><title>Home</title></head><body><p>Our team is the best team in Uniberg</p></body></html>",
            "text/html",
        ))
        .mount(&mock_server)
        .await;

    let client = build_http_client(&test_fetcher_config()).expect("Failed to build client");
    let url = format!("{}/a", mock_server.uri());
    let result = fetch_page(&client, &url, &matchers()).await;

    assert!(result.is_success(), "Expected success, got {:?}", result);
    assert_eq!(result.url(), url);
    assert_eq!(result.count_for("team"), Some(2));
    assert_eq!(result.count_for("uniberg"), Some(1));

    // "Home" from the title plus the eight words of the paragraph
    let aggregate = result.aggregate().expect("Missing aggregate");
    assert_eq!(aggregate.total_words, 9);
    assert_eq!(aggregate.unique_words, 8);
}

#[tokio::test]
async fn test_user_agent_is_sent() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ua"))
        .and(header("user-agent", "TestTally/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<p>team</p>", "text/html"))
        .mount(&mock_server)
        .await;

    let client = build_http_client(&test_fetcher_config()).expect("Failed to build client");
    let result = fetch_page(&client, &format!("{}/ua", mock_server.uri()), &matchers()).await;

    assert_eq!(result.count_for("team"), Some(1));
}

#[tokio::test]
async fn test_plain_text_is_accepted() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/notes.txt"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("team uniberg team", "text/plain"))
        .mount(&mock_server)
        .await;

    let client = build_http_client(&test_fetcher_config()).expect("Failed to build client");
    let result = fetch_page(
        &client,
        &format!("{}/notes.txt", mock_server.uri()),
        &matchers(),
    )
    .await;

    assert_eq!(result.count_for("team"), Some(2));
    assert_eq!(result.aggregate().map(|a| a.unique_words), Some(2));
}

#[tokio::test]
async fn test_hidden_text_is_not_counted() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/scripted"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"<html><head><script>var team = "team";</script><style>.team{}</style></head><body>team</body></html>"#,
            "text/html",
        ))
        .mount(&mock_server)
        .await;

    let client = build_http_client(&test_fetcher_config()).expect("Failed to build client");
    let result = fetch_page(
        &client,
        &format!("{}/scripted", mock_server.uri()),
        &matchers(),
    )
    .await;

    assert_eq!(result.count_for("team"), Some(1));
    assert_eq!(result.aggregate().map(|a| a.total_words), Some(1));
}

#[tokio::test]
async fn test_http_error_is_a_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = build_http_client(&test_fetcher_config()).expect("Failed to build client");
    let result = fetch_page(
        &client,
        &format!("{}/missing", mock_server.uri()),
        &matchers(),
    )
    .await;

    let failure = result.failure().expect("Expected a failure");
    assert_eq!(failure.kind, FailureKind::HttpStatus(404));
}

#[tokio::test]
async fn test_non_text_response_is_a_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/logo.png"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(vec![0x89, 0x50, 0x4e, 0x47], "image/png"))
        .mount(&mock_server)
        .await;

    let client = build_http_client(&test_fetcher_config()).expect("Failed to build client");
    let result = fetch_page(
        &client,
        &format!("{}/logo.png", mock_server.uri()),
        &matchers(),
    )
    .await;

    let failure = result.failure().expect("Expected a failure");
    assert_eq!(failure.kind, FailureKind::NonText("image/png".to_string()));
}

#[tokio::test]
async fn test_timeout_is_a_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("<p>team</p>", "text/html")
                .set_delay(std::time::Duration::from_secs(3)),
        )
        .mount(&mock_server)
        .await;

    let mut config = test_fetcher_config();
    config.request_timeout_ms = 200;
    let client = build_http_client(&config).expect("Failed to build client");
    let result = fetch_page(&client, &format!("{}/slow", mock_server.uri()), &matchers()).await;

    let failure = result.failure().expect("Expected a failure");
    assert_eq!(failure.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn test_connection_refused_is_a_failure() {
    let client = build_http_client(&test_fetcher_config()).expect("Failed to build client");
    let result = fetch_page(&client, "http://127.0.0.1:1/", &matchers()).await;

    let failure = result.failure().expect("Expected a failure");
    assert_eq!(failure.kind, FailureKind::Connect);
    assert_eq!(failure.url, "http://127.0.0.1:1/");
}
