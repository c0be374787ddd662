//! Integration tests for a complete run
//!
//! These tests drive `run_from_config` against temporary URL lists and result
//! files, checking that setup errors leave the previous report untouched.

use page_tally::config::Config;
use page_tally::{run_from_config, InputError, TallyError};
use std::path::Path;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PREVIOUS_REPORT: &str = "Occurrences of word \"team\":\n- https://old.example.com/ => 7\n";

/// Creates a configuration reading `urls_path` and writing `result_path`
fn create_test_config(urls_path: &Path, result_path: &Path) -> Config {
    let mut config = Config::default();
    config.input.urls_path = urls_path.to_string_lossy().into_owned();
    config.output.result_path = result_path.to_string_lossy().into_owned();
    config.analysis.words = vec!["team".to_string()];
    config.fetcher.user_agent = "TestTally/1.0".to_string();
    config
}

#[tokio::test]
async fn test_empty_url_list_keeps_previous_report() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let urls_path = dir.path().join("urls.txt");
    let result_path = dir.path().join("result.txt");
    std::fs::write(&urls_path, "\n  \n").expect("Failed to write url list");
    std::fs::write(&result_path, PREVIOUS_REPORT).expect("Failed to seed result file");

    let config = create_test_config(&urls_path, &result_path);
    let error = run_from_config(&config)
        .await
        .expect_err("An empty URL list should fail");

    assert!(matches!(error, TallyError::Input(InputError::Empty { .. })));
    assert_eq!(error.exit_code(), 3);

    let content = std::fs::read_to_string(&result_path).expect("Failed to read result");
    assert_eq!(content, PREVIOUS_REPORT);
}

#[tokio::test]
async fn test_missing_url_list_keeps_previous_report() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let urls_path = dir.path().join("does-not-exist.txt");
    let result_path = dir.path().join("result.txt");
    std::fs::write(&result_path, PREVIOUS_REPORT).expect("Failed to seed result file");

    let config = create_test_config(&urls_path, &result_path);
    let error = run_from_config(&config)
        .await
        .expect_err("A missing URL list should fail");

    assert!(matches!(error, TallyError::Input(InputError::Missing { .. })));
    assert_eq!(error.exit_code(), 2);

    let content = std::fs::read_to_string(&result_path).expect("Failed to read result");
    assert_eq!(content, PREVIOUS_REPORT);
}

#[tokio::test]
async fn test_missing_url_list_does_not_create_result_file() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let urls_path = dir.path().join("does-not-exist.txt");
    let result_path = dir.path().join("result.txt");

    let config = create_test_config(&urls_path, &result_path);
    assert!(run_from_config(&config).await.is_err());
    assert!(!result_path.exists());
}

#[tokio::test]
async fn test_successful_run_replaces_previous_report() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/a"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("<html><body><p>team team</p></body></html>", "text/html"),
        )
        .mount(&mock_server)
        .await;

    let dir = TempDir::new().expect("Failed to create temp dir");
    let urls_path = dir.path().join("urls.txt");
    let result_path = dir.path().join("result.txt");
    let url = format!("{}/a", mock_server.uri());
    std::fs::write(&urls_path, format!("{}\n", url)).expect("Failed to write url list");
    std::fs::write(&result_path, PREVIOUS_REPORT).expect("Failed to seed result file");

    let config = create_test_config(&urls_path, &result_path);
    let report = run_from_config(&config).await.expect("Run failed");
    assert_eq!(report.word_total("team"), 2);

    let content = std::fs::read_to_string(&result_path).expect("Failed to read result");
    let expected = format!(
        "Occurrences of word \"team\":\n\
         - {url} => 2\n\
         - Total count for word \"team\" in all urls => 2\n\
         * Total count of all words in all urls => 2\n\
         * Total count of unique words in all urls => 1\n",
        url = url
    );
    assert_eq!(content, expected);
}
