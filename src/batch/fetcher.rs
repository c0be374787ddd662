//! HTTP fetcher implementation
//!
//! This module handles all HTTP requests for a batch, including:
//! - Building the shared HTTP client (one connection pool per batch)
//! - GET requests to fetch page content
//! - Content-Type filtering
//! - Error classification into per-page failures

use crate::analysis::{AggregateStats, PageText, WordMatcher};
use crate::batch::types::{FailureKind, FetchFailure, PageAggregate, PageResult, WordCountRecord};
use crate::config::FetcherConfig;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use url::Url;

/// Builds the HTTP client shared by every fetch in a batch
///
/// # Example
///
/// ```no_run
/// use page_tally::config::FetcherConfig;
/// use page_tally::batch::build_http_client;
///
/// let client = build_http_client(&FetcherConfig::default()).unwrap();
/// ```
pub fn build_http_client(config: &FetcherConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.as_str())
        .timeout(config.request_timeout())
        .connect_timeout(config.connect_timeout())
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches one page and analyzes it for every matcher
///
/// # Request Flow
///
/// 1. Validate URL syntax (http/https only)
/// 2. Send GET through the shared client
/// 3. Reject non-success status codes and non-text Content-Types
/// 4. Read the body, parse it once, count every word and the aggregate
///
/// | Condition | Result |
/// |-----------|--------|
/// | Unparseable URL or other scheme | InvalidUrl |
/// | Request or body timeout | Timeout |
/// | Connection refused / DNS / TLS | Connect |
/// | HTTP status outside 2xx | HttpStatus |
/// | Content-Type not textual | NonText |
/// | Body read or decode error | Body |
/// | Anything else | Transport |
///
/// Failures are returned as `PageResult::Failure`; this never returns an
/// error, so one bad URL cannot abort the rest of the batch.
pub async fn fetch_page(client: &Client, url: &str, matchers: &[WordMatcher]) -> PageResult {
    let parsed = match Url::parse(url) {
        Ok(parsed) => parsed,
        Err(e) => {
            return fail(url, FailureKind::InvalidUrl, format!("Invalid URL: {}", e));
        }
    };

    if !matches!(parsed.scheme(), "http" | "https") {
        return fail(
            url,
            FailureKind::InvalidUrl,
            format!("Unsupported scheme: {}", parsed.scheme()),
        );
    }

    tracing::debug!("Fetching {}", url);

    let response = match client.get(parsed).send().await {
        Ok(response) => response,
        Err(e) => return fail_with(url, classify_error(&e), &e),
    };

    let status = response.status();
    if !status.is_success() {
        return fail(
            url,
            FailureKind::HttpStatus(status.as_u16()),
            status
                .canonical_reason()
                .unwrap_or("Unexpected status")
                .to_string(),
        );
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("")
        .to_string();

    if !is_textual(&content_type) {
        return fail(
            url,
            FailureKind::NonText(content_type),
            "Response is not a text document",
        );
    }

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            let kind = if e.is_timeout() {
                FailureKind::Timeout
            } else {
                FailureKind::Body
            };
            return fail_with(url, kind, &e);
        }
    };

    let result = analyze_page(url, &body, matchers);
    if let PageResult::Success { aggregate, .. } = &result {
        tracing::debug!(
            "Analyzed {}: {} words, {} unique",
            url,
            aggregate.total_words,
            aggregate.unique_words
        );
    }
    result
}

/// Analyzes an already-fetched page body
///
/// The body is parsed once; the aggregate and every word count read the same
/// extracted text.
pub fn analyze_page(url: &str, html: &str, matchers: &[WordMatcher]) -> PageResult {
    let page = PageText::parse(html);
    let stats = AggregateStats::from_page(&page);

    let counts = matchers
        .iter()
        .map(|matcher| WordCountRecord {
            url: url.to_string(),
            word: matcher.word().to_string(),
            count: matcher.count(&page),
        })
        .collect();

    PageResult::Success {
        aggregate: PageAggregate {
            url: url.to_string(),
            total_words: stats.total_words,
            unique_words: stats.unique_words,
        },
        counts,
    }
}

/// Returns true for Content-Types whose body can be read as text
///
/// A missing header is accepted: many small servers omit it for HTML.
fn is_textual(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or("")
        .trim()
        .to_ascii_lowercase();

    mime.is_empty()
        || mime.starts_with("text/")
        || mime == "application/xml"
        || mime == "application/xhtml+xml"
        || mime.ends_with("+xml")
}

fn classify_error(e: &reqwest::Error) -> FailureKind {
    if e.is_timeout() {
        FailureKind::Timeout
    } else if e.is_connect() {
        FailureKind::Connect
    } else if e.is_builder() {
        FailureKind::InvalidUrl
    } else if e.is_body() || e.is_decode() {
        FailureKind::Body
    } else {
        FailureKind::Transport
    }
}

fn fail(url: &str, kind: FailureKind, message: impl Into<String>) -> PageResult {
    let failure = FetchFailure::new(url, kind, message);
    tracing::warn!("Fetch failed for {}: {}", url, failure);
    PageResult::Failure(failure)
}

fn fail_with(url: &str, kind: FailureKind, e: &reqwest::Error) -> PageResult {
    fail(url, kind, e.to_string())
}
