//! Per-page result types
//!
//! Everything here is created once by a fetch task and never mutated
//! afterwards.

use std::fmt;

/// Occurrence count of one target word on one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCountRecord {
    pub url: String,
    pub word: String,
    pub count: u64,
}

/// Word statistics for one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageAggregate {
    pub url: String,
    pub total_words: u64,
    pub unique_words: u64,
}

/// Why a page could not be analyzed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// The URL could not be parsed or uses an unsupported scheme
    InvalidUrl,

    /// The request or body read exceeded the configured timeout
    Timeout,

    /// Connection refused, DNS failure or TLS handshake error
    Connect,

    /// The server answered with a non-success status
    HttpStatus(u16),

    /// The response is not text (carries the Content-Type received)
    NonText(String),

    /// The body could not be read or decoded
    Body,

    /// Any other transport error
    Transport,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUrl => write!(f, "invalid url"),
            Self::Timeout => write!(f, "timeout"),
            Self::Connect => write!(f, "connection error"),
            Self::HttpStatus(code) => write!(f, "http {}", code),
            Self::NonText(content_type) => write!(f, "non-text response ({})", content_type),
            Self::Body => write!(f, "unreadable body"),
            Self::Transport => write!(f, "transport error"),
        }
    }
}

/// A fetch that did not produce page statistics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub url: String,
    pub kind: FailureKind,
    pub message: String,
}

impl FetchFailure {
    pub fn new(url: &str, kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            url: url.to_string(),
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

/// Everything known about one URL after its fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageResult {
    /// The page was fetched and analyzed
    Success {
        aggregate: PageAggregate,
        /// One record per configured word, in word-list order
        counts: Vec<WordCountRecord>,
    },

    /// The page could not be fetched or read
    Failure(FetchFailure),
}

impl PageResult {
    pub fn url(&self) -> &str {
        match self {
            Self::Success { aggregate, .. } => &aggregate.url,
            Self::Failure(failure) => &failure.url,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn aggregate(&self) -> Option<&PageAggregate> {
        match self {
            Self::Success { aggregate, .. } => Some(aggregate),
            Self::Failure(_) => None,
        }
    }

    pub fn counts(&self) -> &[WordCountRecord] {
        match self {
            Self::Success { counts, .. } => counts,
            Self::Failure(_) => &[],
        }
    }

    pub fn failure(&self) -> Option<&FetchFailure> {
        match self {
            Self::Success { .. } => None,
            Self::Failure(failure) => Some(failure),
        }
    }

    /// Count for `word` on this page, `None` for failures or unknown words
    pub fn count_for(&self, word: &str) -> Option<u64> {
        self.counts()
            .iter()
            .find(|record| record.word == word)
            .map(|record| record.count)
    }
}
