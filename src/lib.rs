//! Page-Tally: concurrent word statistics for a list of web pages
//!
//! This crate fetches a batch of pages concurrently, counts a configured set of
//! target words in each page's visible text, computes per-page word statistics
//! and renders a consolidated text report.

pub mod analysis;
pub mod batch;
pub mod config;
pub mod input;
pub mod output;

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Main error type for Page-Tally operations
#[derive(Debug, Error)]
pub enum TallyError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Input error: {0}")]
    Input(#[from] InputError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Fetch task failed: {0}")]
    TaskFailed(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TallyError {
    /// Process exit code for this error
    ///
    /// Setup errors get distinct codes so scripts can tell a missing URL file
    /// from an empty one; anything unclassified exits with 1.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Input(InputError::Missing { .. }) => 2,
            Self::Input(InputError::Empty { .. }) => 3,
            Self::Input(InputError::Io(_)) => 1,
            Self::Config(_) => 4,
            Self::Output(_) => 5,
            Self::HttpClient(_) | Self::TaskFailed(_) | Self::Io(_) => 1,
        }
    }
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("URL list is empty")]
    EmptyUrlList,
}

/// URL list loading errors
#[derive(Debug, Error)]
pub enum InputError {
    #[error("URL file not found: {}", path.display())]
    Missing { path: PathBuf },

    #[error("URL file is empty: {}", path.display())]
    Empty { path: PathBuf },

    #[error("Failed to read URL file: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Page-Tally operations
pub type Result<T> = std::result::Result<T, TallyError>;

// Re-export commonly used types
pub use analysis::{compute_aggregate, count_word_occurrences, MatchMode, WordMatcher};
pub use batch::{run_batch, BatchReport, Coordinator, PageResult};
pub use config::Config;

/// Runs one complete batch described by a validated configuration
///
/// Loads the URL list, truncates the result file, fetches and analyzes every
/// page, then appends the report. Setup errors (missing or empty URL list)
/// return before the result file is touched, so the previous report survives.
pub async fn run_from_config(config: &Config) -> Result<BatchReport> {
    let urls = input::load_urls(Path::new(&config.input.urls_path))?;

    let output_path = Path::new(&config.output.result_path);
    output::truncate_output(output_path)?;

    let report = run_batch(&urls, config).await?;
    output::append_report(&report, output_path).await?;

    Ok(report)
}
