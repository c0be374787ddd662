use crate::analysis::MatchMode;
use serde::Deserialize;
use std::time::Duration;

/// Main configuration structure for Page-Tally
///
/// Every section is optional in the TOML file; missing sections fall back to
/// the defaults below.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub analysis: AnalysisConfig,
    #[serde(default)]
    pub fetcher: FetcherConfig,
}

/// Where the URL list is read from
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Path to the newline-delimited URL list
    #[serde(rename = "urls-path")]
    pub urls_path: String,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            urls_path: "urls.txt".to_string(),
        }
    }
}

/// Where the report is written
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Path to the text report, truncated at run start and appended once
    #[serde(rename = "result-path")]
    pub result_path: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            result_path: "result.txt".to_string(),
        }
    }
}

/// Word analysis configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Target words, reported in this order
    pub words: Vec<String>,

    /// How a target word is matched against page text
    #[serde(rename = "match-mode")]
    pub match_mode: MatchMode,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            words: vec!["team".to_string(), "uniberg".to_string()],
            match_mode: MatchMode::Substring,
        }
    }
}

/// HTTP fetching configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FetcherConfig {
    /// Maximum number of fetches in flight at once
    #[serde(rename = "max-in-flight")]
    pub max_in_flight: u32,

    /// Total timeout for a single request (milliseconds)
    #[serde(rename = "request-timeout-ms")]
    pub request_timeout_ms: u64,

    /// Timeout for establishing a connection (milliseconds)
    #[serde(rename = "connect-timeout-ms")]
    pub connect_timeout_ms: u64,

    /// User-Agent header sent with every request
    #[serde(rename = "user-agent")]
    pub user_agent: String,
}

impl FetcherConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            max_in_flight: 16,
            request_timeout_ms: 30_000,
            connect_timeout_ms: 10_000,
            user_agent: format!("page-tally/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}
