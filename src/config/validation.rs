use crate::config::types::{AnalysisConfig, Config, FetcherConfig, InputConfig, OutputConfig};
use crate::ConfigError;
use std::collections::HashSet;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_input_config(&config.input)?;
    validate_output_config(&config.output)?;
    validate_analysis_config(&config.analysis)?;
    validate_fetcher_config(&config.fetcher)?;
    Ok(())
}

fn validate_input_config(config: &InputConfig) -> Result<(), ConfigError> {
    if config.urls_path.trim().is_empty() {
        return Err(ConfigError::Validation(
            "urls_path cannot be empty".to_string(),
        ));
    }
    Ok(())
}

fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.result_path.trim().is_empty() {
        return Err(ConfigError::Validation(
            "result_path cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Validates the word list
///
/// Words are report keys, so two words that differ only in case would
/// produce identical counts under case-insensitive matching and are rejected.
fn validate_analysis_config(config: &AnalysisConfig) -> Result<(), ConfigError> {
    if config.words.is_empty() {
        return Err(ConfigError::Validation(
            "at least one word must be configured".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for word in &config.words {
        if word.trim().is_empty() {
            return Err(ConfigError::Validation(
                "words cannot contain an empty entry".to_string(),
            ));
        }

        if word.trim() != word {
            return Err(ConfigError::Validation(format!(
                "word '{}' has leading or trailing whitespace",
                word
            )));
        }

        if !seen.insert(word.to_lowercase()) {
            return Err(ConfigError::Validation(format!(
                "word '{}' is listed more than once",
                word
            )));
        }
    }

    Ok(())
}

fn validate_fetcher_config(config: &FetcherConfig) -> Result<(), ConfigError> {
    if config.max_in_flight < 1 || config.max_in_flight > 1024 {
        return Err(ConfigError::Validation(format!(
            "max_in_flight must be between 1 and 1024, got {}",
            config.max_in_flight
        )));
    }

    if config.request_timeout_ms < 100 {
        return Err(ConfigError::Validation(format!(
            "request_timeout_ms must be >= 100ms, got {}ms",
            config.request_timeout_ms
        )));
    }

    if config.connect_timeout_ms < 100 {
        return Err(ConfigError::Validation(format!(
            "connect_timeout_ms must be >= 100ms, got {}ms",
            config.connect_timeout_ms
        )));
    }

    if config.user_agent.trim().is_empty() {
        return Err(ConfigError::Validation(
            "user_agent cannot be empty".to_string(),
        ));
    }

    Ok(())
}
