//! Configuration module for Page-Tally
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! A configuration file is optional: every section has defaults, and command
//! line overrides are checked with the same validation rules.
//!
//! # Example
//!
//! ```no_run
//! use page_tally::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("tally.toml")).unwrap();
//! println!("Fetching at most {} pages at once", config.fetcher.max_in_flight);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{AnalysisConfig, Config, FetcherConfig, InputConfig, OutputConfig};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
