//! Output module for writing batch reports
//!
//! This module handles:
//! - Rendering a batch report into the text result format
//! - Appending the report to the result file
//! - Truncating the result file once at run start

mod text_report;

pub use text_report::{append_report, format_report, truncate_output};

use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;
