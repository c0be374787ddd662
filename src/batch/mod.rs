//! Batch module for concurrent page fetching and aggregation
//!
//! This module contains the core pipeline, including:
//! - HTTP fetching through one shared client
//! - Per-page analysis into structured results
//! - Bounded concurrent fan-out and ordered fan-in
//! - Merging per-page results into one report

mod coordinator;
mod fetcher;
mod report;
mod types;

pub use coordinator::{format_elapsed, run_batch, Coordinator};
pub use fetcher::{analyze_page, build_http_client, fetch_page};
pub use report::{BatchReport, ReportBuilder};
pub use types::{FailureKind, FetchFailure, PageAggregate, PageResult, WordCountRecord};
