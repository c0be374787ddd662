//! Text analysis for fetched pages
//!
//! This module turns raw HTML into word statistics:
//! - Visible text extraction (markup, scripts and styles removed)
//! - Case-insensitive occurrence counting for target words
//! - Total and unique alphabetic word counts

mod aggregate;
mod matcher;
mod text;

pub use aggregate::{compute_aggregate, AggregateStats};
pub use matcher::{count_word_occurrences, MatchMode, WordMatcher};
pub use text::{extract_visible_text, PageText};
