use crate::analysis::text::{extract_visible_text, PageText};
use std::collections::HashSet;

/// Total and unique alphabetic word counts for one page
///
/// `total_words >= unique_words` always holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregateStats {
    pub total_words: u64,
    pub unique_words: u64,
}

impl AggregateStats {
    /// Counts words in already-extracted text
    ///
    /// The text is lowercased and split on whitespace; a token counts only if
    /// every character in it is alphabetic, so numerals, tokens with attached
    /// punctuation and hyphenated compounds are all skipped.
    pub fn from_text(text: &str) -> Self {
        let lowered = text.to_lowercase();
        let words: Vec<&str> = lowered
            .split_whitespace()
            .filter(|token| token.chars().all(char::is_alphabetic))
            .collect();

        let unique: HashSet<&str> = words.iter().copied().collect();

        Self {
            total_words: words.len() as u64,
            unique_words: unique.len() as u64,
        }
    }

    pub fn from_page(page: &PageText) -> Self {
        Self::from_text(page.as_str())
    }
}

/// Computes total and unique word counts for the visible text of `html`
///
/// # Example
///
/// ```
/// use page_tally::compute_aggregate;
///
/// let stats = compute_aggregate("<p>Our team is the best team in Uniberg</p>");
/// assert_eq!(stats.total_words, 8);
/// assert_eq!(stats.unique_words, 7);
/// ```
pub fn compute_aggregate(html: &str) -> AggregateStats {
    AggregateStats::from_text(&extract_visible_text(html))
}
