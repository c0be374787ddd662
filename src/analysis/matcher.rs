//! Target word matching
//!
//! A target word is treated as a case-insensitive regular expression and
//! searched for without anchors, so `team` also counts the `team` inside
//! `teamwork`. `MatchMode::WholeWord` wraps the pattern in word boundaries for
//! callers that want token matches instead.

use crate::analysis::text::{extract_visible_text, PageText};
use regex::{Regex, RegexBuilder};
use serde::Deserialize;

/// How a target word is matched against page text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchMode {
    /// Unanchored search: matches anywhere, including inside longer words
    #[default]
    Substring,

    /// Match only where the word stands on word boundaries
    WholeWord,
}

#[derive(Debug, Clone)]
enum Pattern {
    Regex(Regex),
    /// Lowercased word, counted as non-overlapping occurrences
    Literal(String),
}

/// A compiled matcher for one target word
///
/// Compiled once per batch and shared read-only by every fetch task.
#[derive(Debug, Clone)]
pub struct WordMatcher {
    word: String,
    mode: MatchMode,
    pattern: Pattern,
}

impl WordMatcher {
    /// Compiles a matcher for `word`
    ///
    /// A word that is not a valid regular expression is matched literally;
    /// this never fails.
    pub fn new(word: &str, mode: MatchMode) -> Self {
        let pattern = match build_regex(word, mode) {
            Ok(regex) => Pattern::Regex(regex),
            Err(e) => {
                tracing::warn!(
                    "Word '{}' is not a valid pattern ({}), matching it literally",
                    word,
                    e
                );
                match build_regex(&regex::escape(word), mode) {
                    Ok(regex) => Pattern::Regex(regex),
                    Err(_) => Pattern::Literal(word.to_lowercase()),
                }
            }
        };

        Self {
            word: word.to_string(),
            mode,
            pattern,
        }
    }

    /// Builds one matcher per word, preserving order
    pub fn compile_all(words: &[String], mode: MatchMode) -> Vec<Self> {
        words.iter().map(|word| Self::new(word, mode)).collect()
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Counts matches in already-extracted text
    pub fn count_in(&self, text: &str) -> u64 {
        match &self.pattern {
            Pattern::Regex(regex) => regex.find_iter(text).count() as u64,
            Pattern::Literal(word) => text.to_lowercase().matches(word.as_str()).count() as u64,
        }
    }

    /// Counts matches in a parsed page
    pub fn count(&self, page: &PageText) -> u64 {
        self.count_in(page.as_str())
    }
}

fn build_regex(pattern: &str, mode: MatchMode) -> Result<Regex, regex::Error> {
    let pattern = match mode {
        MatchMode::Substring => pattern.to_string(),
        MatchMode::WholeWord => format!(r"\b(?:{})\b", pattern),
    };

    RegexBuilder::new(&pattern).case_insensitive(true).build()
}

/// Counts case-insensitive occurrences of `word` in the visible text of `html`
///
/// # Example
///
/// ```
/// use page_tally::count_word_occurrences;
///
/// let html = "<p>Our team is the best team in Uniberg</p>";
/// assert_eq!(count_word_occurrences(html, "TEAM"), 2);
/// assert_eq!(count_word_occurrences(html, "uniberg"), 1);
/// ```
pub fn count_word_occurrences(html: &str, word: &str) -> u64 {
    WordMatcher::new(word, MatchMode::Substring).count_in(&extract_visible_text(html))
}
