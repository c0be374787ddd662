//! Batch report aggregation
//!
//! Results arrive from fetch tasks in completion order. `ReportBuilder` slots
//! each one back into its input position and folds its counts into the
//! word -> url -> count table as it arrives, so the finished `BatchReport`
//! never depends on which fetch happened to finish first.

use crate::batch::types::{FetchFailure, PageAggregate, PageResult, WordCountRecord};
use crate::TallyError;
use std::collections::HashMap;
use std::time::Duration;

/// The merged outcome of one batch
///
/// Only successful pages contribute to totals. Failed pages keep their slot in
/// `results` and are listed through `failures()`.
#[derive(Debug, Clone)]
pub struct BatchReport {
    words: Vec<String>,
    results: Vec<PageResult>,
    counts: HashMap<String, HashMap<String, u64>>,
    word_totals: HashMap<String, u64>,
    total_words: u64,
    unique_words: u64,
    elapsed: Duration,
}

impl BatchReport {
    /// Builds a report from results already in input order
    pub fn from_results(words: Vec<String>, results: Vec<PageResult>, elapsed: Duration) -> Self {
        let mut builder = ReportBuilder::new(words, results.len());
        for (index, result) in results.into_iter().enumerate() {
            builder.record(index, result);
        }
        builder.build(elapsed)
    }

    /// Target words in configuration order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// One result per input URL, in input order
    pub fn results(&self) -> &[PageResult] {
        &self.results
    }

    pub fn successes(&self) -> impl Iterator<Item = (&PageAggregate, &[WordCountRecord])> {
        self.results.iter().filter_map(|result| match result {
            PageResult::Success { aggregate, counts } => Some((aggregate, counts.as_slice())),
            PageResult::Failure(_) => None,
        })
    }

    pub fn failures(&self) -> impl Iterator<Item = &FetchFailure> {
        self.results.iter().filter_map(PageResult::failure)
    }

    pub fn success_count(&self) -> usize {
        self.successes().count()
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    /// Count of `word` on the page at `url`, `None` if that page failed
    pub fn count(&self, word: &str, url: &str) -> Option<u64> {
        self.counts.get(word).and_then(|by_url| by_url.get(url)).copied()
    }

    /// Sum of `word` counts across all successful pages
    pub fn word_total(&self, word: &str) -> u64 {
        self.word_totals.get(word).copied().unwrap_or(0)
    }

    /// Sum of `total_words` across all successful pages
    pub fn total_words(&self) -> u64 {
        self.total_words
    }

    /// Sum of `unique_words` across all successful pages
    pub fn unique_words(&self) -> u64 {
        self.unique_words
    }

    /// Wall-clock time from first fetch launch to last result collected
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }
}

/// Incrementally assembles a `BatchReport` as results arrive
pub struct ReportBuilder {
    words: Vec<String>,
    slots: Vec<Option<PageResult>>,
    counts: HashMap<String, HashMap<String, u64>>,
    word_totals: HashMap<String, u64>,
    total_words: u64,
    unique_words: u64,
}

impl ReportBuilder {
    /// Creates a builder expecting exactly `url_count` results
    pub fn new(words: Vec<String>, url_count: usize) -> Self {
        let word_totals = words.iter().map(|word| (word.clone(), 0)).collect();

        Self {
            words,
            slots: vec![None; url_count],
            counts: HashMap::new(),
            word_totals,
            total_words: 0,
            unique_words: 0,
        }
    }

    /// Records the result for the URL at input position `index`
    ///
    /// Each slot is filled at most once; a second result for the same slot or
    /// an index outside the batch is ignored.
    pub fn record(&mut self, index: usize, result: PageResult) {
        let Some(slot) = self.slots.get_mut(index) else {
            tracing::warn!("Ignoring result for out-of-range slot {}", index);
            return;
        };

        if slot.is_some() {
            tracing::warn!("Ignoring duplicate result for {}", result.url());
            return;
        }

        if let PageResult::Success { aggregate, counts } = &result {
            self.total_words += aggregate.total_words;
            self.unique_words += aggregate.unique_words;

            for record in counts {
                self.counts
                    .entry(record.word.clone())
                    .or_default()
                    .insert(record.url.clone(), record.count);
                *self.word_totals.entry(record.word.clone()).or_insert(0) += record.count;
            }
        }

        *slot = Some(result);
    }

    /// Number of slots still waiting for a result
    pub fn pending(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_none()).count()
    }

    /// Finishes the report, failing if any URL never produced a result
    pub fn finish(self, elapsed: Duration) -> Result<BatchReport, TallyError> {
        if let Some(index) = self.slots.iter().position(Option::is_none) {
            return Err(TallyError::TaskFailed(format!(
                "no result collected for URL #{}",
                index + 1
            )));
        }
        Ok(self.build(elapsed))
    }

    fn build(self, elapsed: Duration) -> BatchReport {
        BatchReport {
            words: self.words,
            results: self.slots.into_iter().flatten().collect(),
            counts: self.counts,
            word_totals: self.word_totals,
            total_words: self.total_words,
            unique_words: self.unique_words,
            elapsed,
        }
    }
}
