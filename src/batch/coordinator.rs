//! Batch coordinator - concurrent fetch orchestration
//!
//! The coordinator fans out one task per URL onto the runtime, bounded by a
//! semaphore of `max-in-flight` permits, then fans the results back in. Every
//! task reports its input index with its result so the report is assembled in
//! input order no matter which fetch finishes first.

use crate::analysis::WordMatcher;
use crate::batch::fetcher::{build_http_client, fetch_page};
use crate::batch::report::{BatchReport, ReportBuilder};
use crate::config::Config;
use crate::{ConfigError, TallyError};
use reqwest::Client;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Owns everything shared by the fetch tasks of a batch
pub struct Coordinator {
    client: Client,
    words: Vec<String>,
    matchers: Arc<[WordMatcher]>,
    semaphore: Arc<Semaphore>,
    max_in_flight: usize,
}

impl Coordinator {
    /// Creates a coordinator from the configuration
    ///
    /// Builds the shared HTTP client and compiles one matcher per configured
    /// word.
    pub fn new(config: &Config) -> Result<Self, TallyError> {
        let client = build_http_client(&config.fetcher)?;
        let words = config.analysis.words.clone();
        let matchers: Arc<[WordMatcher]> =
            WordMatcher::compile_all(&words, config.analysis.match_mode).into();
        let max_in_flight = config.fetcher.max_in_flight.max(1) as usize;

        Ok(Self {
            client,
            words,
            matchers,
            semaphore: Arc::new(Semaphore::new(max_in_flight)),
            max_in_flight,
        })
    }

    /// Fetches and analyzes every URL, returning the merged report
    ///
    /// Per-page failures are recorded in the report. Only an empty URL list or
    /// a task that dies without reporting (a panic) returns an error; in the
    /// latter case the remaining tasks are aborted.
    pub async fn run(&self, urls: &[String]) -> Result<BatchReport, TallyError> {
        if urls.is_empty() {
            return Err(ConfigError::EmptyUrlList.into());
        }

        tracing::info!(
            "Starting batch: {} URLs, {} words, at most {} in flight",
            urls.len(),
            self.words.len(),
            self.max_in_flight
        );

        let start_time = Instant::now();
        let mut tasks = JoinSet::new();

        for (index, url) in urls.iter().enumerate() {
            let client = self.client.clone();
            let matchers = Arc::clone(&self.matchers);
            let semaphore = Arc::clone(&self.semaphore);
            let url = url.clone();

            tasks.spawn(async move {
                // The semaphore is never closed, so a permit always arrives
                let _permit = semaphore.acquire_owned().await.ok();
                let result = fetch_page(&client, &url, &matchers).await;
                (index, result)
            });
        }

        let mut builder = ReportBuilder::new(self.words.clone(), urls.len());

        while let Some(joined) = tasks.join_next().await {
            let (index, result) = joined.map_err(|e| TallyError::TaskFailed(e.to_string()))?;
            builder.record(index, result);
        }

        let elapsed = start_time.elapsed();
        let report = builder.finish(elapsed)?;

        tracing::info!(
            "Batch completed: {} succeeded, {} failed in {:?}",
            report.success_count(),
            report.failure_count(),
            elapsed
        );

        Ok(report)
    }
}

/// Runs one batch and prints the elapsed-time line to stdout
///
/// # Arguments
///
/// * `urls` - The URLs to fetch, in report order
/// * `config` - Word list, match mode and fetcher settings
///
/// # Returns
///
/// * `Ok(BatchReport)` - All URLs were attempted
/// * `Err(TallyError)` - Setup failed or a fetch task died
///
/// # Example
///
/// ```no_run
/// use page_tally::batch::run_batch;
/// use page_tally::config::Config;
///
/// # async fn example() -> Result<(), page_tally::TallyError> {
/// let urls = vec!["https://example.com/".to_string()];
/// let report = run_batch(&urls, &Config::default()).await?;
/// println!("team: {}", report.word_total("team"));
/// # Ok(())
/// # }
/// ```
pub async fn run_batch(urls: &[String], config: &Config) -> Result<BatchReport, TallyError> {
    let coordinator = Coordinator::new(config)?;
    let report = coordinator.run(urls).await?;
    println!("{}", format_elapsed(report.elapsed()));
    Ok(report)
}

/// Formats the elapsed-time line, rounded to 4 decimal places
pub fn format_elapsed(elapsed: Duration) -> String {
    format!("Elapsed time: {:.4} seconds.", elapsed.as_secs_f64())
}
