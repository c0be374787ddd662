//! Text report generation
//!
//! Renders a `BatchReport` into the plain text result format:
//!
//! ```text
//! Occurrences of word "team":
//! - https://a.example.com/ => 2
//! - https://b.example.com/ => 0
//! - Total count for word "team" in all urls => 2
//! * Total count of all words in all urls => 11
//! * Total count of unique words in all urls => 10
//! ```
//!
//! Pages that failed are left out of the per-word lines and listed after the
//! grand totals under `Failed urls:`.

use crate::batch::BatchReport;
use crate::output::OutputResult;
use std::path::Path;
use tokio::io::AsyncWriteExt;

/// Formats a batch report as text, one line per entry, newline-terminated
pub fn format_report(report: &BatchReport) -> String {
    let mut text = String::new();

    for word in report.words() {
        text.push_str(&format!("Occurrences of word \"{}\":\n", word));

        for (aggregate, counts) in report.successes() {
            let count = counts
                .iter()
                .find(|record| record.word == *word)
                .map_or(0, |record| record.count);
            text.push_str(&format!("- {} => {}\n", aggregate.url, count));
        }

        text.push_str(&format!(
            "- Total count for word \"{}\" in all urls => {}\n",
            word,
            report.word_total(word)
        ));
    }

    text.push_str(&format!(
        "* Total count of all words in all urls => {}\n",
        report.total_words()
    ));
    text.push_str(&format!(
        "* Total count of unique words in all urls => {}\n",
        report.unique_words()
    ));

    let failures: Vec<_> = report.failures().collect();
    if !failures.is_empty() {
        text.push_str("Failed urls:\n");
        for failure in failures {
            text.push_str(&format!("! {} => {}\n", failure.url, failure));
        }
    }

    text
}

/// Appends the formatted report to `output_path`, creating it if needed
///
/// The file is never truncated here; see `truncate_output` for run start.
pub async fn append_report(report: &BatchReport, output_path: &Path) -> OutputResult<()> {
    let text = format_report(report);

    let mut file = tokio::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(output_path)
        .await?;
    file.write_all(text.as_bytes()).await?;
    file.flush().await?;

    tracing::info!("Report appended to {}", output_path.display());
    Ok(())
}

/// Truncates (or creates) the output file at the start of a run
pub fn truncate_output(output_path: &Path) -> OutputResult<()> {
    std::fs::File::create(output_path)?;
    tracing::debug!("Truncated {}", output_path.display());
    Ok(())
}
