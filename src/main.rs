//! Page-Tally main entry point
//!
//! This is the command-line interface for the Page-Tally word counter.

use clap::{Parser, ValueEnum};
use page_tally::analysis::MatchMode;
use page_tally::config::{load_config_with_hash, validate, Config};
use page_tally::{run_from_config, ConfigError, InputError, TallyError};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Page-Tally: concurrent word statistics for a list of web pages
///
/// Fetches every URL from the URL list concurrently, counts the configured
/// target words in each page's visible text and appends a report to the
/// result file.
#[derive(Parser, Debug)]
#[command(name = "page-tally")]
#[command(version)]
#[command(about = "Counts target words across a batch of web pages", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults are used when omitted)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// URL list to read instead of the configured one
    #[arg(long, value_name = "FILE")]
    urls: Option<PathBuf>,

    /// Result file to write instead of the configured one
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Target word; repeat to count several (replaces the configured list)
    #[arg(short, long = "word", value_name = "WORD")]
    words: Vec<String>,

    /// How target words are matched
    #[arg(long, value_enum)]
    match_mode: Option<MatchModeArg>,

    /// Maximum number of fetches in flight at once
    #[arg(long, value_name = "N")]
    max_in_flight: Option<u32>,

    /// Per-request timeout in milliseconds
    #[arg(long, value_name = "MS")]
    timeout_ms: Option<u64>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MatchModeArg {
    /// Match anywhere, including inside longer words
    Substring,
    /// Match whole words only
    WholeWord,
}

impl From<MatchModeArg> for MatchMode {
    fn from(arg: MatchModeArg) -> Self {
        match arg {
            MatchModeArg::Substring => MatchMode::Substring,
            MatchModeArg::WholeWord => MatchMode::WholeWord,
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            println!("{}", user_message(&e));
            ExitCode::from(e.exit_code())
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
///
/// Logs go to stderr; stdout carries only the elapsed-time or error line.
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("page_tally=info,warn"),
            1 => EnvFilter::new("page_tally=debug,info"),
            2 => EnvFilter::new("page_tally=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Runs one complete batch: config, URL list, fetch, report
async fn run(cli: Cli) -> Result<(), TallyError> {
    let config = load_configuration(&cli)?;
    let report = run_from_config(&config).await?;

    if report.failure_count() > 0 {
        tracing::warn!(
            "{} of {} URLs failed, see {}",
            report.failure_count(),
            report.results().len(),
            config.output.result_path
        );
    }

    Ok(())
}

/// Loads the configuration file (if any) and applies command line overrides
fn load_configuration(cli: &Cli) -> Result<Config, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => {
            tracing::debug!("No configuration file given, using defaults");
            Config::default()
        }
    };

    if let Some(urls) = &cli.urls {
        config.input.urls_path = urls.to_string_lossy().into_owned();
    }
    if let Some(output) = &cli.output {
        config.output.result_path = output.to_string_lossy().into_owned();
    }
    if !cli.words.is_empty() {
        config.analysis.words = cli.words.clone();
    }
    if let Some(mode) = cli.match_mode {
        config.analysis.match_mode = mode.into();
    }
    if let Some(max_in_flight) = cli.max_in_flight {
        config.fetcher.max_in_flight = max_in_flight;
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        config.fetcher.request_timeout_ms = timeout_ms;
    }

    validate(&config)?;

    tracing::debug!(
        "Words: {:?}, match mode: {:?}",
        config.analysis.words,
        config.analysis.match_mode
    );

    Ok(config)
}

/// The single line shown to the user when a run fails
fn user_message(error: &TallyError) -> String {
    match error {
        TallyError::Input(InputError::Missing { path }) => {
            format!("Please provide a valid \"{}\" file.", path.display())
        }
        TallyError::Input(InputError::Empty { path }) => {
            format!("File \"{}\" is empty!", path.display())
        }
        TallyError::Config(e) => format!("Invalid configuration: {}", e),
        TallyError::Output(e) => format!("Could not write the report: {}", e),
        other => format!("Unexpected error: {}", other),
    }
}
