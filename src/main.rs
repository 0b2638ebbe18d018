use anyhow::Context;
use jobscout::{
    config::AppConfig,
    console::{Console, TermConsole},
    search::JobSpyClient,
    session::Session,
    JobScoutError,
};
use std::process::ExitCode;
use std::time::Instant;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Exit status for rejected input.
const USAGE_EXIT: u8 = 2;

/// The main entry point of the application.
///
/// Initializes logging and configuration, then runs one interactive session:
/// prompts for search parameters, queries the scraper service and writes the
/// CSV and HTML results.
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let console = TermConsole::new();

    match run(&console).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            debug!("run failed: {:?}", err);
            match err.downcast_ref::<JobScoutError>() {
                Some(e) if e.is_usage_error() => {
                    console.error(&format!("Usage error: {}", e));
                    ExitCode::from(USAGE_EXIT)
                }
                _ => {
                    console.error(&format!("{:#}", err));
                    ExitCode::FAILURE
                }
            }
        }
    }
}

async fn run(console: &TermConsole) -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    let scraper =
        JobSpyClient::new(config.scraper.clone()).context("failed to create HTTP client")?;

    let start_time = Instant::now();
    let stdin = std::io::stdin().lock();

    let summary = Session::new(&config, &scraper, console, stdin).run().await?;

    debug!(
        "Exported {} jobs to {} and {} in {:.2?}",
        summary.total,
        summary.paths.csv.display(),
        summary.paths.html.display(),
        start_time.elapsed()
    );

    Ok(())
}
