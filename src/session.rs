use crate::config::AppConfig;
use crate::console::Console;
use crate::export::{export_results, output_stem, ExportPaths};
use crate::prompt::Prompter;
use crate::search::{JobScraper, SCRAPING_MESSAGE};
use crate::Result;
use chrono::{Local, NaiveDate};
use std::io::BufRead;
use tracing::info;

/// What a finished run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub total: usize,
    pub paths: ExportPaths,
}

/// One interactive run: ask, scrape, export, report back.
pub struct Session<'a, S, R> {
    config: &'a AppConfig,
    scraper: &'a S,
    console: &'a dyn Console,
    input: R,
}

impl<'a, S: JobScraper, R: BufRead> Session<'a, S, R> {
    pub fn new(config: &'a AppConfig, scraper: &'a S, console: &'a dyn Console, input: R) -> Self {
        Self {
            config,
            scraper,
            console,
            input,
        }
    }

    /// Runs the session with today's local date in the output path.
    pub async fn run(self) -> Result<SessionSummary> {
        self.run_on(Local::now().date_naive()).await
    }

    pub async fn run_on(self, date: NaiveDate) -> Result<SessionSummary> {
        let Session {
            config,
            scraper,
            console,
            input,
        } = self;

        print_welcome_message(console);

        let inputs = Prompter::new(input, console).collect(&config.defaults)?;
        let stem = output_stem(&inputs.output_dir, date);

        console.info("");
        console.info(&format!("✨ {}", SCRAPING_MESSAGE));

        let mut jobs = scraper.scrape(&inputs.params).await?;
        info!(count = jobs.len(), "received results");

        let paths = export_results(&mut jobs, &inputs.params.search_term, &stem)?;

        let dir_name = stem
            .parent()
            .and_then(|dir| dir.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        print_goodbye_message(console, &dir_name, jobs.len());

        Ok(SessionSummary {
            total: jobs.len(),
            paths,
        })
    }
}

fn print_welcome_message(console: &dyn Console) {
    console.info("");
    console.panel("Welcome", "JOB SCRAPER");
    console.info("💡 Tip: Default values appear in (brackets)");
    console.info("   Press ENTER to accept the default value\n");
}

fn print_goodbye_message(console: &dyn Console, output_dir: &str, total: usize) {
    console.info("");
    console.panel(
        "",
        &format!("✅ {} found and saved.\n📁 Results → {}", total, output_dir),
    );
    console.info("");
}
