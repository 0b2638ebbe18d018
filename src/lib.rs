use thiserror::Error;

pub mod config;
pub mod console;
pub mod escape;
pub mod export;
pub mod prompt;
pub mod report;
pub mod search;
pub mod session;
pub mod template;
pub mod types;

// Re-export commonly used types
pub use config::AppConfig;
pub use console::{Console, TermConsole};
pub use search::{JobScraper, JobSpyClient};
pub use types::{JobRecord, Platform, ResultSet, SearchParams};

/// The `JobScoutError` enum represents the errors that can end a run.
#[derive(Error, Debug)]
pub enum JobScoutError {
    /// Represents an error that occurs during an HTTP request.
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),
    /// The scraper service answered, but not with a usable result set.
    #[error("Scraping failed: {0}")]
    ScrapeError(String),
    /// A platform name outside the supported set was entered.
    #[error("Invalid platform: {0}.")]
    InvalidPlatform(String),
    /// Terminal input could not be read.
    #[error("Input failed: {0}")]
    InputError(String),
    #[error("I/O failed: {0}")]
    IoError(#[from] std::io::Error),
    #[error("CSV export failed: {0}")]
    CsvError(#[from] csv::Error),
    #[error("Malformed scraper response: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Configuration failed: {0}")]
    ConfigError(#[from] ::config::ConfigError),
}

impl JobScoutError {
    /// Whether the error stems from bad user input rather than a failed operation.
    pub fn is_usage_error(&self) -> bool {
        matches!(self, JobScoutError::InvalidPlatform(_))
    }
}

/// A type alias for `Result` with the `JobScoutError` error type.
pub type Result<T> = std::result::Result<T, JobScoutError>;

// Constants

/// Upper bound (and fallback) for the number of results requested.
pub const MAX_RESULTS: u32 = 1000;
/// Lower bound for the number of results requested.
pub const MIN_RESULTS: u32 = 1;
/// Placeholder written for postings without e-mail addresses.
pub const NO_EMAIL: &str = "-";
/// Root directory for dated output folders.
pub const DEFAULT_OUTPUT_DIR: &str = "./data";
