use crate::Result;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Name of the optional configuration file looked up in the working directory.
pub const CONFIG_FILE: &str = "jobscout";
/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_ENV: &str = "JOBSCOUT_CONFIG";
/// Prefix of environment overrides, e.g. `JOBSCOUT__SCRAPER__ENDPOINT`.
pub const ENV_PREFIX: &str = "JOBSCOUT";

/// The `AppConfig` struct holds the configuration settings for the application.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// How to reach the scraper service.
    pub scraper: ScraperConfig,
    /// The answers offered when the user just presses ENTER.
    pub defaults: PromptDefaults,
}

/// The `ScraperConfig` struct describes the HTTP scraper service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScraperConfig {
    /// The search endpoint of a JobSpy-compatible service.
    pub endpoint: String,
    /// Sent as `x-api-key` when the service requires one.
    pub api_key: Option<String>,
    /// The user agent string to be used in HTTP requests.
    pub user_agent: String,
    /// Client-side timeout in seconds. Unset means wait as long as the service needs.
    pub timeout_secs: Option<u64>,
    /// Ask LinkedIn for full descriptions (slower, but the report needs them).
    pub linkedin_fetch_description: bool,
}

/// The `PromptDefaults` struct holds the default answer for each question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptDefaults {
    pub platforms: String,
    pub search_term: String,
    /// Kept as text: it goes through the same clamping as typed answers.
    pub results_wanted: String,
    pub hours_old: u32,
    pub country: String,
    pub output_dir: String,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            endpoint: String::from("http://localhost:8000/api/v1/search_jobs"),
            api_key: None,
            user_agent: format!("jobscout/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: None,
            linkedin_fetch_description: true,
        }
    }
}

impl ScraperConfig {
    /// The client-side timeout, if one is configured.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for PromptDefaults {
    fn default() -> Self {
        Self {
            platforms: String::from("Linkedin, Indeed"),
            search_term: String::from("\"Netsuite\" consultant -oracle"),
            results_wanted: crate::MAX_RESULTS.to_string(),
            hours_old: 24,
            country: String::from("USA"),
            output_dir: String::from(crate::DEFAULT_OUTPUT_DIR),
        }
    }
}

impl AppConfig {
    /// Loads defaults, then `$JOBSCOUT_CONFIG` or `./jobscout.*` if present,
    /// then `JOBSCOUT__*` environment variables.
    ///
    /// # Returns
    ///
    /// A `Result` containing the merged `AppConfig`, or an error if a source is malformed.
    pub fn load() -> Result<Self> {
        match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::load_from(Some(Path::new(&path))),
            None => Self::load_from(None),
        }
    }

    /// Like [`AppConfig::load`], with an explicit file that must exist.
    ///
    /// # Arguments
    ///
    /// * `path` - The configuration file to read, or `None` to look for an
    ///   optional `jobscout.*` in the working directory.
    ///
    /// # Returns
    ///
    /// A `Result` containing the merged `AppConfig`, or an error if the file is
    /// missing or any source is malformed.
    pub fn load_from(path: Option<&Path>) -> Result<Self> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(CONFIG_FILE).required(false),
        };

        let settings = Config::builder()
            .add_source(Config::try_from(&AppConfig::default())?)
            .add_source(file)
            .add_source(Environment::with_prefix(ENV_PREFIX).prefix_separator("__").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.defaults.platforms, "Linkedin, Indeed");
        assert_eq!(config.defaults.results_wanted, "1000");
        assert_eq!(config.defaults.hours_old, 24);
        assert!(config.scraper.linkedin_fetch_description);
        assert_eq!(config.scraper.timeout(), None);
    }

    #[test]
    fn test_load_from_file_overrides_defaults() {
        let dir = std::env::temp_dir().join("jobscout_config_test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("jobscout.toml");
        fs::write(
            &path,
            r#"
[scraper]
endpoint = "http://scraper.internal:9000/search"
timeout_secs = 120

[defaults]
country = "Canada"
hours_old = 72
"#,
        )
        .unwrap();

        let config = AppConfig::load_from(Some(&path)).unwrap();

        assert_eq!(config.scraper.endpoint, "http://scraper.internal:9000/search");
        assert_eq!(config.scraper.timeout(), Some(Duration::from_secs(120)));
        assert_eq!(config.defaults.country, "Canada");
        assert_eq!(config.defaults.hours_old, 72);
        // untouched keys keep their defaults
        assert_eq!(config.defaults.platforms, "Linkedin, Indeed");
        assert!(config.scraper.linkedin_fetch_description);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let path = std::env::temp_dir().join("jobscout_config_test_missing.toml");
        assert!(AppConfig::load_from(Some(&path)).is_err());
    }
}
