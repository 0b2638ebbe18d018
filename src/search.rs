use crate::config::ScraperConfig;
use crate::{JobRecord, JobScoutError, Platform, Result, ResultSet, SearchParams};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// The collaborator that turns search parameters into job postings.
///
/// Failures are returned to the caller untouched; retries and rate limiting,
/// if any, are the implementation's business.
#[allow(async_fn_in_trait)]
pub trait JobScraper {
    async fn scrape(&self, params: &SearchParams) -> Result<ResultSet>;
}

/// Shown next to the spinner while the service works.
pub const SCRAPING_MESSAGE: &str = "Scraping jobs... Please wait.";

/// Request body understood by JobSpy-compatible search services.
#[derive(Debug, Serialize)]
struct SearchRequest<'a> {
    site_name: &'a [Platform],
    search_term: &'a str,
    results_wanted: u32,
    hours_old: u32,
    location: &'a str,
    country_indeed: &'a str,
    linkedin_fetch_description: bool,
}

/// Services either wrap the postings or return them bare.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SearchResponse {
    Wrapped { jobs: Vec<JobRecord> },
    Bare(Vec<JobRecord>),
}

impl SearchResponse {
    fn into_jobs(self) -> ResultSet {
        match self {
            SearchResponse::Wrapped { jobs } | SearchResponse::Bare(jobs) => jobs,
        }
    }
}

/// The `JobSpyClient` struct queries a JobSpy-compatible HTTP service.
pub struct JobSpyClient {
    /// The HTTP client used for making requests.
    client: Client,
    /// The configuration settings for the service.
    config: ScraperConfig,
    /// Whether to show a spinner while waiting.
    show_progress: bool,
}

impl JobSpyClient {
    /// Creates a new `JobSpyClient` with the given configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Endpoint, credentials and timeout of the scraper service.
    ///
    /// # Returns
    ///
    /// A `Result` containing the `JobSpyClient` instance, or an error if the HTTP client could not be created.
    pub fn new(config: ScraperConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(&config.user_agent).gzip(true);
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(JobScoutError::RequestError)?;

        Ok(Self {
            client,
            config,
            show_progress: true,
        })
    }

    /// Turns the waiting spinner on or off.
    ///
    /// # Arguments
    ///
    /// * `show_progress` - `false` keeps the terminal quiet, e.g. in tests.
    ///
    /// # Returns
    ///
    /// The updated `JobSpyClient` instance.
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    fn spinner(&self) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }

        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg} {elapsed}") {
            pb.set_style(style);
        }
        pb.set_message(SCRAPING_MESSAGE);
        pb.enable_steady_tick(Duration::from_millis(120));
        pb
    }

    #[instrument(skip(self, params), fields(query = %params.search_term, wanted = params.results_wanted))]
    async fn fetch(&self, params: &SearchParams) -> Result<ResultSet> {
        let body = SearchRequest {
            site_name: &params.platforms,
            search_term: &params.search_term,
            results_wanted: params.results_wanted,
            hours_old: params.hours_old,
            location: &params.location,
            country_indeed: &params.location,
            linkedin_fetch_description: self.config.linkedin_fetch_description,
        };

        debug!("Search endpoint: {}", self.config.endpoint);

        let mut request = self
            .client
            .post(&self.config.endpoint)
            .header("Accept", "application/json")
            .json(&body);
        if let Some(key) = &self.config.api_key {
            request = request.header("x-api-key", key);
        }

        let response = request.send().await?;

        let status = response.status();
        debug!("Response status: {}", status);

        let text = response.text().await?;
        if !status.is_success() {
            return Err(JobScoutError::ScrapeError(format!(
                "scraper service returned {}: {}",
                status,
                text.trim()
            )));
        }

        let jobs = serde_json::from_str::<SearchResponse>(&text)?.into_jobs();
        Ok(jobs)
    }
}

impl JobScraper for JobSpyClient {
    async fn scrape(&self, params: &SearchParams) -> Result<ResultSet> {
        let pb = self.spinner();
        let result = self.fetch(params).await;

        match &result {
            Ok(jobs) => {
                pb.finish_with_message(format!("Completed: {} jobs scraped", jobs.len()));
                info!(count = jobs.len(), "scrape finished");
            }
            Err(_) => pb.abandon_with_message("Scraping failed"),
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let platforms = vec![Platform::Linkedin, Platform::ZipRecruiter];
        let body = SearchRequest {
            site_name: &platforms,
            search_term: "rust",
            results_wanted: 50,
            hours_old: 24,
            location: "USA",
            country_indeed: "USA",
            linkedin_fetch_description: true,
        };

        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["site_name"], serde_json::json!(["linkedin", "zip_recruiter"]));
        assert_eq!(json["results_wanted"], 50);
        assert_eq!(json["location"], "USA");
        assert_eq!(json["country_indeed"], "USA");
        assert_eq!(json["linkedin_fetch_description"], true);
    }

    #[test]
    fn test_spinner_message() {
        let client = JobSpyClient::new(ScraperConfig::default()).unwrap();
        let pb = client.spinner();
        assert_eq!(pb.message(), "Scraping jobs... Please wait.");
        pb.finish_and_clear();

        let quiet = JobSpyClient::new(ScraperConfig::default()).unwrap().with_progress(false);
        assert!(quiet.spinner().is_hidden());
    }

    #[test]
    fn test_response_shapes() {
        let wrapped: SearchResponse =
            serde_json::from_str(r#"{"count": 1, "cached": false, "jobs": [{"title": "A"}]}"#).unwrap();
        assert_eq!(wrapped.into_jobs()[0].title.as_deref(), Some("A"));

        let bare: SearchResponse = serde_json::from_str(r#"[{"title": "B"}, {"title": "C"}]"#).unwrap();
        assert_eq!(bare.into_jobs().len(), 2);
    }
}
