use crate::{JobScoutError, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

/// A single job posting as returned by the scraper service.
///
/// Every column is optional text: the service fills what the job board exposes
/// and leaves the rest empty.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct JobRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub site: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub job_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub job_url_direct: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub company: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub date_posted: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub job_type: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub is_remote: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub interval: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub min_amount: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub max_amount: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub currency: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub emails: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub company_url: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub company_industry: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub description: Option<String>,
}

impl JobRecord {
    /// Column names in CSV order.
    pub const COLUMNS: [&'static str; 18] = [
        "id",
        "site",
        "job_url",
        "job_url_direct",
        "title",
        "company",
        "location",
        "date_posted",
        "job_type",
        "is_remote",
        "interval",
        "min_amount",
        "max_amount",
        "currency",
        "emails",
        "company_url",
        "company_industry",
        "description",
    ];

    /// Field values in the order of [`JobRecord::COLUMNS`]; absent values are empty.
    pub fn fields(&self) -> [&str; 18] {
        [
            &self.id,
            &self.site,
            &self.job_url,
            &self.job_url_direct,
            &self.title,
            &self.company,
            &self.location,
            &self.date_posted,
            &self.job_type,
            &self.is_remote,
            &self.interval,
            &self.min_amount,
            &self.max_amount,
            &self.currency,
            &self.emails,
            &self.company_url,
            &self.company_industry,
            &self.description,
        ]
        .map(|field| field.as_deref().unwrap_or(""))
    }
}

/// Ordered postings; position is the row number in every output.
pub type ResultSet = Vec<JobRecord>;

/// Accepts strings, numbers, booleans and lists where text is expected.
/// Lists are joined with ", ", null maps to `None`.
fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(value_to_text))
}

fn value_to_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Array(items) => {
            let parts: Vec<String> = items.into_iter().filter_map(value_to_text).collect();
            if parts.is_empty() {
                None
            } else {
                Some(parts.join(", "))
            }
        }
        other @ Value::Object(_) => Some(other.to_string()),
    }
}

/// The job boards the scraper service knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Platform {
    Linkedin,
    Indeed,
    ZipRecruiter,
    Glassdoor,
    Google,
    Bayt,
    Naukri,
    Bdjobs,
}

/// Canonical identifiers, in listing order.
static PLATFORM_IDS: [(&str, Platform); 8] = [
    ("LINKEDIN", Platform::Linkedin),
    ("INDEED", Platform::Indeed),
    ("ZIP_RECRUITER", Platform::ZipRecruiter),
    ("GLASSDOOR", Platform::Glassdoor),
    ("GOOGLE", Platform::Google),
    ("BAYT", Platform::Bayt),
    ("NAUKRI", Platform::Naukri),
    ("BDJOBS", Platform::Bdjobs),
];

impl Platform {
    pub fn all() -> impl Iterator<Item = Platform> {
        PLATFORM_IDS.iter().map(|(_, platform)| *platform)
    }

    /// The upper-case identifier, e.g. `ZIP_RECRUITER`.
    pub fn identifier(self) -> &'static str {
        PLATFORM_IDS
            .iter()
            .find(|(_, platform)| *platform == self)
            .map(|(name, _)| *name)
            .unwrap_or_default()
    }

    /// Looks up a single name case-insensitively, ignoring surrounding whitespace.
    pub fn from_name(name: &str) -> Option<Platform> {
        let wanted = name.trim().to_uppercase();
        PLATFORM_IDS
            .iter()
            .find(|(id, _)| *id == wanted)
            .map(|(_, platform)| *platform)
    }

    /// Parses a comma-separated list. The first unknown entry, empty ones
    /// included, rejects the whole list.
    pub fn parse_list(input: &str) -> Result<Vec<Platform>> {
        input
            .split(',')
            .map(|token| {
                Self::from_name(token)
                    .ok_or_else(|| JobScoutError::InvalidPlatform(token.trim().to_string()))
            })
            .collect()
    }

    /// Comma-separated display names of every platform.
    pub fn listing() -> String {
        Self::all()
            .map(|platform| platform.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for Platform {
    /// Capitalised identifier: `Linkedin`, `Zip_recruiter`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lower = self.identifier().to_lowercase();
        let mut chars = lower.chars();
        match chars.next() {
            Some(first) => write!(f, "{}{}", first.to_uppercase(), chars.as_str()),
            None => Ok(()),
        }
    }
}

/// Everything the scraper needs for one search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchParams {
    pub platforms: Vec<Platform>,
    pub search_term: String,
    pub results_wanted: u32,
    pub hours_old: u32,
    /// Used both as the general location and as the country filter.
    pub location: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_platform_list() {
        let platforms = Platform::parse_list("Linkedin, indeed ,ZIP_recruiter").unwrap();
        assert_eq!(
            platforms,
            vec![Platform::Linkedin, Platform::Indeed, Platform::ZipRecruiter]
        );
    }

    #[test]
    fn test_parse_platform_list_rejects_unknown() {
        let err = Platform::parse_list("Linkedin, Monster, Foo").unwrap_err();
        assert!(matches!(err, JobScoutError::InvalidPlatform(ref name) if name == "Monster"));
        assert!(err.is_usage_error());
    }

    #[test]
    fn test_parse_platform_list_rejects_empty_entry() {
        let err = Platform::parse_list("Linkedin,").unwrap_err();
        assert!(matches!(err, JobScoutError::InvalidPlatform(ref name) if name.is_empty()));
    }

    #[test]
    fn test_platform_display_and_listing() {
        assert_eq!(Platform::ZipRecruiter.to_string(), "Zip_recruiter");
        assert!(Platform::listing().starts_with("Linkedin, Indeed, Zip_recruiter"));
        assert_eq!(
            serde_json::to_string(&Platform::ZipRecruiter).unwrap(),
            "\"zip_recruiter\""
        );
    }

    #[test]
    fn test_lenient_record_decoding() {
        let json = r#"{
            "title": "Engineer",
            "emails": ["a@example.com", "b@example.com"],
            "min_amount": 100000.0,
            "is_remote": true,
            "company_url": null
        }"#;

        let record: JobRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.title.as_deref(), Some("Engineer"));
        assert_eq!(record.emails.as_deref(), Some("a@example.com, b@example.com"));
        assert_eq!(record.min_amount.as_deref(), Some("100000.0"));
        assert_eq!(record.is_remote.as_deref(), Some("true"));
        assert_eq!(record.company_url, None);
        assert_eq!(record.description, None);
    }

    #[test]
    fn test_fields_follow_column_order() {
        let record = JobRecord {
            title: Some("Engineer".to_string()),
            description: Some("Build things".to_string()),
            ..Default::default()
        };
        let fields = record.fields();
        let title_idx = JobRecord::COLUMNS.iter().position(|c| *c == "title").unwrap();
        assert_eq!(fields[title_idx], "Engineer");
        assert_eq!(fields[JobRecord::COLUMNS.len() - 1], "Build things");
        assert_eq!(fields[0], "");
    }
}
