use crate::report::generate_report;
use crate::{JobRecord, Result, NO_EMAIL};
use chrono::NaiveDate;
use csv::{QuoteStyle, WriterBuilder};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Where one export landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPaths {
    pub csv: PathBuf,
    pub html: PathBuf,
}

/// `<output_dir>/<date>/Jobs-<date>`, without extension.
pub fn output_stem(output_dir: &Path, date: NaiveDate) -> PathBuf {
    let day = date.format("%Y-%m-%d").to_string();
    output_dir.join(&day).join(format!("Jobs-{}", day))
}

fn with_suffix(stem: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(stem.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

/// Replaces every missing e-mail value with [`NO_EMAIL`].
pub fn normalize_emails(jobs: &mut [JobRecord]) {
    for job in jobs.iter_mut().filter(|job| job.emails.is_none()) {
        job.emails = Some(NO_EMAIL.to_string());
    }
}

/// Doubles the escape character so a trailing `\` cannot swallow the closing quote.
fn escape_csv_field(field: &str) -> String {
    field.replace('\\', "\\\\")
}

/// Writes `jobs` as CSV: header row, every field quoted, `\` as escape character
/// for both quotes and itself.
pub fn write_csv(jobs: &[JobRecord], path: &Path) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .quote_style(QuoteStyle::Always)
        .double_quote(false)
        .escape(b'\\')
        .from_path(path)?;

    writer.write_record(JobRecord::COLUMNS)?;
    for job in jobs {
        writer.write_record(job.fields().map(escape_csv_field))?;
    }

    writer.flush()?;
    Ok(())
}

/// Writes the HTML report, replacing any existing file.
pub fn write_html(jobs: &[JobRecord], title: &str, path: &Path) -> Result<()> {
    fs::write(path, generate_report(jobs, title))?;
    Ok(())
}

/// Writes `<stem>.csv` and `<stem>.html`, creating the directory first.
///
/// Missing e-mails are normalized in place before either file is written.
#[instrument(skip(jobs), fields(count = jobs.len()))]
pub fn export_results(jobs: &mut [JobRecord], title: &str, stem: &Path) -> Result<ExportPaths> {
    if let Some(parent) = stem.parent() {
        if !parent.as_os_str().is_empty() {
            debug!("Creating output directory {}", parent.display());
            fs::create_dir_all(parent)?;
        }
    }

    normalize_emails(jobs);

    let paths = ExportPaths {
        csv: with_suffix(stem, ".csv"),
        html: with_suffix(stem, ".html"),
    };

    write_csv(jobs, &paths.csv)?;
    write_html(jobs, title, &paths.html)?;

    info!(csv = %paths.csv.display(), html = %paths.html.display(), "results exported");
    Ok(paths)
}
