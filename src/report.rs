use crate::escape::{escape_html_text, escape_js_template};
use crate::template;
use crate::JobRecord;

/// Company URL values that mean "no link".
const NO_URL_MARKERS: [&str; 3] = ["", "nan", "-"];

fn text(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("")
}

/// Renders the company cell: a link when the record carries a usable URL,
/// escaped plain text otherwise.
pub fn format_company(record: &JobRecord) -> String {
    let company = escape_html_text(text(&record.company));
    match record.company_url.as_deref() {
        Some(url) if !NO_URL_MARKERS.contains(&url) => format!(
            r#"<a href="{url}" target="_blank" rel="noopener noreferrer">{company}</a>"#
        ),
        _ => company,
    }
}

/// Renders one `<tr>` of the jobs table. `idx` is zero-based; the visible row
/// number is `idx + 1` and the button opens description `idx`.
pub fn format_row(idx: usize, record: &JobRecord) -> String {
    format!(
        r#"            <tr>
                <td>{number}</td>
                <td>{title}</td>
                <td>{company}</td>
                <td>{location}</td>
                <td>{date_posted}</td>
                <td>{emails}</td>
                <td><button class="view-btn" onclick="showModal({idx})">View Description</button></td>
            </tr>
"#,
        number = idx + 1,
        title = escape_html_text(text(&record.title)),
        company = format_company(record),
        location = escape_html_text(text(&record.location)),
        date_posted = escape_html_text(text(&record.date_posted)),
        emails = escape_html_text(text(&record.emails)),
    )
}

/// Renders one entry of the script's `descriptions` object, keyed by `idx`.
pub fn format_description_entry(idx: usize, record: &JobRecord) -> String {
    format!(
        "{idx}: {{title: `{title}`, desc: `{desc}`}},\n",
        title = escape_js_template(text(&record.title)),
        desc = escape_js_template(text(&record.description)),
    )
}

/// Builds the complete HTML report for `jobs`, in their original order.
pub fn generate_report(jobs: &[JobRecord], title: &str) -> String {
    let mut rows = String::new();
    let mut descriptions = String::new();

    for (idx, record) in jobs.iter().enumerate() {
        rows.push_str(&format_row(idx, record));
        descriptions.push_str(&format_description_entry(idx, record));
    }

    template::render(jobs.len(), &rows, &descriptions, title)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, company: &str, company_url: Option<&str>) -> JobRecord {
        JobRecord {
            title: Some(title.to_string()),
            company: Some(company.to_string()),
            company_url: company_url.map(str::to_string),
            location: Some("Remote".to_string()),
            date_posted: Some("2024-01-01".to_string()),
            emails: Some("-".to_string()),
            description: Some("Write code".to_string()),
            ..Default::default()
        }
    }

    fn tbody(html: &str) -> &str {
        let start = html.find("<tbody>").unwrap();
        let end = html.find("</tbody>").unwrap();
        &html[start..end]
    }

    #[test]
    fn test_company_without_url_is_plain_text() {
        for url in [None, Some("nan"), Some("-"), Some("")] {
            let cell = format_company(&record("Dev", "Acme <Inc>", url));
            assert_eq!(cell, "Acme &lt;Inc&gt;");
        }
    }

    #[test]
    fn test_company_with_url_is_link() {
        let cell = format_company(&record("Dev", "Acme <Inc>", Some("https://acme.test/?a=1&b=2")));
        assert_eq!(
            cell,
            r#"<a href="https://acme.test/?a=1&b=2" target="_blank" rel="noopener noreferrer">Acme &lt;Inc&gt;</a>"#
        );
    }

    #[test]
    fn test_row_escapes_cells_and_shares_index() {
        let mut job = record("Engineer <Lead>", "Acme", None);
        job.location = Some("<b>Berlin</b>".to_string());

        let row = format_row(4, &job);

        assert!(row.contains("<td>5</td>"));
        assert!(row.contains("<td>Engineer &lt;Lead&gt;</td>"));
        assert!(row.contains("<td>&lt;b&gt;Berlin&lt;/b&gt;</td>"));
        assert!(row.contains("showModal(4)"));
        assert!(!row.contains("<b>"));
    }

    #[test]
    fn test_description_entry_escapes_template_literal() {
        let mut job = record("Lead `dev`", "Acme", None);
        job.description = Some("run `cmd` with ${HOME} in C:\\tmp".to_string());

        let entry = format_description_entry(2, &job);

        assert_eq!(
            entry,
            "2: {title: `Lead \\`dev\\``, desc: `run \\`cmd\\` with \\${HOME} in C:\\\\tmp`},\n"
        );
    }

    #[test]
    fn test_report_counts_and_orders_rows() {
        let jobs = vec![
            record("First", "A", None),
            record("Second", "B", Some("https://b.test")),
            record("Third", "C", Some("nan")),
        ];

        let html = generate_report(&jobs, "rust");
        let body = tbody(&html);

        assert!(html.contains("Total Leads: 3"));
        assert_eq!(body.matches("<tr>").count(), 3);
        let first = body.find("First").unwrap();
        let second = body.find("Second").unwrap();
        let third = body.find("Third").unwrap();
        assert!(first < second && second < third);
        assert!(html.contains("0: {title: `First`"));
        assert!(html.contains("2: {title: `Third`"));
        assert!(html.contains("showModal(2)"));
    }

    #[test]
    fn test_empty_report() {
        let html = generate_report(&[], "nothing");

        assert!(html.contains("Total Leads: 0"));
        assert_eq!(tbody(&html).matches("<tr>").count(), 0);
        assert!(html.contains("const descriptions = {\n        };"));
    }

    #[test]
    fn test_title_is_inserted_verbatim() {
        let html = generate_report(&[], "<em>rust</em>");
        assert!(html.contains("<h1>Search Query: <em>rust</em></h1>"));
    }
}
