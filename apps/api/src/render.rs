//! HTML rendering of search results.
//!
//! Produces the same card markup as `public/app.js` so the escaping rules can
//! be exercised from Rust. All provider text is escaped before interpolation.

use crate::models::JobPosting;

const NO_RESULTS: &str = r#"<div class="empty">No jobs found for this search.</div>"#;
const SEARCH_FAILED: &str =
    r#"<div class="empty">Try adjusting your filters and run the search again.</div>"#;

/// Escapes `& < > " '` for use in element text and quoted attributes.
pub fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(c),
        }
    }
    out
}

/// Uppercased first character of the company name, or `?`.
pub fn company_initial(company: &str) -> String {
    company
        .trim()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

/// Markup for a whole result list; a single placeholder when it is empty.
pub fn render_results(jobs: &[JobPosting]) -> String {
    if jobs.is_empty() {
        return NO_RESULTS.to_string();
    }
    jobs.iter().map(render_card).collect()
}

/// Placeholder shown in place of results after a failed search.
pub fn render_failure() -> String {
    SEARCH_FAILED.to_string()
}

pub fn render_card(job: &JobPosting) -> String {
    let posted = job
        .ago_time
        .as_deref()
        .or(job.date.as_deref())
        .unwrap_or("Unknown");
    let link = job
        .job_url
        .as_deref()
        .map(|url| {
            format!(
                r#"<a class="link" href="{}" target="_blank" rel="noreferrer">Open on LinkedIn</a>"#,
                escape_html(url)
            )
        })
        .unwrap_or_default();

    format!(
        concat!(
            r#"<article class="card">"#,
            r#"<div class="card-top">{logo}<div>"#,
            r#"<h2 class="title">{position}</h2>"#,
            r#"<p class="company">{company}</p>"#,
            r#"</div></div>"#,
            r#"<div class="meta">"#,
            r#"<div><strong>Location:</strong> {location}</div>"#,
            r#"<div><strong>Posted:</strong> {posted}</div>"#,
            r#"<div><strong>Salary:</strong> {salary}</div>"#,
            r#"</div>{link}</article>"#,
        ),
        logo = render_logo(job),
        position = escape_html(&job.position),
        company = escape_html(&job.company),
        location = escape_html(job.location.as_deref().unwrap_or("Not specified")),
        posted = escape_html(posted),
        salary = escape_html(job.salary.as_deref().unwrap_or("Not specified")),
        link = link,
    )
}

fn render_logo(job: &JobPosting) -> String {
    match job.company_logo.as_deref() {
        Some(logo) => format!(
            r#"<img class="logo" src="{}" alt="{} logo" />"#,
            escape_html(logo),
            escape_html(&job.company)
        ),
        None => format!(
            r#"<div class="logo placeholder">{}</div>"#,
            escape_html(&company_initial(&job.company))
        ),
    }
}
