//! LinkedIn guest job search.
//!
//! Uses the unauthenticated listing endpoint that backs LinkedIn's public
//! "see more jobs" pagination. Each call returns an HTML fragment of up to 25
//! `<li>` cards, which are scraped into `JobPosting`s.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use crate::models::{JobPosting, SearchQuery};
use crate::provider::{JobProvider, ProviderError};

const SEARCH_URL: &str = "https://www.linkedin.com/jobs-guest/jobs/api/seeMoreJobPostings/search";
const USER_AGENT: &str =
    "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
/// Cards per page served by the guest endpoint.
const BATCH_SIZE: usize = 25;
/// Upper bound on postings per search, whatever `limit` asks for.
const MAX_RESULTS: usize = 1000;

#[derive(Clone)]
pub struct LinkedInProvider {
    client: Client,
    search_url: String,
    selectors: Arc<CardSelectors>,
}

impl LinkedInProvider {
    pub fn new() -> Result<Self, ProviderError> {
        Self::with_search_url(SEARCH_URL)
    }

    /// Points the provider at another listing endpoint with the same contract.
    pub fn with_search_url(search_url: impl Into<String>) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            search_url: search_url.into(),
            selectors: Arc::new(CardSelectors::new()?),
        })
    }

    async fn fetch_batch(
        &self,
        query: &SearchQuery,
        start: usize,
    ) -> Result<Vec<JobPosting>, ProviderError> {
        let response = self
            .client
            .get(&self.search_url)
            .query(&search_params(query, start))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status {
                status: status.as_u16(),
            });
        }

        let html = response.text().await?;
        let jobs = parse_listing(&html, &self.selectors);
        debug!(start, received = jobs.len(), "Fetched LinkedIn batch");
        Ok(jobs)
    }
}

#[async_trait]
impl JobProvider for LinkedInProvider {
    async fn query(&self, query: &SearchQuery) -> Result<Vec<JobPosting>, ProviderError> {
        let limit = query.limit_value().min(MAX_RESULTS);
        let mut start = page_offset(query.page_value())?;
        let mut jobs = Vec::with_capacity(limit);

        while jobs.len() < limit {
            let batch = self.fetch_batch(query, start).await?;
            if batch.is_empty() {
                break;
            }
            jobs.extend(batch);
            start = start.checked_add(BATCH_SIZE).ok_or_else(page_out_of_range)?;
        }

        jobs.truncate(limit);
        Ok(jobs)
    }
}

/// Offset of the first card on `page`.
fn page_offset(page: usize) -> Result<usize, ProviderError> {
    page.checked_mul(BATCH_SIZE).ok_or_else(page_out_of_range)
}

fn page_out_of_range() -> ProviderError {
    ProviderError::Failed("page out of range".to_string())
}

// ────────────────────────────────────────────────────────────────────────────
// Query string
// ────────────────────────────────────────────────────────────────────────────

/// Translates the canonical query into guest-search parameters.
/// Filter values the endpoint has no code for are left out.
pub fn search_params(query: &SearchQuery, start: usize) -> Vec<(&'static str, String)> {
    let mut params = Vec::new();

    if !query.keyword.is_empty() {
        params.push(("keywords", query.keyword.clone()));
    }
    if !query.location.is_empty() {
        params.push(("location", query.location.clone()));
    }

    let codes = [
        ("f_TPR", date_posted_code(&query.date_since_posted)),
        ("f_SB2", salary_code(&query.salary)),
        ("f_E", experience_code(&query.experience_level)),
        ("f_WT", remote_code(&query.remote_filter)),
        ("f_JT", job_type_code(&query.job_type)),
    ];
    for (key, code) in codes {
        if let Some(code) = code {
            params.push((key, code.to_string()));
        }
    }

    if query.has_verification {
        params.push(("f_EA", "true".to_string()));
    }
    if query.under_ten_applicants {
        params.push(("f_JIYN", "true".to_string()));
    }

    params.push(("start", start.to_string()));

    if let Some(sort) = sort_code(&query.sort_by) {
        params.push(("sortBy", sort.to_string()));
    }

    params
}

fn date_posted_code(value: &str) -> Option<&'static str> {
    match value.to_lowercase().as_str() {
        "past month" => Some("r2592000"),
        "past week" => Some("r604800"),
        "24hr" => Some("r86400"),
        _ => None,
    }
}

fn experience_code(value: &str) -> Option<&'static str> {
    match value.to_lowercase().as_str() {
        "internship" => Some("1"),
        "entry level" => Some("2"),
        "associate" => Some("3"),
        "senior" => Some("4"),
        "director" => Some("5"),
        "executive" => Some("6"),
        _ => None,
    }
}

fn job_type_code(value: &str) -> Option<&'static str> {
    match value.to_lowercase().as_str() {
        "full time" | "full-time" => Some("F"),
        "part time" | "part-time" => Some("P"),
        "contract" => Some("C"),
        "temporary" => Some("T"),
        "volunteer" => Some("V"),
        "internship" => Some("I"),
        _ => None,
    }
}

fn remote_code(value: &str) -> Option<&'static str> {
    match value.to_lowercase().as_str() {
        "on-site" | "on site" => Some("1"),
        "remote" => Some("2"),
        "hybrid" => Some("3"),
        _ => None,
    }
}

fn salary_code(value: &str) -> Option<&'static str> {
    match value {
        "40000" => Some("1"),
        "60000" => Some("2"),
        "80000" => Some("3"),
        "100000" => Some("4"),
        "120000" => Some("5"),
        _ => None,
    }
}

fn sort_code(value: &str) -> Option<&'static str> {
    match value.to_lowercase().as_str() {
        "recent" => Some("DD"),
        "relevant" => Some("R"),
        _ => None,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Listing parser
// ────────────────────────────────────────────────────────────────────────────

struct CardSelectors {
    card: Selector,
    title: Selector,
    company: Selector,
    location: Selector,
    posted_at: Selector,
    posted_ago: Selector,
    salary: Selector,
    link: Selector,
    logo: Selector,
}

impl CardSelectors {
    fn new() -> Result<Self, ProviderError> {
        Ok(Self {
            card: selector("li")?,
            title: selector(".base-search-card__title")?,
            company: selector(".base-search-card__subtitle")?,
            location: selector(".job-search-card__location")?,
            posted_at: selector("time")?,
            posted_ago: selector(".job-search-card__listdate, .job-search-card__listdate--new")?,
            salary: selector(".job-search-card__salary-info")?,
            link: selector(".base-card__full-link")?,
            logo: selector(".artdeco-entity-image")?,
        })
    }
}

fn selector(css: &str) -> Result<Selector, ProviderError> {
    Selector::parse(css).map_err(|e| ProviderError::Selector {
        selector: css.to_string(),
        message: format!("{e:?}"),
    })
}

/// Scrapes every job card out of a listing fragment.
/// Cards without a title or company are skipped.
fn parse_listing(html: &str, selectors: &CardSelectors) -> Vec<JobPosting> {
    let document = Html::parse_document(html);

    document
        .select(&selectors.card)
        .filter_map(|card| parse_card(card, selectors))
        .collect()
}

fn parse_card(card: ElementRef<'_>, s: &CardSelectors) -> Option<JobPosting> {
    let position = text_of(card, &s.title)?;
    let company = text_of(card, &s.company)?;

    Some(JobPosting {
        position,
        company,
        company_logo: attr_of(card, &s.logo, "data-delayed-url"),
        location: text_of(card, &s.location),
        date: attr_of(card, &s.posted_at, "datetime"),
        ago_time: text_of(card, &s.posted_ago),
        salary: text_of(card, &s.salary),
        job_url: attr_of(card, &s.link, "href"),
    })
}

/// Whitespace-collapsed text of the first match, if any is non-empty.
fn text_of(card: ElementRef<'_>, selector: &Selector) -> Option<String> {
    card.select(selector)
        .next()
        .map(|el| el.text().flat_map(str::split_whitespace).collect::<Vec<_>>().join(" "))
        .filter(|text| !text.is_empty())
}

fn attr_of(card: ElementRef<'_>, selector: &Selector, attr: &str) -> Option<String> {
    card.select(selector)
        .next()
        .and_then(|el| el.value().attr(attr))
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
