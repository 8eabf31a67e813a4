use serde::{Deserialize, Serialize};

pub const DEFAULT_LIMIT: &str = "25";
pub const DEFAULT_PAGE: &str = "0";
pub const DEFAULT_SORT_BY: &str = "recent";

/// Canonical search parameters handed to the job provider.
///
/// Built per request by `search::query::normalize_query`; every field is
/// always populated. The two booleans keep the snake_case keys the search
/// form submits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchQuery {
    pub keyword: String,
    pub location: String,
    pub date_since_posted: String,
    pub job_type: String,
    pub remote_filter: String,
    pub salary: String,
    pub experience_level: String,
    pub limit: String,
    pub page: String,
    pub sort_by: String,
    #[serde(rename = "has_verification")]
    pub has_verification: bool,
    #[serde(rename = "under_10_applicants")]
    pub under_ten_applicants: bool,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            keyword: String::new(),
            location: String::new(),
            date_since_posted: String::new(),
            job_type: String::new(),
            remote_filter: String::new(),
            salary: String::new(),
            experience_level: String::new(),
            limit: DEFAULT_LIMIT.to_string(),
            page: DEFAULT_PAGE.to_string(),
            sort_by: DEFAULT_SORT_BY.to_string(),
            has_verification: false,
            under_ten_applicants: false,
        }
    }
}

impl SearchQuery {
    /// `limit` as a number. Non-numeric input falls back to the default of 25.
    pub fn limit_value(&self) -> usize {
        self.limit.parse().unwrap_or(25)
    }

    /// Zero-based result page. Non-numeric input reads as the first page.
    pub fn page_value(&self) -> usize {
        self.page.parse().unwrap_or(0)
    }
}
