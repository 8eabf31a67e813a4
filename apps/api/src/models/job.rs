use serde::{Deserialize, Serialize};

use crate::models::SearchQuery;

/// A single listing as returned by a job provider.
///
/// Every text field comes from a third party and must be escaped before it is
/// placed in markup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct JobPosting {
    pub position: String,
    pub company: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_logo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Posting date as published by the source (ISO `YYYY-MM-DD` for LinkedIn).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Human-readable age such as "2 days ago".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ago_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_url: Option<String>,
}

/// Body of a successful `POST /api/search`.
#[derive(Debug, Clone, Serialize)]
pub struct SearchResponse {
    pub query: SearchQuery,
    pub count: usize,
    pub jobs: Vec<JobPosting>,
}

impl SearchResponse {
    pub fn new(query: SearchQuery, jobs: Vec<JobPosting>) -> Self {
        Self {
            query,
            count: jobs.len(),
            jobs,
        }
    }
}
