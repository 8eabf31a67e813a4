//! Job providers — the external source behind `POST /api/search`.
//!
//! Default: `LinkedInProvider` (public guest search, no credentials).
//! `AppState` holds an `Arc<dyn JobProvider>` so tests can run without network.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{JobPosting, SearchQuery};

pub mod linkedin;

pub use linkedin::LinkedInProvider;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Job source returned HTTP {status}")]
    Status { status: u16 },

    #[error("Invalid selector '{selector}': {message}")]
    Selector { selector: String, message: String },

    #[error("{0}")]
    Failed(String),
}

/// The job source trait. Implement this to swap backends without touching the
/// router or handlers.
///
/// Implementations own their timeouts; callers never retry.
#[async_trait]
pub trait JobProvider: Send + Sync {
    async fn query(&self, query: &SearchQuery) -> Result<Vec<JobPosting>, ProviderError>;
}
