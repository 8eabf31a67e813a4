pub mod job;
pub mod query;

pub use job::{JobPosting, SearchResponse};
pub use query::SearchQuery;
