use std::path::PathBuf;
use std::sync::Arc;

use crate::provider::JobProvider;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Read-only: nothing here is mutated per request.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable job source. Default: `LinkedInProvider`; tests swap in fakes.
    pub provider: Arc<dyn JobProvider>,
    pub public_dir: PathBuf,
}

impl AppState {
    pub fn new(provider: Arc<dyn JobProvider>, public_dir: impl Into<PathBuf>) -> Self {
        Self {
            provider,
            public_dir: public_dir.into(),
        }
    }
}
