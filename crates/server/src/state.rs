use std::sync::Arc;

use skillgap_core::Analyzer;

use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Read-only pipeline shared by every request.
    pub analyzer: Arc<Analyzer>,
    pub config: Config,
}

impl AppState {
    pub fn new(analyzer: Analyzer, config: Config) -> Self {
        Self { analyzer: Arc::new(analyzer), config }
    }
}
