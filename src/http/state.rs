//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::db::FullRepository;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Repository instance for collaborator data access
    pub repository: Arc<dyn FullRepository>,
    /// Request defaults (forecast horizon, result-set size)
    pub config: Arc<ServiceConfig>,
}

impl AppState {
    /// Create a new application state with the given repository and
    /// built-in defaults.
    pub fn new(repository: Arc<dyn FullRepository>) -> Self {
        Self::with_config(repository, ServiceConfig::default())
    }

    /// Create a new application state with explicit configuration.
    pub fn with_config(repository: Arc<dyn FullRepository>, config: ServiceConfig) -> Self {
        Self {
            repository,
            config: Arc::new(config),
        }
    }
}
