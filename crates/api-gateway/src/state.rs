//! Shared handler state.

use std::sync::Arc;

use crate::config::Config;
use crate::service::CompanyService;

/// State cloned into every handler. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    /// Process configuration.
    pub config: Arc<Config>,
    /// Company backend.
    pub companies: Arc<dyn CompanyService>,
}

impl AppState {
    /// Bundle config and backend.
    pub fn new(config: Config, companies: impl CompanyService) -> Self {
        Self {
            config: Arc::new(config),
            companies: Arc::new(companies),
        }
    }
}
