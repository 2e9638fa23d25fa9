use std::time::Duration;

use crate::config::Config;
use crate::session::SessionRegistry;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Open editing sessions; each owns its own document and wizard step.
    pub sessions: SessionRegistry,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            sessions: SessionRegistry::new(
                config.max_sessions,
                Duration::from_secs(config.session_idle_secs),
            ),
            config,
        }
    }
}
