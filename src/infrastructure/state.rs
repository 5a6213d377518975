//! Application state shared by every handler

use std::sync::Arc;

use crate::infrastructure::config::Config;
use crate::infrastructure::rate_limit::RateLimiter;

#[derive(Clone)]
pub struct AppState {
    /// Process configuration (identity fields, limits, environment)
    pub config: Arc<Config>,
    /// Per-client quota for the classification endpoint
    pub rate_limiter: Arc<RateLimiter>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let rate_limiter = Arc::new(RateLimiter::new(
            config.rate_limit_max,
            config.rate_limit_window,
            config.rate_limit_max_clients,
        ));

        Self {
            config: Arc::new(config),
            rate_limiter,
        }
    }
}
