// --- File: crates/services/creno_front/src/app_state.rs ---
use std::sync::Arc;

use creno_catalog::CatalogCache;
use creno_config::AppConfig;
use creno_gateway::BookingApi;

/// Application state shared across all routes.
///
/// Owns the one catalog cache of the process; handlers reach the cache and
/// the API client through this struct only, which keeps both injectable in
/// tests.
pub struct AppState {
    /// The application configuration.
    pub config: Arc<AppConfig>,

    /// Client for the booking REST API.
    pub api: BookingApi,

    /// The session-lifetime slot catalog cache.
    pub catalog: CatalogCache,
}

impl AppState {
    /// Create a new AppState from the loaded configuration.
    pub fn new(config: Arc<AppConfig>) -> Self {
        let api = BookingApi::from_config(&config.backend);
        Self {
            config,
            api,
            catalog: CatalogCache::new(),
        }
    }

    /// Whether `email` is the privileged identity.
    ///
    /// A UI gate only; the server re-checks every admin call.
    pub fn is_admin(&self, email: &str) -> bool {
        email == self.config.admin_email
    }
}
