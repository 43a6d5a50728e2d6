use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::moderation::ContentPolicy;
use crate::ratelimit::RateLimiter;
use crate::store::{MemoryStore, ThoughtStore};

// ============================================================================
// APPLICATION STATE - Shared data across all requests
// ============================================================================
/// Everything a handler touches is owned here and shared via `Arc`: the
/// limiters and the store are injected components, not module-level globals,
/// so tests can build a state with whatever limits or store they need.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ThoughtStore>,
    pub policy: Arc<ContentPolicy>,
    /// Submission and listing get independent (limit, window) pairs.
    pub create_limiter: Arc<RateLimiter>,
    pub list_limiter: Arc<RateLimiter>,
    pub jwt_secret: String,
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(config: &Config) -> Self {
        Self {
            store: Arc::new(MemoryStore::default()),
            policy: Arc::new(ContentPolicy::new(&config.banned_terms)),
            create_limiter: Arc::new(RateLimiter::new(
                config.create_limit,
                Duration::from_secs(config.create_window_secs),
            )),
            list_limiter: Arc::new(RateLimiter::new(
                config.list_limit,
                Duration::from_secs(config.list_window_secs),
            )),
            jwt_secret: config.jwt_secret.clone(),
            request_timeout: Duration::from_secs(config.request_timeout_secs),
        }
    }
}
