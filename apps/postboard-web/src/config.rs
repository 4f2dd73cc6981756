//! Application configuration loaded from environment variables.

use std::env;

use postboard_infra::Latency;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Simulated store latency.
    pub latency: Latency,
    /// Start with the starter posts instead of an empty store.
    pub seed_posts: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            latency: Latency::from_env(),
            seed_posts: env::var("SEED_POSTS")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
        }
    }
}
