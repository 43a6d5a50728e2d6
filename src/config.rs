use std::{env, fmt::Display, str::FromStr};

use tracing::info;

use crate::moderation;

/// Runtime configuration, sourced from the environment (after `dotenvy` has
/// loaded any `.env` file).
pub struct Config {
    pub port: u16,
    pub jwt_secret: String,
    /// Submission limiter: requests per window.
    pub create_limit: u32,
    pub create_window_secs: u64,
    /// Listing limiter: requests per window.
    pub list_limit: u32,
    pub list_window_secs: u64,
    pub request_timeout_secs: u64,
    /// Forbidden substrings for the content screen, comma-separated in the env.
    pub banned_terms: Vec<String>,
}

impl Config {
    pub fn load() -> Self {
        Self {
            port: try_load("PORT", "3000"),
            jwt_secret: env::var("JWT_SECRET").expect("JWT_SECRET must be set!"),
            create_limit: try_load("CREATE_RATE_LIMIT", "5"),
            create_window_secs: try_load("CREATE_RATE_WINDOW_SECS", "600"),
            list_limit: try_load("LIST_RATE_LIMIT", "60"),
            list_window_secs: try_load("LIST_RATE_WINDOW_SECS", "60"),
            request_timeout_secs: try_load("REQUEST_TIMEOUT_SECS", "30"),
            banned_terms: load_banned_terms(),
        }
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> T
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .unwrap_or_else(|e| panic!("Invalid {key} value: {e}"))
}

fn load_banned_terms() -> Vec<String> {
    match env::var("BANNED_TERMS") {
        Ok(raw) => raw
            .split(',')
            .map(|term| term.trim().to_string())
            .filter(|term| !term.is_empty())
            .collect(),
        Err(_) => {
            info!("BANNED_TERMS not set, using built-in denylist");
            moderation::DEFAULT_TERMS
                .iter()
                .map(|term| term.to_string())
                .collect()
        }
    }
}
