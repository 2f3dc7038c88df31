//! Environment configuration
//!
//! Reads the fleet API location and HTTP client settings from the process
//! environment (optionally seeded from a `.env` file by `main`).

use std::env;
use std::time::Duration;

use reqwest::Url;

use crate::utils::errors::{AppError, AppResult};

pub const DEFAULT_API_URL: &str = "http://localhost:8088";

/// Environment configuration
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub api_base_url: String,
    /// `None` leaves the HTTP client's default behaviour untouched.
    pub request_timeout: Option<Duration>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            api_base_url: DEFAULT_API_URL.to_string(),
            request_timeout: None,
        }
    }
}

impl EnvironmentConfig {
    /// Load configuration from `FLEET_API_URL`, `FLEET_HTTP_TIMEOUT_SECS`
    /// and `ENVIRONMENT`, falling back to defaults for unset keys.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(environment) = lookup("ENVIRONMENT").filter(|v| !v.trim().is_empty()) {
            config.environment = environment.trim().to_string();
        }
        if let Some(url) = lookup("FLEET_API_URL").filter(|v| !v.trim().is_empty()) {
            config = config.with_api_url(&url)?;
        }
        if let Some(secs) = lookup("FLEET_HTTP_TIMEOUT_SECS").filter(|v| !v.trim().is_empty()) {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                AppError::Config(format!(
                    "FLEET_HTTP_TIMEOUT_SECS must be a number of seconds, got '{}'",
                    secs
                ))
            })?;
            config.request_timeout = Some(Duration::from_secs(secs));
        }

        Ok(config)
    }

    /// Override the API base URL, normalising away a trailing slash.
    pub fn with_api_url(mut self, url: &str) -> AppResult<Self> {
        let trimmed = url.trim().trim_end_matches('/');
        Url::parse(trimmed)
            .map_err(|e| AppError::Config(format!("invalid API URL '{}': {}", url, e)))?;
        self.api_base_url = trimmed.to_string();
        Ok(self)
    }

    pub fn with_timeout_secs(mut self, secs: Option<u64>) -> Self {
        if let Some(secs) = secs {
            self.request_timeout = Some(Duration::from_secs(secs));
        }
        self
    }
}
