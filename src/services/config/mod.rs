pub mod models;

pub use models::*;

use crate::types::errors::{AppError, AppResult};

/// Environment variable holding the backend origin.
pub const ENV_API_URL: &str = "DOCGEN_API_URL";
/// Environment variable holding the request timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "DOCGEN_TIMEOUT_SECS";
/// Environment variable holding the tree depth guard.
pub const ENV_MAX_TREE_DEPTH: &str = "DOCGEN_MAX_TREE_DEPTH";

impl AppConfig {
    /// Load from the process environment, after reading `.env` if present.
    pub fn from_env() -> AppResult<Self> {
        let _ = dotenvy::dotenv(); // Try to load .env, ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Missing keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_API_URL) {
            config.api_base_url = url;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            config.timeout_secs = parse_positive(ENV_TIMEOUT_SECS, &raw)?;
        }
        if let Some(raw) = lookup(ENV_MAX_TREE_DEPTH) {
            config.max_tree_depth = parse_positive(ENV_MAX_TREE_DEPTH, &raw)?;
        }

        config.normalize()
    }

    /// Apply command-line overrides on top of the loaded values.
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> AppResult<Self> {
        if let Some(url) = &overrides.api_base_url {
            self.api_base_url = url.clone();
        }
        if let Some(secs) = overrides.timeout_secs {
            self.timeout_secs = secs;
        }
        if let Some(depth) = overrides.max_tree_depth {
            self.max_tree_depth = depth;
        }
        self.normalize()
    }

    /// Check the numeric limits and strip any trailing `/` from the base URL.
    ///
    /// The URL itself is only checked by [`AppConfig::validated_api_url`],
    /// so commands that never reach the backend ignore a bad value.
    fn normalize(mut self) -> AppResult<Self> {
        if self.timeout_secs == 0 {
            return Err(AppError::Config("timeout must be at least 1 second".into()));
        }
        if self.max_tree_depth == 0 {
            return Err(AppError::Config("max tree depth must be positive".into()));
        }

        self.api_base_url = self.api_base_url.trim().trim_end_matches('/').to_string();
        Ok(self)
    }

    /// The base URL, parsed. Must be http or https.
    pub fn validated_api_url(&self) -> AppResult<reqwest::Url> {
        let url = reqwest::Url::parse(&self.api_base_url)
            .map_err(|e| AppError::Config(format!("{ENV_API_URL} '{}': {e}", self.api_base_url)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::Config(format!(
                "{ENV_API_URL} must be http or https, got '{}'",
                url.scheme()
            )));
        }
        Ok(url)
    }
}

fn parse_positive<T>(key: &str, raw: &str) -> AppResult<T>
where
    T: std::str::FromStr + PartialEq + Default,
{
    match raw.trim().parse::<T>() {
        Ok(value) if value != T::default() => Ok(value),
        _ => Err(AppError::Config(format!(
            "{key} must be a positive integer, got '{raw}'"
        ))),
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
