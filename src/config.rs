//! Client configuration: remote base URL and the session storage key.
//!
//! The browser build has no runtime environment, so overrides are baked in
//! at compile time through `REGRET_API_URL` / `REGRET_TOKEN_KEY`. Native
//! front-ends construct the config from their own arguments.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Remote service used when no override is provided.
pub const DEFAULT_API_URL: &str = "https://regret-backend.onrender.com";

/// Durable storage key holding the bearer token.
pub const DEFAULT_TOKEN_KEY: &str = "token";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL without a trailing slash; endpoint paths are appended as-is.
    pub api_url: String,
    pub token_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_owned(),
            token_key: DEFAULT_TOKEN_KEY.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Defaults, overridden by whatever was set in the build environment.
    pub fn from_build_env() -> Self {
        Self::from_overrides(option_env!("REGRET_API_URL"), option_env!("REGRET_TOKEN_KEY"))
    }

    fn from_overrides(api_url: Option<&str>, token_key: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(url) = api_url {
            config = config.with_api_url(url);
        }
        if let Some(key) = token_key.map(str::trim).filter(|k| !k.is_empty()) {
            config.token_key = key.to_owned();
        }
        config
    }

    /// Replace the base URL. Blank input keeps the current value.
    #[must_use]
    pub fn with_api_url(mut self, raw: &str) -> Self {
        let url = normalize_base_url(raw);
        if !url.is_empty() {
            self.api_url = url;
        }
        self
    }
}

pub(crate) fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}
