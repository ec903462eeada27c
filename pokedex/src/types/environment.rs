//! Environment configuration for the catalog client

use std::env;

/// Public PokeAPI base URL used when no override is set
const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Number of entries requested per list page
pub const PAGE_SIZE: u32 = 20;

/// Remote catalog configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiEnvironment {
    base_url: String,
}

impl ApiEnvironment {
    /// Creates configuration from the `POKEAPI_BASE_URL` environment
    /// variable, falling back to the public API
    #[must_use]
    pub fn from_env() -> Self {
        let base_url =
            env::var("POKEAPI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// Creates configuration with an explicit base URL.
    ///
    /// Trailing slashes are stripped so request paths can be appended
    /// uniformly.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into().trim().to_string();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    /// The configured base URL without a trailing slash
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
