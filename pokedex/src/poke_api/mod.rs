//! HTTP client for the remote pokemon catalog

use std::time::Duration;

use catalog_types::{Pokemon, PokemonPage};
use reqwest::{Client, StatusCode};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde::de::DeserializeOwned;

use crate::types::ApiEnvironment;

/// Error types for catalog requests
pub mod error;

pub use error::PokeApiError;

/// Default request timeout in seconds
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
/// Maximum number of idle connections to maintain per host
const MAX_IDLE_CONNECTIONS_PER_HOST: usize = 10;

/// Contract for the remote pokemon catalog.
///
/// Implementations perform the network round trip and decode the response
/// body; every failure mode surfaces as a [`PokeApiError`].
#[async_trait::async_trait]
pub trait PokeApi: Send + Sync {
    /// Fetches one page of the pokemon listing
    async fn get_pokemon_list(&self, limit: u32, offset: u32)
        -> Result<PokemonPage, PokeApiError>;

    /// Fetches the detail record for a pokemon by name (case-insensitive)
    async fn get_pokemon(&self, name: &str) -> Result<Pokemon, PokeApiError>;
}

/// Reqwest-backed implementation of the catalog contract
pub struct PokeApiClient {
    base_url: String,
    http_client: ClientWithMiddleware,
}

impl PokeApiClient {
    /// Creates a new catalog client.
    ///
    /// The underlying HTTP client is built once and reused across requests.
    ///
    /// # Panics
    ///
    /// If the HTTP client fails to be created
    #[must_use]
    pub fn new(environment: &ApiEnvironment) -> Self {
        let reqwest_client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
            .pool_max_idle_per_host(MAX_IDLE_CONNECTIONS_PER_HOST)
            .user_agent(format!("pokedex/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("Failed to create HTTP client");

        let http_client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        Self {
            base_url: environment.base_url().to_string(),
            http_client,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, PokeApiError> {
        let response = self.http_client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Catalog request failed with {status}: {url}");
            return Err(PokeApiError::Status(status.as_u16()));
        }

        response.json::<T>().await.map_err(PokeApiError::Decode)
    }
}

#[async_trait::async_trait]
impl PokeApi for PokeApiClient {
    async fn get_pokemon_list(
        &self,
        limit: u32,
        offset: u32,
    ) -> Result<PokemonPage, PokeApiError> {
        let url = format!("{}/pokemon?limit={limit}&offset={offset}", self.base_url);
        self.get_json(&url).await
    }

    async fn get_pokemon(&self, name: &str) -> Result<Pokemon, PokeApiError> {
        // The catalog only knows lowercase names
        let name = name.trim().to_lowercase();
        if name.is_empty() {
            return Err(PokeApiError::EmptyName);
        }

        let url = format!("{}/pokemon/{name}", self.base_url);
        match self.get_json(&url).await {
            Err(PokeApiError::Status(status)) if status == StatusCode::NOT_FOUND.as_u16() => {
                Err(PokeApiError::NotFound(name))
            }
            other => other,
        }
    }
}

#[cfg(any(test, feature = "test-utils"))]
pub mod mock {
    //! Configurable in-memory stand-in for the catalog contract

    use std::sync::{Arc, Mutex};

    use catalog_types::{Pokemon, PokemonPage};

    use super::{PokeApi, PokeApiError};

    /// Shared log of the names requested through the detail operation
    pub type RequestLog = Arc<Mutex<Vec<String>>>;

    /// Mock catalog returning canned payloads or a forced failure.
    ///
    /// Records the names requested through [`PokeApi::get_pokemon`] so tests
    /// can assert on what was sent over the contract.
    #[derive(Default)]
    pub struct MockPokeApi {
        page: Option<PokemonPage>,
        pokemon: Option<Pokemon>,
        fail: bool,
        requested_names: RequestLog,
    }

    impl MockPokeApi {
        /// Mock that answers the list operation with the given page
        #[must_use]
        pub fn with_page(page: PokemonPage) -> Self {
            Self {
                page: Some(page),
                ..Self::default()
            }
        }

        /// Mock that answers the detail operation with the given pokemon
        #[must_use]
        pub fn with_pokemon(pokemon: Pokemon) -> Self {
            Self {
                pokemon: Some(pokemon),
                ..Self::default()
            }
        }

        /// Mock where every operation fails with a server error
        #[must_use]
        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        /// Handle on the request log, usable after the mock has been moved
        /// into a repository
        #[must_use]
        pub fn request_log(&self) -> RequestLog {
            Arc::clone(&self.requested_names)
        }
    }

    #[async_trait::async_trait]
    impl PokeApi for MockPokeApi {
        async fn get_pokemon_list(
            &self,
            _limit: u32,
            _offset: u32,
        ) -> Result<PokemonPage, PokeApiError> {
            if self.fail {
                return Err(PokeApiError::Status(502));
            }
            self.page.clone().ok_or(PokeApiError::Status(404))
        }

        async fn get_pokemon(&self, name: &str) -> Result<Pokemon, PokeApiError> {
            self.requested_names.lock().unwrap().push(name.to_string());
            if self.fail {
                return Err(PokeApiError::Status(502));
            }
            self.pokemon
                .clone()
                .ok_or_else(|| PokeApiError::NotFound(name.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn rejects_empty_name_without_a_request() {
        // Unroutable base URL: the guard must fire before any I/O
        let client = PokeApiClient::new(&ApiEnvironment::new("http://127.0.0.1:0"));

        let result = client.get_pokemon("   ").await;
        assert!(matches!(result, Err(PokeApiError::EmptyName)));
    }
}
