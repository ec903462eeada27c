use thiserror::Error;

/// Error types for remote catalog requests
#[derive(Debug, Error)]
pub enum PokeApiError {
    /// The requested pokemon does not exist in the catalog
    #[error("Pokemon not found: {0}")]
    NotFound(String),

    /// The remote API answered with a non-success status code
    #[error("Unexpected status code: {0}")]
    Status(u16),

    /// The response body could not be decoded into the expected model
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] reqwest::Error),

    /// The request could not be completed
    #[error("Network error: {0}")]
    Network(#[from] reqwest_middleware::Error),

    /// A pokemon name must be non-empty
    #[error("Pokemon name must not be empty")]
    EmptyName,
}
