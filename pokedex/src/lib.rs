//! Async client library for the public pokemon catalog

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// Display colors and abbreviations for types and stats
pub mod palette;

/// Remote catalog API client
pub mod poke_api;

/// Repository adapting the remote client into `Resource` outcomes
pub mod repository;

/// Configuration types
pub mod types;

pub use catalog_types::Resource;
