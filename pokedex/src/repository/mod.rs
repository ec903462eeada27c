//! Repository adapting the catalog contract into `Resource` outcomes

use catalog_types::{Pokemon, PokemonPage, Resource};

use crate::poke_api::PokeApi;

/// Message shown for any failed fetch.
///
/// The repository collapses every failure cause into this one message; the
/// structured cause stays available on the client layer for callers that
/// need it.
pub const GENERIC_ERROR_MESSAGE: &str = "An unknown error occurred.";

/// Repository over a catalog contract implementation.
///
/// The sole recovery boundary of the crate: both operations always resolve
/// to a [`Resource`] and never propagate an error past this type. Calls are
/// independent of each other; there is no caching, retrying or request
/// de-duplication.
pub struct PokemonRepository<A: PokeApi> {
    api: A,
}

impl<A: PokeApi> PokemonRepository<A> {
    /// Creates a repository over the given catalog contract
    #[must_use]
    pub const fn new(api: A) -> Self {
        Self { api }
    }

    /// Fetches one page of the pokemon listing
    pub async fn get_pokemon_list(&self, limit: u32, offset: u32) -> Resource<PokemonPage> {
        match self.api.get_pokemon_list(limit, offset).await {
            Ok(page) => Resource::Success(page),
            Err(err) => {
                tracing::warn!("Pokemon list request failed: {err}");
                Resource::error(GENERIC_ERROR_MESSAGE)
            }
        }
    }

    /// Fetches the detail record for a pokemon by name.
    ///
    /// Names are matched case-insensitively; leading and trailing whitespace
    /// is ignored.
    pub async fn get_pokemon_info(&self, name: &str) -> Resource<Pokemon> {
        let name = name.trim().to_lowercase();
        match self.api.get_pokemon(&name).await {
            Ok(pokemon) => Resource::Success(pokemon),
            Err(err) => {
                tracing::warn!("Pokemon detail request failed for {name:?}: {err}");
                Resource::error(GENERIC_ERROR_MESSAGE)
            }
        }
    }
}
