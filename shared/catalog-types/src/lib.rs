//! Shared data models for the Pokédex catalog
//!
//! This crate contains the response shapes decoded from the remote catalog
//! API together with the render-ready list entry and the `Resource` result
//! container shared between the client and its consumers.

pub mod pokemon;
pub mod resource;

pub use pokemon::{
    NamedResource, PokedexListEntry, Pokemon, PokemonPage, PokemonStat, Sprites, TypeSlot,
};
pub use resource::Resource;
