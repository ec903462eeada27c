//! Response models for the remote catalog API

use serde::{Deserialize, Serialize};
use url::Url;

/// Base URL for the community sprite mirror used for list thumbnails
const SPRITE_BASE_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";

/// A named reference to another catalog resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// One page of the paginated pokemon listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonPage {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// A type slot on a pokemon detail, ordered by `slot`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSlot {
    pub slot: u32,
    #[serde(rename = "type")]
    pub type_ref: NamedResource,
}

/// A base stat entry on a pokemon detail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub effort: u32,
    pub stat: NamedResource,
}

/// Sprite URLs attached to a pokemon detail
///
/// The remote API returns `null` for sprites that do not exist, so every
/// field is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
}

/// Full detail record for a single pokemon
///
/// `types` and `stats` keep the order of the response body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    pub types: Vec<TypeSlot>,
    pub stats: Vec<PokemonStat>,
    pub sprites: Sprites,
}

/// Render-ready entry for the pokedex list screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokedexListEntry {
    pub name: String,
    pub image_url: String,
    pub number: u32,
}

impl PokedexListEntry {
    /// Derives a list entry from a listing result.
    ///
    /// The catalog number is the trailing path segment of the resource URL
    /// (`.../pokemon/25/` -> 25); the thumbnail is the sprite mirror image
    /// for that number. Returns `None` when the URL does not end in a
    /// catalog number.
    #[must_use]
    pub fn from_resource(resource: &NamedResource) -> Option<Self> {
        let number = catalog_number(&resource.url)?;
        Some(Self {
            name: resource.name.clone(),
            image_url: format!("{SPRITE_BASE_URL}/{number}.png"),
            number,
        })
    }

    /// Name with the first letter upper-cased, for display
    #[must_use]
    pub fn display_name(&self) -> String {
        let mut chars = self.name.chars();
        chars.next().map_or_else(String::new, |first| {
            first.to_uppercase().collect::<String>() + chars.as_str()
        })
    }
}

/// Extracts the catalog number from the last path segment of a resource URL
fn catalog_number(resource_url: &str) -> Option<u32> {
    let url = Url::parse(resource_url).ok()?;
    url.path_segments()?
        .filter(|segment| !segment.is_empty())
        .next_back()?
        .parse()
        .ok()
}
