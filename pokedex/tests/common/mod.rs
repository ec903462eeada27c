use catalog_types::{NamedResource, Pokemon, PokemonPage, PokemonStat, Sprites, TypeSlot};
use tracing_subscriber::EnvFilter;

/// Initializes a test subscriber; repeated calls are no-ops
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}

pub fn named(name: &str, url: &str) -> NamedResource {
    NamedResource {
        name: name.to_string(),
        url: url.to_string(),
    }
}

/// Detail fixture matching the remote payload for bulbasaur
pub fn bulbasaur() -> Pokemon {
    Pokemon {
        id: 1,
        name: "bulbasaur".to_string(),
        height: 7,
        weight: 69,
        types: vec![
            TypeSlot {
                slot: 1,
                type_ref: named("grass", "https://pokeapi.co/api/v2/type/12/"),
            },
            TypeSlot {
                slot: 2,
                type_ref: named("poison", "https://pokeapi.co/api/v2/type/4/"),
            },
        ],
        stats: vec![
            PokemonStat {
                base_stat: 45,
                effort: 0,
                stat: named("hp", "https://pokeapi.co/api/v2/stat/1/"),
            },
            PokemonStat {
                base_stat: 49,
                effort: 0,
                stat: named("attack", "https://pokeapi.co/api/v2/stat/2/"),
            },
            PokemonStat {
                base_stat: 45,
                effort: 0,
                stat: named("speed", "https://pokeapi.co/api/v2/stat/6/"),
            },
        ],
        sprites: Sprites {
            front_default: Some(
                "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/1.png"
                    .to_string(),
            ),
        },
    }
}

/// Listing fixture with the first three catalog entries
pub fn first_page() -> PokemonPage {
    PokemonPage {
        count: 1302,
        next: Some("https://pokeapi.co/api/v2/pokemon?offset=3&limit=3".to_string()),
        previous: None,
        results: vec![
            named("bulbasaur", "https://pokeapi.co/api/v2/pokemon/1/"),
            named("ivysaur", "https://pokeapi.co/api/v2/pokemon/2/"),
            named("venusaur", "https://pokeapi.co/api/v2/pokemon/3/"),
        ],
    }
}
