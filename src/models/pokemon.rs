//! Pokemon models

use serde::{Deserialize, Serialize};

use super::NamedResource;

/// `GET /pokemon/{name}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    /// Null for some forms in PokeAPI
    #[serde(default)]
    pub base_experience: Option<u32>,
    /// Height in decimetres
    pub height: u32,
    /// Weight in hectograms
    pub weight: u32,
    /// Sort order within the national dex
    #[serde(default)]
    pub order: i32,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
    #[serde(default)]
    pub abilities: Vec<PokemonAbility>,
    #[serde(default)]
    pub moves: Vec<PokemonMove>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonType {
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonAbility {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
    pub slot: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PokemonMove {
    #[serde(rename = "move")]
    pub learned: NamedResource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_pokemon() {
        let json = r#"{
            "id": 25,
            "name": "pikachu",
            "base_experience": 112,
            "height": 4,
            "weight": 60,
            "order": 35,
            "is_default": true,
            "stats": [
                {"base_stat": 35, "effort": 0, "stat": {"name": "hp", "url": "https://pokeapi.co/api/v2/stat/1/"}},
                {"base_stat": 90, "effort": 2, "stat": {"name": "speed", "url": "https://pokeapi.co/api/v2/stat/6/"}}
            ],
            "types": [
                {"slot": 1, "type": {"name": "electric", "url": "https://pokeapi.co/api/v2/type/13/"}}
            ],
            "abilities": [
                {"ability": {"name": "static", "url": "https://pokeapi.co/api/v2/ability/9/"}, "is_hidden": false, "slot": 1},
                {"ability": {"name": "lightning-rod", "url": "https://pokeapi.co/api/v2/ability/31/"}, "is_hidden": true, "slot": 3}
            ],
            "moves": [
                {"move": {"name": "thunder-shock", "url": "https://pokeapi.co/api/v2/move/84/"}, "version_group_details": []}
            ]
        }"#;

        let pokemon: Pokemon = serde_json::from_str(json).unwrap();

        assert_eq!(pokemon.name, "pikachu");
        assert_eq!(pokemon.base_experience, Some(112));
        assert_eq!(pokemon.stats[1].stat.name, "speed");
        assert_eq!(pokemon.stats[1].effort, 2);
        assert_eq!(pokemon.types[0].kind.name, "electric");
        assert!(pokemon.abilities[1].is_hidden);
        assert_eq!(pokemon.moves[0].learned.name, "thunder-shock");
    }

    #[test]
    fn test_decode_pokemon_with_null_experience() {
        let json = r#"{"id": 10001, "name": "deoxys-attack", "base_experience": null, "height": 17, "weight": 608}"#;

        let pokemon: Pokemon = serde_json::from_str(json).unwrap();

        assert_eq!(pokemon.base_experience, None);
        assert!(pokemon.stats.is_empty());
        assert!(pokemon.moves.is_empty());
    }
}
