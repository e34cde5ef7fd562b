//! PokeAPI response models
//!
//! Serde mappings for the subset of PokeAPI resources the REPL uses. Unknown
//! fields are ignored.

pub mod location;
pub mod pokemon;

// Re-export commonly used types
pub use location::{Encounter, LocationArea, LocationAreaPage, NamedResource};
pub use pokemon::{Pokemon, PokemonAbility, PokemonMove, PokemonStat, PokemonType};
