//! REPL session state: pagination cursor and caught Pokemon.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{LocationAreaPage, Pokemon};

/// Mutable state carried between commands for one interactive session.
#[derive(Debug)]
pub struct Session {
    next: Option<String>,
    previous: Option<String>,
    paged: bool,
    pokedex: BTreeMap<String, Pokemon>,
    rng: StdRng,
}

impl Session {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// A session with reproducible catch rolls.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            next: None,
            previous: None,
            paged: false,
            pokedex: BTreeMap::new(),
            rng,
        }
    }

    // == Pagination ==
    /// URL of the page after the last one shown.
    pub fn next_page(&self) -> Option<&str> {
        self.next.as_deref()
    }

    /// URL of the page before the last one shown.
    pub fn previous_page(&self) -> Option<&str> {
        self.previous.as_deref()
    }

    /// True once at least one page has been shown.
    pub fn has_paged(&self) -> bool {
        self.paged
    }

    /// Moves the cursor to `page`.
    pub fn record_page(&mut self, page: &LocationAreaPage) {
        self.next = page.next.clone();
        self.previous = page.previous.clone();
        self.paged = true;
    }

    // == Pokedex ==
    /// Rolls a catch attempt and stores the Pokemon on success.
    pub fn try_catch(&mut self, pokemon: Pokemon) -> bool {
        let base_experience = pokemon.base_experience.unwrap_or(0);
        let roll = if base_experience == 0 {
            0
        } else {
            self.rng.gen_range(0..base_experience)
        };

        let caught = catch_succeeds(base_experience, roll);
        if caught {
            self.pokedex.insert(pokemon.name.clone(), pokemon);
        }
        caught
    }

    pub fn caught(&self, name: &str) -> Option<&Pokemon> {
        self.pokedex.get(name)
    }

    /// Names of caught Pokemon, sorted.
    pub fn caught_names(&self) -> impl Iterator<Item = &str> {
        self.pokedex.keys().map(String::as_str)
    }

    pub fn caught_count(&self) -> usize {
        self.pokedex.len()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether a roll in `0..base_experience` catches the Pokemon.
///
/// Stronger Pokemon are harder to catch: the winning range is a quarter of
/// the base experience plus three.
pub fn catch_succeeds(base_experience: u32, roll: u32) -> bool {
    roll < base_experience / 4 + 3
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NamedResource;

    fn pokemon(name: &str, base_experience: Option<u32>) -> Pokemon {
        Pokemon {
            id: 1,
            name: name.to_string(),
            base_experience,
            height: 1,
            weight: 1,
            order: 1,
            stats: Vec::new(),
            types: Vec::new(),
            abilities: Vec::new(),
            moves: Vec::new(),
        }
    }

    fn page(next: Option<&str>, previous: Option<&str>) -> LocationAreaPage {
        LocationAreaPage {
            count: 40,
            next: next.map(str::to_string),
            previous: previous.map(str::to_string),
            results: vec![NamedResource {
                name: "area".to_string(),
                url: "https://pokeapi.co/api/v2/location-area/1/".to_string(),
            }],
        }
    }

    #[test]
    fn test_catch_threshold() {
        // Pikachu: 112 / 4 + 3 = 31
        assert!(catch_succeeds(112, 0));
        assert!(catch_succeeds(112, 30));
        assert!(!catch_succeeds(112, 31));
        assert!(!catch_succeeds(112, 111));
        // Weak Pokemon are always caught
        assert!(catch_succeeds(2, 1));
        assert!(catch_succeeds(0, 0));
    }

    #[test]
    fn test_zero_or_missing_experience_is_always_caught() {
        let mut session = Session::with_seed(7);

        assert!(session.try_catch(pokemon("magikarp", Some(0))));
        assert!(session.try_catch(pokemon("deoxys-attack", None)));
        assert_eq!(session.caught_count(), 2);
    }

    #[test]
    fn test_seeded_sessions_roll_the_same() {
        let mut first = Session::with_seed(42);
        let mut second = Session::with_seed(42);

        for _ in 0..20 {
            assert_eq!(
                first.try_catch(pokemon("mewtwo", Some(340))),
                second.try_catch(pokemon("mewtwo", Some(340)))
            );
        }
    }

    #[test]
    fn test_caught_names_are_sorted() {
        let mut session = Session::with_seed(1);
        session.try_catch(pokemon("zubat", Some(0)));
        session.try_catch(pokemon("abra", Some(0)));
        session.try_catch(pokemon("mew", Some(0)));

        let names: Vec<&str> = session.caught_names().collect();
        assert_eq!(names, vec!["abra", "mew", "zubat"]);
        assert!(session.caught("mew").is_some());
        assert!(session.caught("ditto").is_none());
    }

    #[test]
    fn test_record_page_moves_cursor() {
        let mut session = Session::with_seed(1);
        assert!(!session.has_paged());
        assert!(session.next_page().is_none());

        session.record_page(&page(Some("next-url"), None));
        assert!(session.has_paged());
        assert_eq!(session.next_page(), Some("next-url"));
        assert!(session.previous_page().is_none());

        session.record_page(&page(None, Some("prev-url")));
        assert!(session.next_page().is_none());
        assert_eq!(session.previous_page(), Some("prev-url"));
    }
}
