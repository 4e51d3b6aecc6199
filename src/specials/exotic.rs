/// Picks characters from named sets of unusual glyphs.

use std::collections::BTreeMap;

use crate::core::component::{Component, ComponentError};
use crate::core::random::{choose_one, RandomSource};
use crate::words::lists::{WordList, WordLists};

/// Exotic characters drawn from the bundle's `character_sets`.
///
/// Sets are kept in name order, so a seeded source always lands on the same
/// set for the same draw.
#[derive(Debug, Clone)]
pub struct ExoticCharacter {
    sets: BTreeMap<String, WordList>,
}

impl ExoticCharacter {
    pub fn new() -> Self {
        Self::from_lists(WordLists::global())
    }

    pub fn from_lists(lists: &WordLists) -> Self {
        Self {
            sets: lists.character_sets().clone(),
        }
    }

    pub fn set_names(&self) -> impl Iterator<Item = &str> {
        self.sets.keys().map(String::as_str)
    }

    /// Uniform set, then a uniform character from it.
    pub fn random_character(&self, rng: &mut dyn RandomSource) -> Result<String, ComponentError> {
        let sets: Vec<&WordList> = self.sets.values().collect();
        let set: &[String] = choose_one(rng, &sets, "character sets")?;
        choose_one(rng, set, "character set").cloned()
    }

    pub fn random_character_from_set(
        &self,
        name: &str,
        rng: &mut dyn RandomSource,
    ) -> Result<String, ComponentError> {
        let set = self
            .sets
            .get(name)
            .ok_or_else(|| ComponentError::UnknownSet(name.to_string()))?;
        choose_one(rng, set, name).cloned()
    }
}

impl Default for ExoticCharacter {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for ExoticCharacter {
    fn render(&self, rng: &mut dyn RandomSource) -> Result<String, ComponentError> {
        self.random_character(rng)
    }
}
