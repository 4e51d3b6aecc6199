/// Criminal gang names.

use crate::core::combinators::{either, Either};
use crate::core::component::{Component, ComponentError, ComponentExt};
use crate::core::random::RandomSource;
use crate::generators::town::TownName;
use crate::names::GivenName;
use crate::words::base::{Adjective, MartialSocialConcept, PrimitiveWeapon, VillainousPersonNoun};
use crate::words::lists::WordLists;
use crate::{one_of, spaced};

/// Either a leader's gang ("Mordecai's Cutthroats") or a lowercase
/// "the ..." form ("the Vengeance Brigands of Port Hadley").
#[derive(Debug, Clone)]
pub struct CriminalGangName {
    inner: Either,
}

impl CriminalGangName {
    pub fn new() -> Result<Self, ComponentError> {
        Self::from_lists(WordLists::global())
    }

    pub fn from_lists(lists: &WordLists) -> Result<Self, ComponentError> {
        let villains = VillainousPersonNoun::plural().boxed();
        let town = TownName::from_lists(lists)?.boxed();
        let adjective = Adjective::from_lists(lists).boxed();

        let led_by = spaced![
            GivenName::from_lists(lists, None).possessive_form(),
            either(villains.clone(), PrimitiveWeapon::plural(), 0.5)?,
        ]
        .title_case();

        let descriptive = one_of![
            spaced![MartialSocialConcept, &villains],
            spaced![PrimitiveWeapon::new(), &villains],
            spaced![&villains, "of", &town],
            spaced![&town, &villains],
            spaced![&adjective, &villains],
            spaced![&adjective, &villains, "of", &town],
        ]?;

        Ok(Self {
            inner: either(led_by, spaced!["the", descriptive.title_case()], 0.25)?,
        })
    }
}

impl Component for CriminalGangName {
    fn render(&self, rng: &mut dyn RandomSource) -> Result<String, ComponentError> {
        self.inner.render(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::testing::ScriptedSource;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn descriptive_form_keeps_lowercase_article() {
        let gang = CriminalGangName::new().unwrap();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let name = gang.render(&mut rng).unwrap();
            assert!(!name.is_empty());
            if let Some(rest) = name.strip_prefix("the ") {
                assert!(rest.chars().next().unwrap().is_uppercase(), "{name}");
            }
        }
    }

    #[test]
    fn leader_form_is_possessive() {
        let mut lists = WordLists::new();
        lists.insert_list(crate::words::lists::MALE_GIVEN_NAMES, ["mordecai"]);
        lists.insert_list(crate::words::lists::FEMALE_GIVEN_NAMES, ["ada"]);
        lists.insert_list(crate::words::lists::SURNAMES, ["hadley"]);
        let gang = CriminalGangName::from_lists(&lists).unwrap();
        let rogue = VillainousPersonNoun::options()
            .iter()
            .position(|w| *w == "rogue")
            .unwrap();
        // Outer either, coin (male), name, inner either, villain pick.
        let mut rng = ScriptedSource::new()
            .with_floats(&[0.1, 0.2])
            .with_indices(&[0, 0, rogue]);
        assert_eq!(gang.render(&mut rng).unwrap(), "Mordecai's Rogues");
    }
}
