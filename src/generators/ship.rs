/// Nautical ship names.

use crate::core::combinators::{either, RollTable};
use crate::core::component::{Component, ComponentError, ComponentExt};
use crate::core::decorators::TitleCased;
use crate::core::random::RandomSource;
use crate::generators::town::TownName;
use crate::names::{AncientName, GivenName, WeirdName};
use crate::names::BinaryGender::{Female, Male};
use crate::spaced;
use crate::words::base::{
    MartialSocialConcept, PrimitiveWeapon, ShipNameAdjective, ShipNameColor, ShipNameObject,
    TimeOfDay,
};
use crate::words::lists::WordLists;

/// "Jade Lance", "Queen of Vengeance", "Evening Wrath".
#[derive(Debug, Clone)]
pub struct NauticalShipName {
    inner: TitleCased,
}

impl NauticalShipName {
    pub fn new() -> Result<Self, ComponentError> {
        Self::from_lists(WordLists::global())
    }

    pub fn from_lists(lists: &WordLists) -> Result<Self, ComponentError> {
        let town = TownName::from_lists(lists)?.boxed();
        let woman = GivenName::from_lists(lists, Some(Female)).boxed();
        let man = GivenName::from_lists(lists, Some(Male));
        let object = ShipNameObject.boxed();
        let weapon = PrimitiveWeapon::new().boxed();
        let concept = MartialSocialConcept.boxed();

        let object_or_weapon = |p: f64| either(&object, &weapon, p);
        let patron = either(
            MartialSocialConcept.first_upper(),
            either(&woman, man, 0.75)?,
            0.33,
        )?;

        let table = RollTable::new(
            18,
            [
                (4, woman.clone()),
                (7, concept.clone()),
                (8, town.clone()),
                (9, either(WeirdName::new(3)?, AncientName::new(3)?, 0.5)?.boxed()),
                (10, object.clone()),
                (11, ShipNameAdjective.boxed()),
                (12, spaced![ShipNameColor, either(&object, &weapon, 0.75)?].boxed()),
                (14, spaced![ShipNameAdjective, object_or_weapon(0.85)?].boxed()),
                (15, spaced![TimeOfDay, either(&concept, &weapon, 0.75)?].boxed()),
                (16, spaced![&town, object_or_weapon(0.85)?].boxed()),
                (
                    17,
                    spaced![object_or_weapon(0.5)?, "of", either(&concept, &town, 0.5)?].boxed(),
                ),
                (
                    18,
                    spaced![
                        patron.possessive_form(),
                        either(object_or_weapon(0.5)?, &concept, 0.5)?,
                    ]
                    .boxed(),
                ),
            ],
        )?;

        Ok(Self {
            inner: TitleCased::new(table),
        })
    }
}

impl Component for NauticalShipName {
    fn render(&self, rng: &mut dyn RandomSource) -> Result<String, ComponentError> {
        self.inner.render(rng)
    }
}
