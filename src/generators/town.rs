/// Town names: surnames and place words arranged by a percentile roll.

use crate::core::combinators::{one_of, RollTable};
use crate::core::component::{Component, ComponentError, ComponentExt};
use crate::core::random::RandomSource;
use crate::names::Surname;
use crate::words::base::LocationAdjective;
use crate::words::lists::WordLists;
use crate::{spaced, text};

const LANDMARKS: [&str; 4] = ["Bay", "Point", "City", "Park"];
const FEATURES: [&str; 5] = ["River", "Hill", "Town", "Beach", "Village"];
const SETTLEMENT_SUFFIXES: [&str; 5] = ["ton", "burg", "ville", "town", "dale"];

/// "Port Hadley", "Misty Hill", "Marshburg", "New Coleton".
#[derive(Debug, Clone)]
pub struct TownName {
    table: RollTable,
}

impl TownName {
    pub fn new() -> Result<Self, ComponentError> {
        Self::from_lists(WordLists::global())
    }

    pub fn from_lists(lists: &WordLists) -> Result<Self, ComponentError> {
        let surname = Surname::from_lists(lists).boxed();
        let landmark = one_of(LANDMARKS)?.boxed();
        let feature = one_of(FEATURES)?.boxed();
        let settlement = text![&surname, one_of(SETTLEMENT_SUFFIXES)?].boxed();
        let place = LocationAdjective.first_upper().boxed();

        let table = RollTable::new(
            100,
            [
                (9, spaced![&surname, &landmark].boxed()),
                (19, spaced![one_of(["Fort", "Port", "Cape"])?, &surname].boxed()),
                (24, spaced![&surname, &feature].boxed()),
                (29, spaced![one_of(["Saint", "Mount", "Lake"])?, &surname].boxed()),
                (31, spaced!["New", &settlement].boxed()),
                (35, spaced![&place, &landmark].boxed()),
                (38, spaced![&place, &feature].boxed()),
                (100, settlement),
            ],
        )?;

        Ok(Self { table })
    }
}

impl Component for TownName {
    fn render(&self, rng: &mut dyn RandomSource) -> Result<String, ComponentError> {
        self.table.render(rng)
    }
}
