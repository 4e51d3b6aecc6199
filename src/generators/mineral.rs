/// Fictional mineral names.

use crate::core::combinators::OneOf;
use crate::core::component::{Component, ComponentError};
use crate::core::random::{choose_one, RandomSource};
use crate::generators::element::split_last;
use crate::names::{GivenName, WeirdName};
use crate::one_of;
use crate::words::lists::WordLists;

const SUFFIXES: [&str; 3] = ["ite", "alt", "um"];
const JOINING_LETTERS: [&str; 3] = ["b", "m", "n"];

/// A lower-cased root with a mineral suffix ("jasperite", "adanalt").
#[derive(Debug, Clone)]
pub struct FictionalMineralName {
    root: OneOf,
}

impl FictionalMineralName {
    pub fn new() -> Result<Self, ComponentError> {
        Self::from_lists(WordLists::global())
    }

    pub fn from_lists(lists: &WordLists) -> Result<Self, ComponentError> {
        Ok(Self {
            root: one_of![GivenName::from_lists(lists, None), WeirdName::plain(2)?]?,
        })
    }
}

impl Component for FictionalMineralName {
    fn render(&self, rng: &mut dyn RandomSource) -> Result<String, ComponentError> {
        let root = self.root.render(rng)?.to_lowercase();
        let (stem, last) = split_last(&root)?;
        let suffix = choose_one(rng, &SUFFIXES, "mineral suffixes")?;

        Ok(match last {
            'a' | 'o' | 'u' => {
                let joint = choose_one(rng, &JOINING_LETTERS, "joining letters")?;
                format!("{}{}{}", root, joint, suffix)
            }
            'e' | 'y' | 'i' => format!("{}{}", stem, suffix),
            _ => format!("{}{}", root, suffix),
        })
    }
}
