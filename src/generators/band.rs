/// Band names.

use crate::core::component::{Component, ComponentError, ComponentExt};
use crate::core::decorators::TitleCased;
use crate::core::random::RandomSource;
use crate::names::GivenName;
use crate::words::base::{Adjective, Noun};
use crate::words::lists::WordLists;
use crate::{one_of, spaced};

/// "The Hollow Lanterns", "Jasper's Orchards".
#[derive(Debug, Clone)]
pub struct BandName {
    inner: TitleCased,
}

impl BandName {
    pub fn new() -> Result<Self, ComponentError> {
        Self::from_lists(WordLists::global())
    }

    pub fn from_lists(lists: &WordLists) -> Result<Self, ComponentError> {
        let adjective = Adjective::from_lists(lists).boxed();
        let noun = Noun::from_lists(lists).boxed();
        let nouns = Noun::from_lists(lists).with_plural(true).boxed();
        let given = GivenName::from_lists(lists, None);

        let forms = one_of![
            spaced!["The", &adjective],
            spaced!["The", &noun],
            spaced!["The", &nouns],
            spaced![&adjective, &noun],
            spaced!["The", &adjective, &nouns],
            spaced![given.clone(), "and the", &nouns],
            spaced![given.possessive_form(), &nouns],
        ]?;

        Ok(Self {
            inner: TitleCased::new(forms),
        })
    }
}

impl Component for BandName {
    fn render(&self, rng: &mut dyn RandomSource) -> Result<String, ComponentError> {
        self.inner.render(rng)
    }
}
