/// Titles for books, songs and other works.

use crate::core::combinators::{either, maybe, Either};
use crate::core::component::{BoxedComponent, Component, ComponentError, ComponentExt};
use crate::core::decorators::TitleCased;
use crate::core::random::RandomSource;
use crate::core::strings::title_case;
use crate::generators::gang::CriminalGangName;
use crate::generators::ship::NauticalShipName;
use crate::generators::town::TownName;
use crate::names::PersonName;
use crate::words::base::{
    Adjective, Adverb, Emotion, MartialSocialConcept, Noun, Pronoun, TimeOfDay, Verb, VerbTense,
};
use crate::words::lists::WordLists;
use crate::{one_of, spaced, text};

/// How many "Concept: ..." prefixes an unusual title may stack.
const MAX_NESTING: usize = 3;

const TREATISE_OPENERS: [&str; 6] = [
    "A Treatise on",
    "On",
    "A Discussion of",
    "An Analysis of",
    "Commentary on",
    "An Examination of",
];
const REVISIONS: [&str; 6] = ["Revisited", "Revised", "Reimagined", "Renewed", "Rethought", "Redux"];
const CONJUNCTIONS: [&str; 7] = ["When", "Where", "Why", "While", "As", "Until", "Because"];
const MODALS: [&str; 5] = ["Will", "Shall", "Can", "Must", "May"];

/// Mostly simple titles, sometimes unusual ones.
#[derive(Debug, Clone)]
pub struct WorkTitle {
    inner: Either,
}

impl WorkTitle {
    pub fn new() -> Result<Self, ComponentError> {
        Self::from_lists(WordLists::global())
    }

    pub fn from_lists(lists: &WordLists) -> Result<Self, ComponentError> {
        let simple = SimpleWorkTitle::from_lists(lists)?.boxed();
        let unusual = UnusualWorkTitle::with_simple(lists, simple.clone())?;
        Ok(Self {
            inner: either(simple, unusual, 0.85)?,
        })
    }
}

impl Component for WorkTitle {
    fn render(&self, rng: &mut dyn RandomSource) -> Result<String, ComponentError> {
        self.inner.render(rng)
    }
}

/// "The Misty Lanterns of Port Hadley", "A Treatise on Vengeance".
#[derive(Debug, Clone)]
pub struct SimpleWorkTitle {
    inner: TitleCased,
}

impl SimpleWorkTitle {
    pub fn new() -> Result<Self, ComponentError> {
        Self::from_lists(WordLists::global())
    }

    pub fn from_lists(lists: &WordLists) -> Result<Self, ComponentError> {
        let adjective = Adjective::from_lists(lists).boxed();
        let noun = Noun::from_lists(lists).boxed();
        let nouns = Noun::from_lists(lists).with_plural(true).boxed();
        let noun_either = either(&nouns, &noun, 0.5)?.boxed();
        let participle = Verb::from_lists(lists, VerbTense::PresentParticiple).boxed();
        let person = PersonName::from_lists(lists, None).boxed();
        let town = TownName::from_lists(lists)?.boxed();
        let ship = NauticalShipName::from_lists(lists)?;

        let options = one_of![
            &noun_either,
            noun.clone().prefixed_by_article(),
            noun.clone().prefixed_by_determiner(),
            &adjective,
            Adverb::from_lists(lists),
            &participle,
            &person,
            &town,
            Emotion,
            Emotion.prefixed_by_determiner(),
            CriminalGangName::from_lists(lists)?,
            spaced![either(Emotion, MartialSocialConcept, 0.5)?, "in", &town],
            spaced![&adjective, &participle],
            spaced![TimeOfDay, Verb::from_lists(lists, VerbTense::Present)],
            spaced![TimeOfDay, &noun_either],
            spaced![&adjective, &noun_either],
            spaced![adjective.clone().prefixed_by_article(), &noun],
            spaced![adjective.clone().prefixed_by_determiner(), &noun],
            spaced![MartialSocialConcept, "and", MartialSocialConcept],
            spaced![one_of(TREATISE_OPENERS)?, either(MartialSocialConcept, &nouns, 0.5)?],
            spaced![
                "The",
                maybe(&adjective, 0.5)?,
                one_of(["Adventures", "Journey", "Journeys", "Travels", "Tale", "Voyage"])?,
                "of the",
                text!["'", ship, "'"],
            ],
            spaced![
                "The",
                maybe(&adjective, 0.5)?,
                one_of(["Adventures", "Journey", "Journeys", "Travels", "Tale", "Escapades"])?,
                "of",
                &person,
            ],
            spaced![
                "The",
                maybe(&adjective, 0.5)?,
                &noun_either,
                either("in", "of", 0.5)?,
                &town,
            ],
        ]?;

        Ok(Self {
            inner: TitleCased::new(options),
        })
    }
}

impl Component for SimpleWorkTitle {
    fn render(&self, rng: &mut dyn RandomSource) -> Result<String, ComponentError> {
        self.inner.render(rng)
    }
}

/// Odder titles: "Joy and Dread", "When the Harbor Sleeps", "Valor: Why We Run".
///
/// The last option prefixes a concept and nests another unusual title; the
/// nesting option is withheld once `MAX_NESTING` prefixes are stacked.
#[derive(Debug, Clone)]
pub struct UnusualWorkTitle {
    options: Vec<BoxedComponent>,
    concept: BoxedComponent,
}

impl UnusualWorkTitle {
    pub fn new() -> Result<Self, ComponentError> {
        Self::from_lists(WordLists::global())
    }

    pub fn from_lists(lists: &WordLists) -> Result<Self, ComponentError> {
        Self::with_simple(lists, SimpleWorkTitle::from_lists(lists)?.boxed())
    }

    fn with_simple(lists: &WordLists, simple: BoxedComponent) -> Result<Self, ComponentError> {
        let adjective = Adjective::from_lists(lists).boxed();
        let noun = Noun::from_lists(lists).boxed();
        let present = Verb::from_lists(lists, VerbTense::Present).boxed();
        let base = Verb::from_lists(lists, VerbTense::Base).boxed();
        let town = TownName::from_lists(lists)?.boxed();
        let conjunction = one_of(CONJUNCTIONS)?.boxed();

        let plural_pronoun = one_of![Pronoun::new(false, true), Pronoun::new(false, false)]?;
        let any_pronoun = one_of![
            Pronoun::new(true, true),
            Pronoun::new(true, false),
            Pronoun::new(false, true),
            Pronoun::new(false, false),
        ]?;
        let clause = either(
            one_of![
                spaced![plural_pronoun, &base],
                spaced![Pronoun::new(true, false), &base],
                spaced![Pronoun::new(true, true), &present],
            ]?,
            spaced![any_pronoun, Verb::from_lists(lists, VerbTense::Past)],
            0.5,
        )?;

        let options: Vec<BoxedComponent> = vec![
            spaced![Emotion, Adverb::from_lists(lists), &present].boxed(),
            spaced![Emotion, "and", Emotion].boxed(),
            spaced![Emotion, maybe(text!["and ", Emotion], 0.5)?, "in", &town].boxed(),
            spaced![text!["'", simple, "'"], one_of(REVISIONS)?].boxed(),
            spaced![
                Verb::from_lists(lists, VerbTense::PresentParticiple),
                noun.clone().prefixed_by_determiner(),
            ]
            .boxed(),
            spaced![&conjunction, noun.clone().prefixed_by_article(), &present].boxed(),
            spaced![&conjunction, clause].boxed(),
            text![
                &adjective,
                maybe(text![", ", &adjective, ","], 0.5)?,
                " and ",
                &adjective,
            ]
            .boxed(),
            spaced![
                noun.clone().prefixed_by_determiner(),
                one_of![
                    &present,
                    spaced![one_of(MODALS)?, &base],
                    spaced!["Is", Verb::from_lists(lists, VerbTense::PresentParticiple)],
                    spaced!["Has", Verb::from_lists(lists, VerbTense::PastParticiple)],
                ]?,
            ]
            .boxed(),
            either(
                spaced![&noun, "and", &noun],
                spaced![
                    noun.clone().prefixed_by_determiner(),
                    "and",
                    noun.clone().prefixed_by_determiner(),
                ],
                0.5,
            )?
            .boxed(),
        ];

        Ok(Self {
            options,
            concept: text![MartialSocialConcept, ":"].boxed(),
        })
    }

    fn render_nested(
        &self,
        rng: &mut dyn RandomSource,
        depth: usize,
    ) -> Result<String, ComponentError> {
        let choices = if depth < MAX_NESTING {
            self.options.len() + 1
        } else {
            self.options.len()
        };
        let index = rng.next_index(choices);
        let text = match self.options.get(index) {
            Some(option) => option.render(rng)?,
            None => {
                let concept = self.concept.render(rng)?;
                let rest = self.render_nested(rng, depth + 1)?;
                if rest.is_empty() {
                    concept
                } else {
                    format!("{} {}", concept, rest)
                }
            }
        };
        Ok(title_case(&text))
    }
}

impl Component for UnusualWorkTitle {
    fn render(&self, rng: &mut dyn RandomSource) -> Result<String, ComponentError> {
        self.render_nested(rng, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::testing::ScriptedSource;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn tiny_lists() -> WordLists {
        let mut lists = WordLists::new();
        lists.insert_list(crate::words::lists::ADJECTIVES, ["quiet"]);
        lists.insert_list(crate::words::lists::ADVERBS, ["softly"]);
        lists.insert_list(crate::words::lists::NOUNS, ["harbor"]);
        lists.insert_list(crate::words::lists::MALE_GIVEN_NAMES, ["jasper"]);
        lists.insert_list(crate::words::lists::FEMALE_GIVEN_NAMES, ["ada"]);
        lists.insert_list(crate::words::lists::SURNAMES, ["hadley"]);
        lists.set_verbs(vec![[
            "sleep".to_string(),
            "slept".to_string(),
            "slept".to_string(),
            "sleeps".to_string(),
            "sleeping".to_string(),
        ]]);
        lists
    }

    #[test]
    fn adjective_list_form() {
        let title = UnusualWorkTitle::from_lists(&tiny_lists()).unwrap();
        let mut rng = ScriptedSource::new().with_indices(&[7]).with_floats(&[0.9]);
        assert_eq!(title.render(&mut rng).unwrap(), "Quiet and Quiet");
        let mut rng = ScriptedSource::new().with_indices(&[7]).with_floats(&[0.1]);
        assert_eq!(title.render(&mut rng).unwrap(), "Quiet, Quiet, and Quiet");
    }

    #[test]
    fn conjunction_with_article() {
        let title = UnusualWorkTitle::from_lists(&tiny_lists()).unwrap();
        // Option, conjunction "When", article "the".
        let mut rng = ScriptedSource::new().with_indices(&[5, 0, 0, 1, 0]);
        assert_eq!(title.render(&mut rng).unwrap(), "When the Harbor Sleeps");
    }

    #[test]
    fn nesting_is_bounded() {
        let title = UnusualWorkTitle::from_lists(&tiny_lists()).unwrap();
        // Keep asking for the nesting option; past the limit it clamps to the
        // last ordinary option.
        let mut rng = ScriptedSource::new()
            .with_indices(&[99, 0, 99, 0, 99, 0, 99, 0, 0])
            .with_floats(&[0.1]);
        let rendered = title.render(&mut rng).unwrap();
        assert_eq!(rendered.matches(':').count(), MAX_NESTING);
        assert!(rendered.ends_with("Harbor and Harbor"), "{rendered}");
    }

    #[test]
    fn simple_titles_are_title_cased() {
        let title = SimpleWorkTitle::new().unwrap();
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let rendered = title.render(&mut rng).unwrap();
            assert!(!rendered.is_empty());
            let first = rendered.chars().find(|c| c.is_alphabetic()).unwrap();
            assert!(first.is_uppercase(), "{rendered}");
        }
    }

    #[test]
    fn work_titles_repeat_per_seed() {
        let title = WorkTitle::new().unwrap();
        for seed in 0..20 {
            let first = title.render(&mut StdRng::seed_from_u64(seed)).unwrap();
            let second = title.render(&mut StdRng::seed_from_u64(seed)).unwrap();
            assert_eq!(first, second);
        }
    }
}
