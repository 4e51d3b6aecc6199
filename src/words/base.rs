/// Word leaves: single picks from a word list, some with plural or tense forms.

use crate::core::component::{Component, ComponentError};
use crate::core::random::{choose_one, RandomSource};
use crate::words::lists::{
    VerbList, WordList, WordLists, ADJECTIVES, ADVERBS, CHEMICAL_COMPOUND_NAMES, NOUNS,
};
use crate::words::plural::{pluralize, pluralize_villain, pluralize_weapon};
use crate::words::vocabulary;

/// A uniform pick from a loaded word list.
#[derive(Debug, Clone)]
pub struct ListWord {
    name: String,
    options: WordList,
}

impl ListWord {
    pub fn new(name: &str, options: WordList) -> Self {
        Self {
            name: name.to_string(),
            options,
        }
    }

    /// Capture the named list; a missing list becomes an empty one.
    pub fn from_lists(lists: &WordLists, name: &str) -> Self {
        Self::new(name, lists.list(name))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }
}

impl Component for ListWord {
    fn render(&self, rng: &mut dyn RandomSource) -> Result<String, ComponentError> {
        choose_one(rng, &self.options, &self.name).cloned()
    }
}

/// A uniform pick from a vocabulary compiled into the library.
#[derive(Debug, Clone, Copy)]
pub struct StaticWord {
    name: &'static str,
    options: &'static [&'static str],
}

impl StaticWord {
    pub const fn new(name: &'static str, options: &'static [&'static str]) -> Self {
        Self { name, options }
    }

    pub fn options(&self) -> &'static [&'static str] {
        self.options
    }
}

impl Component for StaticWord {
    fn render(&self, rng: &mut dyn RandomSource) -> Result<String, ComponentError> {
        choose_one(rng, self.options, self.name).map(|w| w.to_string())
    }
}

/// Declares a leaf backed by a named list in `WordLists`.
macro_rules! list_word {
    ($(#[$meta:meta])* $name:ident => $list:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name($crate::words::base::ListWord);

        impl $name {
            /// Pick from the process-wide word lists.
            pub fn new() -> Self {
                Self::from_lists($crate::words::lists::WordLists::global())
            }

            pub fn from_lists(lists: &$crate::words::lists::WordLists) -> Self {
                Self($crate::words::base::ListWord::from_lists(lists, $list))
            }

            pub fn with_options(options: $crate::words::lists::WordList) -> Self {
                Self($crate::words::base::ListWord::new($list, options))
            }

            pub fn options(&self) -> &[String] {
                self.0.options()
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl $crate::core::component::Component for $name {
            fn render(
                &self,
                rng: &mut dyn $crate::core::random::RandomSource,
            ) -> Result<String, $crate::core::component::ComponentError> {
                $crate::core::component::Component::render(&self.0, rng)
            }
        }
    };
}

pub(crate) use list_word;

/// Declares a leaf backed by a built-in vocabulary.
macro_rules! static_word {
    ($(#[$meta:meta])* $name:ident => $words:expr, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        pub struct $name;

        impl $name {
            pub fn options() -> &'static [&'static str] {
                $words
            }
        }

        impl Component for $name {
            fn render(&self, rng: &mut dyn RandomSource) -> Result<String, ComponentError> {
                StaticWord::new($label, $words).render(rng)
            }
        }
    };
}

list_word!(
    /// Random adjective.
    Adjective => ADJECTIVES
);

list_word!(
    /// Random adverb.
    Adverb => ADVERBS
);

list_word!(
    /// Random chemical compound name.
    ChemicalCompoundName => CHEMICAL_COMPOUND_NAMES
);

static_word!(
    /// Adjective suited to a place ("misty", "haunted").
    LocationAdjective => vocabulary::LOCATION_ADJECTIVES, "location adjectives"
);

static_word!(
    /// Martial or social concept ("vengeance", "liberty").
    MartialSocialConcept => vocabulary::MARTIAL_SOCIAL_CONCEPTS, "martial social concepts"
);

static_word!(Emotion => vocabulary::EMOTIONS, "emotions");

static_word!(ShipNameObject => vocabulary::SHIP_NAME_OBJECTS, "ship name objects");

static_word!(ShipNameColor => vocabulary::SHIP_NAME_COLORS, "ship name colors");

static_word!(ShipNameAdjective => vocabulary::SHIP_NAME_ADJECTIVES, "ship name adjectives");

static_word!(TimeOfDay => vocabulary::TIMES_OF_DAY, "times of day");

/// Random noun, optionally pluralized.
#[derive(Debug, Clone)]
pub struct Noun {
    words: ListWord,
    plural: bool,
}

impl Noun {
    pub fn new() -> Self {
        Self::from_lists(WordLists::global())
    }

    pub fn plural() -> Self {
        Self::new().with_plural(true)
    }

    pub fn from_lists(lists: &WordLists) -> Self {
        Self {
            words: ListWord::from_lists(lists, NOUNS),
            plural: false,
        }
    }

    pub fn with_options(options: WordList) -> Self {
        Self {
            words: ListWord::new(NOUNS, options),
            plural: false,
        }
    }

    pub fn with_plural(mut self, plural: bool) -> Self {
        self.plural = plural;
        self
    }

    pub fn options(&self) -> &[String] {
        self.words.options()
    }
}

impl Default for Noun {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Noun {
    fn render(&self, rng: &mut dyn RandomSource) -> Result<String, ComponentError> {
        let word = self.words.render(rng)?;
        Ok(if self.plural { pluralize(&word) } else { word })
    }
}

/// Villainous person noun ("rogue", "highwayman"), optionally pluralized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VillainousPersonNoun {
    pub plural: bool,
}

impl VillainousPersonNoun {
    pub fn new() -> Self {
        Self { plural: false }
    }

    pub fn plural() -> Self {
        Self { plural: true }
    }

    pub fn options() -> &'static [&'static str] {
        vocabulary::VILLAINOUS_PERSON_NOUNS
    }
}

impl Component for VillainousPersonNoun {
    fn render(&self, rng: &mut dyn RandomSource) -> Result<String, ComponentError> {
        let word = *choose_one(rng, vocabulary::VILLAINOUS_PERSON_NOUNS, "villainous person nouns")?;
        Ok(if self.plural {
            pluralize_villain(word)
        } else {
            word.to_string()
        })
    }
}

/// Primitive weapon ("halberd", "knife"), optionally pluralized.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PrimitiveWeapon {
    pub plural: bool,
}

impl PrimitiveWeapon {
    pub fn new() -> Self {
        Self { plural: false }
    }

    pub fn plural() -> Self {
        Self { plural: true }
    }

    pub fn options() -> &'static [&'static str] {
        vocabulary::PRIMITIVE_WEAPONS
    }
}

impl Component for PrimitiveWeapon {
    fn render(&self, rng: &mut dyn RandomSource) -> Result<String, ComponentError> {
        let word = *choose_one(rng, vocabulary::PRIMITIVE_WEAPONS, "primitive weapons")?;
        Ok(if self.plural {
            pluralize_weapon(word)
        } else {
            word.to_string()
        })
    }
}

/// Column of a verb row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum VerbTense {
    #[default]
    Base,
    Past,
    PastParticiple,
    Present,
    PresentParticiple,
}

impl VerbTense {
    pub fn index(self) -> usize {
        match self {
            VerbTense::Base => 0,
            VerbTense::Past => 1,
            VerbTense::PastParticiple => 2,
            VerbTense::Present => 3,
            VerbTense::PresentParticiple => 4,
        }
    }
}

/// Random verb in a fixed tense.
#[derive(Debug, Clone)]
pub struct Verb {
    rows: VerbList,
    tense: VerbTense,
}

impl Verb {
    pub fn new(tense: VerbTense) -> Self {
        Self::from_lists(WordLists::global(), tense)
    }

    pub fn from_lists(lists: &WordLists, tense: VerbTense) -> Self {
        Self::with_options(lists.verbs(), tense)
    }

    pub fn with_options(rows: VerbList, tense: VerbTense) -> Self {
        Self { rows, tense }
    }

    pub fn tense(&self) -> VerbTense {
        self.tense
    }

    pub fn rows(&self) -> &VerbList {
        &self.rows
    }
}

impl Component for Verb {
    fn render(&self, rng: &mut dyn RandomSource) -> Result<String, ComponentError> {
        let row = choose_one(rng, &self.rows, "Verbs")?;
        Ok(row[self.tense.index()].clone())
    }
}

/// Personal pronoun for a given person and number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pronoun {
    pub singular: bool,
    pub third_person: bool,
}

impl Pronoun {
    pub fn new(singular: bool, third_person: bool) -> Self {
        Self {
            singular,
            third_person,
        }
    }
}

impl Component for Pronoun {
    fn render(&self, rng: &mut dyn RandomSource) -> Result<String, ComponentError> {
        let options: &[&str] = match (self.third_person, self.singular) {
            (true, true) => &["he", "she", "it"],
            (true, false) => return Ok("they".to_string()),
            (false, true) => &["I", "you"],
            (false, false) => &["we", "you"],
        };
        choose_one(rng, options, "pronouns").map(|p| p.to_string())
    }
}
