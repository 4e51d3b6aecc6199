/// Ancient-style names built syllable by syllable from a small phoneme set.

use crate::core::component::{Component, ComponentError};
use crate::core::random::{choose_one, coin, roll, RandomSource};
use crate::core::strings::first_upper;

const SINGLE_CONSONANTS: &[&str] = &["t", "m", "k", "h", "l", "p", "w"];
const DOUBLE_CONSONANTS: &[&str] = &["ph", "ch", "th"];
const SINGLE_VOWELS: &[&str] = &["a", "i", "o", "u", "e"];
const DOUBLE_VOWELS: &[&str] = &["ai", "au", "ah"];

/// Shape of one syllable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SyllablePattern {
    ConsonantVowel,
    VowelConsonant,
    VowelOnly,
}

impl SyllablePattern {
    /// Pattern for a `1..=100` roll: 65% CV, 20% VC, 15% V.
    fn from_roll(roll: i64) -> Self {
        match roll {
            i64::MIN..=65 => SyllablePattern::ConsonantVowel,
            66..=85 => SyllablePattern::VowelConsonant,
            _ => SyllablePattern::VowelOnly,
        }
    }

    fn ends_with_vowel(self) -> bool {
        matches!(self, SyllablePattern::ConsonantVowel | SyllablePattern::VowelOnly)
    }

    fn starts_with_vowel(self) -> bool {
        matches!(self, SyllablePattern::VowelConsonant | SyllablePattern::VowelOnly)
    }
}

/// Generates names such as "Tomakai", "Pe'ulah" or "Kiwatho-peh".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AncientName {
    syllable_count: usize,
    allow_hyphen: bool,
    allow_apostrophe: bool,
}

impl AncientName {
    /// Name with hyphen and apostrophe both allowed.
    pub fn new(syllable_count: usize) -> Result<Self, ComponentError> {
        Self::with_options(syllable_count, true, true)
    }

    pub fn with_options(
        syllable_count: usize,
        allow_hyphen: bool,
        allow_apostrophe: bool,
    ) -> Result<Self, ComponentError> {
        if syllable_count < 1 {
            return Err(ComponentError::InvalidConfiguration(
                "syllable count must be greater than 0".to_string(),
            ));
        }
        Ok(Self {
            syllable_count,
            allow_hyphen,
            allow_apostrophe,
        })
    }

    pub fn syllable_count(&self) -> usize {
        self.syllable_count
    }

    fn random_consonant(rng: &mut dyn RandomSource) -> Result<&'static str, ComponentError> {
        let table = if roll(rng, 0.90) {
            SINGLE_CONSONANTS
        } else {
            DOUBLE_CONSONANTS
        };
        choose_one(rng, table, "consonants").copied()
    }

    fn random_vowel(rng: &mut dyn RandomSource) -> Result<&'static str, ComponentError> {
        let table = if roll(rng, 0.95) {
            SINGLE_VOWELS
        } else {
            DOUBLE_VOWELS
        };
        choose_one(rng, table, "vowels").copied()
    }
}

impl Component for AncientName {
    fn render(&self, rng: &mut dyn RandomSource) -> Result<String, ComponentError> {
        let count = self.syllable_count;
        let will_use_hyphen = count > 3 && self.allow_hyphen && roll(rng, 0.25);
        let mut will_try_apostrophe = self.allow_apostrophe && coin(rng);

        // Hyphen goes after a syllable in 3..count, never at the end.
        let hyphen_after = if will_use_hyphen {
            rng.next_int(3, count as i64 - 1) as usize
        } else {
            0
        };

        let mut text = String::new();
        let mut previous: Option<SyllablePattern> = None;

        for syllable in 1..=count {
            let pattern = SyllablePattern::from_roll(rng.next_int(1, 100));
            let consonant = Self::random_consonant(rng)?;
            let vowel = Self::random_vowel(rng)?;

            // An apostrophe only separates two adjacent vowel sounds.
            if will_try_apostrophe
                && previous.is_some_and(SyllablePattern::ends_with_vowel)
                && pattern.starts_with_vowel()
            {
                text.push('\'');
                will_try_apostrophe = false;
            }

            match pattern {
                SyllablePattern::ConsonantVowel => {
                    text.push_str(consonant);
                    text.push_str(vowel);
                }
                SyllablePattern::VowelConsonant => {
                    text.push_str(vowel);
                    text.push_str(consonant);
                }
                SyllablePattern::VowelOnly => text.push_str(vowel),
            }

            previous = Some(pattern);

            if syllable == hyphen_after {
                text.push('-');
            }
        }

        if previous != Some(SyllablePattern::VowelConsonant) && roll(rng, 0.4) {
            text.push_str(Self::random_consonant(rng)?);
        }

        Ok(first_upper(&text))
    }
}
