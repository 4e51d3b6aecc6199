/// Synthetic names stitched together from open syllables.

use crate::core::component::{Component, ComponentError};
use crate::core::random::{choose_one, coin, RandomSource};
use crate::core::strings::first_upper;

const OPEN_SYLLABLES: &[&str] = &[
    "a", "ba", "be", "bi", "bo", "bu", "by", "ca", "cha", "che", "chi", "co", "cho", "chu", "chy",
    "da", "de", "di", "do", "du", "dy", "e", "fa", "fe", "fi", "fo", "fu", "fy", "ga", "ge", "gi",
    "go", "gu", "gy", "ha", "he", "hi", "ho", "hu", "hy", "i", "ja", "je", "ji", "jo", "ju", "jy",
    "ka", "ke", "ki", "ko", "ku", "ky", "la", "le", "li", "lo", "lu", "ly", "ma", "me", "mi", "mo",
    "mu", "my", "na", "ne", "ni", "no", "nu", "ny", "o", "pa", "pe", "pi", "po", "pu", "py", "qua",
    "que", "ra", "re", "ri", "ro", "ru", "ry", "sa", "se", "si", "so", "su", "ta", "te", "ti", "to",
    "tu", "ty", "u", "va", "ve", "vi", "vo", "vu", "vy", "wa", "we", "wi", "wo", "wu", "wy", "xa",
    "xe", "xi", "xo", "xu", "ya", "ye", "yi", "yo", "yu", "za", "ze", "zi", "zo", "zu",
];

const ENDING_SOUNDS: &[&str] = &[
    "bb", "c", "ck", "ch", "d", "dd", "l", "ll", "m", "mm", "n", "nn", "p", "pp", "r", "rr", "s",
    "ss", "t", "tt", "w", "x",
];

/// Generates names such as "Zoquevi", "Ka'liru" or "Dy-mosoll".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeirdName {
    syllable_count: usize,
    allow_hyphen: bool,
    allow_apostrophe: bool,
}

impl WeirdName {
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

    /// Name with neither hyphen nor apostrophe, used as a word root.
    pub fn plain(syllable_count: usize) -> Result<Self, ComponentError> {
        Self::with_options(syllable_count, false, false)
    }

    pub fn syllable_count(&self) -> usize {
        self.syllable_count
    }
}

impl Component for WeirdName {
    fn render(&self, rng: &mut dyn RandomSource) -> Result<String, ComponentError> {
        let count = self.syllable_count;
        let will_use_hyphen = count > 2 && self.allow_hyphen && coin(rng);
        let will_use_apostrophe = count > 2 && self.allow_apostrophe && coin(rng);

        // Marks go after a syllable in 1..count; an apostrophe wins a tie.
        let hyphen_after = if will_use_hyphen {
            rng.next_int(1, count as i64 - 1) as usize
        } else {
            0
        };
        let apostrophe_after = if will_use_apostrophe {
            rng.next_int(1, count as i64 - 1) as usize
        } else {
            0
        };

        let mut text = String::new();
        for syllable in 1..=count {
            text.push_str(choose_one(rng, OPEN_SYLLABLES, "open syllables")?);

            if syllable == apostrophe_after {
                text.push('\'');
            } else if syllable == hyphen_after {
                text.push('-');
            }
        }

        if coin(rng) {
            text.push_str(choose_one(rng, ENDING_SOUNDS, "ending sounds")?);
        }

        Ok(first_upper(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn rejects_zero_syllables() {
        assert!(matches!(
            WeirdName::new(0).unwrap_err(),
            ComponentError::InvalidConfiguration(_)
        ));
    }

    #[test]
    fn has_uppercase_start() {
        let name = WeirdName::new(3).unwrap();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let value = name.render(&mut rng).unwrap();
            assert!(value.chars().next().unwrap().is_uppercase(), "{}", value);
        }
    }

    #[test]
    fn plain_names_have_no_marks() {
        let name = WeirdName::plain(4).unwrap();
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let value = name.render(&mut rng).unwrap();
            assert!(value.chars().all(char::is_alphabetic), "{}", value);
        }
    }

    #[test]
    fn two_syllables_never_marked() {
        let name = WeirdName::new(2).unwrap();
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let value = name.render(&mut rng).unwrap();
            assert!(!value.contains('-') && !value.contains('\''), "{}", value);
        }
    }

    #[test]
    fn marks_never_trail_the_syllables() {
        let name = WeirdName::new(3).unwrap();
        let mut saw_mark = false;
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let value = name.render(&mut rng).unwrap();
            assert!(!value.ends_with('-') && !value.ends_with('\''), "{}", value);
            assert!(value.matches('-').count() <= 1);
            assert!(value.matches('\'').count() <= 1);
            saw_mark |= value.contains('-') || value.contains('\'');
        }
        assert!(saw_mark);
    }

    #[test]
    fn single_syllable_is_valid() {
        let name = WeirdName::new(1).unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        assert!(!name.render(&mut rng).unwrap().is_empty());
    }
}
