/// Fictional chemical element names.

use crate::core::combinators::OneOf;
use crate::core::component::{Component, ComponentError};
use crate::core::random::{choose_one, roll, RandomSource};
use crate::names::{GivenName, Surname, WeirdName};
use crate::one_of;
use crate::words::lists::WordLists;

/// A lower-cased root word with an element-like suffix ("jasperium", "hadleygen").
#[derive(Debug, Clone)]
pub struct FictionalElementName {
    root: OneOf,
}

impl FictionalElementName {
    pub fn new() -> Result<Self, ComponentError> {
        Self::from_lists(WordLists::global())
    }

    pub fn from_lists(lists: &WordLists) -> Result<Self, ComponentError> {
        Ok(Self {
            root: one_of![
                GivenName::from_lists(lists, None),
                Surname::from_lists(lists),
                WeirdName::plain(2)?,
                WeirdName::plain(3)?,
            ]?,
        })
    }
}

impl Component for FictionalElementName {
    fn render(&self, rng: &mut dyn RandomSource) -> Result<String, ComponentError> {
        let root = self.root.render(rng)?.to_lowercase();
        let (stem, last) = split_last(&root)?;

        let suffixed = match last {
            'a' | 'o' | 'u' => {
                let ending = if roll(rng, 0.5) { "gen" } else { "n" };
                format!("{}{}", root, ending)
            }
            'e' => {
                if roll(rng, 0.5) {
                    format!("{}ium", stem)
                } else {
                    format!("{}on", root)
                }
            }
            'h' | 'v' | 'x' => {
                if roll(rng, 0.5) {
                    format!("{}ion", stem)
                } else {
                    format!("{}{}", root, choose_one(rng, &["ium", "ine"], "element endings")?)
                }
            }
            'k' | 'm' | 'n' => {
                let ending = choose_one(rng, &["ium", "ine", "ion"], "element endings")?;
                format!("{}{}", root, ending)
            }
            'y' | 'i' => {
                if roll(rng, 0.5) {
                    format!("{}gen", root)
                } else {
                    format!("{}ium", stem)
                }
            }
            _ => {
                let ending = choose_one(rng, &["ium", "ine", "on"], "element endings")?;
                format!("{}{}", root, ending)
            }
        };
        Ok(suffixed)
    }
}

/// Root without its final character, and that character.
pub(crate) fn split_last(root: &str) -> Result<(&str, char), ComponentError> {
    let last = root
        .chars()
        .last()
        .ok_or_else(|| ComponentError::EmptyOptions("root word".to_string()))?;
    Ok((&root[..root.len() - last.len_utf8()], last))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::testing::ScriptedSource;
    use crate::words::lists::{FEMALE_GIVEN_NAMES, MALE_GIVEN_NAMES, SURNAMES};

    fn lists_with_surname(surname: &str) -> WordLists {
        let mut lists = WordLists::new();
        lists.insert_list(MALE_GIVEN_NAMES, ["Jasper"]);
        lists.insert_list(FEMALE_GIVEN_NAMES, ["Ada"]);
        lists.insert_list(SURNAMES, [surname]);
        lists
    }

    fn render_surname(surname: &str, floats: &[f64], ending: usize) -> String {
        let element = FictionalElementName::from_lists(&lists_with_surname(surname)).unwrap();
        // Root pick (surname), surname index, then the ending pick.
        let mut rng = ScriptedSource::new()
            .with_indices(&[1, 0, ending])
            .with_floats(floats);
        element.render(&mut rng).unwrap()
    }

    #[test]
    fn open_vowel_endings() {
        assert_eq!(render_surname("Costa", &[0.1], 0), "costagen");
        assert_eq!(render_surname("Costa", &[0.9], 0), "costan");
    }

    #[test]
    fn trailing_e_is_dropped_or_kept() {
        assert_eq!(render_surname("Moore", &[0.1], 0), "moorium");
        assert_eq!(render_surname("Moore", &[0.9], 0), "mooreon");
    }

    #[test]
    fn breathy_endings() {
        assert_eq!(render_surname("Marsh", &[0.1], 0), "marsion");
        assert_eq!(render_surname("Marsh", &[0.9], 1), "marshine");
    }

    #[test]
    fn nasal_endings_pick_a_suffix() {
        assert_eq!(render_surname("Flynn", &[], 2), "flynnion");
    }

    #[test]
    fn y_and_i_endings() {
        assert_eq!(render_surname("Hadley", &[0.1], 0), "hadleygen");
        assert_eq!(render_surname("Hadley", &[0.9], 0), "hadleium");
    }

    #[test]
    fn other_endings() {
        assert_eq!(render_surname("Ward", &[], 2), "wardon");
    }

    #[test]
    fn empty_root_is_an_error() {
        assert!(split_last("").is_err());
        assert_eq!(split_last("ab").unwrap(), ("a", 'b'));
    }
}
