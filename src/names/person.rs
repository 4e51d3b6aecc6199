/// Given names, surnames, and full person names from the loaded lists.

use crate::core::combinators::Sequence;
use crate::core::component::{BoxedComponent, Component, ComponentError, ComponentExt};
use crate::core::random::{coin, RandomSource};
use crate::words::base::{list_word, ListWord};
use crate::words::lists::{WordLists, FEMALE_GIVEN_NAMES, MALE_GIVEN_NAMES, SURNAMES};

/// Which given-name list to draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryGender {
    Male,
    Female,
}

/// A given name. Without a fixed gender, one coin draw picks the list.
#[derive(Debug, Clone)]
pub struct GivenName {
    gender: Option<BinaryGender>,
    male: ListWord,
    female: ListWord,
}

impl GivenName {
    pub fn new(gender: Option<BinaryGender>) -> Self {
        Self::from_lists(WordLists::global(), gender)
    }

    pub fn any() -> Self {
        Self::new(None)
    }

    pub fn male() -> Self {
        Self::new(Some(BinaryGender::Male))
    }

    pub fn female() -> Self {
        Self::new(Some(BinaryGender::Female))
    }

    pub fn from_lists(lists: &WordLists, gender: Option<BinaryGender>) -> Self {
        Self {
            gender,
            male: ListWord::from_lists(lists, MALE_GIVEN_NAMES),
            female: ListWord::from_lists(lists, FEMALE_GIVEN_NAMES),
        }
    }

    pub fn male_options(&self) -> &[String] {
        self.male.options()
    }

    pub fn female_options(&self) -> &[String] {
        self.female.options()
    }
}

impl Default for GivenName {
    fn default() -> Self {
        Self::any()
    }
}

impl Component for GivenName {
    fn render(&self, rng: &mut dyn RandomSource) -> Result<String, ComponentError> {
        let gender = match self.gender {
            Some(gender) => gender,
            None if coin(rng) => BinaryGender::Male,
            None => BinaryGender::Female,
        };
        match gender {
            BinaryGender::Male => self.male.render(rng),
            BinaryGender::Female => self.female.render(rng),
        }
    }
}

list_word!(
    /// A family name.
    Surname => SURNAMES
);

/// Given name and surname separated by a space.
#[derive(Debug, Clone)]
pub struct PersonName {
    inner: Sequence,
}

impl PersonName {
    pub fn new(gender: Option<BinaryGender>) -> Self {
        Self::from_lists(WordLists::global(), gender)
    }

    pub fn from_lists(lists: &WordLists, gender: Option<BinaryGender>) -> Self {
        let parts: [BoxedComponent; 2] = [
            GivenName::from_lists(lists, gender).boxed(),
            Surname::from_lists(lists).boxed(),
        ];
        Self {
            inner: Sequence::new(parts, " "),
        }
    }
}

impl Default for PersonName {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Component for PersonName {
    fn render(&self, rng: &mut dyn RandomSource) -> Result<String, ComponentError> {
        self.inner.render(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn gendered_given_names() {
        let male = GivenName::male();
        let female = GivenName::female();
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert!(male.male_options().contains(&male.render(&mut rng).unwrap()));
            assert!(female.female_options().contains(&female.render(&mut rng).unwrap()));
        }
    }

    #[test]
    fn ungendered_uses_both_lists() {
        let any = GivenName::any();
        let (mut male, mut female) = (false, false);
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            let name = any.render(&mut rng).unwrap();
            male |= any.male_options().contains(&name);
            female |= any.female_options().contains(&name);
        }
        assert!(male && female);
    }

    #[test]
    fn surname_from_list() {
        let surname = Surname::new();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(surname.options().contains(&surname.render(&mut rng).unwrap()));
    }

    #[test]
    fn person_name_parts() {
        let given = GivenName::male();
        let surname = Surname::new();
        let person = PersonName::new(Some(BinaryGender::Male));
        let mut rng = StdRng::seed_from_u64(2);
        let name = person.render(&mut rng).unwrap();
        let (first, last) = name.split_once(' ').unwrap();
        assert!(given.male_options().iter().any(|n| n == first));
        assert!(surname.options().iter().any(|n| n == last));
    }

    #[test]
    fn empty_lists_fail() {
        let lists = WordLists::new();
        let mut rng = StdRng::seed_from_u64(0);
        let err = PersonName::from_lists(&lists, None).render(&mut rng).unwrap_err();
        assert!(matches!(err, ComponentError::EmptyOptions(_)));
    }
}
