/// Decorators: wrap one child and post-process its rendered text.
///
/// All transforms are deterministic except the article and determiner
/// prefixes, which take exactly one extra draw after the child renders.

use crate::core::component::{BoxedComponent, Component, ComponentError, IntoComponent};
use crate::core::random::{choose_one, RandomSource};
use crate::core::strings::{capitalize_words, first_upper, starts_with_vowel_sound, title_case};

const ARTICLES: &[&str] = &["a", "the"];
const DETERMINERS: &[&str] = &["a", "the", "my", "your", "our", "her", "his"];

/// Pick from `candidates`, turning "a" into "an" before a vowel sound.
fn pick_article(
    rng: &mut dyn RandomSource,
    candidates: &[&str],
    before_vowel: bool,
    what: &str,
) -> Result<String, ComponentError> {
    let word = *choose_one(rng, candidates, what)?;
    if word == "a" && before_vowel {
        Ok("an".to_string())
    } else {
        Ok(word.to_string())
    }
}

/// "a"/"an" or "the".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Article {
    pub before_vowel: bool,
}

impl Article {
    pub fn new(before_vowel: bool) -> Self {
        Self { before_vowel }
    }
}

impl Component for Article {
    fn render(&self, rng: &mut dyn RandomSource) -> Result<String, ComponentError> {
        pick_article(rng, ARTICLES, self.before_vowel, "articles")
    }
}

/// An article or possessive determiner, with the same "an" handling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Determiner {
    pub before_vowel: bool,
}

impl Determiner {
    pub fn new(before_vowel: bool) -> Self {
        Self { before_vowel }
    }
}

impl Component for Determiner {
    fn render(&self, rng: &mut dyn RandomSource) -> Result<String, ComponentError> {
        pick_article(rng, DETERMINERS, self.before_vowel, "determiners")
    }
}

/// Capitalizes every word of the child.
#[derive(Debug, Clone)]
pub struct Capitalized {
    wrapped: BoxedComponent,
}

impl Capitalized {
    pub fn new(wrapped: impl IntoComponent) -> Self {
        Self {
            wrapped: wrapped.into_component(),
        }
    }
}

impl Component for Capitalized {
    fn render(&self, rng: &mut dyn RandomSource) -> Result<String, ComponentError> {
        Ok(capitalize_words(&self.wrapped.render(rng)?))
    }
}

/// Uppercases the first alphabetic character of the child.
#[derive(Debug, Clone)]
pub struct FirstUppercased {
    wrapped: BoxedComponent,
}

impl FirstUppercased {
    pub fn new(wrapped: impl IntoComponent) -> Self {
        Self {
            wrapped: wrapped.into_component(),
        }
    }
}

impl Component for FirstUppercased {
    fn render(&self, rng: &mut dyn RandomSource) -> Result<String, ComponentError> {
        Ok(first_upper(&self.wrapped.render(rng)?))
    }
}

/// Title-cases the child's full output.
#[derive(Debug, Clone)]
pub struct TitleCased {
    wrapped: BoxedComponent,
}

impl TitleCased {
    pub fn new(wrapped: impl IntoComponent) -> Self {
        Self {
            wrapped: wrapped.into_component(),
        }
    }
}

impl Component for TitleCased {
    fn render(&self, rng: &mut dyn RandomSource) -> Result<String, ComponentError> {
        Ok(title_case(&self.wrapped.render(rng)?))
    }
}

/// Prefixes the child with "a"/"an" or "the".
#[derive(Debug, Clone)]
pub struct PrefixedByArticle {
    wrapped: BoxedComponent,
}

impl PrefixedByArticle {
    pub fn new(wrapped: impl IntoComponent) -> Self {
        Self {
            wrapped: wrapped.into_component(),
        }
    }
}

impl Component for PrefixedByArticle {
    fn render(&self, rng: &mut dyn RandomSource) -> Result<String, ComponentError> {
        let text = self.wrapped.render(rng)?;
        let article = Article::new(starts_with_vowel_sound(&text)).render(rng)?;
        Ok(format!("{} {}", article, text))
    }
}

/// Prefixes the child with a determiner ("a", "the", "my", "your", ...).
#[derive(Debug, Clone)]
pub struct PrefixedByDeterminer {
    wrapped: BoxedComponent,
}

impl PrefixedByDeterminer {
    pub fn new(wrapped: impl IntoComponent) -> Self {
        Self {
            wrapped: wrapped.into_component(),
        }
    }
}

impl Component for PrefixedByDeterminer {
    fn render(&self, rng: &mut dyn RandomSource) -> Result<String, ComponentError> {
        let text = self.wrapped.render(rng)?;
        let determiner = Determiner::new(starts_with_vowel_sound(&text)).render(rng)?;
        Ok(format!("{} {}", determiner, text))
    }
}

/// Possessive form: `'` after a trailing "s", `'s` otherwise.
#[derive(Debug, Clone)]
pub struct PossessiveForm {
    wrapped: BoxedComponent,
}

impl PossessiveForm {
    pub fn new(wrapped: impl IntoComponent) -> Self {
        Self {
            wrapped: wrapped.into_component(),
        }
    }
}

impl Component for PossessiveForm {
    fn render(&self, rng: &mut dyn RandomSource) -> Result<String, ComponentError> {
        let text = self.wrapped.render(rng)?;
        if text.ends_with('s') {
            Ok(format!("{}'", text))
        } else {
            Ok(format!("{}'s", text))
        }
    }
}
