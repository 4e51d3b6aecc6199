/// The component abstraction: one `render` operation over a random source.

use std::fmt;
use std::sync::Arc;
use thiserror::Error;

use crate::core::combinators::Literal;
use crate::core::decorators::{
    Capitalized, FirstUppercased, PossessiveForm, PrefixedByArticle, PrefixedByDeterminer,
    TitleCased,
};
use crate::core::random::{system_source, RandomSource};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComponentError {
    /// Structurally invalid tree, caught at construction time.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    /// A leaf's backing option list is empty at render time.
    #[error("no options available for '{0}'")]
    EmptyOptions(String),
    /// A named character or word set does not exist.
    #[error("unknown set requested: {0}")]
    UnknownSet(String),
}

/// A unit of text generation.
///
/// Rendering is a pure function of the node and the draws it takes from
/// `rng`: the same tree against the same draw sequence always yields the
/// same string, and rendering never mutates the tree.
pub trait Component: fmt::Debug + Send + Sync {
    fn render(&self, rng: &mut dyn RandomSource) -> Result<String, ComponentError>;

    /// Render against a fresh system random source.
    fn generate(&self) -> Result<String, ComponentError> {
        self.render(&mut system_source())
    }
}

/// Shared, immutable handle to any component. Subtrees are shared by cloning.
pub type BoxedComponent = Arc<dyn Component>;

/// Conversion applied at every tree-building boundary.
///
/// Plain strings become `Literal` nodes, so `text!["The", Noun::new()]`
/// reads the way the generated text does.
pub trait IntoComponent {
    fn into_component(self) -> BoxedComponent;
}

impl<C: Component + 'static> IntoComponent for C {
    fn into_component(self) -> BoxedComponent {
        Arc::new(self)
    }
}

impl IntoComponent for BoxedComponent {
    fn into_component(self) -> BoxedComponent {
        self
    }
}

impl IntoComponent for &BoxedComponent {
    fn into_component(self) -> BoxedComponent {
        Arc::clone(self)
    }
}

impl IntoComponent for &str {
    fn into_component(self) -> BoxedComponent {
        Arc::new(Literal::new(self))
    }
}

impl IntoComponent for String {
    fn into_component(self) -> BoxedComponent {
        Arc::new(Literal::new(self))
    }
}

/// Decorator builders available on anything that converts into a component.
pub trait ComponentExt: IntoComponent + Sized {
    /// Capitalize every word.
    fn capitalized(self) -> Capitalized {
        Capitalized::new(self)
    }

    /// Uppercase the first alphabetic character only.
    fn first_upper(self) -> FirstUppercased {
        FirstUppercased::new(self)
    }

    /// Title casing with small-word rules.
    fn title_case(self) -> TitleCased {
        TitleCased::new(self)
    }

    fn prefixed_by_article(self) -> PrefixedByArticle {
        PrefixedByArticle::new(self)
    }

    fn prefixed_by_determiner(self) -> PrefixedByDeterminer {
        PrefixedByDeterminer::new(self)
    }

    fn possessive_form(self) -> PossessiveForm {
        PossessiveForm::new(self)
    }

    fn boxed(self) -> BoxedComponent {
        self.into_component()
    }
}

impl<T: IntoComponent> ComponentExt for T {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::combinators::Empty;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn str_coerces_to_literal() {
        let node = "plain".into_component();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(node.render(&mut rng).unwrap(), "plain");
    }

    #[test]
    fn boxed_component_shares_subtree() {
        let node = Literal::new("shared").boxed();
        let again = (&node).into_component();
        assert!(Arc::ptr_eq(&node, &again));
    }

    #[test]
    fn generate_uses_system_source() {
        assert_eq!(Literal::new("x").generate().unwrap(), "x");
        assert_eq!(Empty.generate().unwrap(), "");
    }

    #[test]
    fn error_messages() {
        let err = ComponentError::UnknownSet("klingon".to_string());
        assert_eq!(err.to_string(), "unknown set requested: klingon");
        let err = ComponentError::EmptyOptions("Nouns".to_string());
        assert!(err.to_string().contains("Nouns"));
    }
}
