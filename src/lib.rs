//! Wordsmith: procedural text from composable components.
//!
//! Small components (words, names, literals) are combined into trees with
//! sequences, random choices and casing decorators. Rendering a tree walks
//! it once against a caller-supplied random source, so a seeded source
//! always yields the same text.

pub mod core;
pub mod generators;
pub mod names;
pub mod specials;
pub mod words;

pub use crate::core::combinators::{
    either, join, maybe, one_of, spaced, text, weighted_one_of, Either, Empty, Literal, Maybe,
    OneOf, RollTable, Sequence, WeightedOneOf,
};
pub use crate::core::component::{
    BoxedComponent, Component, ComponentError, ComponentExt, IntoComponent,
};
pub use crate::core::decorators::{
    Capitalized, FirstUppercased, PossessiveForm, PrefixedByArticle, PrefixedByDeterminer,
    TitleCased,
};
pub use crate::core::random::{system_source, RandomSource};
pub use crate::generators::{
    BandName, CriminalGangName, FictionalElementName, FictionalMineralName, NauticalShipName,
    SimpleWorkTitle, TownName, UnusualWorkTitle, WorkTitle,
};
pub use crate::names::{AncientName, BinaryGender, GivenName, PersonName, Surname, WeirdName};
pub use crate::specials::{ExoticCharacter, ReadableIdentifier};
pub use crate::words::lists::{WordListError, WordLists};
