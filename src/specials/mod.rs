//! One-off helpers that sit outside the component tree.

pub mod exotic;
pub mod identifier;

pub use exotic::ExoticCharacter;
pub use identifier::{to_base36, ReadableIdentifier};
