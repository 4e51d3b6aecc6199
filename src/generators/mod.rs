//! Composite generators assembled from words, names and combinators.
//!
//! Every generator is built once against a `WordLists` (the process-wide
//! bundle by default) and then rendered any number of times.

pub mod band;
pub mod element;
pub mod gang;
pub mod mineral;
pub mod ship;
pub mod town;
pub mod work_title;

pub use band::BandName;
pub use element::FictionalElementName;
pub use gang::CriminalGangName;
pub use mineral::FictionalMineralName;
pub use ship::NauticalShipName;
pub use town::TownName;
pub use work_title::{SimpleWorkTitle, UnusualWorkTitle, WorkTitle};
