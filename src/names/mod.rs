//! Name generators: list-backed person names and phonetic synthesis.

pub mod ancient;
pub mod person;
pub mod weird;

pub use ancient::AncientName;
pub use person::{BinaryGender, GivenName, PersonName, Surname};
pub use weird::WeirdName;
