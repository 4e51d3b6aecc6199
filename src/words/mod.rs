//! Word leaves, their backing lists, and pluralization.

pub mod base;
pub mod lists;
pub mod plural;
pub mod vocabulary;
