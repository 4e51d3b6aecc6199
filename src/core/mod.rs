//! Combinator engine: the component abstraction, its combinators and
//! decorators, and the random source every render draws from.

pub mod combinators;
pub mod component;
pub mod decorators;
pub mod random;
pub mod strings;
