/// Human-readable unique identifiers such as `brave_lantern_1B2C3D4E5F`.

use chrono::{DateTime, Utc};

use crate::core::combinators::{either, join, Either};
use crate::core::component::{Component, ComponentError, ComponentExt};
use crate::core::random::RandomSource;
use crate::words::base::{Adjective, Adverb, Noun, Verb, VerbTense};
use crate::words::lists::WordLists;

/// 2001-01-01T00:00:00Z as microseconds since the Unix epoch.
const REFERENCE_MICROS: i64 = 978_307_200_000_000;

const BASE36_DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Uppercase base-36 rendering of `value`.
pub fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }
    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.iter().rev().map(|d| *d as char).collect()
}

/// Word pair plus a base-36 count of microseconds since 2001, joined by `_`.
///
/// A factory rather than a `Component`: the suffix depends on the clock, so
/// only `make_at` with a fixed instant repeats for a seed.
#[derive(Debug, Clone)]
pub struct ReadableIdentifier {
    prefix: Either,
}

impl ReadableIdentifier {
    pub fn new() -> Result<Self, ComponentError> {
        Self::from_lists(WordLists::global())
    }

    pub fn from_lists(lists: &WordLists) -> Result<Self, ComponentError> {
        let prefix = either(
            join([Adjective::from_lists(lists).boxed(), Noun::from_lists(lists).boxed()], "_"),
            join(
                [
                    Adverb::from_lists(lists).boxed(),
                    Verb::from_lists(lists, VerbTense::PresentParticiple).boxed(),
                ],
                "_",
            ),
            0.5,
        )?;
        Ok(Self { prefix })
    }

    /// Identifier stamped with the current time.
    pub fn make(&self, rng: &mut dyn RandomSource) -> Result<String, ComponentError> {
        self.make_at(rng, Utc::now())
    }

    /// Identifier stamped with `now`. Times before 2001 clamp to zero.
    pub fn make_at(
        &self,
        rng: &mut dyn RandomSource,
        now: DateTime<Utc>,
    ) -> Result<String, ComponentError> {
        let prefix = self.prefix.render(rng)?;
        let elapsed = now.timestamp_micros().saturating_sub(REFERENCE_MICROS).max(0);
        Ok(format!("{}_{}", prefix, to_base36(elapsed as u64)))
    }
}
