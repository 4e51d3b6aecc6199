/// Random source capability: the only input a render consumes.

use rand::distributions::WeightedIndex;
use rand::prelude::Distribution;
use rand::rngs::ThreadRng;
use rand::Rng;

use crate::core::component::ComponentError;

/// The primitive draws a component tree makes while rendering.
///
/// Every `rand::Rng` is a `RandomSource`: a seeded `StdRng` gives
/// reproducible output, `thread_rng()` gives fresh output. A source is
/// owned by one render at a time; sharing one across threads is up to
/// the caller.
pub trait RandomSource {
    /// Uniform float in `[0, 1)`.
    fn next_float(&mut self) -> f64;

    /// Uniform integer in `low..=high`. Requires `low <= high`.
    fn next_int(&mut self, low: i64, high: i64) -> i64;

    /// Uniform index in `0..len`. Requires `len > 0`.
    fn next_index(&mut self, len: usize) -> usize;

    /// Index drawn with probability proportional to `weights`.
    /// Returns `None` when no weight is positive.
    fn next_weighted_index(&mut self, weights: &[f64]) -> Option<usize>;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn next_float(&mut self) -> f64 {
        self.gen::<f64>()
    }

    fn next_int(&mut self, low: i64, high: i64) -> i64 {
        self.gen_range(low..=high)
    }

    fn next_index(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }

    fn next_weighted_index(&mut self, weights: &[f64]) -> Option<usize> {
        let dist = WeightedIndex::new(weights).ok()?;
        Some(dist.sample(self))
    }
}

/// Non-deterministic source used when the caller supplies none.
pub fn system_source() -> ThreadRng {
    rand::thread_rng()
}

/// Pick one element uniformly. Consumes one index draw.
pub fn choose_one<'a, T>(
    rng: &mut dyn RandomSource,
    options: &'a [T],
    what: &str,
) -> Result<&'a T, ComponentError> {
    if options.is_empty() {
        return Err(ComponentError::EmptyOptions(what.to_string()));
    }
    Ok(&options[rng.next_index(options.len())])
}

/// Pick one element proportionally to its weight. Consumes one weighted draw.
pub fn choose_weighted<'a, T>(
    rng: &mut dyn RandomSource,
    options: &'a [T],
    weights: &[f64],
    what: &str,
) -> Result<&'a T, ComponentError> {
    if options.is_empty() || options.len() != weights.len() {
        return Err(ComponentError::EmptyOptions(what.to_string()));
    }
    let index = rng
        .next_weighted_index(weights)
        .ok_or_else(|| ComponentError::EmptyOptions(what.to_string()))?;
    Ok(&options[index])
}

/// True with the given probability. Consumes one float draw.
///
/// `draw < probability`, so 0.0 never passes and 1.0 always does.
pub fn roll(rng: &mut dyn RandomSource, probability: f64) -> bool {
    rng.next_float() < probability
}

/// Fair coin. Consumes one index draw.
pub fn coin(rng: &mut dyn RandomSource) -> bool {
    rng.next_index(2) == 0
}

/// Reject probabilities outside `[0, 1]` (NaN included).
pub(crate) fn check_probability(probability: f64, what: &str) -> Result<f64, ComponentError> {
    if (0.0..=1.0).contains(&probability) {
        Ok(probability)
    } else {
        Err(ComponentError::InvalidConfiguration(format!(
            "{} probability must be in the range 0.0 to 1.0, got {}",
            what, probability
        )))
    }
}
