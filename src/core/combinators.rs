/// Leaves and combinators: the compositional algebra of component trees.
///
/// Combinators pick which children to render; only the chosen subtree
/// draws from the random source.

use crate::core::component::{BoxedComponent, Component, ComponentError, IntoComponent};
use crate::core::random::{check_probability, choose_one, choose_weighted, roll, RandomSource};

/// A fixed string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    text: String,
}

impl Literal {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl Component for Literal {
    fn render(&self, _rng: &mut dyn RandomSource) -> Result<String, ComponentError> {
        Ok(self.text.clone())
    }
}

/// Always renders the empty string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Empty;

impl Component for Empty {
    fn render(&self, _rng: &mut dyn RandomSource) -> Result<String, ComponentError> {
        Ok(String::new())
    }
}

/// Renders every part in order and joins the non-empty results.
///
/// Empty renders are dropped before joining, so they never leave a stray
/// separator behind.
#[derive(Debug, Clone)]
pub struct Sequence {
    parts: Vec<BoxedComponent>,
    separator: String,
}

impl Sequence {
    pub fn new<I, C>(parts: I, separator: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = C>,
        C: IntoComponent,
    {
        Self {
            parts: parts.into_iter().map(IntoComponent::into_component).collect(),
            separator: separator.into(),
        }
    }

    pub fn parts(&self) -> &[BoxedComponent] {
        &self.parts
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }
}

impl Component for Sequence {
    fn render(&self, rng: &mut dyn RandomSource) -> Result<String, ComponentError> {
        let mut rendered = Vec::with_capacity(self.parts.len());
        for part in &self.parts {
            let text = part.render(rng)?;
            if !text.is_empty() {
                rendered.push(text);
            }
        }
        Ok(rendered.join(&self.separator))
    }
}

/// Uniform choice of exactly one option.
#[derive(Debug, Clone)]
pub struct OneOf {
    options: Vec<BoxedComponent>,
}

impl OneOf {
    pub fn new<I, C>(options: I) -> Result<Self, ComponentError>
    where
        I: IntoIterator<Item = C>,
        C: IntoComponent,
    {
        let options: Vec<BoxedComponent> =
            options.into_iter().map(IntoComponent::into_component).collect();
        if options.is_empty() {
            return Err(ComponentError::InvalidConfiguration(
                "one_of requires at least one option".to_string(),
            ));
        }
        Ok(Self { options })
    }

    pub fn options(&self) -> &[BoxedComponent] {
        &self.options
    }
}

impl Component for OneOf {
    fn render(&self, rng: &mut dyn RandomSource) -> Result<String, ComponentError> {
        choose_one(rng, &self.options, "one_of")?.render(rng)
    }
}

/// Choice of one option with probability proportional to its weight.
///
/// Zero-weight options are allowed but never selected.
#[derive(Debug, Clone)]
pub struct WeightedOneOf {
    options: Vec<BoxedComponent>,
    weights: Vec<f64>,
}

impl WeightedOneOf {
    /// Build from `(weight, option)` pairs.
    pub fn new<I, C>(pairs: I) -> Result<Self, ComponentError>
    where
        I: IntoIterator<Item = (f64, C)>,
        C: IntoComponent,
    {
        let (weights, options): (Vec<f64>, Vec<C>) = pairs.into_iter().unzip();
        Self::from_parts(options, weights)
    }

    /// Build from parallel option and weight lists.
    pub fn from_parts<I, C>(options: I, weights: Vec<f64>) -> Result<Self, ComponentError>
    where
        I: IntoIterator<Item = C>,
        C: IntoComponent,
    {
        let options: Vec<BoxedComponent> =
            options.into_iter().map(IntoComponent::into_component).collect();

        if options.is_empty() {
            return Err(ComponentError::InvalidConfiguration(
                "weighted_one_of requires at least one option".to_string(),
            ));
        }
        if options.len() != weights.len() {
            return Err(ComponentError::InvalidConfiguration(format!(
                "weighted_one_of has {} options but {} weights",
                options.len(),
                weights.len()
            )));
        }
        // `!(w >= 0.0)` also rejects NaN.
        if weights.iter().any(|w| !(*w >= 0.0) || w.is_infinite()) {
            return Err(ComponentError::InvalidConfiguration(
                "weighted_one_of requires finite, non-negative weights".to_string(),
            ));
        }
        if !weights.iter().any(|w| *w > 0.0) {
            return Err(ComponentError::InvalidConfiguration(
                "weighted_one_of requires at least one positive weight".to_string(),
            ));
        }

        Ok(Self { options, weights })
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }
}

impl Component for WeightedOneOf {
    fn render(&self, rng: &mut dyn RandomSource) -> Result<String, ComponentError> {
        choose_weighted(rng, &self.options, &self.weights, "weighted_one_of")?.render(rng)
    }
}

/// Renders `first` with `first_probability`, otherwise `second`.
#[derive(Debug, Clone)]
pub struct Either {
    first: BoxedComponent,
    second: BoxedComponent,
    first_probability: f64,
}

impl Either {
    pub fn new(
        first: impl IntoComponent,
        second: impl IntoComponent,
        first_probability: f64,
    ) -> Result<Self, ComponentError> {
        Ok(Self {
            first: first.into_component(),
            second: second.into_component(),
            first_probability: check_probability(first_probability, "either")?,
        })
    }

    pub fn first_probability(&self) -> f64 {
        self.first_probability
    }
}

impl Component for Either {
    fn render(&self, rng: &mut dyn RandomSource) -> Result<String, ComponentError> {
        if roll(rng, self.first_probability) {
            self.first.render(rng)
        } else {
            self.second.render(rng)
        }
    }
}

/// Renders `option` with `probability`, otherwise the empty string.
#[derive(Debug, Clone)]
pub struct Maybe {
    option: BoxedComponent,
    probability: f64,
}

impl Maybe {
    pub fn new(option: impl IntoComponent, probability: f64) -> Result<Self, ComponentError> {
        Ok(Self {
            option: option.into_component(),
            probability: check_probability(probability, "maybe")?,
        })
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }
}

impl Component for Maybe {
    fn render(&self, rng: &mut dyn RandomSource) -> Result<String, ComponentError> {
        if roll(rng, self.probability) {
            self.option.render(rng)
        } else {
            Ok(String::new())
        }
    }
}

/// Rolls a `1..=sides` die and renders the entry whose bucket contains it.
///
/// Entries are `(upper_bound, option)` with strictly increasing bounds; the
/// last bound must equal `sides`. A roll lands in the first entry whose
/// bound is not below it.
#[derive(Debug, Clone)]
pub struct RollTable {
    sides: i64,
    entries: Vec<(i64, BoxedComponent)>,
}

impl RollTable {
    pub fn new<I, C>(sides: i64, entries: I) -> Result<Self, ComponentError>
    where
        I: IntoIterator<Item = (i64, C)>,
        C: IntoComponent,
    {
        let entries: Vec<(i64, BoxedComponent)> = entries
            .into_iter()
            .map(|(bound, option)| (bound, option.into_component()))
            .collect();

        if sides < 1 || entries.is_empty() {
            return Err(ComponentError::InvalidConfiguration(
                "roll table requires at least one side and one entry".to_string(),
            ));
        }
        let mut previous = 0;
        for (bound, _) in &entries {
            if *bound <= previous {
                return Err(ComponentError::InvalidConfiguration(format!(
                    "roll table bounds must increase, found {} after {}",
                    bound, previous
                )));
            }
            previous = *bound;
        }
        if previous != sides {
            return Err(ComponentError::InvalidConfiguration(format!(
                "roll table covers 1..={} but the die has {} sides",
                previous, sides
            )));
        }

        Ok(Self { sides, entries })
    }
}

impl Component for RollTable {
    fn render(&self, rng: &mut dyn RandomSource) -> Result<String, ComponentError> {
        let roll = rng.next_int(1, self.sides);
        let (_, option) = self
            .entries
            .iter()
            .find(|(bound, _)| roll <= *bound)
            .ok_or_else(|| ComponentError::EmptyOptions("roll_table".to_string()))?;
        option.render(rng)
    }
}

/// Join parts with no separator.
pub fn text<I, C>(parts: I) -> Sequence
where
    I: IntoIterator<Item = C>,
    C: IntoComponent,
{
    Sequence::new(parts, "")
}

/// Join parts with single spaces.
pub fn spaced<I, C>(parts: I) -> Sequence
where
    I: IntoIterator<Item = C>,
    C: IntoComponent,
{
    Sequence::new(parts, " ")
}

/// Join parts with an arbitrary separator.
pub fn join<I, C>(parts: I, separator: &str) -> Sequence
where
    I: IntoIterator<Item = C>,
    C: IntoComponent,
{
    Sequence::new(parts, separator)
}

pub fn one_of<I, C>(options: I) -> Result<OneOf, ComponentError>
where
    I: IntoIterator<Item = C>,
    C: IntoComponent,
{
    OneOf::new(options)
}

pub fn weighted_one_of<I, C>(pairs: I) -> Result<WeightedOneOf, ComponentError>
where
    I: IntoIterator<Item = (f64, C)>,
    C: IntoComponent,
{
    WeightedOneOf::new(pairs)
}

pub fn either(
    first: impl IntoComponent,
    second: impl IntoComponent,
    first_probability: f64,
) -> Result<Either, ComponentError> {
    Either::new(first, second, first_probability)
}

pub fn maybe(option: impl IntoComponent, probability: f64) -> Result<Maybe, ComponentError> {
    Maybe::new(option, probability)
}

/// Concatenate heterogeneous parts with no separator.
#[macro_export]
macro_rules! text {
    ($($part:expr),* $(,)?) => {
        $crate::core::combinators::Sequence::new(
            vec![$($crate::core::component::IntoComponent::into_component($part)),*],
            "",
        )
    };
}

/// Concatenate heterogeneous parts separated by single spaces.
#[macro_export]
macro_rules! spaced {
    ($($part:expr),* $(,)?) => {
        $crate::core::combinators::Sequence::new(
            vec![$($crate::core::component::IntoComponent::into_component($part)),*],
            " ",
        )
    };
}

/// Uniform choice over heterogeneous options. Evaluates to a `Result`.
#[macro_export]
macro_rules! one_of {
    ($($option:expr),* $(,)?) => {
        $crate::core::combinators::OneOf::new(
            ::std::vec::Vec::<$crate::core::component::BoxedComponent>::from([
                $($crate::core::component::IntoComponent::into_component($option)),*
            ]),
        )
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::testing::ScriptedSource;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn literal_renders_unchanged() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(Literal::new("alpha").render(&mut rng).unwrap(), "alpha");
    }

    #[test]
    fn sequence_joins_with_separator() {
        let mut rng = StdRng::seed_from_u64(0);
        let node = join(["alpha", "beta", "gamma"], "-");
        assert_eq!(node.render(&mut rng).unwrap(), "alpha-beta-gamma");
    }

    #[test]
    fn sequence_elides_empty_parts() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let node = Sequence::new(
                vec![Literal::new("alpha").into_component(), Empty.into_component(), "beta".into_component()],
                "-",
            );
            assert_eq!(node.render(&mut rng).unwrap(), "alpha-beta");
        }

        let mut rng = StdRng::seed_from_u64(0);
        let edges = text![Empty, "", "x", Empty];
        assert_eq!(edges.render(&mut rng).unwrap(), "x");
    }

    #[test]
    fn empty_sequence_renders_empty() {
        let mut rng = StdRng::seed_from_u64(0);
        let node = spaced(Vec::<BoxedComponent>::new());
        assert_eq!(node.render(&mut rng).unwrap(), "");
    }

    #[test]
    fn one_of_rejects_empty() {
        let err = one_of(Vec::<&str>::new()).unwrap_err();
        assert!(matches!(err, ComponentError::InvalidConfiguration(_)));
    }

    #[test]
    fn one_of_picks_listed_option() {
        let node = one_of(["alpha", "beta", "gamma"]).unwrap();
        for seed in 0..30 {
            let mut rng = StdRng::seed_from_u64(seed);
            let out = node.render(&mut rng).unwrap();
            assert!(["alpha", "beta", "gamma"].contains(&out.as_str()));
        }
    }

    #[test]
    fn one_of_draws_only_from_chosen_branch() {
        // Index 1 picks "b"; the unchosen one_of in slot 0 must not consume draws.
        let inner = one_of(["x", "y"]).unwrap();
        let node = one_of![inner, "b"].unwrap();
        let mut rng = ScriptedSource::new().with_indices(&[1, 1]);
        assert_eq!(node.render(&mut rng).unwrap(), "b");
    }

    #[test]
    fn weighted_validation() {
        assert!(weighted_one_of(Vec::<(f64, &str)>::new()).is_err());
        assert!(WeightedOneOf::from_parts(["a", "b"], vec![1.0]).is_err());
        assert!(weighted_one_of([(-1.0, "a"), (2.0, "b")]).is_err());
        assert!(weighted_one_of([(0.0, "a"), (0.0, "b")]).is_err());
        assert!(weighted_one_of([(f64::NAN, "a"), (1.0, "b")]).is_err());
        assert!(weighted_one_of([(0.0, "a"), (3.0, "b")]).is_ok());
    }

    #[test]
    fn weighted_never_selects_zero_weight() {
        let node = weighted_one_of([(0.0, "never"), (1.0, "always"), (0.0, "nope")]).unwrap();
        for seed in 0..100 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(node.render(&mut rng).unwrap(), "always");
        }
    }

    #[test]
    fn weighted_follows_proportions() {
        let node = weighted_one_of([(9.0, "heavy"), (1.0, "light")]).unwrap();
        let mut rng = StdRng::seed_from_u64(99);
        let heavy = (0..2000)
            .filter(|_| node.render(&mut rng).unwrap() == "heavy")
            .count();
        assert!(heavy > 1600 && heavy < 1950, "heavy picked {} times", heavy);
    }

    #[test]
    fn either_boundaries() {
        let always_first = either("first", "second", 1.0).unwrap();
        let always_second = either("first", "second", 0.0).unwrap();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(always_first.render(&mut rng).unwrap(), "first");
            assert_eq!(always_second.render(&mut rng).unwrap(), "second");
        }

        let mut edge = ScriptedSource::new().with_floats(&[0.999_999_999, 0.0]);
        assert_eq!(always_first.render(&mut edge).unwrap(), "first");
        assert_eq!(always_second.render(&mut edge).unwrap(), "second");
    }

    #[test]
    fn either_threshold_is_strict() {
        let node = either("first", "second", 0.5).unwrap();
        let mut rng = ScriptedSource::new().with_floats(&[0.49, 0.5]);
        assert_eq!(node.render(&mut rng).unwrap(), "first");
        assert_eq!(node.render(&mut rng).unwrap(), "second");
    }

    #[test]
    fn maybe_boundaries() {
        let always = maybe("hello", 1.0).unwrap();
        let never = maybe("hello", 0.0).unwrap();
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            assert_eq!(always.render(&mut rng).unwrap(), "hello");
            assert_eq!(never.render(&mut rng).unwrap(), "");
        }
    }

    #[test]
    fn probability_out_of_range_is_rejected() {
        assert!(matches!(
            either("a", "b", 1.5).unwrap_err(),
            ComponentError::InvalidConfiguration(_)
        ));
        assert!(matches!(
            maybe("a", 1.5).unwrap_err(),
            ComponentError::InvalidConfiguration(_)
        ));
        assert!(maybe("a", -0.01).is_err());
    }

    #[test]
    fn roll_table_buckets() {
        let table = RollTable::new(10, [(3, "low"), (9, "mid"), (10, "top")]).unwrap();
        let mut rng = ScriptedSource::new().with_indices(&[0, 2, 3, 8, 9]);
        let outputs: Vec<String> = (0..5).map(|_| table.render(&mut rng).unwrap()).collect();
        assert_eq!(outputs, ["low", "low", "mid", "mid", "top"]);
    }

    #[test]
    fn roll_table_validation() {
        assert!(RollTable::new(10, [(3, "a"), (3, "b"), (10, "c")]).is_err());
        assert!(RollTable::new(10, [(3, "a"), (9, "b")]).is_err());
        assert!(RollTable::new(0, Vec::<(i64, &str)>::new()).is_err());
    }

    #[test]
    fn maybe_inside_spaced_leaves_no_double_space() {
        let node = spaced!["The", maybe("grand", 0.0).unwrap(), "Voyage"];
        let mut rng = StdRng::seed_from_u64(4);
        assert_eq!(node.render(&mut rng).unwrap(), "The Voyage");
    }
}
