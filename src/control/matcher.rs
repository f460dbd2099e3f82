//! Match - an expression form of `switch`.
//!
//! A [`Match`] is an ordered list of arms, each a predicate plus an
//! evaluator, finalized by a mandatory default. Finalizing yields a plain
//! function that can be called any number of times.
//!
//! Arms are tried in registration order and the first matching arm wins.
//! The four builders cover the combinations of equality or custom predicate
//! with constant or computed output.
//!
//! # Examples
//!
//! ```rust
//! use fp_containers::control::Match;
//!
//! let describe = Match::new()
//!     .case(1, "one")
//!     .case_when(|n: &i32| *n % 2 == 0, "even")
//!     .default("odd");
//!
//! assert_eq!(describe(1), "one");
//! assert_eq!(describe(4), "even");
//! assert_eq!(describe(7), "odd");
//! ```

use std::fmt;

type Predicate<In> = Box<dyn Fn(&In) -> bool>;
type Evaluator<In, Out> = Box<dyn Fn(&In) -> Out>;

struct Arm<In, Out> {
    predicate: Predicate<In>,
    evaluator: Evaluator<In, Out>,
}

/// Builder for a matching function from `In` to `Out`.
#[must_use = "a Match does nothing until finalized with `default`"]
pub struct Match<In, Out> {
    arms: Vec<Arm<In, Out>>,
}

#[allow(clippy::new_without_default)]
impl<In: 'static, Out: 'static> Match<In, Out> {
    /// Starts a builder with no arms.
    pub fn new() -> Self {
        Self { arms: Vec::new() }
    }

    fn push<P, E>(mut self, predicate: P, evaluator: E) -> Self
    where
        P: Fn(&In) -> bool + 'static,
        E: Fn(&In) -> Out + 'static,
    {
        self.arms.push(Arm {
            predicate: Box::new(predicate),
            evaluator: Box::new(evaluator),
        });
        self
    }

    /// Adds an arm that matches inputs equal to `input` and yields `output`.
    pub fn case(self, input: In, output: Out) -> Self
    where
        In: PartialEq,
        Out: Clone,
    {
        self.push(move |candidate| *candidate == input, move |_| output.clone())
    }

    /// Adds an arm that matches when `predicate` holds and yields `output`.
    pub fn case_when<P>(self, predicate: P, output: Out) -> Self
    where
        P: Fn(&In) -> bool + 'static,
        Out: Clone,
    {
        self.push(predicate, move |_| output.clone())
    }

    /// Adds an arm that matches inputs equal to `input` and computes the
    /// output from the matched value.
    ///
    /// ```rust
    /// use fp_containers::control::Match;
    ///
    /// let greet = Match::new()
    ///     .case_with("world", |name: &&str| format!("hello, {name}!"))
    ///     .default(String::from("who?"));
    ///
    /// assert_eq!(greet("world"), "hello, world!");
    /// assert_eq!(greet("moon"), "who?");
    /// ```
    pub fn case_with<E>(self, input: In, evaluator: E) -> Self
    where
        In: PartialEq,
        E: Fn(&In) -> Out + 'static,
    {
        self.push(move |candidate| *candidate == input, evaluator)
    }

    /// Adds an arm with a custom predicate and a computed output.
    pub fn case_when_with<P, E>(self, predicate: P, evaluator: E) -> Self
    where
        P: Fn(&In) -> bool + 'static,
        E: Fn(&In) -> Out + 'static,
    {
        self.push(predicate, evaluator)
    }

    /// Finalizes the builder into a matching function.
    ///
    /// Inputs that match no arm produce a clone of `value`.
    pub fn default(self, value: Out) -> impl Fn(In) -> Out
    where
        Out: Clone,
    {
        let arms = self.arms;
        move |input| {
            arms.iter()
                .find(|arm| (arm.predicate)(&input))
                .map_or_else(|| value.clone(), |arm| (arm.evaluator)(&input))
        }
    }
}

impl<In, Out> fmt::Debug for Match<In, Out> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Match")
            .field("arms", &self.arms.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;
    use std::rc::Rc;

    #[rstest]
    #[case("hello", "world")]
    #[case("nope", "x")]
    fn equality_arm_or_default(#[case] input: &'static str, #[case] expected: &'static str) {
        let matcher = Match::new().case("hello", "world").default("x");
        assert_eq!(matcher(input), expected);
    }

    #[rstest]
    fn first_registered_arm_wins() {
        let matcher = Match::new()
            .case_when(|n: &i32| *n > 0, "positive")
            .case(5, "five")
            .default("other");
        assert_eq!(matcher(5), "positive");
    }

    #[rstest]
    fn later_arms_are_not_evaluated() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let matcher = Match::new()
            .case(1, 10)
            .case_when(
                move |_: &i32| {
                    counter.set(counter.get() + 1);
                    true
                },
                20,
            )
            .default(0);

        assert_eq!(matcher(1), 10);
        assert_eq!(calls.get(), 0);
        assert_eq!(matcher(2), 20);
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn computed_output_receives_input() {
        let matcher = Match::new()
            .case_when_with(|n: &i32| *n < 0, |n| n.abs())
            .default(0);
        assert_eq!(matcher(-3), 3);
        assert_eq!(matcher(3), 0);
    }

    #[rstest]
    fn matcher_is_reusable() {
        let matcher = Match::new().case(1, String::from("one")).default(String::new());
        assert_eq!(matcher(1), "one");
        assert_eq!(matcher(1), "one");
        assert_eq!(matcher(2), "");
    }
}
