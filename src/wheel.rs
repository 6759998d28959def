//! Wheel outcomes, outcome sources, and bet resolution.

use alloc::vec::Vec;

use rand::{Rng, RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Number of pockets on the wheel (0 through 36).
pub const POCKETS: u8 = 37;

/// Color a bet can be placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// Red: wins on odd numbers.
    #[default]
    Red,
    /// Black: wins on even numbers other than zero.
    Black,
}

/// The pocket the ball landed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpinOutcome(u8);

impl SpinOutcome {
    /// The house pocket.
    pub const ZERO: Self = Self(0);

    /// Creates an outcome, returning `None` for numbers above 36.
    #[must_use]
    pub const fn new(number: u8) -> Option<Self> {
        if number < POCKETS {
            Some(Self(number))
        } else {
            None
        }
    }

    /// Returns the pocket number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Returns the color of the pocket, or `None` for zero.
    #[must_use]
    pub const fn color(self) -> Option<Color> {
        match self.0 {
            0 => None,
            n if n % 2 == 1 => Some(Color::Red),
            _ => Some(Color::Black),
        }
    }

    /// Returns whether a bet on `color` wins on this outcome.
    ///
    /// Zero loses for both colors.
    #[must_use]
    pub fn pays(self, color: Color) -> bool {
        self.color() == Some(color)
    }
}

/// A source of wheel outcomes.
///
/// Implementations must return outcomes uniformly distributed over the 37
/// pockets when used for simulation. Test sources may script them instead.
pub trait OutcomeSource {
    /// Spins the wheel once.
    fn spin(&mut self) -> SpinOutcome;
}

impl<T: OutcomeSource + ?Sized> OutcomeSource for &mut T {
    fn spin(&mut self) -> SpinOutcome {
        (**self).spin()
    }
}

/// Spins the wheel once and settles a bet on `color`.
///
/// Consumes exactly one outcome from `source`.
pub fn place_bet<S: OutcomeSource + ?Sized>(source: &mut S, color: Color) -> bool {
    source.spin().pays(color)
}

/// A fair wheel backed by a random number generator.
#[derive(Debug, Clone)]
pub struct Wheel<R = ChaCha8Rng> {
    rng: R,
}

impl<R: RngCore> Wheel<R> {
    /// Creates a wheel that draws from `rng`.
    #[must_use]
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Consumes the wheel and returns its generator.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl Wheel<ChaCha8Rng> {
    /// Creates a reproducible wheel from a seed.
    ///
    /// # Example
    ///
    /// ```
    /// use roulettrs::{OutcomeSource, Wheel};
    ///
    /// let mut a = Wheel::seeded(7);
    /// let mut b = Wheel::seeded(7);
    /// assert_eq!(a.spin(), b.spin());
    /// ```
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    /// Creates the wheel for run `run` of a batch seeded with `seed`.
    ///
    /// Every run gets its own ChaCha stream, so runs are independent of each
    /// other and of the order in which they are executed.
    #[must_use]
    pub fn for_run(seed: u64, run: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        rng.set_stream(run);
        Self::new(rng)
    }
}

impl<R: RngCore> OutcomeSource for Wheel<R> {
    fn spin(&mut self) -> SpinOutcome {
        SpinOutcome(self.rng.random_range(0..POCKETS))
    }
}

/// A scripted outcome source that replays a fixed sequence.
///
/// The sequence repeats once exhausted. An empty script always lands on zero.
#[derive(Debug, Clone, Default)]
pub struct FixedOutcomes {
    outcomes: Vec<SpinOutcome>,
    next: usize,
}

impl FixedOutcomes {
    /// Creates a source that replays `outcomes` in order.
    #[must_use]
    pub const fn new(outcomes: Vec<SpinOutcome>) -> Self {
        Self { outcomes, next: 0 }
    }

    /// Creates a source whose outcomes win (`true`) or lose (`false`) a red
    /// bet, in order.
    ///
    /// Losses land on black rather than zero.
    #[must_use]
    pub fn for_red(results: &[bool]) -> Self {
        let outcomes = results
            .iter()
            .map(|&won| if won { SpinOutcome(1) } else { SpinOutcome(2) })
            .collect();
        Self::new(outcomes)
    }

    /// Returns how many outcomes have been drawn.
    #[must_use]
    pub const fn drawn(&self) -> usize {
        self.next
    }
}

impl OutcomeSource for FixedOutcomes {
    fn spin(&mut self) -> SpinOutcome {
        if self.outcomes.is_empty() {
            self.next += 1;
            return SpinOutcome::ZERO;
        }
        let outcome = self.outcomes[self.next % self.outcomes.len()];
        self.next += 1;
        outcome
    }
}
