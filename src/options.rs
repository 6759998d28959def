//! Simulation configuration options.

use core::fmt;
use core::str::FromStr;

use crate::Money;
use crate::error::ConfigError;
use crate::strategy::Strategy;

/// Whether the bettor's bankroll is limited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CapitalMode {
    /// Stakes are capped by capital and a run ends once capital is gone.
    #[default]
    Finite,
    /// Capital may go negative; stakes are never capped and runs never end early.
    Infinite,
}

impl CapitalMode {
    /// Returns whether capital is limited.
    #[must_use]
    pub const fn is_finite(self) -> bool {
        matches!(self, Self::Finite)
    }
}

impl fmt::Display for CapitalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Finite => "finite",
            Self::Infinite => "infinite",
        })
    }
}

impl FromStr for CapitalMode {
    type Err = ConfigError;

    /// Parses `f`/`finite` or `i`/`infinite`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "f" | "finite" => Ok(Self::Finite),
            "i" | "infinite" => Ok(Self::Infinite),
            _ => Err(ConfigError::UnknownCapitalMode),
        }
    }
}

/// Configuration options for a batch of runs.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use roulettrs::{CapitalMode, SimulationOptions, Strategy};
///
/// let options = SimulationOptions::default()
///     .with_runs(20)
///     .with_spins(1_000)
///     .with_strategy(Strategy::Fibonacci)
///     .with_capital_mode(CapitalMode::Infinite);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationOptions {
    /// Number of independent runs in the batch.
    pub runs: u32,
    /// Maximum number of spins per run.
    pub spins: u32,
    /// Strategy used to size every bet.
    pub strategy: Strategy,
    /// Whether capital is limited.
    pub capital_mode: CapitalMode,
    /// Reference bet size.
    pub base_stake: Money,
    /// Capital every run starts with.
    pub initial_capital: Money,
    /// Seed for the wheels; run `i` uses stream `i` of this seed.
    pub seed: u64,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            runs: 1,
            spins: 500,
            strategy: Strategy::Martingale,
            capital_mode: CapitalMode::Finite,
            base_stake: 10,
            initial_capital: 1000,
            seed: 0,
        }
    }
}

impl SimulationOptions {
    /// Sets the number of runs.
    ///
    /// # Example
    ///
    /// ```
    /// use roulettrs::SimulationOptions;
    ///
    /// let options = SimulationOptions::default().with_runs(8);
    /// assert_eq!(options.runs, 8);
    /// ```
    #[must_use]
    pub const fn with_runs(mut self, runs: u32) -> Self {
        self.runs = runs;
        self
    }

    /// Sets the number of spins per run.
    ///
    /// # Example
    ///
    /// ```
    /// use roulettrs::SimulationOptions;
    ///
    /// let options = SimulationOptions::default().with_spins(50);
    /// assert_eq!(options.spins, 50);
    /// ```
    #[must_use]
    pub const fn with_spins(mut self, spins: u32) -> Self {
        self.spins = spins;
        self
    }

    /// Sets the betting strategy.
    ///
    /// # Example
    ///
    /// ```
    /// use roulettrs::{SimulationOptions, Strategy};
    ///
    /// let options = SimulationOptions::default().with_strategy(Strategy::Own);
    /// assert_eq!(options.strategy, Strategy::Own);
    /// ```
    #[must_use]
    pub const fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the capital mode.
    #[must_use]
    pub const fn with_capital_mode(mut self, mode: CapitalMode) -> Self {
        self.capital_mode = mode;
        self
    }

    /// Sets the base stake.
    #[must_use]
    pub const fn with_base_stake(mut self, stake: Money) -> Self {
        self.base_stake = stake;
        self
    }

    /// Sets the initial capital.
    #[must_use]
    pub const fn with_initial_capital(mut self, capital: Money) -> Self {
        self.initial_capital = capital;
        self
    }

    /// Sets the wheel seed.
    ///
    /// # Example
    ///
    /// ```
    /// use roulettrs::SimulationOptions;
    ///
    /// let options = SimulationOptions::default().with_seed(42);
    /// assert_eq!(options.seed, 42);
    /// ```
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Checks the options before a batch is run.
    ///
    /// The batch itself does not call this; callers that take options from
    /// users should.
    ///
    /// # Errors
    ///
    /// Returns an error if the run count, spin count, base stake or initial
    /// capital is not positive.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.runs == 0 {
            return Err(ConfigError::ZeroRuns);
        }
        if self.spins == 0 {
            return Err(ConfigError::ZeroSpins);
        }
        if self.base_stake <= 0 {
            return Err(ConfigError::NonPositiveBaseStake);
        }
        if self.initial_capital <= 0 {
            return Err(ConfigError::NonPositiveInitialCapital);
        }
        Ok(())
    }
}
