//! Single-run simulation.

use crate::Money;
use crate::options::{CapitalMode, SimulationOptions};
use crate::result::RunResult;
use crate::strategy::{BettingStrategy, Strategy};
use crate::wheel::{Color, OutcomeSource, place_bet};

pub mod state;

pub use state::{RunPhase, RunState};

/// Plays runs of spins for one strategy.
///
/// The simulator holds only configuration; all per-run state lives in a
/// [`RunState`], so one simulator can drive any number of runs.
///
/// # Example
///
/// ```
/// use roulettrs::{CapitalMode, Simulator, Strategy, Wheel};
///
/// let simulator = Simulator::new(Strategy::Martingale, CapitalMode::Finite, 10, 1000, 200);
/// let run = simulator.run(&mut Wheel::seeded(3));
/// assert!(run.history.len() <= 201);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Simulator<S = Strategy> {
    strategy: S,
    capital_mode: CapitalMode,
    base_stake: Money,
    initial_capital: Money,
    spins: u32,
}

impl Simulator<Strategy> {
    /// Creates a simulator from batch options.
    #[must_use]
    pub const fn from_options(options: &SimulationOptions) -> Self {
        Self::new(
            options.strategy,
            options.capital_mode,
            options.base_stake,
            options.initial_capital,
            options.spins,
        )
    }
}

impl<S: BettingStrategy> Simulator<S> {
    /// Creates a simulator.
    #[must_use]
    pub const fn new(
        strategy: S,
        capital_mode: CapitalMode,
        base_stake: Money,
        initial_capital: Money,
        spins: u32,
    ) -> Self {
        Self {
            strategy,
            capital_mode,
            base_stake,
            initial_capital,
            spins,
        }
    }

    /// Returns the strategy.
    #[must_use]
    pub const fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Returns the number of spins per run.
    #[must_use]
    pub const fn spins(&self) -> u32 {
        self.spins
    }

    /// Returns the state a new run starts from.
    #[must_use]
    pub fn start(&self) -> RunState {
        RunState::with_capacity(self.initial_capital, self.base_stake, self.spins as usize)
    }

    /// Returns the stake for the next spin, capped by capital when capital is
    /// finite.
    #[must_use]
    pub fn stake(&self, state: &RunState) -> Money {
        let stake = self.strategy.next_stake(&state.bet_context());
        debug_assert!(stake >= 0, "strategy returned a negative stake");
        if self.capital_mode.is_finite() {
            stake.min(state.capital())
        } else {
            stake
        }
    }

    /// Plays one spin.
    ///
    /// With finite capital, a run that has nothing left is ruined before the
    /// wheel is spun, and the state is left untouched.
    pub fn step<O: OutcomeSource + ?Sized>(&self, state: &mut RunState, source: &mut O) -> RunPhase {
        if self.capital_mode.is_finite() && state.capital() <= 0 {
            tracing::trace!(
                capital = state.capital(),
                spins = state.spins_played(),
                "bettor ruined"
            );
            return RunPhase::Ruined;
        }

        let stake = self.stake(state);
        let won = place_bet(source, Color::Red);
        state.settle(stake, won);
        RunPhase::Active
    }

    /// Plays a full run, drawing every spin from `source`.
    pub fn run<O: OutcomeSource + ?Sized>(&self, source: &mut O) -> RunResult {
        let mut state = self.start();
        let mut phase = RunPhase::Active;

        for _ in 0..self.spins {
            phase = self.step(&mut state, source);
            if phase.is_terminal() {
                break;
            }
        }
        if phase == RunPhase::Active {
            phase = RunPhase::Completed;
        }

        tracing::debug!(
            spins = state.spins_played(),
            final_capital = state.capital(),
            ?phase,
            "run finished"
        );
        state.into_result(phase == RunPhase::Ruined)
    }
}
