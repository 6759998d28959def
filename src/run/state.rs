//! Per-run state.

use alloc::vec::Vec;

use crate::Money;
use crate::result::RunResult;
use crate::strategy::BetContext;

/// Where a run is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunPhase {
    /// Spins remain and the bettor can still play.
    Active,
    /// Capital ran out before the spins did.
    Ruined,
    /// Every configured spin was played.
    Completed,
}

impl RunPhase {
    /// Returns whether the run has ended.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Active)
    }
}

/// Mutable state threaded through the spins of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunState {
    capital: Money,
    base_stake: Money,
    consecutive_losses: u32,
    last_stake: Money,
    last_won: bool,
    history: Vec<Money>,
}

impl RunState {
    /// Creates the state for a fresh run.
    ///
    /// The history starts with the initial capital, and the base stake stands
    /// in as the previous stake.
    #[must_use]
    pub fn new(initial_capital: Money, base_stake: Money) -> Self {
        Self {
            capital: initial_capital,
            base_stake,
            consecutive_losses: 0,
            last_stake: base_stake,
            last_won: false,
            history: alloc::vec![initial_capital],
        }
    }

    /// Creates the state with room for `spins` history entries.
    #[must_use]
    pub fn with_capacity(initial_capital: Money, base_stake: Money, spins: usize) -> Self {
        let mut state = Self::new(initial_capital, base_stake);
        state.history.reserve(spins);
        state
    }

    /// Returns the current capital.
    #[must_use]
    pub const fn capital(&self) -> Money {
        self.capital
    }

    /// Returns the number of losses since the last win.
    #[must_use]
    pub const fn consecutive_losses(&self) -> u32 {
        self.consecutive_losses
    }

    /// Returns the stake placed on the previous spin.
    #[must_use]
    pub const fn last_stake(&self) -> Money {
        self.last_stake
    }

    /// Returns whether the previous spin was won.
    #[must_use]
    pub const fn last_won(&self) -> bool {
        self.last_won
    }

    /// Returns the capital after every spin so far, initial capital first.
    #[must_use]
    pub fn history(&self) -> &[Money] {
        &self.history
    }

    /// Returns the number of spins played.
    #[must_use]
    pub fn spins_played(&self) -> usize {
        self.history.len() - 1
    }

    /// Returns the context a strategy sees before the next spin.
    #[must_use]
    pub const fn bet_context(&self) -> BetContext {
        BetContext {
            capital: self.capital,
            base_stake: self.base_stake,
            consecutive_losses: self.consecutive_losses,
            last_stake: self.last_stake,
            last_won: self.last_won,
        }
    }

    /// Applies the outcome of one spin played for `stake`.
    pub fn settle(&mut self, stake: Money, won: bool) {
        if won {
            self.capital = self.capital.saturating_add(stake);
            self.consecutive_losses = 0;
        } else {
            self.capital = self.capital.saturating_sub(stake);
            self.consecutive_losses = self.consecutive_losses.saturating_add(1);
        }
        self.last_won = won;
        self.last_stake = stake;
        self.history.push(self.capital);
    }

    /// Consumes the state and returns the finished run.
    #[must_use]
    pub fn into_result(self, ruined: bool) -> RunResult {
        RunResult::new(self.history, ruined)
    }
}
