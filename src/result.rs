//! Run and batch result types.

use alloc::vec::Vec;

use crate::Money;
use crate::streak::StreakTally;

/// Result of a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    /// Capital after every spin played, initial capital first.
    pub history: Vec<Money>,
    /// Whether capital ran out before the spins did (finite capital only).
    pub ruined: bool,
}

impl RunResult {
    /// Creates a run result.
    #[must_use]
    pub const fn new(history: Vec<Money>, ruined: bool) -> Self {
        Self { history, ruined }
    }

    /// Returns the number of spins played.
    #[must_use]
    pub fn spins_played(&self) -> usize {
        self.history.len().saturating_sub(1)
    }

    /// Returns the capital at the end of the run.
    #[must_use]
    pub fn final_capital(&self) -> Option<Money> {
        self.history.last().copied()
    }

    /// Returns the highest capital reached during the run.
    #[must_use]
    pub fn peak_capital(&self) -> Option<Money> {
        self.history.iter().copied().max()
    }
}

/// Result of a batch of runs.
///
/// Built up one run at a time with [`BatchResult::push`], or collected from an
/// iterator of [`RunResult`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchResult {
    runs: Vec<RunResult>,
    ruined: usize,
    streaks: StreakTally,
}

impl BatchResult {
    /// Creates an empty batch result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a finished run, updating the ruin count and streak tally.
    pub fn push(&mut self, run: RunResult) {
        if run.ruined {
            self.ruined += 1;
        }
        self.streaks.record_history(&run.history);
        self.runs.push(run);
    }

    /// Returns every run in execution order.
    #[must_use]
    pub fn runs(&self) -> &[RunResult] {
        &self.runs
    }

    /// Returns the number of runs.
    #[must_use]
    pub fn total_runs(&self) -> usize {
        self.runs.len()
    }

    /// Returns the number of ruined runs.
    #[must_use]
    pub const fn ruined(&self) -> usize {
        self.ruined
    }

    /// Returns the share of runs that were ruined, or 0 for an empty batch.
    #[must_use]
    pub fn ruin_rate(&self) -> f64 {
        if self.runs.is_empty() {
            return 0.0;
        }
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for run counts"
        )]
        let rate = self.ruined as f64 / self.runs.len() as f64;
        rate
    }

    /// Returns the loss-streak tally over all runs.
    #[must_use]
    pub const fn streaks(&self) -> &StreakTally {
        &self.streaks
    }

    /// Returns the streak-length distribution as relative frequencies.
    ///
    /// Empty when no run lost a single spin.
    #[must_use]
    pub fn relative_frequencies(&self) -> Vec<(usize, f64)> {
        self.streaks.relative_frequencies()
    }

    /// Consumes the result and returns the runs.
    #[must_use]
    pub fn into_runs(self) -> Vec<RunResult> {
        self.runs
    }
}

impl Extend<RunResult> for BatchResult {
    fn extend<I: IntoIterator<Item = RunResult>>(&mut self, iter: I) {
        for run in iter {
            self.push(run);
        }
    }
}

impl FromIterator<RunResult> for BatchResult {
    fn from_iter<I: IntoIterator<Item = RunResult>>(iter: I) -> Self {
        let mut batch = Self::new();
        batch.extend(iter);
        batch
    }
}
