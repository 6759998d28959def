//! Batches of independent runs.

#[cfg(feature = "parallel")]
use alloc::vec::Vec;

use crate::options::SimulationOptions;
use crate::result::{BatchResult, RunResult};
use crate::run::Simulator;
use crate::wheel::{OutcomeSource, Wheel};

/// Runs a batch of independent runs under one configuration.
///
/// Run `i` spins a wheel seeded from `options.seed` on ChaCha stream `i`, so
/// [`Batch::run`] and [`Batch::run_parallel`] produce identical results.
///
/// # Example
///
/// ```
/// use roulettrs::{Batch, SimulationOptions};
///
/// let batch = Batch::new(SimulationOptions::default().with_runs(5).with_spins(100));
/// let result = batch.run();
/// assert_eq!(result.total_runs(), 5);
/// assert!(result.ruined() <= 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Batch {
    options: SimulationOptions,
    simulator: Simulator,
}

impl Batch {
    /// Creates a batch.
    ///
    /// The options are taken as given; see [`SimulationOptions::validate`].
    #[must_use]
    pub const fn new(options: SimulationOptions) -> Self {
        Self {
            options,
            simulator: Simulator::from_options(&options),
        }
    }

    /// Returns the batch options.
    #[must_use]
    pub const fn options(&self) -> &SimulationOptions {
        &self.options
    }

    /// Plays run number `index` on its own wheel.
    #[must_use]
    pub fn run_one(&self, index: u32) -> RunResult {
        let mut wheel = Wheel::for_run(self.options.seed, u64::from(index));
        self.simulator.run(&mut wheel)
    }

    /// Plays every run in order on the current thread.
    #[must_use]
    pub fn run(&self) -> BatchResult {
        let result: BatchResult = (0..self.options.runs).map(|index| self.run_one(index)).collect();
        self.finish(result)
    }

    /// Plays every run in order, all drawing from one shared `source`.
    ///
    /// Unlike [`Batch::run`], the runs are not independent of execution order:
    /// each run continues where the previous one left the source.
    pub fn run_with<O: OutcomeSource + ?Sized>(&self, source: &mut O) -> BatchResult {
        let mut result = BatchResult::new();
        for _ in 0..self.options.runs {
            result.push(self.simulator.run(source));
        }
        self.finish(result)
    }

    /// Plays the runs on the rayon thread pool.
    ///
    /// Results are gathered in run order and aggregated afterwards, so the
    /// outcome equals [`Batch::run`].
    #[cfg(feature = "parallel")]
    #[cfg_attr(docsrs, doc(cfg(feature = "parallel")))]
    #[must_use]
    pub fn run_parallel(&self) -> BatchResult {
        use rayon::prelude::*;

        let runs: Vec<RunResult> = (0..self.options.runs)
            .into_par_iter()
            .map(|index| self.run_one(index))
            .collect();
        self.finish(runs.into_iter().collect())
    }

    fn finish(&self, result: BatchResult) -> BatchResult {
        tracing::info!(
            strategy = %self.options.strategy,
            capital_mode = %self.options.capital_mode,
            runs = result.total_runs(),
            ruined = result.ruined(),
            streaks = result.streaks().total(),
            "batch finished"
        );
        result
    }
}
