//! A roulette betting-strategy simulator with optional `no_std` support.
//!
//! The crate plays many independent runs of even-money bets on red under one
//! of four staking strategies, records each run's capital history, detects
//! ruin, and tallies the lengths of consecutive-loss streaks. Rendering the
//! results is left to the caller.
//!
//! # Example
//!
//! ```
//! use roulettrs::{Batch, CapitalMode, SimulationOptions, Strategy};
//!
//! let options = SimulationOptions::default()
//!     .with_runs(10)
//!     .with_spins(200)
//!     .with_strategy(Strategy::DAlembert)
//!     .with_capital_mode(CapitalMode::Finite)
//!     .with_seed(42);
//! let result = Batch::new(options).run();
//! println!("Ruined: {} of {} runs", result.ruined(), result.total_runs());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod batch;
pub mod error;
pub mod options;
pub mod result;
pub mod run;
pub mod strategy;
pub mod streak;
pub mod wheel;

/// Amount of money: capital, stakes and history entries.
///
/// Signed, because capital may go negative when capital is unlimited.
pub type Money = i64;

// Re-export main types
pub use batch::Batch;
pub use error::ConfigError;
pub use options::{CapitalMode, SimulationOptions};
pub use result::{BatchResult, RunResult};
pub use run::{RunPhase, RunState, Simulator};
pub use strategy::{BetContext, BettingStrategy, Strategy};
pub use streak::{StreakTally, loss_streaks};
pub use wheel::{Color, FixedOutcomes, OutcomeSource, POCKETS, SpinOutcome, Wheel, place_bet};
