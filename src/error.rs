//! Error types for simulation configuration.

use thiserror::Error;

/// Errors that can occur while building or validating [`SimulationOptions`].
///
/// The simulation engine itself is infallible; these errors belong to the
/// configuration layer that sits in front of it.
///
/// [`SimulationOptions`]: crate::SimulationOptions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Run count is zero.
    #[error("run count must be positive")]
    ZeroRuns,
    /// Spin count is zero.
    #[error("spin count must be positive")]
    ZeroSpins,
    /// Base stake is zero or negative.
    #[error("base stake must be positive")]
    NonPositiveBaseStake,
    /// Initial capital is zero or negative.
    #[error("initial capital must be positive")]
    NonPositiveInitialCapital,
    /// Strategy selector did not match any known strategy.
    #[error("unknown strategy (expected one of m, d, f, o)")]
    UnknownStrategy,
    /// Capital mode selector did not match any known mode.
    #[error("unknown capital mode (expected f or i)")]
    UnknownCapitalMode,
}
