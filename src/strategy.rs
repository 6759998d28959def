//! Betting strategies.

use core::fmt;
use core::str::FromStr;

use crate::Money;
use crate::error::ConfigError;

/// Everything a strategy may look at when sizing the next bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BetContext {
    /// Capital before the spin.
    pub capital: Money,
    /// The reference bet size.
    pub base_stake: Money,
    /// Losses since the last win.
    pub consecutive_losses: u32,
    /// Stake placed on the previous spin (the base stake before the first spin).
    pub last_stake: Money,
    /// Whether the previous spin was won (`false` before the first spin).
    pub last_won: bool,
}

/// Sizes the next bet from the running state of a run.
///
/// Implementations must be pure and must never return a negative stake. Most
/// strategies only look at a subset of the context.
pub trait BettingStrategy {
    /// Returns the stake for the next spin.
    fn next_stake(&self, context: &BetContext) -> Money;
}

/// The built-in betting strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Strategy {
    /// Double the stake after every loss.
    #[default]
    Martingale,
    /// Raise the stake by one base unit per consecutive loss.
    DAlembert,
    /// Follow the Fibonacci sequence through a loss streak.
    Fibonacci,
    /// Double the stake after a win, fall back to the base after a loss.
    Own,
}

impl Strategy {
    /// All built-in strategies.
    pub const ALL: [Self; 4] = [Self::Martingale, Self::DAlembert, Self::Fibonacci, Self::Own];

    /// Returns the short selector code (`m`, `d`, `f` or `o`).
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Martingale => 'm',
            Self::DAlembert => 'd',
            Self::Fibonacci => 'f',
            Self::Own => 'o',
        }
    }

    /// `base * 2^losses`, saturating.
    #[must_use]
    pub fn martingale(context: &BetContext) -> Money {
        Money::from(2u8)
            .checked_pow(context.consecutive_losses)
            .map_or(Money::MAX, |factor| context.base_stake.saturating_mul(factor))
    }

    /// `max(base + losses * base, base)`, saturating.
    #[must_use]
    pub fn d_alembert(context: &BetContext) -> Money {
        let base = context.base_stake;
        base.saturating_add(base.saturating_mul(Money::from(context.consecutive_losses)))
            .max(base)
    }

    /// `base * F(losses)` over the sequence 1, 1, 2, 3, 5, ...
    ///
    /// No losses means the base stake.
    #[must_use]
    pub fn fibonacci(context: &BetContext) -> Money {
        if context.consecutive_losses == 0 {
            return context.base_stake;
        }
        context
            .base_stake
            .saturating_mul(fibonacci_factor(context.consecutive_losses))
    }

    /// Doubles the previous stake after a win and reverts to the base after a
    /// loss, never betting more than the current capital.
    ///
    /// The loss count is ignored: only the previous spin matters.
    #[must_use]
    pub fn own(context: &BetContext) -> Money {
        let wanted = if context.last_won {
            context.last_stake.saturating_mul(2)
        } else {
            context.base_stake
        };
        wanted.min(context.capital).max(0)
    }
}

/// `F(n)` for `n >= 1` with `F(1) = F(2) = 1`, saturating at `Money::MAX`.
fn fibonacci_factor(n: u32) -> Money {
    let (mut prev, mut current): (Money, Money) = (1, 1);
    for _ in 1..n {
        if current == Money::MAX {
            break;
        }
        let next = prev.saturating_add(current);
        prev = current;
        current = next;
    }
    current
}

impl BettingStrategy for Strategy {
    fn next_stake(&self, context: &BetContext) -> Money {
        match self {
            Self::Martingale => Self::martingale(context),
            Self::DAlembert => Self::d_alembert(context),
            Self::Fibonacci => Self::fibonacci(context),
            Self::Own => Self::own(context),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Martingale => "martingale",
            Self::DAlembert => "d'alembert",
            Self::Fibonacci => "fibonacci",
            Self::Own => "own",
        };
        f.write_str(name)
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    /// Parses a short code (`m`, `d`, `f`, `o`) or a full name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "m" | "martingale" => Ok(Self::Martingale),
            "d" | "dalembert" | "d'alembert" => Ok(Self::DAlembert),
            "f" | "fibonacci" => Ok(Self::Fibonacci),
            "o" | "own" | "custom" => Ok(Self::Own),
            _ => Err(ConfigError::UnknownStrategy),
        }
    }
}
