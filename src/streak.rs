//! Consecutive-loss streak analysis.

use alloc::vec::Vec;
#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use crate::Money;

/// Returns the lengths of the maximal loss streaks in a capital history.
///
/// A step where capital strictly drops extends the open streak; any other step
/// closes it. A streak still open at the end of the history is included.
/// Lengths are returned in the order they occur.
///
/// # Example
///
/// ```
/// use roulettrs::loss_streaks;
///
/// let history = [1000, 900, 800, 950, 900, 850, 800];
/// assert_eq!(loss_streaks(&history), vec![2, 3]);
/// ```
#[must_use]
pub fn loss_streaks(history: &[Money]) -> Vec<usize> {
    let mut streaks = Vec::new();
    let mut open = 0;

    for pair in history.windows(2) {
        if pair[1] < pair[0] {
            open += 1;
        } else if open > 0 {
            streaks.push(open);
            open = 0;
        }
    }

    if open > 0 {
        streaks.push(open);
    }
    streaks
}

/// Streak length to occurrence count, accumulated over many histories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StreakTally {
    counts: HashMap<usize, u64>,
    total: u64,
}

impl StreakTally {
    /// Creates an empty tally.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one streak of `length` losses. Zero-length streaks are ignored.
    pub fn record(&mut self, length: usize) {
        if length == 0 {
            return;
        }
        *self.counts.entry(length).or_insert(0) += 1;
        self.total += 1;
    }

    /// Records every streak found in `history`.
    pub fn record_history(&mut self, history: &[Money]) {
        for length in loss_streaks(history) {
            self.record(length);
        }
    }

    /// Adds the counts of another tally into this one.
    pub fn merge(&mut self, other: &Self) {
        for (&length, &count) in &other.counts {
            *self.counts.entry(length).or_insert(0) += count;
        }
        self.total += other.total;
    }

    /// Returns how many streaks of `length` were recorded.
    #[must_use]
    pub fn count(&self, length: usize) -> u64 {
        self.counts.get(&length).copied().unwrap_or(0)
    }

    /// Returns the number of streaks recorded.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.total
    }

    /// Returns whether no streaks were recorded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Returns the longest recorded streak.
    #[must_use]
    pub fn longest(&self) -> Option<usize> {
        self.counts.keys().copied().max()
    }

    /// Returns `(length, count)` pairs sorted by length.
    #[must_use]
    pub fn counts(&self) -> Vec<(usize, u64)> {
        let mut counts: Vec<(usize, u64)> =
            self.counts.iter().map(|(&length, &count)| (length, count)).collect();
        counts.sort_unstable_by_key(|&(length, _)| length);
        counts
    }

    /// Returns `(length, share of all streaks)` pairs sorted by length.
    ///
    /// An empty tally has no distribution and yields an empty vector.
    #[must_use]
    pub fn relative_frequencies(&self) -> Vec<(usize, f64)> {
        if self.total == 0 {
            return Vec::new();
        }
        #[expect(
            clippy::cast_precision_loss,
            reason = "f64 has sufficient precision for streak counts"
        )]
        let total = self.total as f64;
        self.counts()
            .into_iter()
            .map(|(length, count)| {
                #[expect(
                    clippy::cast_precision_loss,
                    reason = "f64 has sufficient precision for streak counts"
                )]
                let share = count as f64 / total;
                (length, share)
            })
            .collect()
    }
}
