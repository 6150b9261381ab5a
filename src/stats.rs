//! Counters collected while scanning.

use derive_more::{Add, AddAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Work done by one scan session.
///
/// Exposed so that a benchmarking harness can derive throughput and
/// efficiency figures without timing the scanner from the inside. Stats of
/// several sessions can be summed with `+` and `+=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Add, AddAssign)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScanStats {
    /// Input symbols consumed.
    pub symbols: u64,
    /// Trie transitions taken, i.e. symbols that extended the current match.
    pub transitions: u64,
    /// Failure links followed.
    pub fail_steps: u64,
    /// Matches reported.
    pub matches: u64,
}

impl ScanStats {
    /// Average number of automaton moves (transitions and failure steps) per
    /// input symbol.
    ///
    /// Bounded by 2 for any input, which is what makes the scan linear.
    pub fn moves_per_symbol(&self) -> f64 {
        if self.symbols == 0 {
            return 0.;
        }
        (self.transitions + self.fail_steps) as f64 / self.symbols as f64
    }
}
