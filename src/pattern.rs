//! Patterns, pattern identifiers and the symbols patterns are made of.

use std::{fmt::Debug, hash::Hash};

use derive_more::{From, Into};
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An element of the alphabet that patterns and inputs are made of.
///
/// Any small copyable value that can be hashed qualifies: `u8` for byte
/// streams, `char` for text, or arbitrary token types.
pub trait Symbol: Copy + Eq + Hash + Debug {}

impl<S: Copy + Eq + Hash + Debug> Symbol for S {}

/// Identify patterns with IDs.
///
/// IDs are dense and assigned in order of first insertion, starting at 0.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Default, From, Into, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct PatternID(pub usize);

impl Debug for PatternID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl std::fmt::Display for PatternID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ID({})", self.0)
    }
}

/// Errors that occur when adding a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PatternError {
    /// The pattern has no symbols.
    ///
    /// An empty pattern would match at every offset of every input, so it is
    /// refused rather than silently flooding the results.
    #[error("Empty patterns cannot be added to the automaton")]
    Empty,
}
