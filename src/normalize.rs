//! Symbol normalization applied before insertion and before scanning.
//!
//! The automaton itself is alphabet-agnostic. Any folding of the alphabet,
//! such as making ASCII letters case-insensitive, is expressed as a
//! [`Normalize`] implementation that the automaton stores and applies to
//! every pattern symbol at insertion time and to every input symbol at scan
//! time, so that both sides always agree.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Map a symbol to its canonical representative.
pub trait Normalize<S> {
    /// The canonical form of `symbol`.
    fn normalize(&self, symbol: S) -> S;
}

/// Built-in normalization policies for bytes and characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Normalization {
    /// Symbols are compared as they are.
    #[default]
    Exact,
    /// ASCII letters are folded to lowercase, everything else is kept.
    AsciiCaseInsensitive,
}

impl Normalize<u8> for Normalization {
    #[inline]
    fn normalize(&self, symbol: u8) -> u8 {
        match self {
            Normalization::Exact => symbol,
            Normalization::AsciiCaseInsensitive => symbol.to_ascii_lowercase(),
        }
    }
}

impl Normalize<char> for Normalization {
    #[inline]
    fn normalize(&self, symbol: char) -> char {
        match self {
            Normalization::Exact => symbol,
            Normalization::AsciiCaseInsensitive => symbol.to_ascii_lowercase(),
        }
    }
}

/// The identity normalizer, usable with any alphabet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Identity;

impl<S> Normalize<S> for Identity {
    #[inline]
    fn normalize(&self, symbol: S) -> S {
        symbol
    }
}

impl<S, F: Fn(S) -> S> Normalize<S> for F {
    #[inline]
    fn normalize(&self, symbol: S) -> S {
        self(symbol)
    }
}
