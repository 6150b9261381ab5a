#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

pub mod automaton;
pub mod matcher;
pub mod normalize;
pub mod pattern;
pub mod stats;
mod utils;

pub use automaton::{Automaton, AutomatonBuilder, BuildConfig, ScanSession, StateID};
#[cfg(feature = "serde")]
pub use automaton::InvalidAutomaton;
pub use matcher::{Matcher, NaiveManyMatcher, PatternMatch};
pub use normalize::{Normalization, Normalize};
pub use pattern::{PatternError, PatternID, Symbol};
pub use stats::ScanStats;

pub(crate) type HashMap<K, V> = rustc_hash::FxHashMap<K, V>;
