//! The pattern matchers.
//!
//! The [`Matcher`] trait is the main interface for pattern matching. The
//! following implementations of this trait are provided:
//!  - [`Automaton`], the Aho-Corasick automaton that scans the host once for
//!    all patterns. The main matcher implementation of this crate.
//!  - [`NaiveManyMatcher`], checking every pattern at every position of the
//!    host. Mostly useful as a benchmark and for testing.

mod naive;

use std::ops::Range;

use crate::{normalize::Normalize, Automaton, PatternID, Symbol};

pub use self::naive::NaiveManyMatcher;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Match patterns on host data `H`.
pub trait Matcher<H: ?Sized> {
    /// Find matches of all patterns in `host`.
    ///
    /// Matches are ordered by end offset, then by pattern ID.
    fn find_matches<'a>(&'a self, host: &'a H) -> impl Iterator<Item = PatternMatch> + 'a;
}

/// A match instance returned by a [`Matcher`].
///
/// Offsets count symbols of the host, `end` is exclusive. The ordering
/// compares start offsets first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct PatternMatch {
    /// The offset of the first symbol of the occurrence.
    pub start: usize,
    /// The offset one past the last symbol of the occurrence.
    pub end: usize,
    /// The matching pattern ID.
    pub pattern: PatternID,
}

impl PatternMatch {
    /// Create a new pattern match result.
    pub fn new(pattern: PatternID, start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            pattern,
        }
    }

    /// The span of the occurrence in the host.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The number of symbols of the occurrence.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always false, as empty patterns are rejected.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl<S: Symbol, N: Normalize<S>> Matcher<[S]> for Automaton<S, N> {
    fn find_matches<'a>(&'a self, host: &'a [S]) -> impl Iterator<Item = PatternMatch> + 'a {
        Automaton::find_matches(self, host.iter().copied())
    }
}

/// Offsets count `char`s, not bytes.
impl<N: Normalize<char>> Matcher<str> for Automaton<char, N> {
    fn find_matches<'a>(&'a self, host: &'a str) -> impl Iterator<Item = PatternMatch> + 'a {
        Automaton::find_matches(self, host.chars())
    }
}

/// Offsets count bytes.
impl<N: Normalize<u8>> Matcher<str> for Automaton<u8, N> {
    fn find_matches<'a>(&'a self, host: &'a str) -> impl Iterator<Item = PatternMatch> + 'a {
        Automaton::find_matches(self, host.bytes())
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use auto_enums::auto_enum;
    use itertools::Itertools;
    use rstest::rstest;

    use crate::AutomatonBuilder;

    use super::*;

    #[derive(Debug, Clone)]
    pub(crate) enum AnyMatcher<S: Symbol> {
        Automaton(Automaton<S>),
        Naive(NaiveManyMatcher<S>),
    }

    impl<H: ?Sized, S: Symbol> Matcher<H> for AnyMatcher<S>
    where
        Automaton<S>: Matcher<H>,
        NaiveManyMatcher<S>: Matcher<H>,
    {
        #[auto_enum(Iterator)]
        fn find_matches<'a>(&'a self, host: &'a H) -> impl Iterator<Item = PatternMatch> + 'a {
            match self {
                AnyMatcher::Automaton(m) => Matcher::find_matches(m, host),
                AnyMatcher::Naive(m) => Matcher::find_matches(m, host),
            }
        }
    }

    pub(crate) fn all_matchers(patterns: &[&str]) -> [AnyMatcher<char>; 2] {
        let patterns = patterns.iter().map(|p| p.chars());
        let automaton = AutomatonBuilder::try_from_patterns(patterns.clone())
            .unwrap()
            .finish();
        let naive = NaiveManyMatcher::try_from_patterns(patterns).unwrap();
        [AnyMatcher::Automaton(automaton), AnyMatcher::Naive(naive)]
    }

    #[rstest]
    #[case(&["cash", "shew", "ew", "no"], "cashew")]
    #[case(&["aa"], "aaaa")]
    #[case(&["abc", "bcd"], "xabcdx")]
    #[case(&["a", "ab", "bab", "bc", "bca", "c", "caa"], "abccab")]
    #[case(&["é", "ée"], "éée")]
    fn test_matchers_agree(#[case] patterns: &[&str], #[case] host: &str) {
        let (automaton, naive) = all_matchers(patterns)
            .map(|m| Matcher::<str>::find_matches(&m, host).collect_vec())
            .into_iter()
            .collect_tuple()
            .unwrap();
        assert_eq!(automaton, naive);
    }

    #[test]
    fn test_byte_offsets() {
        let automaton = AutomatonBuilder::<u8>::try_from_patterns(["ée".bytes()])
            .unwrap()
            .finish();
        let matches = Matcher::<str>::find_matches(&automaton, "aée").collect_vec();
        assert_eq!(matches, [PatternMatch::new(PatternID(0), 1, 4)]);
        assert_eq!(matches[0].len(), 3);
        assert!(!matches[0].is_empty());

        let automaton = AutomatonBuilder::<char>::try_from_patterns(["ée".chars()])
            .unwrap()
            .finish();
        let matches = Matcher::<str>::find_matches(&automaton, "aée").collect_vec();
        assert_eq!(matches[0].range(), 1..3);
    }

    #[test]
    fn test_slice_host() {
        let automaton = AutomatonBuilder::<u8>::try_from_patterns([*b"ab"])
            .unwrap()
            .finish();
        let host: &[u8] = b"abab";
        let starts = Matcher::<[u8]>::find_matches(&automaton, host)
            .map(|m| m.start)
            .collect_vec();
        assert_eq!(starts, [0, 2]);
    }
}
