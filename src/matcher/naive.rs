//! A simple matcher comparing every pattern at every host position.
//!
//! This matcher is used as a baseline in benchmarking and as a reference for
//! testing the automaton.

use itertools::Itertools;

use crate::{
    normalize::{Normalization, Normalize},
    BuildConfig, PatternError, PatternID, Symbol,
};

use super::{Matcher, PatternMatch};

/// A matcher that checks all patterns one by one at every end offset.
///
/// Pattern IDs, normalization and the order of the reported matches are the
/// same as for an [`Automaton`](crate::Automaton) built from the same
/// patterns. Runs in O(host length × total pattern length).
#[derive(Debug, Clone)]
pub struct NaiveManyMatcher<S, N = Normalization> {
    patterns: Vec<Box<[S]>>,
    normalizer: N,
}

impl<S: Symbol, N: Normalize<S>> NaiveManyMatcher<S, N> {
    /// Create a naive matcher from a list of patterns.
    pub fn try_from_patterns<P>(
        patterns: impl IntoIterator<Item = P>,
    ) -> Result<Self, PatternError>
    where
        P: IntoIterator<Item = S>,
        N: Default,
    {
        Self::try_from_patterns_with_config(patterns, BuildConfig::default())
    }

    /// Create a naive matcher from a list of patterns with a custom
    /// configuration.
    pub fn try_from_patterns_with_config<P>(
        patterns: impl IntoIterator<Item = P>,
        config: BuildConfig<N>,
    ) -> Result<Self, PatternError>
    where
        P: IntoIterator<Item = S>,
    {
        let normalizer = config.normalizer;
        let mut unique_patterns: Vec<Box<[S]>> = Vec::new();
        for pattern in patterns {
            let pattern: Box<[S]> = pattern
                .into_iter()
                .map(|symbol| normalizer.normalize(symbol))
                .collect();
            if pattern.is_empty() {
                return Err(PatternError::Empty);
            }
            if !unique_patterns.contains(&pattern) {
                unique_patterns.push(pattern);
            }
        }
        Ok(Self {
            patterns: unique_patterns,
            normalizer,
        })
    }

    /// Get the number of distinct patterns.
    pub fn n_patterns(&self) -> usize {
        self.patterns.len()
    }

    /// Find all pattern occurrences in `host`.
    pub fn find_matches(
        &self,
        host: impl IntoIterator<Item = S>,
    ) -> impl Iterator<Item = PatternMatch> + '_ {
        let host = host
            .into_iter()
            .map(|symbol| self.normalizer.normalize(symbol))
            .collect_vec();
        (1..=host.len()).flat_map(move |end| {
            self.patterns
                .iter()
                .enumerate()
                .filter(|(_, pattern)| host[..end].ends_with(pattern))
                .map(|(id, pattern)| PatternMatch::new(PatternID(id), end - pattern.len(), end))
                .collect_vec()
        })
    }
}

impl<S: Symbol, N: Normalize<S>> Matcher<[S]> for NaiveManyMatcher<S, N> {
    fn find_matches<'a>(&'a self, host: &'a [S]) -> impl Iterator<Item = PatternMatch> + 'a {
        NaiveManyMatcher::find_matches(self, host.iter().copied())
    }
}

impl<N: Normalize<char>> Matcher<str> for NaiveManyMatcher<char, N> {
    fn find_matches<'a>(&'a self, host: &'a str) -> impl Iterator<Item = PatternMatch> + 'a {
        NaiveManyMatcher::find_matches(self, host.chars())
    }
}

impl<N: Normalize<u8>> Matcher<str> for NaiveManyMatcher<u8, N> {
    fn find_matches<'a>(&'a self, host: &'a str) -> impl Iterator<Item = PatternMatch> + 'a {
        NaiveManyMatcher::find_matches(self, host.bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naive_matcher() {
        let patterns = ["cash", "shew", "ew", "no", "ew"];
        let matcher = NaiveManyMatcher::<char>::try_from_patterns(patterns.map(str::chars)).unwrap();
        assert_eq!(matcher.n_patterns(), 4);

        let matches = matcher.find_matches("cashew".chars()).collect_vec();
        assert_eq!(
            matches,
            [
                PatternMatch::new(PatternID(0), 0, 4),
                PatternMatch::new(PatternID(1), 2, 6),
                PatternMatch::new(PatternID(2), 4, 6),
            ]
        );
    }

    #[test]
    fn test_naive_empty_pattern() {
        let res = NaiveManyMatcher::<u8>::try_from_patterns([b"ab".to_vec(), Vec::new()]);
        assert!(matches!(res, Err(PatternError::Empty)));
    }
}
