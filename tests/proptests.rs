use std::collections::BTreeSet;

use itertools::Itertools;
use proptest::prelude::*;

use acmatching::{
    Automaton, AutomatonBuilder, BuildConfig, Matcher, NaiveManyMatcher, Normalization,
    PatternMatch,
};

fn build(patterns: &[String]) -> Automaton<char> {
    AutomatonBuilder::try_from_patterns(patterns.iter().map(|p| p.chars()))
        .unwrap()
        .finish()
}

/// Matches keyed by pattern text rather than by ID.
fn matches_by_text(automaton: &Automaton<char>, subject: &str) -> BTreeSet<(usize, String)> {
    automaton
        .find_matches(subject.chars())
        .map(|m| {
            let text = automaton.pattern(m.pattern).unwrap().iter().collect();
            (m.start, text)
        })
        .collect()
}

fn arb_patterns(max_len: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-d]{1,5}", 0..max_len)
}

proptest! {
    #[test]
    fn proptest_same_as_naive(
        subject in "[a-e]{0,60}",
        patterns in arb_patterns(10),
    ) {
        let patterns = patterns.iter().map(|p| p.chars()).collect_vec();
        let automaton = AutomatonBuilder::<char>::try_from_patterns(patterns.clone())
            .unwrap()
            .finish();
        let naive = NaiveManyMatcher::<char>::try_from_patterns(patterns).unwrap();

        let automaton_matches: Vec<PatternMatch> =
            Matcher::<str>::find_matches(&automaton, subject.as_str()).collect();
        let naive_matches: Vec<PatternMatch> =
            Matcher::<str>::find_matches(&naive, subject.as_str()).collect();
        prop_assert_eq!(automaton_matches, naive_matches);
    }

    #[test]
    fn proptest_sound_and_linear(
        subject in "[a-d]{0,200}",
        patterns in arb_patterns(20),
    ) {
        let automaton = build(&patterns);
        let chars = subject.chars().collect_vec();
        let mut iter = automaton.find_matches(chars.iter().copied());
        for m in iter.by_ref() {
            let pattern = automaton.pattern(m.pattern).unwrap();
            prop_assert_eq!(&chars[m.range()], pattern);
        }
        let stats = iter.stats();
        prop_assert_eq!(stats.symbols as usize, chars.len());
        prop_assert!(stats.fail_steps <= stats.symbols);
        prop_assert!(stats.transitions <= stats.symbols);
    }

    #[test]
    fn proptest_order_independent(
        subject in "[a-d]{0,60}",
        patterns in arb_patterns(10),
    ) {
        let mut reversed = patterns.clone();
        reversed.reverse();
        let mut sorted = patterns.clone();
        sorted.sort();
        let expected = matches_by_text(&build(&patterns), &subject);
        prop_assert_eq!(&matches_by_text(&build(&reversed), &subject), &expected);
        prop_assert_eq!(&matches_by_text(&build(&sorted), &subject), &expected);
    }

    #[test]
    fn proptest_duplicates_idempotent(
        subject in "[a-d]{0,60}",
        patterns in arb_patterns(10),
    ) {
        let doubled = patterns.iter().chain(&patterns).cloned().collect_vec();
        let once = build(&patterns);
        let twice = build(&doubled);
        prop_assert_eq!(once.n_states(), twice.n_states());
        prop_assert_eq!(
            once.find_matches(subject.chars()).collect_vec(),
            twice.find_matches(subject.chars()).collect_vec()
        );
    }

    #[test]
    fn proptest_matches_closed_under_failure(patterns in arb_patterns(20)) {
        let automaton = build(&patterns);
        for state in automaton.states() {
            let own = automaton.matches(state);
            for id in automaton.matches(automaton.fail(state)) {
                prop_assert!(own.contains(id));
            }
        }
    }

    #[test]
    fn proptest_case_insensitive(
        subject in "[a-dA-D]{0,60}",
        patterns in prop::collection::vec("[a-dA-D]{1,4}", 1..6),
    ) {
        let config = BuildConfig { normalizer: Normalization::AsciiCaseInsensitive };
        let folded = AutomatonBuilder::try_from_patterns_with_config(
            patterns.iter().map(|p| p.chars()),
            config,
        )
        .unwrap()
        .finish();
        let lower = build(&patterns.iter().map(|p| p.to_ascii_lowercase()).collect_vec());
        prop_assert_eq!(
            matches_by_text(&folded, &subject),
            matches_by_text(&lower, &subject.to_ascii_lowercase())
        );
    }
}
