//! Failure link computation.
//!
//! The failure link of a state spelling `w` points to the state spelling the
//! longest proper suffix of `w` that is also a prefix of some pattern. Links
//! are computed in breadth-first order: every suffix of `w` is shorter than
//! `w`, so its state (and failure link) is always known by the time `w` is
//! processed.

use std::{collections::VecDeque, mem};

use crate::{utils::sorted_union, Symbol};

use super::{Automaton, StateID};

impl<S: Symbol, N> Automaton<S, N> {
    /// Compute failure links and close match sets under them.
    ///
    /// Must run exactly once, after all patterns were inserted.
    pub(super) fn compile(&mut self) {
        let mut queue = VecDeque::with_capacity(self.states.len());

        // Depth-1 states fail to the root
        queue.extend(self.transitions(StateID::ROOT).map(|(_, child)| child));
        for &child in &queue {
            self.states[child.0].fail = StateID::ROOT;
        }

        while let Some(state) = queue.pop_front() {
            // The failure chain of `state` only visits strictly shallower
            // states, so `state`'s own transitions are never looked up while
            // they are taken out.
            let transitions = mem::take(&mut self.states[state.0].transitions);
            for (&symbol, &child) in &transitions {
                let fail = self.fail_target(self.fail(state), symbol);
                self.states[child.0].fail = fail;
                if fail != StateID::ROOT {
                    let inherited = self.states[fail.0].matches.clone();
                    sorted_union(&mut self.states[child.0].matches, &inherited);
                }
                queue.push_back(child);
            }
            self.states[state.0].transitions = transitions;
        }
    }

    /// Walk up the failure chain from `state` to the first state with a
    /// transition on `symbol`, and return that transition's target.
    ///
    /// Returns the root if no state on the chain, root included, has one.
    fn fail_target(&self, mut state: StateID, symbol: S) -> StateID {
        loop {
            if let Some(next) = self.transition(state, &symbol) {
                return next;
            }
            if state == StateID::ROOT {
                return StateID::ROOT;
            }
            state = self.fail(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::AutomatonBuilder;

    use super::*;

    fn build(patterns: &[&str]) -> Automaton<char> {
        AutomatonBuilder::try_from_patterns(patterns.iter().map(|p| p.chars()))
            .unwrap()
            .finish()
    }

    /// The state spelling `word`.
    fn state_of(automaton: &Automaton<char>, word: &str) -> StateID {
        word.chars().fold(StateID::ROOT, |state, c| {
            automaton.transition(state, &c).unwrap()
        })
    }

    #[test]
    fn test_root_is_fixed_point() {
        let automaton = build(&["abc"]);
        assert_eq!(automaton.fail(StateID::ROOT), StateID::ROOT);
        assert_eq!(build(&[]).fail(StateID::ROOT), StateID::ROOT);
    }

    #[test]
    fn test_failure_links() {
        let automaton = build(&["he", "she", "his", "hers"]);
        let fail_of = |w| automaton.fail(state_of(&automaton, w));
        assert_eq!(fail_of("h"), StateID::ROOT);
        assert_eq!(fail_of("s"), StateID::ROOT);
        assert_eq!(fail_of("sh"), state_of(&automaton, "h"));
        assert_eq!(fail_of("she"), state_of(&automaton, "he"));
        assert_eq!(fail_of("hers"), state_of(&automaton, "s"));
        assert_eq!(fail_of("his"), state_of(&automaton, "s"));
        assert_eq!(fail_of("hi"), StateID::ROOT);
    }

    #[test]
    fn test_shared_suffix_failure_link() {
        let automaton = build(&["abc", "bcd"]);
        let abc = state_of(&automaton, "abc");
        assert_eq!(automaton.fail(abc), state_of(&automaton, "bc"));
    }

    #[test]
    fn test_inherited_matches() {
        let automaton = build(&["he", "she", "his", "hers"]);
        let she = state_of(&automaton, "she");
        let ids = automaton
            .matches(she)
            .iter()
            .map(|&id| automaton.pattern(id).unwrap().iter().collect::<String>())
            .collect::<Vec<_>>();
        assert_eq!(ids, ["he", "she"]);
    }

    #[test]
    fn test_matches_closed_under_failure() {
        let automaton = build(&["a", "aa", "aaa", "ba", "aab", "bab", "b"]);
        for state in automaton.states() {
            let own = automaton.matches(state);
            let inherited = automaton.matches(automaton.fail(state));
            assert!(inherited.iter().all(|id| own.contains(id)));
            assert!(own.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
