use crate::{PatternID, Symbol};

use super::{Automaton, StateID};

impl<S, N> Automaton<S, N> {
    /// The root state.
    pub fn root(&self) -> StateID {
        StateID::ROOT
    }

    /// Get the number of states in the automaton, root included.
    pub fn n_states(&self) -> usize {
        self.states.len()
    }

    /// Get the number of trie transitions in the automaton.
    ///
    /// Equal to `n_states() - 1`, as every non-root state has exactly one
    /// incoming transition.
    pub fn n_transitions(&self) -> usize {
        self.states.iter().map(|s| s.transitions.len()).sum()
    }

    /// Get the number of distinct patterns.
    pub fn n_patterns(&self) -> usize {
        self.patterns.len()
    }

    /// All states, in order of creation.
    pub fn states(&self) -> impl ExactSizeIterator<Item = StateID> {
        (0..self.states.len()).map(StateID)
    }

    /// The failure link of `state`.
    ///
    /// The root is its own failure link.
    pub fn fail(&self, state: StateID) -> StateID {
        self.states[state.0].fail
    }

    /// The patterns recognised when `state` is reached, in ascending order.
    pub fn matches(&self, state: StateID) -> &[PatternID] {
        &self.states[state.0].matches
    }

    /// The normalized symbols of pattern `id`.
    pub fn pattern(&self, id: PatternID) -> Option<&[S]> {
        self.patterns.get(id.0).map(|p| &p[..])
    }

    /// The length of pattern `id`.
    ///
    /// Panics if `id` is not a pattern of this automaton.
    pub fn pattern_len(&self, id: PatternID) -> usize {
        self.patterns[id.0].len()
    }

    /// All patterns with their IDs, in ID order.
    pub fn patterns(&self) -> impl ExactSizeIterator<Item = (PatternID, &[S])> + '_ {
        self.patterns
            .iter()
            .enumerate()
            .map(|(i, p)| (PatternID(i), &p[..]))
    }
}

impl<S: Symbol, N> Automaton<S, N> {
    /// The trie transition out of `state` on `symbol`, if any.
    ///
    /// `symbol` must already be normalized.
    pub fn transition(&self, state: StateID, symbol: &S) -> Option<StateID> {
        self.states[state.0].transitions.get(symbol).copied()
    }

    /// All trie transitions out of `state`, in no particular order.
    pub fn transitions(&self, state: StateID) -> impl Iterator<Item = (S, StateID)> + '_ {
        self.states[state.0]
            .transitions
            .iter()
            .map(|(&symbol, &child)| (symbol, child))
    }
}
