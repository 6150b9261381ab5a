//! Checks on deserialized automata.
//!
//! A serialized automaton is only accepted if scanning it can neither index
//! out of bounds nor loop along failure links.

use std::collections::VecDeque;

use serde::Deserialize;
use thiserror::Error;

use crate::{PatternID, Symbol};

use super::{Automaton, State, StateID};

/// The serialized form of an [`Automaton`], before validation.
#[derive(Deserialize)]
#[serde(bound(deserialize = "S: Symbol + Deserialize<'de>, N: Deserialize<'de>"))]
pub(super) struct RawAutomaton<S, N> {
    states: Vec<State<S>>,
    patterns: Vec<Box<[S]>>,
    normalizer: N,
}

/// A deserialized automaton that is not the result of a compilation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum InvalidAutomaton {
    /// There are no states at all.
    #[error("automaton has no root state")]
    MissingRoot,
    /// A transition points past the last state.
    #[error("state {state} has a transition to unknown state {target}")]
    UnknownState {
        /// The source of the transition.
        state: StateID,
        /// The missing target.
        target: StateID,
    },
    /// A state is reached by zero or several transitions.
    #[error("state {state} is not reached by exactly one trie transition")]
    NotATree {
        /// The offending state.
        state: StateID,
    },
    /// A failure link does not point to a shallower state.
    #[error("failure link of state {state} to {fail} is not shallower")]
    InvalidFail {
        /// The source of the failure link.
        state: StateID,
        /// Its target.
        fail: StateID,
    },
    /// A state reports a pattern that does not exist.
    #[error("state {state} reports unknown pattern {pattern}")]
    UnknownPattern {
        /// The reporting state.
        state: StateID,
        /// The missing pattern.
        pattern: PatternID,
    },
    /// A state reports a pattern longer than the prefix it stands for.
    #[error("state {state} reports pattern {pattern}, which is longer than its prefix")]
    PatternTooLong {
        /// The reporting state.
        state: StateID,
        /// The pattern.
        pattern: PatternID,
    },
}

impl<S: Symbol, N> TryFrom<RawAutomaton<S, N>> for Automaton<S, N> {
    type Error = InvalidAutomaton;

    fn try_from(raw: RawAutomaton<S, N>) -> Result<Self, Self::Error> {
        let RawAutomaton {
            states,
            patterns,
            normalizer,
        } = raw;
        if states.is_empty() {
            return Err(InvalidAutomaton::MissingRoot);
        }
        let depths = trie_depths(&states)?;
        for (i, (node, &depth)) in states.iter().zip(&depths).enumerate() {
            let state = StateID(i);
            let fail = node.fail;
            let valid_fail = if state == StateID::ROOT {
                fail == StateID::ROOT
            } else {
                depths.get(fail.0).is_some_and(|&d| d < depth)
            };
            if !valid_fail {
                return Err(InvalidAutomaton::InvalidFail { state, fail });
            }
            for &pattern in &node.matches {
                match patterns.get(pattern.0) {
                    None => return Err(InvalidAutomaton::UnknownPattern { state, pattern }),
                    Some(p) if p.len() > depth => {
                        return Err(InvalidAutomaton::PatternTooLong { state, pattern })
                    }
                    Some(_) => {}
                }
            }
        }
        Ok(Automaton {
            states,
            patterns,
            normalizer,
        })
    }
}

/// The depth of every state in the trie, checking that the transitions form
/// a tree rooted at state 0.
fn trie_depths<S>(states: &[State<S>]) -> Result<Vec<usize>, InvalidAutomaton> {
    let mut depths = vec![None; states.len()];
    depths[StateID::ROOT.0] = Some(0);
    let mut queue = VecDeque::from([(StateID::ROOT, 0)]);
    while let Some((state, depth)) = queue.pop_front() {
        for &target in states[state.0].transitions.values() {
            match depths.get_mut(target.0) {
                None => return Err(InvalidAutomaton::UnknownState { state, target }),
                Some(Some(_)) => return Err(InvalidAutomaton::NotATree { state: target }),
                Some(slot) => {
                    *slot = Some(depth + 1);
                    queue.push_back((target, depth + 1));
                }
            }
        }
    }
    depths
        .into_iter()
        .enumerate()
        .map(|(i, depth)| depth.ok_or(InvalidAutomaton::NotATree { state: StateID(i) }))
        .collect()
}
