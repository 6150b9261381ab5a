//! Core Aho-Corasick [`Automaton`] data structure and builder.
//!
//! Use [`AutomatonBuilder`] to insert patterns into a prefix tree, then
//! [`AutomatonBuilder::finish`] to compute the failure links and obtain a
//! read-only [`Automaton`] that can be scanned any number of times.

mod builder;
mod compile;
#[cfg(feature = "serde")]
mod serial;
mod traversal;
mod view;

use std::fmt::{self, Debug};

use derive_more::{Display, From, Into};
use derive_where::derive_where;
use itertools::Itertools;
use petgraph::{dot::Dot, graph::DiGraph};
use smallvec::SmallVec;

use crate::{normalize::Normalization, HashMap, PatternID, Symbol};
pub use builder::AutomatonBuilder;
#[cfg(feature = "serde")]
pub use serial::InvalidAutomaton;
pub use traversal::{FindMatches, ScanSession, StepMatches};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A compiled Aho-Corasick automaton.
///
/// States are stored in a single vector and refer to each other by
/// [`StateID`]. Trie transitions only ever point to deeper states, while
/// failure links point to shallower states anywhere in the trie.
///
/// Once returned by [`AutomatonBuilder::finish`], the automaton is never
/// mutated again. Scans only borrow it, so it can be shared between threads
/// and scanned by any number of [`ScanSession`]s concurrently.
///
/// ## Type parameters
/// - S: the symbol alphabet
/// - N: the normalizer applied to pattern and input symbols
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "serial::RawAutomaton<S, N>",
        bound(
            serialize = "S: Symbol + Serialize, N: Serialize",
            deserialize = "S: Symbol + Deserialize<'de>, N: Deserialize<'de>"
        )
    )
)]
pub struct Automaton<S, N = Normalization> {
    /// The states, the root at index 0
    states: Vec<State<S>>,
    /// The normalized patterns, indexed by pattern ID
    patterns: Vec<Box<[S]>>,
    /// The normalizer patterns were inserted with
    normalizer: N,
}

/// Configuration for building an automaton.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BuildConfig<N = Normalization> {
    /// The normalization applied to every pattern and input symbol.
    pub normalizer: N,
}

/// A state ID in an automaton.
///
/// The default is [`StateID::ROOT`].
#[derive(
    Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, From, Into, Hash, Debug, Display,
)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StateID(usize);

impl StateID {
    /// The root state, where every scan starts.
    pub const ROOT: StateID = StateID(0);
}

/// A node in the automaton
///
/// Nodes have zero, one or many pattern matches that are output when the
/// state is reached.
#[derive(Clone, Debug)]
#[derive_where(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(bound(
        serialize = "S: Symbol + Serialize",
        deserialize = "S: Symbol + Deserialize<'de>"
    ))
)]
struct State<S> {
    /// Trie transitions to child states.
    transitions: HashMap<S, StateID>,
    /// The state of the longest proper suffix that is also a trie prefix.
    fail: StateID,
    /// Sorted IDs of the patterns ending here, including those inherited
    /// along the failure chain once compiled.
    matches: SmallVec<[PatternID; 2]>,
}

impl<S, N> Automaton<S, N> {
    /// A root-only automaton that matches nothing.
    fn with_normalizer(normalizer: N) -> Self {
        Self {
            states: vec![State::default()],
            patterns: Vec::new(),
            normalizer,
        }
    }

    /// The normalizer applied to pattern and input symbols.
    pub fn normalizer(&self) -> &N {
        &self.normalizer
    }
}

impl<S: Symbol, N> Automaton<S, N> {
    /// Get its dot string representation.
    ///
    /// Trie transitions are labelled with their symbol, failure links to
    /// non-root states with `FAIL`.
    pub fn dot_string(&self) -> String {
        let mut graph = DiGraph::<String, String>::with_capacity(self.n_states(), 0);
        let nodes = self
            .states()
            .map(|state| graph.add_node(fmt_node(state, self.matches(state))))
            .collect_vec();
        for state in self.states() {
            for (symbol, child) in self.transitions(state) {
                graph.add_edge(nodes[state.0], nodes[child.0], format!("{symbol:?}"));
            }
            let fail = self.fail(state);
            if fail != StateID::ROOT {
                graph.add_edge(nodes[state.0], nodes[fail.0], "FAIL".to_string());
            }
        }
        format!("{}", Dot::new(&graph))
    }
}

fn fmt_node(state: StateID, matches: &[PatternID]) -> String {
    if matches.is_empty() {
        format!("{state}")
    } else {
        format!("{state}\n{}", matches.iter().join(", "))
    }
}

impl<S: Symbol, N> Debug for Automaton<S, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dot_string())
    }
}
