use bimap::BiMap;

use crate::{
    normalize::{Normalization, Normalize},
    utils::sorted_insert,
    PatternError, PatternID, Symbol,
};

use super::{Automaton, BuildConfig, State, StateID};

/// Create Aho-Corasick automata from lists of patterns.
///
/// Patterns are inserted one at a time into a prefix tree. Calling
/// [`AutomatonBuilder::finish`] consumes the builder and computes the
/// failure links, so no pattern can be added to a compiled automaton.
pub struct AutomatonBuilder<S, N = Normalization> {
    /// The automaton being built, without failure links
    automaton: Automaton<S, N>,
    /// The normalized patterns added so far and their IDs
    patterns: BiMap<PatternID, Box<[S]>>,
}

impl<S: Symbol, N: Normalize<S>> AutomatonBuilder<S, N> {
    /// Construct an empty automaton builder.
    pub fn new() -> Self
    where
        N: Default,
    {
        Self::with_config(BuildConfig::default())
    }

    /// Construct an empty automaton builder with a custom configuration.
    pub fn with_config(config: BuildConfig<N>) -> Self {
        Self {
            automaton: Automaton::with_normalizer(config.normalizer),
            patterns: BiMap::new(),
        }
    }

    /// Construct an automaton builder from a list of patterns.
    ///
    /// Stops at the first invalid pattern.
    pub fn try_from_patterns<P>(
        patterns: impl IntoIterator<Item = P>,
    ) -> Result<Self, PatternError>
    where
        P: IntoIterator<Item = S>,
        N: Default,
    {
        Self::try_from_patterns_with_config(patterns, BuildConfig::default())
    }

    /// Construct an automaton builder from a list of patterns with a custom
    /// configuration.
    pub fn try_from_patterns_with_config<P>(
        patterns: impl IntoIterator<Item = P>,
        config: BuildConfig<N>,
    ) -> Result<Self, PatternError>
    where
        P: IntoIterator<Item = S>,
    {
        patterns
            .into_iter()
            .try_fold(Self::with_config(config), |mut builder, pattern| {
                builder.add_pattern(pattern)?;
                Ok(builder)
            })
    }

    /// Add a pattern to the automaton builder.
    ///
    /// Returns the ID of the pattern. Adding a pattern that is equal to a
    /// previous one after normalization returns the ID of the previous one
    /// and leaves the automaton unchanged.
    pub fn add_pattern(
        &mut self,
        pattern: impl IntoIterator<Item = S>,
    ) -> Result<PatternID, PatternError> {
        let normalizer = &self.automaton.normalizer;
        let symbols: Box<[S]> = pattern
            .into_iter()
            .map(|symbol| normalizer.normalize(symbol))
            .collect();
        if symbols.is_empty() {
            tracing::trace!("rejected empty pattern");
            return Err(PatternError::Empty);
        }
        if let Some(&id) = self.patterns.get_by_right(&symbols) {
            tracing::trace!(pattern = ?symbols, %id, "pattern already present");
            return Ok(id);
        }
        let id = PatternID(self.patterns.len());
        self.automaton.insert(&symbols, id);
        self.patterns.insert(id, symbols);
        Ok(id)
    }

    /// Get the number of distinct patterns added so far.
    pub fn n_patterns(&self) -> usize {
        self.patterns.len()
    }

    /// Construct the automaton.
    ///
    /// Computes the failure links of all states and propagates pattern
    /// matches along them. The returned automaton matches all patterns added
    /// to `self`.
    pub fn finish(self) -> Automaton<S, N> {
        let Self {
            mut automaton,
            patterns,
        } = self;
        let mut patterns = patterns.into_iter().collect::<Vec<_>>();
        patterns.sort_unstable_by_key(|&(id, _)| id);
        automaton.patterns = patterns.into_iter().map(|(_, p)| p).collect();
        automaton.compile();
        tracing::debug!(
            n_states = automaton.n_states(),
            n_transitions = automaton.n_transitions(),
            n_patterns = automaton.n_patterns(),
            "compiled automaton"
        );
        automaton
    }
}

impl<S: Symbol, N: Normalize<S> + Default> Default for AutomatonBuilder<S, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Symbol, N> Automaton<S, N> {
    /// Insert the normalized `symbols` into the prefix tree and mark the
    /// final state with `id`.
    ///
    /// Follows the longest prefix already present and creates one new state
    /// per remaining symbol. State IDs are never reassigned.
    fn insert(&mut self, symbols: &[S], id: PatternID) {
        let mut state = StateID::ROOT;
        let mut depth = 0;
        while let Some(next) = symbols
            .get(depth)
            .and_then(|symbol| self.transition(state, symbol))
        {
            state = next;
            depth += 1;
        }
        for &symbol in &symbols[depth..] {
            state = self.add_child(state, symbol);
        }
        sorted_insert(&mut self.states[state.0].matches, id);
    }

    fn add_child(&mut self, parent: StateID, symbol: S) -> StateID {
        let child = StateID(self.states.len());
        self.states.push(State::default());
        self.states[parent.0].transitions.insert(symbol, child);
        child
    }
}
