use std::{fmt, iter::FusedIterator, slice};

use delegate::delegate;
use derive_where::derive_where;

use crate::{normalize::Normalize, stats::ScanStats, PatternID, PatternMatch, Symbol};

use super::{Automaton, StateID};

impl<S: Symbol, N: Normalize<S>> Automaton<S, N> {
    /// Start a new scan session at the root.
    pub fn session(&self) -> ScanSession<'_, S, N> {
        ScanSession::new(self)
    }

    /// Run the automaton on `input`, lazily reporting every pattern
    /// occurrence.
    ///
    /// Matches are ordered by end offset, then by pattern ID. Offsets count
    /// symbols of `input`. Stop iterating to abandon the scan.
    pub fn find_matches<I>(&self, input: I) -> FindMatches<'_, S, N, I::IntoIter>
    where
        I: IntoIterator<Item = S>,
    {
        FindMatches::new(self.session(), input.into_iter())
    }

    /// Whether any pattern occurs in `input`.
    ///
    /// Stops reading `input` at the end of the first occurrence.
    pub fn is_match(&self, input: impl IntoIterator<Item = S>) -> bool {
        self.find_matches(input).next().is_some()
    }

    /// The state reached from `state` on the normalized `symbol`.
    ///
    /// Follows failure links until a transition on `symbol` exists, falling
    /// back to the root if there is none.
    fn next_state(&self, mut state: StateID, symbol: S, stats: &mut ScanStats) -> StateID {
        loop {
            if let Some(next) = self.transition(state, &symbol) {
                stats.transitions += 1;
                return next;
            }
            if state == StateID::ROOT {
                return StateID::ROOT;
            }
            state = self.fail(state);
            stats.fail_steps += 1;
        }
    }
}

/// One traversal of an automaton over one input stream.
///
/// Holds the only mutable state of a scan: the current automaton state, the
/// number of symbols consumed and the scan statistics. The input can be fed
/// symbol by symbol, e.g. across chunk boundaries of a stream, and matches
/// spanning several chunks are still reported.
#[derive_where(Clone)]
pub struct ScanSession<'a, S, N> {
    automaton: &'a Automaton<S, N>,
    state: StateID,
    offset: usize,
    stats: ScanStats,
}

impl<'a, S: Symbol, N: Normalize<S>> ScanSession<'a, S, N> {
    /// A new session at the root of `automaton`.
    pub fn new(automaton: &'a Automaton<S, N>) -> Self {
        Self {
            automaton,
            state: StateID::ROOT,
            offset: 0,
            stats: ScanStats::default(),
        }
    }

    /// Consume the next input symbol.
    ///
    /// Returns the matches ending at this symbol, in ascending pattern ID
    /// order.
    pub fn step(&mut self, symbol: S) -> StepMatches<'a, S> {
        let automaton = self.automaton;
        let symbol = automaton.normalizer.normalize(symbol);
        self.state = automaton.next_state(self.state, symbol, &mut self.stats);
        self.offset += 1;
        self.stats.symbols += 1;

        let matches = automaton.matches(self.state);
        self.stats.matches += matches.len() as u64;
        StepMatches {
            ids: matches.iter(),
            patterns: &automaton.patterns,
            end: self.offset,
        }
    }

    /// Consume all symbols of `chunk`, collecting the matches into `out`.
    pub fn feed(&mut self, chunk: impl IntoIterator<Item = S>, out: &mut Vec<PatternMatch>) {
        for symbol in chunk {
            out.extend(self.step(symbol));
        }
    }

    /// Move back to the root and forget about consumed input.
    pub fn reset(&mut self) {
        self.state = StateID::ROOT;
        self.offset = 0;
        self.stats = ScanStats::default();
    }

    /// The current automaton state.
    pub fn state(&self) -> StateID {
        self.state
    }

    /// The number of symbols consumed so far.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// The statistics of the session so far.
    pub fn stats(&self) -> ScanStats {
        self.stats
    }

    /// The automaton being scanned.
    pub fn automaton(&self) -> &'a Automaton<S, N> {
        self.automaton
    }
}

impl<'a, S, N> fmt::Debug for ScanSession<'a, S, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScanSession")
            .field("state", &self.state)
            .field("offset", &self.offset)
            .field("stats", &self.stats)
            .finish()
    }
}

/// The matches ending at a single input symbol.
///
/// Returned by [`ScanSession::step`].
#[derive(Debug)]
#[derive_where(Clone)]
pub struct StepMatches<'a, S> {
    ids: slice::Iter<'a, PatternID>,
    patterns: &'a [Box<[S]>],
    end: usize,
}

impl<'a, S> StepMatches<'a, S> {
    fn empty() -> Self {
        Self {
            ids: <&[PatternID]>::default().iter(),
            patterns: Default::default(),
            end: 0,
        }
    }
}

impl<'a, S> Iterator for StepMatches<'a, S> {
    type Item = PatternMatch;

    fn next(&mut self) -> Option<Self::Item> {
        let &id = self.ids.next()?;
        let len = self.patterns[id.0].len();
        Some(PatternMatch::new(id, self.end - len, self.end))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl<'a, S> ExactSizeIterator for StepMatches<'a, S> {}

impl<'a, S> FusedIterator for StepMatches<'a, S> {}

/// An iterator over all pattern occurrences in an input stream.
///
/// Returned by [`Automaton::find_matches`]. Symbols are pulled from the
/// input only as needed to produce the next match.
#[derive_where(Clone; I)]
pub struct FindMatches<'a, S, N, I> {
    session: ScanSession<'a, S, N>,
    input: I,
    pending: StepMatches<'a, S>,
}

impl<'a, S: Symbol, N: Normalize<S>, I> FindMatches<'a, S, N, I> {
    fn new(session: ScanSession<'a, S, N>, input: I) -> Self {
        Self {
            session,
            input,
            pending: StepMatches::empty(),
        }
    }

    delegate! {
        to self.session {
            /// The statistics of the scan so far.
            pub fn stats(&self) -> ScanStats;

            /// The number of input symbols consumed so far.
            pub fn offset(&self) -> usize;
        }
    }
}

impl<'a, S: Symbol, N: Normalize<S>, I: Iterator<Item = S>> Iterator
    for FindMatches<'a, S, N, I>
{
    type Item = PatternMatch;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(m) = self.pending.next() {
                return Some(m);
            }
            let symbol = self.input.next()?;
            self.pending = self.session.step(symbol);
        }
    }
}

impl<'a, S: Symbol, N: Normalize<S>, I: FusedIterator<Item = S>> FusedIterator
    for FindMatches<'a, S, N, I>
{
}
