//! Print scan statistics for growing inputs and pattern sets as CSV.
//!
//! Shows that the number of automaton moves per input symbol stays bounded
//! as the input and the pattern set grow.

use std::{io, time::Instant};

use itertools::Itertools;

use acmatching::{AutomatonBuilder, BuildConfig, Normalization};

const TEXT: &str = "Aho and Corasick describe an algorithm that locates all occurrences \
of any of a finite number of keywords in a string of text. It consists of constructing a \
finite state pattern matching machine from the keywords and then using the machine to \
process the text string in a single pass. ";

fn main() -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(io::stdout());
    wtr.write_record([
        "patterns",
        "symbols",
        "transitions",
        "fail_steps",
        "matches",
        "moves_per_symbol",
        "micros",
    ])?;

    let words: Vec<&str> = TEXT.split_whitespace().collect();
    for n_patterns in [5, 20, words.len()] {
        let config = BuildConfig {
            normalizer: Normalization::AsciiCaseInsensitive,
        };
        let patterns = words[..n_patterns].iter().map(|w| w.chars());
        let automaton = AutomatonBuilder::try_from_patterns_with_config(patterns, config)
            .expect("words are non-empty")
            .finish();

        for repeat in [1, 100, 10_000] {
            let text = TEXT.repeat(repeat);
            let start = Instant::now();
            // Feed the text in chunks of 4096 chars through one session
            let mut session = automaton.session();
            let mut matches = Vec::new();
            for chunk in &text.chars().chunks(4096) {
                session.feed(chunk, &mut matches);
            }
            let stats = session.stats();
            let elapsed = start.elapsed().as_micros();
            wtr.write_record([
                automaton.n_patterns().to_string(),
                stats.symbols.to_string(),
                stats.transitions.to_string(),
                stats.fail_steps.to_string(),
                stats.matches.to_string(),
                format!("{:.3}", stats.moves_per_symbol()),
                elapsed.to_string(),
            ])?;
        }
    }
    wtr.flush()?;
    Ok(())
}
