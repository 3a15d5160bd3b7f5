//! Crossword placement engine.
//!
//! [`generate_puzzle`] is the entry point: it runs randomized builds over a
//! sequence of growing square grids and keeps the build that placed the most
//! words in the smallest box. [`compute_numbers`] and [`ClueList`] turn the
//! result into a numbered crossword.

mod bounds;
mod builder;
mod error;
mod grid;
mod numbering;
mod search;
mod types;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{GeneratorConfig, MAX_GRID_SIZE};
use crate::ir::WordEntry;

pub use bounds::Bounds;
pub use builder::{build_attempt, build_best_at_size};
pub use error::GenerateError;
pub use grid::{Grid, can_place, count_intersections, place_word};
pub use numbering::compute_numbers;
pub use search::{Candidate, CandidateScore, MAX_HITS, MIN_HITS, find_best_placement};
pub use types::{Clue, ClueList, NumberGrid, Placement, Puzzle};

/// Starting grid side for a word list: room for the longest word plus a
/// margin, and enough area to plausibly fit the whole list.
pub fn default_grid_size(words: &[WordEntry]) -> usize {
    let longest = words.iter().map(WordEntry::len).max().unwrap_or(0).max(6);
    let by_count = (words.len() as f64).sqrt().ceil() as usize * 4;
    10.max(longest + 2).max(by_count)
}

/// Build the best puzzle reachable from `seed`.
///
/// Sizes start at `config.preferred_size` (or [`default_grid_size`]) and grow
/// by `config.size_increment` for up to `config.max_escalations` rounds,
/// stopping early once every word is placed. The same inputs and seed always
/// give the same puzzle.
pub fn generate_puzzle(
    words: &[WordEntry],
    config: &GeneratorConfig,
    seed: u64,
) -> Result<Puzzle, GenerateError> {
    config.validate()?;
    if words.is_empty() {
        return Err(GenerateError::EmptyWordList);
    }

    let start = config
        .preferred_size
        .unwrap_or_else(|| default_grid_size(words));
    if config.largest_size(start).is_none() {
        return Err(GenerateError::invalid_config(format!(
            "grid would grow past {MAX_GRID_SIZE} cells per side"
        )));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    escalate(words, config, start, |size| {
        build_best_at_size(words, size, config.attempts_per_size, seed, &mut rng)
    })
}

/// Round loop behind [`generate_puzzle`]: `build_round` produces the best
/// build at a given size, and the best build over all rounds is kept.
fn escalate<F>(
    words: &[WordEntry],
    config: &GeneratorConfig,
    start: usize,
    mut build_round: F,
) -> Result<Puzzle, GenerateError>
where
    F: FnMut(usize) -> Option<Puzzle>,
{
    let mut size = start;
    let mut best: Option<Puzzle> = None;
    let mut largest_size = size;

    for round in 0..config.max_escalations {
        largest_size = size;
        let attempt = build_round(size);
        match &attempt {
            Some(puzzle) => log::debug!(
                "round {round}: size {size} placed {}/{} words, area {}",
                puzzle.word_count(),
                words.len(),
                puzzle.bounds().area()
            ),
            None => log::debug!("round {round}: size {size} produced no usable attempt"),
        }
        if let Some(candidate) = attempt {
            if best.as_ref().is_none_or(|current| candidate.is_better_than(current)) {
                best = Some(candidate);
            }
        }
        if best.as_ref().is_some_and(|b| b.word_count() == words.len()) {
            break;
        }
        size = size.saturating_add(config.size_increment);
    }

    match best {
        Some(puzzle) => {
            log::info!(
                "placed {}/{} words in a {}x{} grid (seed {})",
                puzzle.word_count(),
                words.len(),
                puzzle.height(),
                puzzle.width(),
                puzzle.seed()
            );
            Ok(puzzle)
        }
        None => {
            log::warn!("no puzzle after {} rounds", config.max_escalations);
            Err(GenerateError::NoPuzzle {
                rounds: config.max_escalations,
                largest_size,
            })
        }
    }
}

/// [`generate_puzzle`] with `config.seed`, or a fresh random seed.
pub fn generate(words: &[WordEntry], config: &GeneratorConfig) -> Result<Puzzle, GenerateError> {
    let seed = config.seed.unwrap_or_else(rand::random);
    generate_puzzle(words, config, seed)
}

/// A puzzle together with its entry numbers and clue lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Crossword {
    pub puzzle: Puzzle,
    pub numbers: NumberGrid,
    pub clues: ClueList,
}

impl Crossword {
    pub fn from_puzzle(puzzle: Puzzle) -> Self {
        let numbers = compute_numbers(puzzle.grid());
        let clues = ClueList::from_puzzle(&puzzle, &numbers);
        Self {
            puzzle,
            numbers,
            clues,
        }
    }
}
