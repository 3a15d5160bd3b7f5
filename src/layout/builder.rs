use std::cmp::Reverse;

use rand::Rng;
use rand::seq::SliceRandom;

use super::bounds::Bounds;
use super::grid::{Grid, can_place, place_word};
use super::search::find_best_placement;
use super::types::{Placement, Puzzle};
use crate::ir::{Direction, WordEntry};

/// One randomized build at a fixed grid size.
///
/// Returns `None` when the anchor word does not fit the grid. Words that find
/// no legal crossing are left out and reported through [`Puzzle::unplaced`].
pub fn build_attempt<R: Rng + ?Sized>(
    words: &[WordEntry],
    size: usize,
    seed: u64,
    rng: &mut R,
) -> Option<Puzzle> {
    let mut order: Vec<&WordEntry> = words.iter().collect();
    order.shuffle(rng);
    // Stable, so equal lengths keep their shuffled order.
    order.sort_by_key(|entry| Reverse(entry.len()));

    let (first, rest) = order.split_first()?;
    let anchor = first.answer().as_bytes();
    let mut grid = Grid::square(size);

    let start_row = (size / 2) as isize;
    let start_col = (size as isize - anchor.len() as isize).div_euclid(2);
    if !can_place(&grid, anchor, start_row, start_col, Direction::Across) {
        log::debug!(
            "anchor {} does not fit a {size}x{size} grid",
            first.answer()
        );
        return None;
    }
    let (start_row, start_col) = (start_row as usize, start_col as usize);
    place_word(&mut grid, anchor, start_row, start_col, Direction::Across);

    let mut placements = vec![Placement::new(first, start_row, start_col, Direction::Across)];
    let mut bounds = Bounds::of_run(start_row, start_col, Direction::Across, anchor.len());
    let mut unplaced = Vec::new();

    for entry in rest {
        let word = entry.answer().as_bytes();
        match find_best_placement(&grid, word, &bounds) {
            Some(candidate) => {
                place_word(&mut grid, word, candidate.row, candidate.col, candidate.direction);
                placements.push(Placement::new(
                    entry,
                    candidate.row,
                    candidate.col,
                    candidate.direction,
                ));
                bounds = candidate.bounds;
            }
            None => unplaced.push((*entry).clone()),
        }
    }

    Some(finalize(grid, placements, bounds, unplaced, size, seed))
}

/// Trim to `bounds` and move placements into the trimmed frame.
fn finalize(
    grid: Grid,
    placements: Vec<Placement>,
    bounds: Bounds,
    unplaced: Vec<WordEntry>,
    size: usize,
    seed: u64,
) -> Puzzle {
    let placements = placements
        .iter()
        .map(|placement| placement.shifted(bounds.min_row, bounds.min_col))
        .collect();
    Puzzle {
        grid: bounds.trim(&grid),
        placements,
        bounds,
        unplaced,
        grid_size: size,
        seed,
    }
}

/// Up to `attempts` builds at `size`, keeping the best by word count then area.
///
/// Stops as soon as an attempt places every word.
pub fn build_best_at_size<R: Rng + ?Sized>(
    words: &[WordEntry],
    size: usize,
    attempts: usize,
    seed: u64,
    rng: &mut R,
) -> Option<Puzzle> {
    let mut best: Option<Puzzle> = None;

    for attempt in 0..attempts {
        let Some(candidate) = build_attempt(words, size, seed, rng) else {
            continue;
        };
        log::debug!(
            "size {size} attempt {attempt}: {}/{} words, area {}",
            candidate.word_count(),
            words.len(),
            candidate.bounds().area()
        );
        if best.as_ref().is_none_or(|current| candidate.is_better_than(current)) {
            best = Some(candidate);
        }
        if best.as_ref().is_some_and(|b| b.word_count() == words.len()) {
            break;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::RawEntry;
    use crate::normalize::normalize_entries;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn words(answers: &[&str]) -> Vec<WordEntry> {
        let raw: Vec<RawEntry> = answers.iter().map(|a| RawEntry::new(*a, "")).collect();
        normalize_entries(&raw)
    }

    #[test]
    fn anchor_is_longest_and_centered() {
        let list = words(&["CAT", "ELEPHANT", "DOG"]);
        let mut rng = StdRng::seed_from_u64(7);
        let puzzle = build_attempt(&list, 12, 7, &mut rng).expect("anchor fits");
        let anchor = &puzzle.placements()[0];
        assert_eq!(anchor.answer, "ELEPHANT");
        assert_eq!(anchor.direction, Direction::Across);
        let bounds = puzzle.bounds();
        assert!(bounds.min_row <= 6 && bounds.max_row >= 6);
    }

    #[test]
    fn anchor_too_long_fails_the_attempt() {
        let list = words(&["EXTRAORDINARY"]);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(build_attempt(&list, 8, 1, &mut rng).is_none());
    }

    #[test]
    fn unplaceable_words_are_reported() {
        let list = words(&["APPLE", "XYZ"]);
        let mut rng = StdRng::seed_from_u64(3);
        let puzzle = build_attempt(&list, 10, 3, &mut rng).expect("anchor fits");
        assert_eq!(puzzle.word_count(), 1);
        assert_eq!(puzzle.unplaced().len(), 1);
        assert_eq!(puzzle.unplaced()[0].answer(), "XYZ");
    }

    #[test]
    fn placements_are_shifted_into_trimmed_grid() {
        let list = words(&["APPLE", "PEACH", "GRAPE"]);
        let mut rng = StdRng::seed_from_u64(11);
        let puzzle = build_best_at_size(&list, 12, 60, 11, &mut rng).expect("puzzle");
        for placement in puzzle.placements() {
            for (r, c, letter) in placement.cells() {
                assert_eq!(puzzle.grid().letter(r, c), Some(char::from(letter)));
            }
        }
        assert_eq!(puzzle.grid().rows(), puzzle.bounds().height());
        assert_eq!(puzzle.grid().cols(), puzzle.bounds().width());
    }

    #[test]
    fn zero_attempts_yield_nothing() {
        let list = words(&["APPLE"]);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(build_best_at_size(&list, 12, 0, 0, &mut rng).is_none());
    }
}
