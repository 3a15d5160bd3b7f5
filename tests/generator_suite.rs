use std::collections::HashMap;
use std::path::Path;

use crossword_packer::{
    Crossword, Direction, GenerateError, GeneratorConfig, Puzzle, WordEntry, compute_numbers,
    generate_puzzle, normalize_entries, parse_word_list,
};

const SEEDS: [u64; 5] = [1, 7, 42, 1234, 98765];

fn load_fixture(rel: &str) -> Vec<WordEntry> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(rel);
    let input = std::fs::read_to_string(&path).expect("fixture read failed");
    let raw = parse_word_list(&input).expect("fixture parse failed");
    normalize_entries(&raw)
}

/// Letter per cell; panics when two placements disagree.
fn assert_cells_agree(puzzle: &Puzzle, fixture: &str) -> HashMap<(usize, usize), u8> {
    let mut cells = HashMap::new();
    for placement in puzzle.placements() {
        for (r, c, letter) in placement.cells() {
            if let Some(prior) = cells.insert((r, c), letter) {
                assert_eq!(prior, letter, "{fixture}: conflict at ({r},{c})");
            }
            assert_eq!(
                puzzle.grid().letter(r, c),
                Some(char::from(letter)),
                "{fixture}: grid disagrees with {} at ({r},{c})",
                placement.answer
            );
        }
    }
    assert_eq!(
        cells.len(),
        puzzle.grid().filled_count(),
        "{fixture}: grid holds letters no placement explains"
    );
    cells
}

fn assert_crossings_in_range(puzzle: &Puzzle, fixture: &str) {
    let mut covered: HashMap<(usize, usize), usize> = HashMap::new();
    for (idx, placement) in puzzle.placements().iter().enumerate() {
        let hits = placement
            .cells()
            .filter(|(r, c, _)| covered.contains_key(&(*r, *c)))
            .count();
        if idx > 0 {
            assert!(
                (1..=2).contains(&hits),
                "{fixture}: {} crosses {hits} earlier letters",
                placement.answer
            );
        }
        for (r, c, _) in placement.cells() {
            *covered.entry((r, c)).or_default() += 1;
        }
    }
}

fn assert_no_side_contact(puzzle: &Puzzle, fixture: &str) {
    let mut owners: HashMap<(usize, usize), usize> = HashMap::new();
    for placement in puzzle.placements() {
        for (r, c, _) in placement.cells() {
            *owners.entry((r, c)).or_default() += 1;
        }
    }
    let grid = puzzle.grid();
    for placement in puzzle.placements() {
        let (pr, pc) = match placement.direction {
            Direction::Across => (1, 0),
            Direction::Down => (0, 1),
        };
        for (r, c, _) in placement.cells() {
            if owners[&(r, c)] > 1 {
                continue;
            }
            let (r, c) = (r as isize, c as isize);
            for (nr, nc) in [(r - pr, c - pc), (r + pr, c + pc)] {
                assert!(
                    nr < 0 || nc < 0 || grid.letter(nr as usize, nc as usize).is_none(),
                    "{fixture}: {} touches another word beside ({r},{c})",
                    placement.answer
                );
            }
        }
    }
}

fn assert_tight_trim(puzzle: &Puzzle, fixture: &str) {
    let grid = puzzle.grid();
    let (rows, cols) = (grid.rows(), grid.cols());
    assert_eq!(rows, puzzle.bounds().height(), "{fixture}: height");
    assert_eq!(cols, puzzle.bounds().width(), "{fixture}: width");
    assert_eq!(rows * cols, puzzle.bounds().area(), "{fixture}: area");
    let row_used = |r: usize| (0..cols).any(|c| grid.letter(r, c).is_some());
    let col_used = |c: usize| (0..rows).any(|r| grid.letter(r, c).is_some());
    assert!(row_used(0) && row_used(rows - 1), "{fixture}: empty border row");
    assert!(col_used(0) && col_used(cols - 1), "{fixture}: empty border column");
}

fn assert_numbering(crossword: &Crossword, fixture: &str) {
    let grid = crossword.puzzle.grid();
    let mut last = 0;
    for (r, row) in crossword.numbers.rows().iter().enumerate() {
        for (c, number) in row.iter().enumerate() {
            let (ri, ci) = (r as isize, c as isize);
            let filled = grid.letter(r, c).is_some();
            let left = ci > 0 && grid.letter(r, c - 1).is_some();
            let right = grid.letter(r, c + 1).is_some();
            let up = ri > 0 && grid.letter(r - 1, c).is_some();
            let below = grid.letter(r + 1, c).is_some();
            let starts = filled && ((!left && right) || (!up && below));
            assert_eq!(number.is_some(), starts, "{fixture}: numbering at ({r},{c})");
            if let Some(n) = number {
                assert_eq!(*n, last + 1, "{fixture}: numbers must be sequential");
                last = *n;
            }
        }
    }
    assert_eq!(compute_numbers(grid), crossword.numbers, "{fixture}: not idempotent");
}

fn check_fixture(rel: &str, config: &GeneratorConfig) {
    let words = load_fixture(rel);
    for seed in SEEDS {
        let puzzle = generate_puzzle(&words, config, seed).expect("generation failed");
        let label = format!("{rel} seed {seed}");
        assert_eq!(
            puzzle.word_count() + puzzle.unplaced().len(),
            words.len(),
            "{label}: every word is placed or reported"
        );
        assert_cells_agree(&puzzle, &label);
        assert_crossings_in_range(&puzzle, &label);
        assert_no_side_contact(&puzzle, &label);
        assert_tight_trim(&puzzle, &label);
        let crossword = Crossword::from_puzzle(puzzle);
        assert_numbering(&crossword, &label);
        assert_eq!(crossword.clues.len(), crossword.puzzle.word_count(), "{label}: clues");
    }
}

#[test]
fn fixtures_satisfy_placement_invariants() {
    let config = GeneratorConfig::default();
    for rel in ["fruits.json", "space.txt", "animals.json5", "long_words.json"] {
        check_fixture(rel, &config);
    }
}

#[test]
fn fruit_scenario_at_size_twelve() {
    let words = load_fixture("fruits.json");
    let config = GeneratorConfig::default().with_preferred_size(12);
    for seed in SEEDS {
        let puzzle = generate_puzzle(&words, &config, seed).expect("generation failed");
        assert_eq!(puzzle.word_count(), 3, "seed {seed}");
        let cells = assert_cells_agree(&puzzle, "fruits");
        assert!(cells.len() < 15, "seed {seed}: words must share letters");
    }
}

#[test]
fn animal_theme_drops_short_words() {
    let words = load_fixture("animals.json5");
    assert_eq!(words.len(), 7);
    assert!(words.iter().all(|w| w.answer() != "OX"));
    assert_eq!(words[0].answer(), "ELEPHANT");
}

#[test]
fn zebra_alone_is_a_single_row() {
    let words = normalize_entries(&[crossword_packer::RawEntry::new("zebra", "Striped")]);
    let puzzle = generate_puzzle(&words, &GeneratorConfig::default(), 0).expect("puzzle");
    assert_eq!(puzzle.bounds().area(), 5);
    assert_eq!((puzzle.height(), puzzle.width()), (1, 5));
    assert_eq!(puzzle.placements().len(), 1);
    let numbers = compute_numbers(puzzle.grid());
    assert_eq!(numbers.get(0, 0), Some(1));
    assert_eq!(numbers.max_number(), 1);
}

#[test]
fn long_words_escalate_past_the_anchor() {
    let words = load_fixture("long_words.json");
    assert_eq!(words.len(), 15);
    // OBSERVATORY (11 letters) cannot anchor in a 9x9 grid; 11 is the second round.
    let config = GeneratorConfig::default().with_preferred_size(9);
    let puzzle = generate_puzzle(&words, &config, 5).expect("anchor fits once escalated");
    assert!(
        matches!(puzzle.grid_size(), 11 | 13 | 15),
        "unexpected working size {}",
        puzzle.grid_size()
    );
    assert!(puzzle.word_count() >= 1);
    assert_eq!(puzzle.word_count() + puzzle.unplaced().len(), words.len());
}

#[test]
fn long_words_without_room_fail_explicitly() {
    let words = load_fixture("long_words.json");
    let config = GeneratorConfig {
        max_escalations: 1,
        ..GeneratorConfig::default().with_preferred_size(9)
    };
    assert_eq!(
        generate_puzzle(&words, &config, 5),
        Err(GenerateError::NoPuzzle {
            rounds: 1,
            largest_size: 9
        })
    );
}
