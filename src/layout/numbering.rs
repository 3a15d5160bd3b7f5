use super::grid::Grid;
use super::types::{Clue, ClueList, NumberGrid, Puzzle};
use crate::ir::Direction;

/// Assign standard crossword numbers.
///
/// Cells are visited row by row. A filled cell gets the next number when it
/// starts an across run (empty or edge on the left, letter on the right) or a
/// down run (empty or edge above, letter below). A cell starting both gets one
/// number.
pub fn compute_numbers(grid: &Grid) -> NumberGrid {
    let mut cells = vec![vec![None; grid.cols()]; grid.rows()];
    let mut next = 1u32;

    for (row, col, _) in grid.filled_cells() {
        let (r, c) = (row as isize, col as isize);
        let starts_across = !grid.is_filled(r, c - 1) && grid.is_filled(r, c + 1);
        let starts_down = !grid.is_filled(r - 1, c) && grid.is_filled(r + 1, c);
        if starts_across || starts_down {
            cells[row][col] = Some(next);
            next += 1;
        }
    }

    NumberGrid { cells }
}

impl ClueList {
    /// Across and Down clues for `puzzle`, numbered from `numbers`.
    ///
    /// Empty clue text falls back to the answer. Placements whose start cell
    /// carries no number are skipped.
    pub fn from_puzzle(puzzle: &Puzzle, numbers: &NumberGrid) -> Self {
        let mut list = ClueList::default();
        for placement in puzzle.placements() {
            let Some(number) = numbers.get(placement.row, placement.col) else {
                continue;
            };
            let text = if placement.clue.trim().is_empty() {
                placement.answer.clone()
            } else {
                placement.clue.clone()
            };
            let clue = Clue {
                number,
                answer: placement.answer.clone(),
                text,
                row: placement.row,
                col: placement.col,
                length: placement.len(),
            };
            match placement.direction {
                Direction::Across => list.across.push(clue),
                Direction::Down => list.down.push(clue),
            }
        }
        list.across.sort_by_key(|clue| clue.number);
        list.down.sort_by_key(|clue| clue.number);
        list
    }

    pub fn len(&self) -> usize {
        self.across.len() + self.down.len()
    }

    pub fn is_empty(&self) -> bool {
        self.across.is_empty() && self.down.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::grid::place_word;

    fn sample_grid() -> Grid {
        // C A T .
        // . . O .
        // . . P .
        let mut grid = Grid::new(3, 4);
        place_word(&mut grid, b"CAT", 0, 0, Direction::Across);
        place_word(&mut grid, b"TOP", 0, 2, Direction::Down);
        grid
    }

    #[test]
    fn shared_start_gets_one_number() {
        let mut grid = Grid::new(3, 3);
        place_word(&mut grid, b"CAT", 0, 0, Direction::Across);
        place_word(&mut grid, b"COW", 0, 0, Direction::Down);
        let numbers = compute_numbers(&grid);
        assert_eq!(numbers.get(0, 0), Some(1));
        assert_eq!(numbers.max_number(), 1);
    }

    #[test]
    fn numbers_follow_row_major_order() {
        let numbers = compute_numbers(&sample_grid());
        assert_eq!(numbers.get(0, 0), Some(1));
        assert_eq!(numbers.get(0, 2), Some(2));
        assert_eq!(numbers.get(1, 2), None);
        assert_eq!(numbers.max_number(), 2);
    }

    #[test]
    fn numbering_is_idempotent() {
        let grid = sample_grid();
        assert_eq!(compute_numbers(&grid), compute_numbers(&grid));
    }

    #[test]
    fn isolated_letters_are_not_numbered() {
        let mut grid = Grid::new(1, 3);
        place_word(&mut grid, b"A", 0, 1, Direction::Across);
        let numbers = compute_numbers(&grid);
        assert_eq!(numbers.max_number(), 0);
        assert_eq!(numbers.rows().len(), 1);
        assert_eq!(numbers.rows()[0].len(), 3);
    }
}
