use serde::Serialize;

use super::bounds::Bounds;
use super::grid::Grid;
use crate::ir::{Direction, WordEntry};

/// One word laid onto the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub answer: String,
    pub clue: String,
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

impl Placement {
    pub fn new(entry: &WordEntry, row: usize, col: usize, direction: Direction) -> Self {
        Self {
            answer: entry.answer().to_string(),
            clue: entry.clue().to_string(),
            row,
            col,
            direction,
        }
    }

    pub fn len(&self) -> usize {
        self.answer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answer.is_empty()
    }

    /// `(delta_row, delta_col)` of the run.
    pub fn delta(&self) -> (isize, isize) {
        self.direction.delta()
    }

    /// Grid cells covered by this placement, first letter first.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        let (dr, dc) = self.direction.delta();
        self.answer.bytes().enumerate().map(move |(i, letter)| {
            (
                self.row + dr as usize * i,
                self.col + dc as usize * i,
                letter,
            )
        })
    }

    pub(crate) fn shifted(&self, row_offset: usize, col_offset: usize) -> Self {
        Self {
            row: self.row - row_offset,
            col: self.col - col_offset,
            ..self.clone()
        }
    }
}

/// A finished crossword: the trimmed grid, placements in that grid's
/// coordinates, and the bounds the placements occupied in the working grid.
///
/// Only the generator builds these; consumers read them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    pub(crate) grid: Grid,
    pub(crate) placements: Vec<Placement>,
    pub(crate) bounds: Bounds,
    pub(crate) unplaced: Vec<WordEntry>,
    pub(crate) grid_size: usize,
    pub(crate) seed: u64,
}

impl Puzzle {
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Bounds in working-grid coordinates. `area()` equals the trimmed grid's cell count.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Requested words that the chosen attempt could not place.
    pub fn unplaced(&self) -> &[WordEntry] {
        &self.unplaced
    }

    pub fn word_count(&self) -> usize {
        self.placements.len()
    }

    /// Side of the square working grid the puzzle was built in.
    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    /// Seed that reproduces this puzzle with the same words and config.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn width(&self) -> usize {
        self.grid.cols()
    }

    pub fn height(&self) -> usize {
        self.grid.rows()
    }

    /// More words wins; equal counts fall back to the smaller area.
    pub(crate) fn is_better_than(&self, other: &Puzzle) -> bool {
        let (mine, theirs) = (self.word_count(), other.word_count());
        mine > theirs || (mine == theirs && self.bounds.area() < other.bounds.area())
    }
}

/// Entry numbers laid over a puzzle grid, same shape as the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberGrid {
    pub(crate) cells: Vec<Vec<Option<u32>>>,
}

impl NumberGrid {
    pub fn get(&self, row: usize, col: usize) -> Option<u32> {
        self.cells.get(row).and_then(|r| r.get(col)).copied().flatten()
    }

    pub fn rows(&self) -> &[Vec<Option<u32>>] {
        &self.cells
    }

    /// Highest number assigned, 0 for an empty grid.
    pub fn max_number(&self) -> u32 {
        self.cells.iter().flatten().flatten().copied().max().unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Clue {
    pub number: u32,
    pub answer: String,
    pub text: String,
    pub row: usize,
    pub col: usize,
    pub length: usize,
}

/// Numbered Across and Down clue lists, each in ascending number order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ClueList {
    pub across: Vec<Clue>,
    pub down: Vec<Clue>,
}
