use super::grid::Grid;
use crate::ir::Direction;

/// Smallest rectangle enclosing every placed letter, in grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub min_row: usize,
    pub max_row: usize,
    pub min_col: usize,
    pub max_col: usize,
}

impl Bounds {
    /// Bounds of a single word run.
    pub fn of_run(row: usize, col: usize, dir: Direction, len: usize) -> Self {
        let (end_row, end_col) = run_end(row, col, dir, len);
        Self {
            min_row: row,
            max_row: end_row,
            min_col: col,
            max_col: end_col,
        }
    }

    /// These bounds grown to also cover the given run. Never shrinks.
    pub fn extended(&self, row: usize, col: usize, dir: Direction, len: usize) -> Self {
        let (end_row, end_col) = run_end(row, col, dir, len);
        Self {
            min_row: self.min_row.min(row),
            max_row: self.max_row.max(end_row),
            min_col: self.min_col.min(col),
            max_col: self.max_col.max(end_col),
        }
    }

    pub fn height(&self) -> usize {
        self.max_row - self.min_row + 1
    }

    pub fn width(&self) -> usize {
        self.max_col - self.min_col + 1
    }

    pub fn area(&self) -> usize {
        self.height() * self.width()
    }

    /// Cut `grid` down to exactly this rectangle.
    pub fn trim(&self, grid: &Grid) -> Grid {
        grid.crop(self.min_row, self.max_row, self.min_col, self.max_col)
    }

    /// Same rectangle expressed relative to its own top-left corner.
    pub fn local(&self) -> Self {
        Self {
            min_row: 0,
            max_row: self.max_row - self.min_row,
            min_col: 0,
            max_col: self.max_col - self.min_col,
        }
    }
}

fn run_end(row: usize, col: usize, dir: Direction, len: usize) -> (usize, usize) {
    let span = len.saturating_sub(1);
    match dir {
        Direction::Across => (row, col + span),
        Direction::Down => (row + span, col),
    }
}
