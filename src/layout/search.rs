use std::cmp::Ordering;

use super::bounds::Bounds;
use super::grid::{Grid, can_place, count_intersections};
use crate::ir::Direction;

/// Fewest and most crossings a non-anchor word may have with earlier words.
pub const MIN_HITS: usize = 1;
pub const MAX_HITS: usize = 2;

/// Ordering key for a candidate position; smaller is better.
///
/// Compared field by field: bounding-box growth first, then crossings, then
/// distance from the grid centre. Centrality is kept doubled so the centre of
/// an odd-sized grid stays an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CandidateScore {
    pub area_increase: usize,
    pub hits: usize,
    pub centrality_x2: usize,
}

/// Winning position for one word plus the bounds it would produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
    pub score: CandidateScore,
    pub bounds: Bounds,
}

/// Best valid crossing position for `word` against the letters already in
/// `grid`, or `None` when nothing crosses legally.
///
/// Occupied cells are scanned in row-major order, then word index, then
/// [`Direction::ALL`]; a later candidate only replaces the current best when
/// its score is strictly smaller, so full ties go to the first one found.
pub fn find_best_placement(grid: &Grid, word: &[u8], bounds: &Bounds) -> Option<Candidate> {
    let size = grid.rows().max(grid.cols());
    let base_area = bounds.area();
    let mut best: Option<Candidate> = None;

    for (r, c, cell) in grid.filled_cells() {
        for (i, _) in word.iter().enumerate().filter(|&(_, &letter)| letter == cell) {
            for dir in Direction::ALL {
                let (dr, dc) = dir.delta();
                let start_row = r as isize - dr * i as isize;
                let start_col = c as isize - dc * i as isize;
                if !can_place(grid, word, start_row, start_col, dir) {
                    continue;
                }
                let hits = count_intersections(grid, word, start_row, start_col, dir);
                if !(MIN_HITS..=MAX_HITS).contains(&hits) {
                    continue;
                }

                // can_place guarantees a non-negative start.
                let (row, col) = (start_row as usize, start_col as usize);
                let extended = bounds.extended(row, col, dir, word.len());
                let score = CandidateScore {
                    area_increase: extended.area() - base_area,
                    hits,
                    centrality_x2: (2 * row).abs_diff(size) + (2 * col).abs_diff(size),
                };

                let replace = match &best {
                    None => true,
                    Some(current) => score.cmp(&current.score) == Ordering::Less,
                };
                if replace {
                    best = Some(Candidate {
                        row,
                        col,
                        direction: dir,
                        score,
                        bounds: extended,
                    });
                }
            }
        }
    }

    best
}
