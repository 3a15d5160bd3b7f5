use crate::ir::Direction;

/// Rectangular letter grid. Working grids are square; trimmed grids are not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Option<u8>>,
}

impl Grid {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    pub fn square(size: usize) -> Self {
        Self::new(size, size)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, row: isize, col: isize) -> Option<usize> {
        if row < 0 || col < 0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }

    /// Letter at `(row, col)`; out-of-range coordinates read as empty.
    pub fn get(&self, row: isize, col: isize) -> Option<u8> {
        self.index(row, col).and_then(|idx| self.cells[idx])
    }

    pub fn letter(&self, row: usize, col: usize) -> Option<char> {
        self.get(row as isize, col as isize).map(char::from)
    }

    pub fn is_filled(&self, row: isize, col: isize) -> bool {
        self.get(row, col).is_some()
    }

    pub(crate) fn set(&mut self, row: usize, col: usize, letter: u8) {
        let idx = row * self.cols + col;
        self.cells[idx] = Some(letter);
    }

    /// Filled cells in row-major order.
    pub fn filled_cells(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        self.cells.iter().enumerate().filter_map(move |(idx, cell)| {
            cell.map(|letter| (idx / self.cols, idx % self.cols, letter))
        })
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Copy of the rectangle `[min_row..=max_row] x [min_col..=max_col]`.
    pub(crate) fn crop(&self, min_row: usize, max_row: usize, min_col: usize, max_col: usize) -> Grid {
        let mut out = Grid::new(max_row - min_row + 1, max_col - min_col + 1);
        for row in min_row..=max_row {
            for col in min_col..=max_col {
                let idx = row * self.cols + col;
                out.cells[(row - min_row) * out.cols + (col - min_col)] = self.cells[idx];
            }
        }
        out
    }

    /// Each row as a string, `.` marking empty cells.
    pub fn to_rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.cols.max(1))
            .take(self.rows)
            .map(|row| {
                row.iter()
                    .map(|cell| cell.map(char::from).unwrap_or('.'))
                    .collect()
            })
            .collect()
    }
}

/// Whether `word` fits at `(row, col)` running in `dir`.
///
/// The span must stay inside the grid, the cells just before the start and
/// just after the end must be empty, every filled cell on the span must
/// already hold the matching letter, and every empty cell on the span must
/// have empty neighbours on the perpendicular axis.
pub fn can_place(grid: &Grid, word: &[u8], row: isize, col: isize, dir: Direction) -> bool {
    if word.is_empty() {
        return false;
    }
    let (dr, dc) = dir.delta();
    let last = word.len() as isize - 1;
    let end_row = row + dr * last;
    let end_col = col + dc * last;

    if grid.index(row, col).is_none() || grid.index(end_row, end_col).is_none() {
        return false;
    }
    if grid.is_filled(row - dr, col - dc) || grid.is_filled(end_row + dr, end_col + dc) {
        return false;
    }

    // Perpendicular step: across words check above/below, down words left/right.
    let (pr, pc) = (dc, dr);
    for (i, &letter) in word.iter().enumerate() {
        let r = row + dr * i as isize;
        let c = col + dc * i as isize;
        match grid.get(r, c) {
            Some(existing) if existing != letter => return false,
            Some(_) => {}
            None => {
                if grid.is_filled(r - pr, c - pc) || grid.is_filled(r + pr, c + pc) {
                    return false;
                }
            }
        }
    }
    true
}

/// Write `word` into the grid. Callers validate with [`can_place`] first.
pub fn place_word(grid: &mut Grid, word: &[u8], row: usize, col: usize, dir: Direction) {
    let (dr, dc) = dir.delta();
    for (i, &letter) in word.iter().enumerate() {
        let r = row + dr as usize * i;
        let c = col + dc as usize * i;
        grid.set(r, c, letter);
    }
}

/// Number of cells on the span that are already filled.
pub fn count_intersections(grid: &Grid, word: &[u8], row: isize, col: isize, dir: Direction) -> usize {
    let (dr, dc) = dir.delta();
    (0..word.len() as isize)
        .filter(|&i| grid.is_filled(row + dr * i, col + dc * i))
        .count()
}
