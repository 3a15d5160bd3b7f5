use crate::layout::{Bounds, ClueList, Crossword};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PuzzleDump {
    pub width: usize,
    pub height: usize,
    pub grid_size: usize,
    pub seed: u64,
    pub bounds: BoundsDump,
    pub grid: Vec<String>,
    pub numbers: Vec<Vec<Option<u32>>>,
    pub placements: Vec<PlacementDump>,
    pub clues: ClueList,
    pub unplaced: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundsDump {
    pub min_row: usize,
    pub max_row: usize,
    pub min_col: usize,
    pub max_col: usize,
    pub area: usize,
}

impl From<Bounds> for BoundsDump {
    fn from(bounds: Bounds) -> Self {
        Self {
            min_row: bounds.min_row,
            max_row: bounds.max_row,
            min_col: bounds.min_col,
            max_col: bounds.max_col,
            area: bounds.area(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct PlacementDump {
    pub answer: String,
    pub clue: String,
    pub row: usize,
    pub col: usize,
    pub dr: isize,
    pub dc: isize,
    pub number: Option<u32>,
}

impl PuzzleDump {
    pub fn from_crossword(crossword: &Crossword) -> Self {
        let puzzle = &crossword.puzzle;
        let placements = puzzle
            .placements()
            .iter()
            .map(|placement| {
                let (dr, dc) = placement.delta();
                PlacementDump {
                    answer: placement.answer.clone(),
                    clue: placement.clue.clone(),
                    row: placement.row,
                    col: placement.col,
                    dr,
                    dc,
                    number: crossword.numbers.get(placement.row, placement.col),
                }
            })
            .collect();

        PuzzleDump {
            width: puzzle.width(),
            height: puzzle.height(),
            grid_size: puzzle.grid_size(),
            seed: puzzle.seed(),
            bounds: puzzle.bounds().into(),
            grid: puzzle.grid().to_rows(),
            numbers: crossword.numbers.rows().to_vec(),
            placements,
            clues: crossword.clues.clone(),
            unplaced: puzzle
                .unplaced()
                .iter()
                .map(|entry| entry.answer().to_string())
                .collect(),
        }
    }
}

pub fn puzzle_to_json(crossword: &Crossword) -> anyhow::Result<String> {
    let dump = PuzzleDump::from_crossword(crossword);
    Ok(serde_json::to_string_pretty(&dump)?)
}

/// Write the dump as pretty JSON to `path`, or stdout when `path` is `None`.
pub fn write_puzzle_dump(path: Option<&Path>, crossword: &Crossword) -> anyhow::Result<()> {
    let dump = PuzzleDump::from_crossword(crossword);
    match path {
        Some(path) => {
            let file = File::create(path)?;
            let mut writer = BufWriter::new(file);
            serde_json::to_writer_pretty(&mut writer, &dump)?;
            writer.flush()?;
        }
        None => {
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            serde_json::to_writer_pretty(&mut writer, &dump)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}
