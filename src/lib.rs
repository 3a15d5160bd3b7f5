#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod ir;
pub mod layout;
#[cfg(feature = "cli")]
pub mod log;
pub mod normalize;
pub mod puzzle_dump;

#[cfg(feature = "cli")]
pub use cli::run;
pub use config::{GeneratorConfig, load_config};
pub use ir::{Direction, RawEntry, WordEntry};
pub use layout::{
    ClueList, Crossword, GenerateError, NumberGrid, Placement, Puzzle, compute_numbers, generate,
    generate_puzzle,
};
pub use normalize::{normalize_entries, parse_word_list};
pub use puzzle_dump::{PuzzleDump, puzzle_to_json, write_puzzle_dump};
