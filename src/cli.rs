use crate::config::{GeneratorConfig, load_config};
use crate::ir::Direction;
use crate::layout::{Crossword, generate};
use crate::normalize::{normalize_entries, parse_word_list};
use crate::puzzle_dump::write_puzzle_dump;
use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::fmt::Write as _;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "xword", version, about = "Crossword placement engine")]
pub struct Args {
    /// Word list (JSON, JSON5, or `ANSWER: clue` lines) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file. Defaults to stdout.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short = 'e', long = "outputFormat", value_enum, default_value = "json")]
    pub output_format: OutputFormat,

    /// Generator config JSON file
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Starting grid side
    #[arg(short = 's', long = "size")]
    pub size: Option<usize>,

    /// Seed for a reproducible puzzle
    #[arg(long = "seed")]
    pub seed: Option<u64>,

    /// Builds per grid size
    #[arg(long = "attempts")]
    pub attempts: Option<usize>,

    /// Grid sizes to try in total
    #[arg(long = "rounds")]
    pub rounds: Option<usize>,

    /// Grid growth between rounds
    #[arg(long = "increment")]
    pub increment: Option<usize>,

    /// Debug logging
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Text,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    crate::log::init_logger(args.verbose);

    let config = apply_overrides(load_config(args.config.as_deref())?, &args);
    let input = read_input(args.input.as_deref())?;
    let raw = parse_word_list(&input)?;
    let words = normalize_entries(&raw);
    if words.is_empty() {
        return Err(anyhow::anyhow!(
            "No usable words in input (answers need at least 3 letters)"
        ));
    }
    log::info!("{} of {} entries usable", words.len(), raw.len());

    let puzzle = generate(&words, &config)?;
    let crossword = Crossword::from_puzzle(puzzle);

    match args.output_format {
        OutputFormat::Json => write_puzzle_dump(args.output.as_deref(), &crossword)?,
        OutputFormat::Text => {
            let text = format_text(&crossword);
            match args.output.as_deref() {
                Some(path) => std::fs::write(path, text)?,
                None => print!("{text}"),
            }
        }
    }
    Ok(())
}

fn apply_overrides(mut config: GeneratorConfig, args: &Args) -> GeneratorConfig {
    if let Some(size) = args.size {
        config.preferred_size = Some(size);
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(attempts) = args.attempts {
        config.attempts_per_size = attempts;
    }
    if let Some(rounds) = args.rounds {
        config.max_escalations = rounds;
    }
    if let Some(increment) = args.increment {
        config.size_increment = increment;
    }
    config
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path {
        if path != Path::new("-") {
            return Ok(std::fs::read_to_string(path)?);
        }
    }

    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

/// Grid rows followed by numbered Across and Down lists.
fn format_text(crossword: &Crossword) -> String {
    let mut out = String::new();
    for row in crossword.puzzle.grid().to_rows() {
        let _ = writeln!(out, "{row}");
    }
    for (direction, clues) in [
        (Direction::Across, &crossword.clues.across),
        (Direction::Down, &crossword.clues.down),
    ] {
        let _ = writeln!(out, "\n{}", direction.label());
        for clue in clues {
            let _ = writeln!(out, "{:>3}. {} ({})", clue.number, clue.text, clue.length);
        }
    }
    let unplaced = crossword.puzzle.unplaced();
    if !unplaced.is_empty() {
        let names: Vec<&str> = unplaced.iter().map(|entry| entry.answer()).collect();
        let _ = writeln!(out, "\nUnplaced: {}", names.join(", "));
    }
    out
}
