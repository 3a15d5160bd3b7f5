use crate::ir::{RawEntry, WordEntry};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

/// Shortest answer the placement engine accepts.
pub const MIN_ANSWER_LEN: usize = 3;

static NON_LETTER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^A-Z]+").unwrap());
static LINE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([^:\t|]+?)\s*(?:[:\t|]\s*(.*?))?\s*$").unwrap());

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("word list is empty")]
    Empty,

    #[error("invalid JSON word list: {0}")]
    Json(#[from] serde_json::Error),

    #[error("line {line}: cannot read an answer from \"{text}\"")]
    MalformedLine { line: usize, text: String },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WordListFile {
    List(Vec<RawEntry>),
    Wrapped {
        #[serde(alias = "words")]
        entries: Vec<RawEntry>,
    },
}

impl WordListFile {
    fn into_entries(self) -> Vec<RawEntry> {
        match self {
            Self::List(entries) => entries,
            Self::Wrapped { entries } => entries,
        }
    }
}

/// Uppercase `value` and drop everything that is not `A-Z`.
pub fn normalize_answer(value: &str) -> String {
    NON_LETTER_RE
        .replace_all(&value.to_uppercase(), "")
        .into_owned()
}

/// Clean raw answer/clue pairs into [`WordEntry`] values.
///
/// Answers are uppercased and stripped of non-letters; anything shorter than
/// [`MIN_ANSWER_LEN`] afterwards is dropped. Order and duplicates are kept.
pub fn normalize_entries(raw: &[RawEntry]) -> Vec<WordEntry> {
    raw.iter()
        .filter_map(|entry| {
            let answer = normalize_answer(&entry.answer);
            if answer.len() < MIN_ANSWER_LEN {
                log::debug!("dropping entry {:?}: too short after cleanup", entry.answer);
                return None;
            }
            Some(WordEntry::new_unchecked(answer, entry.clue.clone()))
        })
        .collect()
}

/// Read a word list from JSON, JSON5, or `ANSWER: clue` lines.
pub fn parse_word_list(input: &str) -> Result<Vec<RawEntry>, InputError> {
    let trimmed = input.trim_start_matches('\u{feff}').trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }

    let entries = if trimmed.starts_with('[') || trimmed.starts_with('{') {
        parse_structured(trimmed)?
    } else {
        parse_lines(trimmed)?
    };

    if entries.is_empty() {
        return Err(InputError::Empty);
    }
    Ok(entries)
}

fn parse_structured(input: &str) -> Result<Vec<RawEntry>, InputError> {
    match serde_json::from_str::<WordListFile>(input) {
        Ok(file) => Ok(file.into_entries()),
        Err(json_err) => match json5::from_str::<WordListFile>(input) {
            Ok(file) => Ok(file.into_entries()),
            // Report the strict error when the lenient parser fails too.
            Err(_) => Err(InputError::Json(json_err)),
        },
    }
}

fn parse_lines(input: &str) -> Result<Vec<RawEntry>, InputError> {
    let mut entries = Vec::new();
    for (idx, line) in input.lines().enumerate() {
        let line_trimmed = line.trim();
        if line_trimmed.is_empty() || line_trimmed.starts_with('#') {
            continue;
        }
        let caps = LINE_RE
            .captures(line_trimmed)
            .ok_or_else(|| InputError::MalformedLine {
                line: idx + 1,
                text: line_trimmed.to_string(),
            })?;
        let answer = caps.get(1).map(|m| m.as_str()).unwrap_or_default();
        let clue = caps.get(2).map(|m| m.as_str()).unwrap_or_default();
        entries.push(RawEntry::new(answer, clue));
    }
    Ok(entries)
}
