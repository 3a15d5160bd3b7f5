use serde::Deserialize;

/// Orientation of a word run in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Across,
    Down,
}

impl Direction {
    /// Both directions, in the order the placement search tries them.
    pub const ALL: [Direction; 2] = [Direction::Across, Direction::Down];

    /// `(delta_row, delta_col)` step between consecutive letters.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Self::Across => (0, 1),
            Self::Down => (1, 0),
        }
    }

    /// Heading used for this direction's clue list.
    pub fn label(self) -> &'static str {
        match self {
            Self::Across => "Across",
            Self::Down => "Down",
        }
    }
}

/// An answer/clue pair as handed in by a caller, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawEntry {
    #[serde(default, alias = "word")]
    pub answer: String,
    #[serde(default)]
    pub clue: String,
}

impl RawEntry {
    pub fn new(answer: impl Into<String>, clue: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            clue: clue.into(),
        }
    }
}

/// A normalized entry: `answer` holds only `A-Z` and is at least
/// [`MIN_ANSWER_LEN`](crate::normalize::MIN_ANSWER_LEN) letters long.
///
/// Only [`normalize_entries`](crate::normalize::normalize_entries) builds these,
/// so the placement engine never re-validates them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    answer: String,
    clue: String,
}

impl WordEntry {
    pub(crate) fn new_unchecked(answer: String, clue: String) -> Self {
        Self { answer, clue }
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn clue(&self) -> &str {
        &self.clue
    }

    pub fn len(&self) -> usize {
        self.answer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answer.is_empty()
    }
}
