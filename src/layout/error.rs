/// Why the generator could not hand back a puzzle.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerateError {
    #[error("no words to place")]
    EmptyWordList,

    #[error("invalid generator config: {reason}")]
    InvalidConfig { reason: String },

    #[error(
        "could not build a crossword after {rounds} size rounds (largest grid {largest_size}x{largest_size}); try a different word list"
    )]
    NoPuzzle { rounds: usize, largest_size: usize },
}

impl GenerateError {
    pub(crate) fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }
}
