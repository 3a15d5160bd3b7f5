use crate::layout::GenerateError;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_ATTEMPTS_PER_SIZE: usize = 60;
pub const DEFAULT_MAX_ESCALATIONS: usize = 4;
pub const DEFAULT_SIZE_INCREMENT: usize = 2;
/// Largest working grid side the generator will allocate.
pub const MAX_GRID_SIZE: usize = 1024;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Randomized builds tried at each grid size.
    pub attempts_per_size: usize,
    /// Grid sizes tried in total, the initial size included.
    pub max_escalations: usize,
    /// Growth of the grid side between rounds.
    pub size_increment: usize,
    /// Starting grid side; derived from the word list when absent.
    pub preferred_size: Option<usize>,
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            attempts_per_size: DEFAULT_ATTEMPTS_PER_SIZE,
            max_escalations: DEFAULT_MAX_ESCALATIONS,
            size_increment: DEFAULT_SIZE_INCREMENT,
            preferred_size: None,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_preferred_size(mut self, size: usize) -> Self {
        self.preferred_size = Some(size);
        self
    }

    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.attempts_per_size == 0 {
            return Err(GenerateError::invalid_config("attemptsPerSize must be at least 1"));
        }
        if self.max_escalations == 0 {
            return Err(GenerateError::invalid_config("maxEscalations must be at least 1"));
        }
        match self.preferred_size {
            Some(0) => {
                return Err(GenerateError::invalid_config("preferredSize must be positive"));
            }
            Some(size) if size > MAX_GRID_SIZE => {
                return Err(GenerateError::invalid_config(format!(
                    "preferredSize must be at most {MAX_GRID_SIZE}"
                )));
            }
            _ => {}
        }
        Ok(())
    }

    /// Side of the last round's grid when escalation starts at `start`, or
    /// `None` when it would pass [`MAX_GRID_SIZE`].
    pub fn largest_size(&self, start: usize) -> Option<usize> {
        self.max_escalations
            .saturating_sub(1)
            .checked_mul(self.size_increment)
            .and_then(|growth| growth.checked_add(start))
            .filter(|&last| last <= MAX_GRID_SIZE)
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    attempts_per_size: Option<usize>,
    max_escalations: Option<usize>,
    size_increment: Option<usize>,
    preferred_size: Option<usize>,
    seed: Option<u64>,
}

impl ConfigFile {
    fn apply(self, config: &mut GeneratorConfig) {
        if let Some(v) = self.attempts_per_size {
            config.attempts_per_size = v;
        }
        if let Some(v) = self.max_escalations {
            config.max_escalations = v;
        }
        if let Some(v) = self.size_increment {
            config.size_increment = v;
        }
        if let Some(v) = self.preferred_size {
            config.preferred_size = Some(v);
        }
        if let Some(v) = self.seed {
            config.seed = Some(v);
        }
    }
}

/// Overlay the keys present in a JSON string onto the defaults.
pub fn parse_config(contents: &str) -> anyhow::Result<GeneratorConfig> {
    let mut config = GeneratorConfig::default();
    let parsed: ConfigFile = serde_json::from_str(contents)?;
    parsed.apply(&mut config);
    Ok(config)
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<GeneratorConfig> {
    let Some(path) = path else {
        return Ok(GeneratorConfig::default());
    };

    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}
