use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::questions::QuestionCounts;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

// Serializable, comparable, explicit defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    pub counts: QuestionCounts,
    /// How many ranked keywords feed the question generator.
    pub keyword_limit: usize,
    /// Fixed seed for distractor sampling; entropy when absent.
    pub seed: Option<u64>,
}

impl GenerationConfig {
    pub fn v0() -> Self {
        Self {
            counts: QuestionCounts::default(),
            keyword_limit: 100,
            seed: None,
        }
    }

    /// Load overrides from a JSON file. Missing fields keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self::v0()
    }
}
