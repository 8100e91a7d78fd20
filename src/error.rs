// Error Types
// Core detection errors and configuration errors

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DetectError {
    /// Text is empty or whitespace-only; no verdict is produced for it.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl DetectError {
    /// Human-readable reason without the variant prefix.
    pub fn reason(&self) -> &str {
        match self {
            DetectError::InvalidInput(reason) => reason,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Invalid model configuration: {0}")]
    InvalidModel(String),
}
