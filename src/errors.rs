//! Error types for the engine boundary
//!
//! Classification itself never fails (absence is reported as None or an
//! empty result). These errors cover decoding inputs and loading settings.

use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum EngineError {
    /// Sequence input could not be decoded
    #[error("Invalid sequence: {0}")]
    InvalidSequence(String),

    /// Settings are malformed or contradictory
    #[error("Invalid classifier settings: {0}")]
    InvalidSettings(String),

    /// Settings file could not be read
    #[error("Failed to read settings file: {0}")]
    SettingsIo(String),

    #[error("Invalid pairing strategy: {0}")]
    InvalidStrategy(String),
}

impl From<serde_yaml::Error> for EngineError {
    fn from(e: serde_yaml::Error) -> Self {
        EngineError::InvalidSettings(e.to_string())
    }
}

impl From<serde_json::Error> for EngineError {
    fn from(e: serde_json::Error) -> Self {
        EngineError::InvalidSequence(e.to_string())
    }
}
