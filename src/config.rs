//! Classifier settings
//!
//! Settings are plain serde data, read from YAML either as a string (the
//! WASM API passes it through) or from a file (native batch tools).
//!
//! ```yaml
//! passes: [quarter_split, compound, half_split, palindromic]
//! match_base_words: true
//! section_length: 8
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use crate::analysis::pairing::PairingStrategy;
use crate::errors::EngineError;

/// One classification attempt; passes run in order and the first hit wins
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassifierPass {
    QuarterSplit,
    Compound,
    HalfSplit,
    Palindromic,
}

impl ClassifierPass {
    /// The pairing a pass runs, None for the compound pass
    pub fn pairing(self) -> Option<PairingStrategy> {
        match self {
            ClassifierPass::QuarterSplit => Some(PairingStrategy::QuarterSplit),
            ClassifierPass::HalfSplit => Some(PairingStrategy::HalfSplit),
            ClassifierPass::Palindromic => Some(PairingStrategy::Palindromic),
            ClassifierPass::Compound => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierSettings {
    pub passes: Vec<ClassifierPass>,
    pub match_base_words: bool,
    /// Beats per section for section labeling
    pub section_length: Option<usize>,
}

impl Default for ClassifierSettings {
    fn default() -> Self {
        Self {
            passes: vec![
                ClassifierPass::QuarterSplit,
                ClassifierPass::Compound,
                ClassifierPass::HalfSplit,
                ClassifierPass::Palindromic,
            ],
            match_base_words: true,
            section_length: None,
        }
    }
}

impl ClassifierSettings {
    /// Parse and validate settings from a YAML document.
    /// An empty document yields the defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, EngineError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let settings: ClassifierSettings = serde_yaml::from_str(yaml)?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn from_yaml_file(path: &Path) -> Result<Self, EngineError> {
        let content = fs::read_to_string(path)
            .map_err(|e| EngineError::SettingsIo(format!("{}: {}", path.display(), e)))?;
        Self::from_yaml_str(&content)
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.passes.is_empty() {
            return Err(EngineError::InvalidSettings("passes must not be empty".to_string()));
        }
        if self.section_length == Some(0) {
            return Err(EngineError::InvalidSettings(
                "section_length must be a positive beat count".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ClassifierSettings::default();
        assert_eq!(settings.passes.len(), 4);
        assert_eq!(settings.passes[0], ClassifierPass::QuarterSplit);
        assert!(settings.match_base_words);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(ClassifierSettings::from_yaml_str("  \n").unwrap(), ClassifierSettings::default());
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() {
        let settings = ClassifierSettings::from_yaml_str("passes: [palindromic]\n").unwrap();
        assert_eq!(settings.passes, vec![ClassifierPass::Palindromic]);
        assert!(settings.match_base_words);
        assert_eq!(settings.section_length, None);
    }

    #[test]
    fn test_rejects_empty_passes() {
        let err = ClassifierSettings::from_yaml_str("passes: []\n").unwrap_err();
        assert!(matches!(err, EngineError::InvalidSettings(_)));
    }

    #[test]
    fn test_rejects_zero_section_length() {
        assert!(ClassifierSettings::from_yaml_str("section_length: 0\n").is_err());
    }

    #[test]
    fn test_rejects_unknown_pass() {
        let err = ClassifierSettings::from_yaml_str("passes: [diagonal]\n").unwrap_err();
        assert!(err.to_string().starts_with("Invalid classifier settings"));
    }

    #[test]
    fn test_pass_pairing() {
        assert_eq!(ClassifierPass::HalfSplit.pairing(), Some(PairingStrategy::HalfSplit));
        assert_eq!(ClassifierPass::Compound.pairing(), None);
    }
}
