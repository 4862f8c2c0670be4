use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::core::error::{PipelineError, Result};

/// Fixed token-sequence length fed to the classifier.
pub const DEFAULT_MAX_LENGTH: usize = 128;

/// Number of dataset shards, one worker thread each.
pub const DEFAULT_SHARD_COUNT: usize = 10;

/// Settings for one batch run. Every field has a default, so an empty or
/// missing config file just runs the stock setup.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Input table with `post_num,time,text` columns.
    pub input: PathBuf,
    /// Destination for the augmented table.
    pub output: PathBuf,
    /// Directory holding the classifier config, weights and vocabulary.
    pub model_dir: PathBuf,
    pub max_length: usize,
    pub shard_count: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from("test.csv"),
            output: PathBuf::from("results.csv"),
            model_dir: PathBuf::from("model"),
            max_length: DEFAULT_MAX_LENGTH,
            shard_count: DEFAULT_SHARD_COUNT,
        }
    }
}

impl BatchConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)?;
        config.validate()
    }

    /// A missing file means defaults; a file that exists but does not parse
    /// is a startup error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    fn validate(self) -> Result<Self> {
        if self.max_length == 0 {
            return Err(PipelineError::Config("max_length must be at least 1".into()));
        }
        if self.shard_count == 0 {
            return Err(PipelineError::Config("shard_count must be at least 1".into()));
        }
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_expected_constants() {
        let config = BatchConfig::default();
        assert_eq!(config.max_length, 128);
        assert_eq!(config.shard_count, 10);
        assert_eq!(config.input, PathBuf::from("test.csv"));
        assert_eq!(config.output, PathBuf::from("results.csv"));
        assert_eq!(config.model_dir, PathBuf::from("model"));
    }

    #[test]
    fn partial_file_overrides_defaults() {
        let config: BatchConfig = serde_json::from_str(r#"{"shard_count": 4}"#).unwrap();
        assert_eq!(config.shard_count, 4);
        assert_eq!(config.max_length, 128);
    }

    #[test]
    fn zero_shard_count_is_rejected() {
        let config: BatchConfig = serde_json::from_str(r#"{"shard_count": 0}"#).unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn zero_max_length_is_rejected() {
        let config: BatchConfig = serde_json::from_str(r#"{"max_length": 0}"#).unwrap();
        assert!(config.validate().is_err());
    }
}
