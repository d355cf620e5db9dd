use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of documents kept after the first pass.
pub const DEFAULT_FILE_MATCHES: usize = 1;

/// Number of sentences returned as the answer.
pub const DEFAULT_SENTENCE_MATCHES: usize = 1;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be at least 1")]
    InvalidLimit { field: &'static str },
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

// Key point:
// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub file_matches: usize,
    pub sentence_matches: usize,
}

impl EngineConfig {
    pub fn v0() -> Self {
        Self {
            file_matches: DEFAULT_FILE_MATCHES,
            sentence_matches: DEFAULT_SENTENCE_MATCHES,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.file_matches == 0 {
            return Err(ConfigError::InvalidLimit { field: "file_matches" });
        }
        if self.sentence_matches == 0 {
            return Err(ConfigError::InvalidLimit { field: "sentence_matches" });
        }
        Ok(())
    }

    /// Read a JSON config; absent fields keep their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::v0()
    }
}
