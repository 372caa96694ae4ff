//! TOML configuration for building a [`Composite`](crate::Composite).
//!
//! ```toml
//! value = 7
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

const INLINE_SOURCE: &str = "<inline>";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read file: {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid toml at {path}: {source}")]
    ParseToml {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Inputs to [`Composite::from_config`](crate::Composite::from_config).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompositeConfig {
    /// Configuration value stored in the composite's leaf.
    pub value: i64,
}

impl CompositeConfig {
    pub fn new(value: i64) -> Self {
        Self { value }
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        parse(text, INLINE_SOURCE)
    }

    /// Read and parse a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let shown = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: shown.clone(),
            source,
        })?;
        let config = parse(&text, &shown)?;
        tracing::debug!(path = %shown, value = config.value, "loaded composite config");
        Ok(config)
    }
}

fn parse(text: &str, path: &str) -> Result<CompositeConfig, ConfigError> {
    toml::from_str(text).map_err(|source| ConfigError::ParseToml {
        path: path.to_string(),
        source,
    })
}
