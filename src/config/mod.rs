//! Reader configuration.

mod types;

pub use types::*;

use crate::{Error, Result};
use std::path::Path;

impl ReaderConfig {
    /// Parse a configuration from TOML. Missing keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ReaderConfig = toml::from_str(content)
            .map_err(|e| Error::config(format!("Failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::Config(msg) => Error::Config(format!("{}: {msg}", path.display())),
            other => other,
        })
    }

    /// Check that the values can drive a reader.
    pub fn validate(&self) -> Result<()> {
        if self.buffer_capacity < crate::flv::TAG_REGION_SIZE {
            return Err(Error::config(format!(
                "buffer_capacity must be at least {} bytes, got {}",
                crate::flv::TAG_REGION_SIZE,
                self.buffer_capacity
            )));
        }

        if self.max_tag_size == 0 || self.max_tag_size > MAX_TAG_SIZE {
            return Err(Error::config(format!(
                "max_tag_size must be between 1 and {MAX_TAG_SIZE}, got {}",
                self.max_tag_size
            )));
        }

        Ok(())
    }
}
