//! @acp:module "Configuration"
//! @acp:summary "Pairing configuration loading and defaults"
//! @acp:domain cli
//! @acp:layer config

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MagphiError, Result};

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = ".magphi.config.json";

fn default_max_pairing_rounds() -> usize {
    1000
}

fn default_header_marker() -> char {
    '>'
}

/// @acp:summary "Main Magphi configuration structure"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Upper bound on pairing rounds before giving up.
    /// Name sets where every name ties with every other hit this bound.
    #[serde(default = "default_max_pairing_rounds")]
    pub max_pairing_rounds: usize,

    /// Character that marks a seed sequence header line
    #[serde(default = "default_header_marker")]
    pub header_marker: char,

    /// What to do when two pairs derive the same pair name
    #[serde(default)]
    pub key_collision: KeyCollisionPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_pairing_rounds: default_max_pairing_rounds(),
            header_marker: default_header_marker(),
            key_collision: KeyCollisionPolicy::default(),
        }
    }
}

impl Config {
    /// @acp:summary "Load config from a JSON file"
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path` when it exists, otherwise fall back to defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = ?path, "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// @acp:summary "Save config to a file"
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_pairing_rounds == 0 {
            return Err(MagphiError::Config(
                "max_pairing_rounds must be greater than zero".to_string(),
            ));
        }
        if self.header_marker.is_whitespace() {
            return Err(MagphiError::Config(
                "header_marker cannot be whitespace".to_string(),
            ));
        }
        Ok(())
    }
}

/// Handling of pair-name collisions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyCollisionPolicy {
    /// Keep the later pair and log a warning
    #[default]
    Warn,
    /// Abort pairing
    Error,
}
