//! Search configuration.
//!
//! The defaults describe the standard player: five random opening moves, then
//! a search `floor(log3(moves played))` plies deep. A TOML file can override
//! any subset of the fields:
//!
//! ```toml
//! opening_moves = 3
//! max_depth = 2
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading or validating a [`SearchConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse search config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid search config: {0}")]
    Invalid(String),
}

/// Tunable parameters of the minimax player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SearchConfig {
    /// Moves played on the board before the search replaces the random opening
    pub opening_moves: usize,
    /// The opening picks the move at a random ordinal in `0..opening_choices`
    pub opening_choices: u32,
    /// Shallowest search once the opening is over
    pub min_depth: u8,
    /// Depth grows with the logarithm of the moves played, in this base
    pub depth_log_base: u32,
    /// Optional hard cap on the search depth
    pub max_depth: Option<u8>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            opening_moves: 5,
            opening_choices: 100,
            min_depth: 1,
            depth_log_base: 3,
            max_depth: None,
        }
    }
}

impl SearchConfig {
    /// Parse and validate a configuration from TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.opening_choices == 0 {
            return Err(ConfigError::Invalid(
                "opening_choices must be at least 1".to_string(),
            ));
        }
        if self.min_depth == 0 {
            return Err(ConfigError::Invalid(
                "min_depth must be at least 1".to_string(),
            ));
        }
        if self.depth_log_base < 2 {
            return Err(ConfigError::Invalid(format!(
                "depth_log_base must be at least 2, got {}",
                self.depth_log_base
            )));
        }
        if let Some(max) = self.max_depth {
            if max < self.min_depth {
                return Err(ConfigError::Invalid(format!(
                    "max_depth {max} is below min_depth {}",
                    self.min_depth
                )));
            }
        }
        Ok(())
    }

    /// Search depth for a board on which `moves_played` moves have been made:
    /// `floor(log_base(moves_played))`, clamped to `[min_depth, max_depth]`.
    pub fn depth_for(&self, moves_played: usize) -> u8 {
        let base = self.depth_log_base.max(2) as usize;
        let mut depth = 0u8;
        let mut n = moves_played;
        while n >= base {
            n /= base;
            depth += 1;
        }
        let depth = depth.max(self.min_depth);
        match self.max_depth {
            Some(max) => depth.min(max),
            None => depth,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
