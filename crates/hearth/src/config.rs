//! # Sandbox Configuration
//!
//! TOML settings for the `ui_sandbox` binary. Every field has a default, so
//! an empty file (or no file) is a valid configuration.
//!
//! ```toml
//! frames = 240
//! frame_dt = 0.016
//! log_level = "debug"
//!
//! [memory]
//! ui_arena_bytes = 131072
//! ```

use std::path::{Path, PathBuf};

use hearth_core::{CoreError, MemoryConfig};
use serde::Deserialize;
use thiserror::Error;
use tracing::Level;

/// Errors loading a [`SandboxConfig`].
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// File that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for this schema.
    #[error("failed to parse sandbox config: {0}")]
    Parse(#[from] toml::de::Error),

    /// `log_level` is not a tracing level name.
    #[error("invalid log level {0:?} (expected trace, debug, info, warn or error)")]
    InvalidLogLevel(String),

    /// A value is out of range.
    #[error("invalid sandbox config: {0}")]
    Invalid(String),

    /// The `[memory]` table failed validation.
    #[error(transparent)]
    Memory(#[from] CoreError),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Settings for one sandbox run.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SandboxConfig {
    /// Frames to simulate before exiting.
    pub frames: u32,
    /// Fixed timestep in seconds.
    pub frame_dt: f32,
    /// Maximum log level for the fmt subscriber.
    pub log_level: String,
    /// Fixed-capacity sizing.
    pub memory: MemoryConfig,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            frames: 120,
            frame_dt: 1.0 / 60.0,
            log_level: "info".to_owned(),
            memory: MemoryConfig::default(),
        }
    }
}

impl SandboxConfig {
    /// Parses and validates TOML text.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] on malformed input, otherwise whatever
    /// [`validate`](Self::validate) reports.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a TOML file.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "sandbox config loaded");
        Ok(config)
    }

    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// The first offending field.
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.frame_dt.is_finite() && self.frame_dt > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "frame_dt must be a positive number of seconds, got {}",
                self.frame_dt
            )));
        }
        self.log_level()?;
        self.memory.validate()?;
        Ok(())
    }

    /// `log_level` as a tracing level.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidLogLevel`] for unknown names.
    pub fn log_level(&self) -> ConfigResult<Level> {
        self.log_level
            .parse::<Level>()
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}
