//! Board configuration.
//!
//! Defaults match the browser board: snapshots live under the
//! `kanban.tasks.v1` key and freshly added cards stay highlighted for 1.5
//! seconds. Hosts may override either value through the environment.

use chrono::TimeDelta;
use std::env;
use thiserror::Error;

/// Environment variable overriding [`BoardConfig::storage_key`].
pub const STORAGE_KEY_ENV: &str = "KANBAN_STORAGE_KEY";

/// Environment variable overriding the highlight duration, in milliseconds.
pub const HIGHLIGHT_MS_ENV: &str = "KANBAN_HIGHLIGHT_MS";

/// Default key of the persisted board snapshot.
pub const DEFAULT_STORAGE_KEY: &str = "kanban.tasks.v1";

/// Default is-new highlight duration in milliseconds.
pub const DEFAULT_HIGHLIGHT_MS: i64 = 1500;

/// Errors returned while reading configuration from the environment.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The storage key is empty after trimming.
    #[error("{STORAGE_KEY_ENV} must not be empty")]
    EmptyStorageKey,

    /// The highlight duration is not a non-negative integer.
    #[error("{HIGHLIGHT_MS_ENV} must be a non-negative integer, got '{0}'")]
    InvalidHighlightDuration(String),
}

/// Runtime settings for a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Key of the snapshot in the blob store.
    pub storage_key: String,
    /// How long a new task keeps its is-new flag.
    pub highlight_duration: TimeDelta,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            highlight_duration: TimeDelta::milliseconds(DEFAULT_HIGHLIGHT_MS),
        }
    }
}

impl BoardConfig {
    /// Sets the snapshot key.
    #[must_use]
    pub fn with_storage_key(mut self, storage_key: impl Into<String>) -> Self {
        self.storage_key = storage_key.into();
        self
    }

    /// Sets the highlight duration.
    #[must_use]
    pub const fn with_highlight_duration(mut self, highlight_duration: TimeDelta) -> Self {
        self.highlight_duration = highlight_duration;
        self
    }

    /// Builds a configuration from the process environment.
    ///
    /// Unset variables keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds a configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(raw_key) = lookup(STORAGE_KEY_ENV) {
            let key = raw_key.trim();
            if key.is_empty() {
                return Err(ConfigError::EmptyStorageKey);
            }
            key.clone_into(&mut config.storage_key);
        }

        if let Some(raw_ms) = lookup(HIGHLIGHT_MS_ENV) {
            config.highlight_duration = raw_ms
                .trim()
                .parse::<u32>()
                .ok()
                .map(|ms| TimeDelta::milliseconds(i64::from(ms)))
                .ok_or(ConfigError::InvalidHighlightDuration(raw_ms))?;
        }

        Ok(config)
    }
}
