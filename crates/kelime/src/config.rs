//! Application configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Config file looked up in the working directory when none is given.
pub const CONFIG_FILE_NAME: &str = "kelime.toml";

/// Environment variable that overrides the dictionary path.
pub const DICTIONARY_ENV: &str = "KELIME_DICTIONARY";

/// Settings for the `kelime` binary.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct KelimeConfig {
    /// Word source: a JSON array, a line list, or a directory of `.list` files.
    #[serde(default = "default_dictionary")]
    dictionary: PathBuf,

    /// Log filter used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_dictionary() -> PathBuf {
    PathBuf::from("turkish_words.json")
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for KelimeConfig {
    fn default() -> Self {
        Self {
            dictionary: default_dictionary(),
            log_filter: default_log_filter(),
        }
    }
}

impl KelimeConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(dictionary = %config.dictionary.display(), "Config loaded successfully");
        Ok(config)
    }

    /// Finds the configuration for a run.
    ///
    /// Resolution order:
    /// 1. `explicit`, which must exist
    /// 2. [`CONFIG_FILE_NAME`] in `working_dir`, if present
    /// 3. Defaults
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the chosen file cannot be read or parsed.
    #[instrument(skip(explicit, working_dir), fields(working_dir = %working_dir.display()))]
    pub fn resolve(explicit: Option<&Path>, working_dir: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let local = working_dir.join(CONFIG_FILE_NAME);
        if local.is_file() {
            return Self::from_file(local);
        }

        debug!("No config file, using defaults");
        Ok(Self::default())
    }

    /// Applies the [`DICTIONARY_ENV`] override, given the variable's value.
    ///
    /// Unset or blank values leave the config unchanged.
    pub fn with_env_dictionary(self, value: Option<String>) -> Self {
        match value.filter(|v| !v.trim().is_empty()) {
            Some(path) => {
                debug!(%path, "Dictionary path overridden by environment");
                self.with_dictionary(PathBuf::from(path))
            }
            None => self,
        }
    }

    /// Replaces the dictionary path.
    pub fn with_dictionary(mut self, dictionary: PathBuf) -> Self {
        self.dictionary = dictionary;
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
