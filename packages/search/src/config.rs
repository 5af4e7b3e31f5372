//! Configuration loading.
//!
//! The default configuration is embedded at compile time from
//! `config/default.toml`. A user file replaces it when given; keys it
//! omits fall back to the built-in defaults. The index directory can be
//! overridden with the `ADDRESS_LOOKUP_INDEX_DIR` environment variable.

use std::path::Path;

use address_lookup_models::SearchConfig;

/// Embedded default configuration.
const DEFAULT_CONFIG_TOML: &str = include_str!("../config/default.toml");

/// Environment variable overriding the index directory.
pub const INDEX_DIR_ENV: &str = "ADDRESS_LOOKUP_INDEX_DIR";

/// Errors from configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read config {path}: {source}")]
    Read {
        /// Path of the file.
        path: String,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The configuration is not valid TOML for [`SearchConfig`].
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Loads the configuration from `path`, or the embedded default.
///
/// # Errors
///
/// Returns [`ConfigError`] if the file cannot be read or parsed.
pub fn load(path: Option<&Path>) -> Result<SearchConfig, ConfigError> {
    let mut config = match path {
        Some(path) => {
            let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
                path: path.display().to_string(),
                source: e,
            })?;
            log::debug!("Loaded config from {}", path.display());
            parse(&text)?
        }
        None => default_config()?,
    };

    apply_index_dir_override(&mut config, std::env::var(INDEX_DIR_ENV).ok());

    Ok(config)
}

/// Parses a TOML configuration.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] if the text is not a valid configuration.
pub fn parse(text: &str) -> Result<SearchConfig, ConfigError> {
    Ok(toml::from_str(text)?)
}

/// The embedded default configuration.
///
/// # Errors
///
/// Returns [`ConfigError::Parse`] if the embedded file is invalid.
pub fn default_config() -> Result<SearchConfig, ConfigError> {
    parse(DEFAULT_CONFIG_TOML)
}

fn apply_index_dir_override(config: &mut SearchConfig, value: Option<String>) {
    if let Some(dir) = value.filter(|dir| !dir.trim().is_empty()) {
        log::debug!("{INDEX_DIR_ENV} overrides index_dir with {dir}");
        config.index_dir = dir;
    }
}
