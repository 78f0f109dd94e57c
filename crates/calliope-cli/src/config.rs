//! CLI configuration loading from file and environment variables.

use serde::Deserialize;
use thiserror::Error;

/// Top-level CLI configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Catalog source settings.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Matching settings.
    #[serde(default)]
    pub matching: MatchingConfig,

    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the catalog comes from.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Path to a JSON catalog file.
    #[serde(default = "default_catalog_path")]
    pub path: String,
}

/// Matching parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct MatchingConfig {
    /// Maximum number of results printed.
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// Exclude neutral-gender candidates when the query names a gender.
    #[serde(default)]
    pub strict_gender: bool,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "calliope_match=debug,info").
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Whether to output logs in JSON format.
    #[serde(default)]
    pub json: bool,
}

fn default_catalog_path() -> String {
    "catalog.json".to_string()
}

fn default_max_results() -> usize {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: default_catalog_path(),
        }
    }
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            max_results: default_max_results(),
            strict_gender: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    /// Failed to parse the configuration file.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Loads configuration from a TOML file, falling back to defaults.
///
/// Environment variable overrides:
/// - `CALLIOPE_CATALOG_PATH` overrides `catalog.path`
/// - `CALLIOPE_MAX_RESULTS` overrides `matching.max_results`
/// - `CALLIOPE_LOG_LEVEL` overrides `logging.level`
/// - `CALLIOPE_LOG_JSON` overrides `logging.json` (set to "true" to enable)
///
/// # Errors
///
/// Returns `ConfigError` if the file exists but cannot be read or parsed.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let mut config = match path {
        Some(p) => match std::fs::read_to_string(p) {
            Ok(contents) => toml::from_str(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(path = p, "config file not found, using defaults");
                Config::default()
            }
            Err(e) => return Err(ConfigError::FileRead(e)),
        },
        None => Config::default(),
    };

    // Environment variable overrides
    if let Ok(catalog_path) = std::env::var("CALLIOPE_CATALOG_PATH") {
        config.catalog.path = catalog_path;
    }
    if let Ok(max_results) = std::env::var("CALLIOPE_MAX_RESULTS") {
        if let Ok(parsed) = max_results.parse() {
            config.matching.max_results = parsed;
        }
    }
    if let Ok(level) = std::env::var("CALLIOPE_LOG_LEVEL") {
        config.logging.level = level;
    }
    if let Ok(json) = std::env::var("CALLIOPE_LOG_JSON") {
        config.logging.json = json == "true" || json == "1";
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_without_a_file() {
        let config = load_config(None).unwrap();
        assert_eq!(config.catalog.path, "catalog.json");
        assert_eq!(config.matching.max_results, 5);
        assert_eq!(config.logging.level, "info");
        assert!(!config.logging.json);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: Config = toml::from_str(
            r#"
            [matching]
            max_results = 3
            "#,
        )
        .unwrap();
        assert_eq!(config.matching.max_results, 3);
        assert_eq!(config.catalog.path, "catalog.json");
    }
}
