//! Configuration loading and validation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::locales::{LocaleError, LocaleRegistry, DEFAULT_LOCALE};
use crate::parse::ParseOptions;

/// Log levels accepted by `log_level`.
const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Prefix of environment variables that override file settings.
pub const ENV_PREFIX: &str = "PARSE_TIME";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to load config: {0}")]
    LoadError(#[from] ::config::ConfigError),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),

    #[error(transparent)]
    Locale(#[from] LocaleError),
}

/// Main application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Locale used when none is given on the command line
    #[serde(default = "default_locale")]
    pub locale: String,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Report parse failures as errors instead of `null`
    #[serde(default)]
    pub throw_error: bool,

    /// Offset results by the current time
    #[serde(default)]
    pub from_now: bool,

    /// Let `[locales]` entries replace already-registered locales
    #[serde(default)]
    pub overwrite_locales: bool,

    /// Extra unit-synonym tables, keyed by locale id. Validated on registration.
    #[serde(default)]
    pub locales: BTreeMap<String, serde_json::Value>,
}

/// Scalar settings that may come from the environment.
///
/// Locale tables stay file-only: environment keys are case-folded, locale ids are not.
#[derive(Debug, Default, Deserialize)]
struct EnvOverrides {
    locale: Option<String>,
    log_level: Option<String>,
    throw_error: Option<bool>,
    from_now: Option<bool>,
    overwrite_locales: Option<bool>,
}

impl EnvOverrides {
    fn apply_to(self, config: &mut AppConfig) {
        if let Some(locale) = self.locale {
            config.locale = locale;
        }
        if let Some(log_level) = self.log_level {
            config.log_level = log_level;
        }
        if let Some(throw_error) = self.throw_error {
            config.throw_error = throw_error;
        }
        if let Some(from_now) = self.from_now {
            config.from_now = from_now;
        }
        if let Some(overwrite_locales) = self.overwrite_locales {
            config.overwrite_locales = overwrite_locales;
        }
    }
}

fn default_locale() -> String {
    DEFAULT_LOCALE.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            locale: default_locale(),
            log_level: default_log_level(),
            throw_error: false,
            from_now: false,
            overwrite_locales: false,
            locales: BTreeMap::new(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &PathBuf) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: AppConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load an optional TOML file, then apply `PARSE_TIME_*` environment overrides.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            Self::from_file(&path.to_path_buf())?
        } else {
            Self::default()
        };

        let overrides: EnvOverrides = ::config::Config::builder()
            .add_source(::config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
            .build()?
            .try_deserialize()?;
        overrides.apply_to(&mut config);

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.locale.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "Locale must not be empty".to_string(),
            ));
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(ConfigError::ValidationError(format!(
                "Unknown log level: {}",
                self.log_level
            )));
        }

        Ok(())
    }

    /// Register every configured locale table in `registry`.
    pub fn apply(&self, registry: &mut LocaleRegistry) -> Result<(), ConfigError> {
        for (locale, table) in &self.locales {
            registry.register_value(locale, table, self.overwrite_locales)?;
        }
        Ok(())
    }

    /// Parse options carrying this configuration's defaults.
    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions::new()
            .locale(self.locale.clone())
            .from_now(self.from_now)
            .throw_error(self.throw_error)
    }
}
