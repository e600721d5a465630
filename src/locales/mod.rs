//! Locale registry: locale identifiers mapped to validated unit-synonym tables.
//!
//! A [`LocaleRegistry`] can be owned by the application and passed to the
//! parser explicitly. The crate also keeps one process-wide registry, seeded
//! with the built-in locales, behind the free functions [`register_locale`],
//! [`default_locales`] and [`with_registry`].

mod builtin;
mod validate;

pub use builtin::*;
pub use validate::*;

use std::collections::HashMap;
use std::sync::{LazyLock, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::models::TimeStrings;

/// Errors raised when registering a locale.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    #[error("Locale {0} is already registered")]
    AlreadyRegistered(String),

    #[error("Invalid table for locale {locale}: {source}")]
    Invalid {
        locale: String,
        #[source]
        source: ValidationError,
    },
}

/// Locale identifiers (case-sensitive) mapped to their unit-synonym tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleRegistry {
    tables: HashMap<String, TimeStrings>,
}

impl LocaleRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self {
            tables: HashMap::new(),
        }
    }

    /// A registry seeded with the built-in locales.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.reset_to_defaults(false);
        registry
    }

    /// Register `table` under `locale`.
    ///
    /// Fails if `locale` is taken and `overwrite` is false, or if any unit of
    /// the table has no spellings.
    pub fn register(
        &mut self,
        locale: &str,
        table: TimeStrings,
        overwrite: bool,
    ) -> Result<&mut Self, LocaleError> {
        if self.tables.contains_key(locale) && !overwrite {
            return Err(LocaleError::AlreadyRegistered(locale.to_string()));
        }

        validate(&table).map_err(|source| LocaleError::Invalid {
            locale: locale.to_string(),
            source,
        })?;

        debug!("Registered locale {} (overwrite: {})", locale, overwrite);
        self.tables.insert(locale.to_string(), table);
        Ok(self)
    }

    /// Register a loosely-typed table, e.g. one read from a config file.
    pub fn register_value(
        &mut self,
        locale: &str,
        value: &Value,
        overwrite: bool,
    ) -> Result<&mut Self, LocaleError> {
        if self.tables.contains_key(locale) && !overwrite {
            return Err(LocaleError::AlreadyRegistered(locale.to_string()));
        }

        let table = validate_value(value).map_err(|source| LocaleError::Invalid {
            locale: locale.to_string(),
            source,
        })?;
        self.register(locale, table, true)
    }

    /// Reinsert the built-in locales, dropping every other entry first if `clean`.
    pub fn reset_to_defaults(&mut self, clean: bool) {
        if clean {
            self.tables.clear();
        }

        for (locale, table) in builtin_locales() {
            self.tables.insert(locale.to_string(), table);
        }
        debug!("Reset locales to defaults (clean: {})", clean);
    }

    pub fn get(&self, locale: &str) -> Option<&TimeStrings> {
        self.tables.get(locale)
    }

    pub fn contains(&self, locale: &str) -> bool {
        self.tables.contains_key(locale)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }

    /// Registered locale identifiers, sorted.
    pub fn locales(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.tables.keys().map(String::as_str).collect();
        ids.sort_unstable();
        ids
    }
}

impl Default for LocaleRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

static GLOBAL: LazyLock<RwLock<LocaleRegistry>> =
    LazyLock::new(|| RwLock::new(LocaleRegistry::with_defaults()));

// Every write is a single map operation, so a poisoned registry is still consistent.
fn read_global() -> RwLockReadGuard<'static, LocaleRegistry> {
    GLOBAL.read().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write_global() -> RwLockWriteGuard<'static, LocaleRegistry> {
    GLOBAL.write().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Run `f` against the process-wide registry.
pub fn with_registry<T>(f: impl FnOnce(&LocaleRegistry) -> T) -> T {
    f(&read_global())
}

/// Register a locale in the process-wide registry and return a snapshot of it.
pub fn register_locale(
    locale: &str,
    table: TimeStrings,
    overwrite: bool,
) -> Result<LocaleRegistry, LocaleError> {
    let mut registry = write_global();
    registry.register(locale, table, overwrite)?;
    Ok(registry.clone())
}

/// Reseed the process-wide registry with the built-in locales.
pub fn default_locales(clean: bool) {
    write_global().reset_to_defaults(clean);
}
