//! # Parse Time
//!
//! Lenient, locale-aware parsing of duration expressions such as `"1.5 hours"`,
//! `"2d 4h"` or `"100"` into a millisecond count.
//!
//! ## Architecture
//!
//! - **models**: Duration units, base values and unit-synonym tables
//! - **pluralize**: Expansion of compact synonym lists into plural forms
//! - **locales**: Locale registry, table validation and built-in locales
//! - **parse**: Tokenizer and millisecond accumulation
//! - **config**: Configuration loading and validation
//!
//! ```
//! use parse_time::{LocaleRegistry, ParseOptions, try_parse_time_in};
//!
//! let registry = LocaleRegistry::with_defaults();
//! let millis = try_parse_time_in(&registry, "1h 30m", &ParseOptions::default()).unwrap();
//! assert_eq!(millis, 5_400_000.0);
//! ```

pub mod config;
pub mod locales;
pub mod models;
pub mod parse;
mod pluralize;

pub use locales::{
    default_locales, register_locale, with_registry, LocaleError, LocaleRegistry, ValidationError,
};
pub use models::*;
pub use parse::{
    error_or_none, parse_time, parse_time_in, try_parse_time, try_parse_time_in, ParseError,
    ParseOptions, TimeInput, TOKEN_PATTERN,
};
pub use pluralize::pluralize;

use std::time::Duration;

/// Parse a human-friendly duration string (e.g., "6h", "30m", "1.5 days") as en-US.
///
/// Text without any quantity parses to `Duration::ZERO`. Returns `None` for unknown
/// units and for negative or non-finite totals.
pub fn parse_duration(s: &str) -> Option<Duration> {
    let millis = parse_time(s, &ParseOptions::default()).ok()??;
    let nanos = (millis * 1_000_000.0).round();
    if !(0.0..=u64::MAX as f64).contains(&nanos) {
        return None;
    }
    Some(Duration::from_nanos(nanos as u64))
}
