//! Turns numbers and duration text into a millisecond total.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, trace};

use super::tokenize;
use crate::locales::{with_registry, LocaleRegistry, DEFAULT_LOCALE};
use crate::models::{PartialTimeStrings, TimeStrings};

/// Errors that can occur while parsing a duration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Expected a valid number, received {0}")]
    InvalidNumber(String),

    #[error("Expected a finite number, received {0}")]
    NonFiniteNumber(String),

    #[error("Locale {0} is not registered")]
    UnknownLocale(String),

    #[error("Unknown unit {unit} on locale {locale}")]
    UnknownUnit { unit: String, locale: String },
}

/// What to parse: a millisecond count or duration text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TimeInput<'a> {
    Number(f64),
    Text(&'a str),
}

impl From<f64> for TimeInput<'_> {
    fn from(value: f64) -> Self {
        TimeInput::Number(value)
    }
}

impl From<i64> for TimeInput<'_> {
    fn from(value: i64) -> Self {
        TimeInput::Number(value as f64)
    }
}

impl From<u64> for TimeInput<'_> {
    fn from(value: u64) -> Self {
        TimeInput::Number(value as f64)
    }
}

impl From<i32> for TimeInput<'_> {
    fn from(value: i32) -> Self {
        TimeInput::Number(f64::from(value))
    }
}

impl<'a> From<&'a str> for TimeInput<'a> {
    fn from(value: &'a str) -> Self {
        TimeInput::Text(value)
    }
}

impl<'a> From<&'a String> for TimeInput<'a> {
    fn from(value: &'a String) -> Self {
        TimeInput::Text(value)
    }
}

/// Per-call parsing options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// Units to replace in the selected locale's table, one whole unit at a time.
    pub custom_strings: Option<PartialTimeStrings>,

    /// Add the current time to every token (and to a bare number).
    pub from_now: bool,

    /// Locale to resolve units against. `None` means `en-US`.
    pub locale: Option<String>,

    /// Return parse failures as errors instead of `None` from [`parse_time`].
    pub throw_error: bool,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn custom_strings(mut self, custom_strings: PartialTimeStrings) -> Self {
        self.custom_strings = Some(custom_strings);
        self
    }

    pub fn from_now(mut self, from_now: bool) -> Self {
        self.from_now = from_now;
        self
    }

    pub fn throw_error(mut self, throw_error: bool) -> Self {
        self.throw_error = throw_error;
        self
    }

    fn locale_id(&self) -> &str {
        self.locale.as_deref().unwrap_or(DEFAULT_LOCALE)
    }
}

/// Surface `error` when `throw_error` is set, otherwise swallow it as `None`.
pub fn error_or_none(error: ParseError, throw_error: bool) -> Result<Option<f64>, ParseError> {
    if throw_error {
        return Err(error);
    }
    debug!("Parse failed, returning none: {}", error);
    Ok(None)
}

fn now_millis() -> f64 {
    chrono::Utc::now().timestamp_millis() as f64
}

fn resolve_table<'r>(
    registry: &'r LocaleRegistry,
    options: &ParseOptions,
) -> Result<Cow<'r, TimeStrings>, ParseError> {
    let locale = options.locale_id();
    let base = registry
        .get(locale)
        .ok_or_else(|| ParseError::UnknownLocale(locale.to_string()))?;

    Ok(match &options.custom_strings {
        Some(overrides) => Cow::Owned(base.overlay(overrides)),
        None => Cow::Borrowed(base),
    })
}

fn parse_number(value: f64, raw: &str, options: &ParseOptions) -> Result<f64, ParseError> {
    if value.is_nan() {
        return Err(ParseError::InvalidNumber(raw.to_string()));
    }
    if !value.is_finite() {
        return Err(ParseError::NonFiniteNumber(raw.to_string()));
    }

    let offset = if options.from_now { now_millis() } else { 0.0 };
    Ok(value + offset)
}

/// The value of text that is entirely a number, if it is one.
///
/// Only finite literals, literals that overflow (`1e400`) and the spelled-out
/// `Infinity` count. `NaN`, `inf` and friends are left to the tokenizer.
fn numeric_text(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let value = trimmed.parse::<f64>().ok()?;
    if value.is_finite() {
        return Some(value);
    }

    let unsigned = trimmed.trim_start_matches(['+', '-']);
    let overflowed = trimmed.bytes().any(|b| b.is_ascii_digit());
    (value.is_infinite() && (overflowed || unsigned == "Infinity")).then_some(value)
}

fn parse_text(text: &str, table: &TimeStrings, options: &ParseOptions) -> Result<f64, ParseError> {
    let lowered = text.to_lowercase();
    let mut total = 0.0;

    for token in tokenize(&lowered) {
        let multiplier = match token.unit {
            Some(unit) => {
                let resolved = table.find_unit(unit).ok_or_else(|| ParseError::UnknownUnit {
                    unit: unit.to_string(),
                    locale: options.locale_id().to_string(),
                })?;
                resolved.base_millis() as f64
            }
            None => 1.0,
        };
        trace!("Token {} {:?} x {}", token.quantity, token.unit, multiplier);

        let offset = if options.from_now { now_millis() } else { 0.0 };
        let quantity = token
            .value()
            .map_err(|_| ParseError::InvalidNumber(token.quantity.to_string()))?;
        total += quantity * multiplier + offset;
    }

    Ok(total)
}

/// Parse `input` against `registry`, surfacing every failure as an error.
///
/// Numbers (and text that is entirely a number) are taken as milliseconds.
/// Text with no recognizable tokens parses to `0`.
pub fn try_parse_time_in<'a>(
    registry: &LocaleRegistry,
    input: impl Into<TimeInput<'a>>,
    options: &ParseOptions,
) -> Result<f64, ParseError> {
    let table = resolve_table(registry, options)?;

    match input.into() {
        TimeInput::Number(value) => parse_number(value, &value.to_string(), options),
        TimeInput::Text(text) => match numeric_text(text) {
            Some(value) => parse_number(value, text, options),
            None => parse_text(text, &table, options),
        },
    }
}

/// Parse `input` against `registry`, honoring the `throw_error` option.
///
/// Parse failures become `Ok(None)` unless `throw_error` is set. An unknown
/// locale is always an error.
pub fn parse_time_in<'a>(
    registry: &LocaleRegistry,
    input: impl Into<TimeInput<'a>>,
    options: &ParseOptions,
) -> Result<Option<f64>, ParseError> {
    match try_parse_time_in(registry, input, options) {
        Ok(total) => Ok(Some(total)),
        Err(error @ ParseError::UnknownLocale(_)) => Err(error),
        Err(error) => error_or_none(error, options.throw_error),
    }
}

/// [`try_parse_time_in`] against the process-wide registry.
pub fn try_parse_time<'a>(
    input: impl Into<TimeInput<'a>>,
    options: &ParseOptions,
) -> Result<f64, ParseError> {
    let input = input.into();
    with_registry(|registry| try_parse_time_in(registry, input, options))
}

/// [`parse_time_in`] against the process-wide registry.
pub fn parse_time<'a>(
    input: impl Into<TimeInput<'a>>,
    options: &ParseOptions,
) -> Result<Option<f64>, ParseError> {
    let input = input.into();
    with_registry(|registry| parse_time_in(registry, input, options))
}
