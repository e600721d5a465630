//! Validation of unit-synonym tables before registration.

use serde_json::Value;
use thiserror::Error;

use crate::models::{TimeStrings, Unit};

/// Reasons a unit-synonym table is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing keys: {}", .0.join(", "))]
    MissingKeys(Vec<String>),

    #[error("Expected {key} to be {expected}, got {found}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Expected {0} to be a non-empty array")]
    EmptyUnit(String),
}

/// Check that every unit of an already-typed table has at least one spelling.
pub fn validate(table: &TimeStrings) -> Result<(), ValidationError> {
    match Unit::ALL.into_iter().find(|unit| table.get(*unit).is_empty()) {
        Some(unit) => Err(ValidationError::EmptyUnit(unit.key().to_string())),
        None => Ok(()),
    }
}

/// Validate a loosely-typed table (from JSON, TOML or any serde source) and
/// convert it into a [`TimeStrings`].
///
/// Missing units are all collected before failing. After that, units are
/// checked in [`Unit::ALL`] order and the first bad one is reported.
pub fn validate_value(value: &Value) -> Result<TimeStrings, ValidationError> {
    let Some(object) = value.as_object() else {
        return Err(ValidationError::TypeMismatch {
            key: "table".to_string(),
            expected: "an object",
            found: type_name(value),
        });
    };

    let missing: Vec<String> = Unit::ALL
        .into_iter()
        .filter(|unit| object.get(unit.key()).map_or(true, Value::is_null))
        .map(|unit| unit.key().to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::MissingKeys(missing));
    }

    let mut fields = Vec::with_capacity(Unit::ALL.len());
    for unit in Unit::ALL {
        let key = unit.key();
        let entries = object[key]
            .as_array()
            .ok_or_else(|| ValidationError::TypeMismatch {
                key: key.to_string(),
                expected: "an array",
                found: type_name(&object[key]),
            })?;

        if entries.is_empty() {
            return Err(ValidationError::EmptyUnit(key.to_string()));
        }

        let spellings = entries
            .iter()
            .map(|entry| {
                entry
                    .as_str()
                    .map(str::to_string)
                    .ok_or_else(|| ValidationError::TypeMismatch {
                        key: key.to_string(),
                        expected: "an array of strings",
                        found: type_name(entry),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        fields.push(spellings);
    }

    let mut fields = fields.into_iter();
    let mut next = || fields.next().unwrap_or_default();
    Ok(TimeStrings {
        milliseconds: next(),
        seconds: next(),
        minutes: next(),
        hours: next(),
        days: next(),
        weeks: next(),
        months: next(),
        years: next(),
    })
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
