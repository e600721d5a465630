//! Core data models: duration units and unit-synonym tables.

mod time_strings;
mod unit;

pub use time_strings::*;
pub use unit::*;
