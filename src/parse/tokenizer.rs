//! Splits duration text into (quantity, unit) tokens.

use std::num::ParseFloatError;
use std::sync::LazyLock;

use regex::Regex;

/// A signed decimal quantity (`.5` allowed), any number of spaces, and an
/// optional run of letters naming the unit. ASCII digits and letters only.
pub const TOKEN_PATTERN: &str = r"(?i-u)(?P<quantity>-?(?:[0-9]+)?\.?[0-9]+) *(?P<unit>[a-z]+)?";

static TOKEN_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(TOKEN_PATTERN).unwrap());

/// One quantity with the unit text that followed it, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub quantity: &'a str,
    pub unit: Option<&'a str>,
}

impl Token<'_> {
    /// The quantity as a float.
    pub fn value(&self) -> Result<f64, ParseFloatError> {
        self.quantity.parse()
    }
}

/// Every non-overlapping token of `input`, left to right.
pub fn tokenize(input: &str) -> impl Iterator<Item = Token<'_>> {
    TOKEN_RE.captures_iter(input).filter_map(|caps| {
        Some(Token {
            quantity: caps.name("quantity")?.as_str(),
            unit: caps.name("unit").map(|m| m.as_str()),
        })
    })
}
