//! Parsing of encoded interval strings.
//!
//! Data sources carry confidence intervals as plain strings:
//!
//! | Shape | Example | Parsed as |
//! |-------|---------|-----------|
//! | interval | `"45.1 (40.0 - 50.5)"` | [`Interval`] |
//! | plus-minus | `"45.1±2.3"` | [`PlusMinus`] |
//!
//! Every number must carry a fractional part (`40` does not match, `40.0` does).
//! The shape only has to occur somewhere in the string, but the string as a
//! whole must contain exactly as many numbers as the shape has.

use once_cell::sync::Lazy;
use regex::Regex;

static NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"[+-]?\d+\.\d+").unwrap());

static INTERVAL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[+-]?\d+\.\d+\s+\([+-]?\d+\.\d+\s+-\s+[+-]?\d+\.\d+\)").unwrap()
});

static PLUS_MINUS_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[+-]?\d+\.\d+±\d+\.\d+").unwrap());

/// A central value with a low and high bound.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    pub value: f64,
    pub low: f64,
    pub high: f64,
}

/// A central value with a symmetric error.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlusMinus {
    pub value: f64,
    pub error: f64,
}

/// Parses a `"value (low - high)"` string.
///
/// # Example
///
/// ```rust
/// use datatable_render::interval::{parse_interval, Interval};
///
/// assert_eq!(
///     parse_interval("45.123 (40.0 - 50.5)"),
///     Some(Interval { value: 45.123, low: 40.0, high: 50.5 })
/// );
/// assert_eq!(parse_interval("45 (40 - 50)"), None);
/// ```
pub fn parse_interval(input: &str) -> Option<Interval> {
    if !INTERVAL_SHAPE.is_match(input) {
        return None;
    }
    match numbers(input)?.as_slice() {
        [value, low, high] => Some(Interval {
            value: *value,
            low: *low,
            high: *high,
        }),
        _ => None,
    }
}

/// Parses a `"value±error"` string.
pub fn parse_plus_minus(input: &str) -> Option<PlusMinus> {
    if !PLUS_MINUS_SHAPE.is_match(input) {
        return None;
    }
    match numbers(input)?.as_slice() {
        [value, error] => Some(PlusMinus {
            value: *value,
            error: *error,
        }),
        _ => None,
    }
}

/// Extracts every number token in order. `None` if a token fails to parse.
fn numbers(input: &str) -> Option<Vec<f64>> {
    NUMBER
        .find_iter(input)
        .map(|m| m.as_str().parse::<f64>().ok())
        .collect()
}
