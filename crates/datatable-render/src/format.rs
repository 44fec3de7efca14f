//! Type-directed cell value formatting.
//!
//! Header cells declare a value type tag (`data-value-type="float2"`). Tags are
//! resolved once into a [`ValueType`] when the column schema is built, and each
//! cell is then formatted by the variant's rule.
//!
//! | Tag | Variant | Output |
//! |-----|---------|--------|
//! | `int…` | [`ValueType::Int`] | decimal representation |
//! | `float1`..`float4` | [`ValueType::Float`] | fixed point, 1-4 digits |
//! | `floatN-percentage-interval`, `floatN-interval` | [`ValueType::Interval`] | `v (lo - hi)` |
//! | `floatN-plusminus` | [`ValueType::PlusMinus`] | `v±e` |
//! | `str` | [`ValueType::Str`] | value, or `-` when empty |
//! | anything else | [`ValueType::Other`] | display form |
//!
//! [`format_value`] is total: malformed input degrades to an empty string.
//! [`try_format`] exposes the failure as a [`CellError`] so callers can report it.

use std::fmt;

use serde_json::Value;

use crate::error::CellError;
use crate::interval::{parse_interval, parse_plus_minus};

/// Number of fractional digits for float-based value types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Precision(u8);

impl Precision {
    /// Creates a precision of 1 to 4 digits.
    pub fn new(digits: u8) -> Option<Self> {
        (1..=4).contains(&digits).then_some(Precision(digits))
    }

    /// Number of digits after the decimal point.
    pub fn digits(self) -> usize {
        self.0 as usize
    }
}

/// A resolved value type tag.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ValueType {
    Int,
    Float(Precision),
    Interval(Precision),
    PlusMinus(Precision),
    Str,
    /// Any unrecognized tag. Values render in their display form.
    Other(String),
}

impl ValueType {
    /// Resolves a declared tag.
    ///
    /// ```rust
    /// use datatable_render::format::{Precision, ValueType};
    ///
    /// assert_eq!(ValueType::parse("int"), ValueType::Int);
    /// assert_eq!(
    ///     ValueType::parse("float2-percentage-interval"),
    ///     ValueType::Interval(Precision::new(2).unwrap())
    /// );
    /// assert_eq!(ValueType::parse("date"), ValueType::Other("date".into()));
    /// ```
    pub fn parse(tag: &str) -> Self {
        if tag.starts_with("int") {
            return ValueType::Int;
        }
        if let Some(rest) = tag.strip_prefix("float") {
            let mut chars = rest.chars();
            let precision = chars
                .next()
                .and_then(|c| c.to_digit(10))
                .and_then(|d| Precision::new(d as u8));
            if let Some(precision) = precision {
                let suffix = chars.as_str();
                if suffix.starts_with("-plusminus") {
                    return ValueType::PlusMinus(precision);
                }
                if suffix.starts_with("-percentage-interval") || suffix.starts_with("-interval") {
                    return ValueType::Interval(precision);
                }
                return ValueType::Float(precision);
            }
        }
        if tag == "str" {
            return ValueType::Str;
        }
        ValueType::Other(tag.to_string())
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueType::Int => write!(f, "int"),
            ValueType::Float(p) => write!(f, "float{}", p.0),
            ValueType::Interval(p) => write!(f, "float{}-percentage-interval", p.0),
            ValueType::PlusMinus(p) => write!(f, "float{}-plusminus", p.0),
            ValueType::Str => write!(f, "str"),
            ValueType::Other(tag) => write!(f, "{}", tag),
        }
    }
}

/// Formats a raw value, falling back to an empty string on failure.
///
/// `None` as value type means the column declared no type: strings pass
/// through unchanged and everything else renders empty.
///
/// ```rust
/// use datatable_render::format::{format_value, ValueType};
/// use serde_json::json;
///
/// let float2 = ValueType::parse("float2");
/// assert_eq!(format_value(Some(&float2), &json!(91.256)), "91.26");
/// assert_eq!(format_value(Some(&float2), &json!(null)), "");
/// assert_eq!(format_value(Some(&float2), &json!("n/a")), "");
/// ```
pub fn format_value(value_type: Option<&ValueType>, raw: &Value) -> String {
    try_format(value_type, raw).unwrap_or_default()
}

/// Formats a raw value, reporting values that do not fit the value type.
pub fn try_format(value_type: Option<&ValueType>, raw: &Value) -> Result<String, CellError> {
    let Some(value_type) = value_type else {
        return passthrough(raw);
    };
    match value_type {
        ValueType::Int => format_int(raw),
        ValueType::Float(p) => format_float(*p, raw, value_type),
        ValueType::Interval(p) => format_interval(*p, raw),
        ValueType::PlusMinus(p) => format_plus_minus(*p, raw),
        ValueType::Str => Ok(format_str(raw)),
        ValueType::Other(_) => Ok(display(raw).unwrap_or_default()),
    }
}

fn passthrough(raw: &Value) -> Result<String, CellError> {
    match raw {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s.clone()),
        other => Err(overflow("none", other)),
    }
}

/// Integers print in decimal. Floats use the shortest form that round-trips,
/// so `3.0` prints `3` and `1e20` prints all its digits, never `3.0` or `1e+20`.
fn format_int(raw: &Value) -> Result<String, CellError> {
    match raw {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(i.to_string())
            } else if let Some(u) = n.as_u64() {
                Ok(u.to_string())
            } else {
                match n.as_f64() {
                    Some(f) if f.is_finite() => Ok(f.to_string()),
                    _ => Err(overflow("int", raw)),
                }
            }
        }
        other => Err(overflow("int", other)),
    }
}

fn format_float(
    precision: Precision,
    raw: &Value,
    value_type: &ValueType,
) -> Result<String, CellError> {
    match raw {
        Value::Null => Ok(String::new()),
        Value::Number(n) => match n.as_f64() {
            Some(f) if f.is_finite() => Ok(format!("{:.*}", precision.digits(), f)),
            _ => Err(overflow(value_type, raw)),
        },
        other => Err(overflow(value_type, other)),
    }
}

fn format_interval(precision: Precision, raw: &Value) -> Result<String, CellError> {
    let digits = precision.digits();
    match raw {
        Value::Null => Ok(String::new()),
        Value::String(s) => match parse_interval(s) {
            Some(iv) => Ok(format!(
                "{:.*} ({:.*} - {:.*})",
                digits, iv.value, digits, iv.low, digits, iv.high
            )),
            None => Err(mismatch(raw)),
        },
        other => Err(mismatch(other)),
    }
}

fn format_plus_minus(precision: Precision, raw: &Value) -> Result<String, CellError> {
    let digits = precision.digits();
    match raw {
        Value::Null => Ok(String::new()),
        Value::String(s) => match parse_plus_minus(s) {
            Some(pm) => Ok(format!("{:.*}±{:.*}", digits, pm.value, digits, pm.error)),
            None => Err(mismatch(raw)),
        },
        other => Err(mismatch(other)),
    }
}

fn format_str(raw: &Value) -> String {
    if is_falsy(raw) {
        return "-".to_string();
    }
    display(raw).unwrap_or_else(|| "-".to_string())
}

/// Display form of a scalar. Containers have none.
fn display(raw: &Value) -> Option<String> {
    match raw {
        Value::Null => Some(String::new()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s.clone()),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Truthiness the way data files use it for flags and placeholders.
pub(crate) fn is_falsy(raw: &Value) -> bool {
    match raw {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(a) => a.is_empty(),
        Value::Object(o) => o.is_empty(),
    }
}

fn overflow(value_type: impl ToString, raw: &Value) -> CellError {
    CellError::FormatOverflow {
        value_type: value_type.to_string(),
        raw: raw.to_string(),
    }
}

fn mismatch(raw: &Value) -> CellError {
    CellError::IntervalMismatch {
        raw: match raw {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fmt(tag: &str, raw: Value) -> String {
        format_value(Some(&ValueType::parse(tag)), &raw)
    }

    #[test]
    fn parse_resolves_all_families() {
        let p2 = Precision::new(2).unwrap();
        assert_eq!(ValueType::parse("int"), ValueType::Int);
        assert_eq!(ValueType::parse("integer"), ValueType::Int);
        assert_eq!(ValueType::parse("float2"), ValueType::Float(p2));
        assert_eq!(ValueType::parse("float2-percentage"), ValueType::Float(p2));
        assert_eq!(ValueType::parse("float2-interval"), ValueType::Interval(p2));
        assert_eq!(
            ValueType::parse("float2-percentage-interval"),
            ValueType::Interval(p2)
        );
        assert_eq!(ValueType::parse("float2-plusminus"), ValueType::PlusMinus(p2));
        assert_eq!(ValueType::parse("str"), ValueType::Str);
        assert_eq!(ValueType::parse("string"), ValueType::Other("string".into()));
        assert_eq!(ValueType::parse("float5"), ValueType::Other("float5".into()));
        assert_eq!(ValueType::parse("float"), ValueType::Other("float".into()));
    }

    #[test]
    fn display_round_trips_canonical_tags() {
        for tag in ["int", "float3", "float1-percentage-interval", "float4-plusminus", "str"] {
            assert_eq!(ValueType::parse(tag).to_string(), tag);
        }
    }

    #[test]
    fn int_formats_numbers_and_passes_strings() {
        assert_eq!(fmt("int", json!(42)), "42");
        assert_eq!(fmt("int", json!(-7)), "-7");
        assert_eq!(fmt("int", json!(3.0)), "3");
        assert_eq!(fmt("int", json!(1e20)), "100000000000000000000");
        assert_eq!(fmt("int", json!(3.5)), "3.5");
        assert_eq!(fmt("int", json!("12")), "12");
        assert_eq!(fmt("int", json!(null)), "");
        assert_eq!(fmt("int", json!(1234567)), "1234567");
    }

    #[test]
    fn float_fixed_precision() {
        assert_eq!(fmt("float1", json!(2.26)), "2.3");
        assert_eq!(fmt("float2", json!(91.256)), "91.26");
        assert_eq!(fmt("float3", json!(7)), "7.000");
        assert_eq!(fmt("float4", json!(0.1)), "0.1000");
        assert_eq!(fmt("float2", json!(null)), "");
    }

    #[test]
    fn float_rejects_non_numeric() {
        let err = try_format(Some(&ValueType::parse("float2")), &json!("abc")).unwrap_err();
        assert!(matches!(err, CellError::FormatOverflow { .. }));
        assert_eq!(fmt("float2", json!(true)), "");
        assert_eq!(fmt("float2", json!([1.0])), "");
    }

    #[test]
    fn interval_formats_all_three_parts() {
        assert_eq!(
            fmt("float2-percentage-interval", json!("45.123 (40.0 - 50.5)")),
            "45.12 (40.00 - 50.50)"
        );
        assert_eq!(
            fmt("float1-interval", json!("45.123 (40.0 - 50.5)")),
            "45.1 (40.0 - 50.5)"
        );
        assert_eq!(fmt("float2-percentage-interval", json!(null)), "");
    }

    #[test]
    fn interval_mismatch_is_reported() {
        let vt = ValueType::parse("float2-percentage-interval");
        assert_eq!(format_value(Some(&vt), &json!("not an interval")), "");
        let err = try_format(Some(&vt), &json!("not an interval")).unwrap_err();
        assert_eq!(
            err,
            CellError::IntervalMismatch {
                raw: "not an interval".into()
            }
        );
        assert!(try_format(Some(&vt), &json!(45.1)).is_err());
    }

    #[test]
    fn plus_minus_formats_value_and_error() {
        assert_eq!(fmt("float1-plusminus", json!("12.34±0.56")), "12.3±0.6");
        assert_eq!(fmt("float3-plusminus", json!("12.34±0.56")), "12.340±0.560");
        assert_eq!(fmt("float2-plusminus", json!("12.34")), "");
    }

    #[test]
    fn str_replaces_empty_with_dash() {
        assert_eq!(fmt("str", json!("")), "-");
        assert_eq!(fmt("str", json!(null)), "-");
        assert_eq!(fmt("str", json!("CNN")), "CNN");
        assert_eq!(fmt("str", json!(12)), "12");
    }

    #[test]
    fn untyped_passes_strings_only() {
        assert_eq!(format_value(None, &json!("<b>x</b>")), "<b>x</b>");
        assert_eq!(format_value(None, &json!(null)), "");
        assert!(try_format(None, &json!(1.5)).is_err());
    }

    #[test]
    fn other_tags_use_display_form() {
        assert_eq!(fmt("date", json!("2024-01-01")), "2024-01-01");
        assert_eq!(fmt("url", json!(5)), "5");
        assert_eq!(fmt("url", json!(null)), "");
    }
}
