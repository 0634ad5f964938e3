//! Typed extraction of optional scalar properties.
//!
//! Every recognized property is independently optional: a missing, mistyped,
//! or structured value never raises an error, it degrades to `None` or `0`.

use serde_json::{Number, Value};

/// Returns the string form of a scalar property value.
///
/// `None` for absent values, JSON `null`, and structured (array/object)
/// values.
pub fn scalar_string(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Returns the integer form of a scalar property value.
///
/// Numeric scalars convert directly; string scalars parse. Anything absent,
/// structured, negative, fractional, or non-numeric degrades to `0`.
pub fn scalar_u32(value: Option<&Value>) -> u32 {
    match value {
        Some(Value::Number(n)) => number_u32(n),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
        _ => 0,
    }
}

fn number_u32(n: &Number) -> u32 {
    if let Some(v) = n.as_u64() {
        u32::try_from(v).unwrap_or(0)
    } else if let Some(v) = n.as_f64() {
        if v.fract() == 0.0 && v >= 0.0 && v <= f64::from(u32::MAX) {
            v as u32
        } else {
            0
        }
    } else {
        0
    }
}
