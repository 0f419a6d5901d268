//! Lenient numeric coercion for externally-sourced values.
//!
//! The backend is known to emit numbers as strings on some call paths, and a
//! hand-edited or corrupted draft can carry arbitrary JSON where a number is
//! expected. Every numeric field that crosses a serialization boundary goes
//! through this module: coercion always produces a definite value, falling
//! back to a caller-specified default instead of erroring.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Coerce a JSON value into an `f64`, returning `fallback` for anything that
/// is not a finite number or a string that parses to one.
pub fn f64_or(value: &Value, fallback: f64) -> f64 {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(n) if n.is_finite() => n,
        _ => fallback,
    }
}

/// Coerce a JSON value into a `u32`, returning `fallback` for anything
/// unparseable or out of range. Fractional inputs are truncated.
pub fn u32_or(value: &Value, fallback: u32) -> u32 {
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(n) if n.is_finite() && n >= 0.0 && n <= f64::from(u32::MAX) => Some(n as u32),
        _ => None,
    }
    .unwrap_or(fallback)
}

/// Coerce an optional JSON value, treating absence like garbage.
pub fn opt_u32_or(value: Option<&Value>, fallback: u32) -> u32 {
    value.map_or(fallback, |v| u32_or(v, fallback))
}

fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D, fallback: f64) -> Result<f64, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(f64_or(&value, fallback))
}

fn lenient_u32<'de, D: Deserializer<'de>>(deserializer: D, fallback: u32) -> Result<u32, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(u32_or(&value, fallback))
}

/// `deserialize_with` adapter: number-or-string, 0.0 on garbage.
pub fn f64_or_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    lenient_f64(deserializer, 0.0)
}

/// `deserialize_with` adapter: number-or-string, 0 on garbage.
pub fn u32_or_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    lenient_u32(deserializer, 0)
}

/// `deserialize_with` adapter: number-or-string, 1 on garbage.
pub fn u32_or_one<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    lenient_u32(deserializer, 1)
}

/// `deserialize_with` adapter: number-or-string, 2 on garbage.
pub fn u32_or_two<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    lenient_u32(deserializer, 2)
}
