//! Data models for market data.
//!
//! Plain value records built fresh from upstream payloads for every tool call.
//! Upstream JSON shapes are loose, so the constructors coerce instead of failing:
//! numbers may arrive as JSON numbers or numeric strings and default to `0`,
//! strings default to empty.

pub mod pool;
pub mod price;

pub use pool::{DexComparison, LiquidityPool, NetworkInfo};
pub use price::{MonthlyReturn, PricePoint};

use serde_json::Value;

/// Read `field` of `record` as a number, defaulting to `0.0`.
pub(crate) fn number_field(record: &Value, field: &str) -> f64 {
    match record.get(field) {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse::<f64>().unwrap_or(0.0),
        _ => 0.0,
    }
}

/// Read `field` of `record` as a string, defaulting to `""`.
pub(crate) fn string_field(record: &Value, field: &str) -> String {
    record
        .get(field)
        .and_then(Value::as_str)
        .unwrap_or("")
        .to_string()
}
