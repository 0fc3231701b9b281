//! Bitcoin price records.

use super::{number_field, string_field};
use serde_json::Value;

/// One day of Bitcoin market data.
#[derive(Debug, Clone, PartialEq)]
pub struct PricePoint {
    /// ISO `YYYY-MM-DD` date, empty when the upstream omitted it
    pub date: String,
    pub price: f64,
    pub volume: f64,
    pub market_cap: f64,
    pub change_24h: f64,
    pub change_7d: f64,
    pub change_30d: f64,
}

impl PricePoint {
    /// Build a price point from one upstream record.
    ///
    /// Returns `None` when the record is not a JSON object.
    pub fn from_json(record: &Value) -> Option<Self> {
        if !record.is_object() {
            return None;
        }

        Some(Self {
            date: string_field(record, "date"),
            price: number_field(record, "price"),
            volume: number_field(record, "volume"),
            market_cap: number_field(record, "market_cap"),
            change_24h: number_field(record, "change_24h"),
            change_7d: number_field(record, "change_7d"),
            change_30d: number_field(record, "change_30d"),
        })
    }
}

/// Aggregated view of one calendar month of price points.
///
/// `price_start` and `price_end` are the lowest and highest prices seen during
/// the month, not the first and last chronologically.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyReturn {
    pub year: i32,
    /// 1-based month
    pub month: u32,
    pub return_percentage: f64,
    pub price_start: f64,
    pub price_end: f64,
    pub volume_avg: f64,
}
