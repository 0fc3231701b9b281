//! Monthly return computation and the offline fallback series.

use crate::models::{MonthlyReturn, PricePoint};
use chrono::{Datelike, NaiveDate};
use std::collections::BTreeMap;

/// Month-by-month return percentages used by [`mock_monthly_returns`]. Years
/// cycle through the five patterns starting with the first one.
const MOCK_RETURN_PATTERNS: [[f64; 12]; 5] = [
    [-5.2, 8.7, -12.3, 15.6, -3.4, 22.1, -8.9, 18.3, -6.7, 25.4, -4.8, 12.6],
    [-8.1, 12.4, -15.7, 9.8, -7.2, 28.5, -11.3, 16.9, -9.4, 31.2, -6.8, 19.7],
    [-12.5, 18.9, -22.1, 14.3, -9.8, 35.7, -15.6, 24.1, -12.3, 38.9, -8.7, 26.4],
    [-15.8, 22.6, -28.4, 18.7, -12.9, 42.3, -19.2, 31.5, -15.8, 45.6, -11.4, 33.7],
    [-18.3, 26.8, -32.7, 22.1, -15.6, 48.9, -22.8, 38.2, -18.9, 52.3, -13.7, 41.2],
];

#[derive(Default)]
struct MonthBucket {
    prices: Vec<f64>,
    volumes: Vec<f64>,
}

/// Group daily points by calendar month and summarize each month.
///
/// `price_start` and `price_end` are the minimum and maximum price of the month.
/// Points whose date is not `YYYY-MM-DD` are skipped. The result is ordered by
/// `(year, month)`.
pub fn monthly_returns(points: &[PricePoint]) -> Vec<MonthlyReturn> {
    let mut buckets: BTreeMap<(i32, u32), MonthBucket> = BTreeMap::new();

    for point in points {
        let date = match NaiveDate::parse_from_str(&point.date, "%Y-%m-%d") {
            Ok(date) => date,
            Err(e) => {
                tracing::warn!("Error processing date {}: {}", point.date, e);
                continue;
            }
        };

        let bucket = buckets.entry((date.year(), date.month())).or_default();
        bucket.prices.push(point.price);
        bucket.volumes.push(point.volume);
    }

    buckets
        .into_iter()
        .map(|((year, month), bucket)| {
            let price_start = bucket.prices.iter().copied().fold(f64::INFINITY, f64::min);
            let price_end = bucket
                .prices
                .iter()
                .copied()
                .fold(f64::NEG_INFINITY, f64::max);
            let volume_avg = bucket.volumes.iter().sum::<f64>() / bucket.volumes.len() as f64;

            let return_percentage = if price_start > 0.0 {
                (price_end - price_start) / price_start * 100.0
            } else {
                0.0
            };

            MonthlyReturn {
                year,
                month,
                return_percentage,
                price_start,
                price_end,
                volume_avg,
            }
        })
        .collect()
}

/// Deterministic stand-in for real monthly returns covering the last `years`
/// calendar years up to and including the month of `today`.
///
/// # Arguments
/// * `years` - Number of calendar years, counting the current one
/// * `today` - Reference date; months after it are left out
pub fn mock_monthly_returns(years: i64, today: NaiveDate) -> Vec<MonthlyReturn> {
    let current_year = i64::from(today.year());
    let start_year = current_year - years + 1;

    let mut series = Vec::new();

    for year in start_year..=current_year {
        let pattern = &MOCK_RETURN_PATTERNS[(year - start_year).rem_euclid(5) as usize];

        for month in 1..=12u32 {
            if year == current_year && month > today.month() {
                break;
            }

            let return_percentage = pattern[month as usize - 1];
            let price_start = 30_000.0 + (year - 2020) as f64 * 5_000.0 + f64::from(month) * 100.0;

            series.push(MonthlyReturn {
                year: year as i32,
                month,
                return_percentage,
                price_start,
                price_end: price_start * (1.0 + return_percentage / 100.0),
                volume_avg: 25_000_000_000.0 + (year - 2020) as f64 * 5_000_000_000.0,
            });
        }
    }

    series
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(date: &str, price: f64, volume: f64) -> PricePoint {
        PricePoint {
            date: date.to_string(),
            price,
            volume,
            market_cap: 0.0,
            change_24h: 0.0,
            change_7d: 0.0,
            change_30d: 0.0,
        }
    }

    #[test]
    fn test_monthly_returns_grouping() {
        let points = vec![
            point("2024-01-01", 100.0, 10.0),
            point("2024-01-15", 150.0, 30.0),
            point("2024-02-01", 200.0, 5.0),
        ];

        let returns = monthly_returns(&points);
        assert_eq!(returns.len(), 2);

        assert_eq!((returns[0].year, returns[0].month), (2024, 1));
        assert_eq!(returns[0].price_start, 100.0);
        assert_eq!(returns[0].price_end, 150.0);
        assert_eq!(returns[0].return_percentage, 50.0);
        assert_eq!(returns[0].volume_avg, 20.0);

        assert_eq!((returns[1].year, returns[1].month), (2024, 2));
        assert_eq!(returns[1].price_start, 200.0);
        assert_eq!(returns[1].price_end, 200.0);
        assert_eq!(returns[1].return_percentage, 0.0);
    }

    #[test]
    fn test_monthly_returns_uses_min_and_max() {
        let points = vec![
            point("2023-05-01", 300.0, 1.0),
            point("2023-05-10", 100.0, 1.0),
            point("2023-05-20", 200.0, 1.0),
        ];

        let returns = monthly_returns(&points);
        assert_eq!(returns[0].price_start, 100.0);
        assert_eq!(returns[0].price_end, 300.0);
        assert_eq!(returns[0].return_percentage, 200.0);
    }

    #[test]
    fn test_monthly_returns_sorted_and_skips_bad_dates() {
        let points = vec![
            point("2024-03-02", 10.0, 0.0),
            point("not-a-date", 999.0, 0.0),
            point("", 999.0, 0.0),
            point("2023-12-31", 20.0, 0.0),
            point("2024-03-01T00:00:00", 999.0, 0.0),
        ];

        let returns = monthly_returns(&points);
        let months: Vec<(i32, u32)> = returns.iter().map(|r| (r.year, r.month)).collect();
        assert_eq!(months, vec![(2023, 12), (2024, 3)]);
    }

    #[test]
    fn test_zero_start_price_has_zero_return() {
        let returns = monthly_returns(&[point("2024-01-01", 0.0, 0.0), point("2024-01-02", 50.0, 0.0)]);
        assert_eq!(returns[0].return_percentage, 0.0);
    }

    #[test]
    fn test_mock_returns_are_deterministic() {
        let today = NaiveDate::from_ymd_opt(2025, 4, 18).unwrap();
        assert_eq!(mock_monthly_returns(3, today), mock_monthly_returns(3, today));
    }

    #[test]
    fn test_mock_returns_layout() {
        let today = NaiveDate::from_ymd_opt(2025, 4, 18).unwrap();
        let series = mock_monthly_returns(3, today);

        // 2023 and 2024 complete, 2025 up to April
        assert_eq!(series.len(), 12 + 12 + 4);
        assert_eq!((series[0].year, series[0].month), (2023, 1));
        assert_eq!((series[27].year, series[27].month), (2025, 4));

        // 2023 uses the first pattern, 2025 the third
        assert_eq!(series[0].return_percentage, -5.2);
        assert_eq!(series[24].return_percentage, -12.5);

        let first = &series[0];
        assert_eq!(first.price_start, 45_100.0);
        assert_eq!(first.volume_avg, 40_000_000_000.0);
        assert!((first.price_end - 45_100.0 * 0.948).abs() < 1e-6);
    }

    #[test]
    fn test_mock_returns_cycle_patterns() {
        let today = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap();
        let series = mock_monthly_returns(6, today);

        let first_of_year: Vec<f64> = series
            .iter()
            .filter(|r| r.month == 1)
            .map(|r| r.return_percentage)
            .collect();
        assert_eq!(first_of_year, vec![-5.2, -8.1, -12.5, -15.8, -18.3, -5.2]);
    }

    #[test]
    fn test_mock_returns_empty_for_non_positive_years() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        assert!(mock_monthly_returns(0, today).is_empty());
        assert!(mock_monthly_returns(-2, today).is_empty());
    }
}
