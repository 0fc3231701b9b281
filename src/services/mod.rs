//! Data providers for the two tool servers.
//!
//! A provider combines upstream sources, the HTTP connector and a TTL cache. Every
//! upstream failure stops here: it is logged and turned into empty or absent data.

pub mod financial;
pub mod liquidity;

pub use financial::FinancialDataProvider;
pub use liquidity::LiquidityDataProvider;

use crate::error::UpstreamError;

/// Log an upstream failure at a level that matches how unexpected it is.
pub(crate) fn log_upstream_failure(operation: &str, error: &UpstreamError) {
    match error {
        UpstreamError::Status { status } => {
            tracing::warn!("{} failed: API returned status {}", operation, status)
        }
        UpstreamError::MissingCredentials => {
            tracing::debug!("{} skipped: API key not configured", operation)
        }
        UpstreamError::NoData => tracing::warn!("{}: no data returned", operation),
        _ => tracing::error!("Error during {}: {}", operation, error),
    }
}
