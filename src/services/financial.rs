//! Bitcoin price provider.

use super::log_upstream_failure;
use crate::aggregation::{mock_monthly_returns, monthly_returns};
use crate::cache::TimedCache;
use crate::client::{HttpConnector, HttpSession};
use crate::config::Config;
use crate::error::{ToolError, ToolResult};
use crate::models::{MonthlyReturn, PricePoint};
use crate::sources::{FinancialDatasetsApi, PriceSource};
use chrono::{Days, NaiveDate};
use std::sync::Arc;

/// Historical fetch came back empty.
struct NoHistory;

/// Fetches Bitcoin prices and derives monthly returns.
///
/// Only monthly returns are cached; price lookups always go upstream.
pub struct FinancialDataProvider {
    source: Arc<dyn PriceSource>,
    connector: HttpConnector,
    monthly_cache: TimedCache<String, Vec<MonthlyReturn>>,
}

impl FinancialDataProvider {
    /// Create a provider.
    ///
    /// # Arguments
    /// * `source` - Upstream price API
    /// * `connector` - Opens one HTTP session per tool call
    /// * `cache_ttl_secs` - Lifetime of cached monthly returns
    pub fn new(source: Arc<dyn PriceSource>, connector: HttpConnector, cache_ttl_secs: u64) -> Self {
        let monthly_cache =
            TimedCache::new(cache_ttl_secs).with_metrics(connector.metrics().clone());

        Self {
            source,
            connector,
            monthly_cache,
        }
    }

    /// Provider backed by the Financial Datasets API as configured.
    pub fn from_config(config: &Config, connector: HttpConnector) -> Self {
        let source = FinancialDatasetsApi::new(
            config.financial_api_url.clone(),
            config.financial_api_key.clone(),
        );
        Self::new(Arc::new(source), connector, config.cache_ttl_secs)
    }

    /// Open the HTTP session for one tool call.
    pub fn open_session(&self) -> HttpSession {
        self.connector.open()
    }

    /// Latest price, or `None` when the upstream is unavailable.
    pub async fn current_bitcoin_price(&self, session: &HttpSession) -> Option<PricePoint> {
        match self.source.current_price(session).await {
            Ok(point) => Some(point),
            Err(e) => {
                log_upstream_failure("current Bitcoin price fetch", &e);
                None
            }
        }
    }

    /// Daily prices in `[start_date, end_date]`; empty when the upstream is unavailable.
    pub async fn historical_bitcoin_prices(
        &self,
        session: &HttpSession,
        start_date: &str,
        end_date: &str,
    ) -> Vec<PricePoint> {
        match self
            .source
            .historical_prices(session, start_date, end_date)
            .await
        {
            Ok(points) => points,
            Err(e) => {
                log_upstream_failure("historical Bitcoin prices fetch", &e);
                Vec::new()
            }
        }
    }

    /// Monthly returns over the last `years * 365` days, ending today.
    pub async fn bitcoin_monthly_returns(
        &self,
        session: &HttpSession,
        years: i64,
    ) -> ToolResult<Vec<MonthlyReturn>> {
        let today = chrono::Local::now().date_naive();
        self.bitcoin_monthly_returns_at(session, years, today).await
    }

    /// [`bitcoin_monthly_returns`](Self::bitcoin_monthly_returns) with an explicit
    /// reference date.
    ///
    /// Real aggregates are cached under `bitcoin_monthly_returns_{years}`. When the
    /// upstream has no history the mock series is returned instead and nothing is
    /// cached, so the next call tries the upstream again.
    pub async fn bitcoin_monthly_returns_at(
        &self,
        session: &HttpSession,
        years: i64,
        today: NaiveDate,
    ) -> ToolResult<Vec<MonthlyReturn>> {
        let key = format!("bitcoin_monthly_returns_{}", years);

        let (start, end) = lookback_range(years, today).ok_or_else(|| ToolError::InvalidArgument {
            name: "years".to_string(),
            reason: format!("{} years is out of the supported date range", years),
        })?;
        let start_date = start.format("%Y-%m-%d").to_string();
        let end_date = end.format("%Y-%m-%d").to_string();
        let (start_date, end_date) = (&start_date, &end_date);

        let fetched = self
            .monthly_cache
            .get_or_try_fetch(key, || async move {
                let history = self
                    .historical_bitcoin_prices(session, start_date, end_date)
                    .await;
                if history.is_empty() {
                    Err(NoHistory)
                } else {
                    Ok(monthly_returns(&history))
                }
            })
            .await;

        match fetched {
            Ok(returns) => Ok(returns),
            Err(NoHistory) => {
                tracing::info!("No Bitcoin history available, using mock monthly returns");
                Ok(mock_monthly_returns(years, today))
            }
        }
    }
}

/// `(today - years * 365 days, today)`, or `None` if the start is not representable.
fn lookback_range(years: i64, today: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
    let days = years.checked_mul(365)?;
    let start = if days >= 0 {
        today.checked_sub_days(Days::new(days.unsigned_abs()))
    } else {
        today.checked_add_days(Days::new(days.unsigned_abs()))
    }?;
    Some((start, today))
}
