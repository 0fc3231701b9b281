//! Financial Datasets crypto price API.

use super::PriceSource;
use crate::client::{build_url, HttpSession, UpstreamRequest};
use crate::error::{UpstreamError, UpstreamResult};
use crate::models::PricePoint;
use async_trait::async_trait;
use serde_json::Value;

const SYMBOL: &str = "BTC-USD";

/// Bearer-authenticated price API. Without a key every call fails with
/// [`UpstreamError::MissingCredentials`] and no request is sent.
#[derive(Debug, Clone)]
pub struct FinancialDatasetsApi {
    base_url: String,
    api_key: Option<String>,
}

impl FinancialDatasetsApi {
    pub fn new(base_url: String, api_key: Option<String>) -> Self {
        Self { base_url, api_key }
    }

    fn request(&self, path: &str) -> UpstreamResult<UpstreamRequest> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(UpstreamError::MissingCredentials)?;

        Ok(UpstreamRequest::get(build_url(&self.base_url, path))
            .header("Authorization", &format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .query("symbol", SYMBOL))
    }
}

#[async_trait]
impl PriceSource for FinancialDatasetsApi {
    async fn current_price(&self, session: &HttpSession) -> UpstreamResult<PricePoint> {
        let request = self.request("/v1/crypto/current-price")?;
        let body = session.get_json(request).await?;

        body.get("data")
            .and_then(PricePoint::from_json)
            .ok_or(UpstreamError::NoData)
    }

    async fn historical_prices(
        &self,
        session: &HttpSession,
        start_date: &str,
        end_date: &str,
    ) -> UpstreamResult<Vec<PricePoint>> {
        let request = self
            .request("/v1/crypto/historical-prices")?
            .query("start_date", start_date)
            .query("end_date", end_date)
            .query("interval", "daily");
        let body = session.get_json(request).await?;

        let Some(records) = body.get("data").and_then(Value::as_array) else {
            return Ok(Vec::new());
        };

        let points = records
            .iter()
            .filter_map(|record| {
                let point = PricePoint::from_json(record);
                if point.is_none() {
                    tracing::warn!("Skipping malformed historical price record: {}", record);
                }
                point
            })
            .collect();

        Ok(points)
    }
}
