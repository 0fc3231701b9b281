//! Bitcoin price tools.

use super::catalog::{catalog_json, ArgDefault, ArgKind, ArgSpec, ToolSpec};
use super::{Arguments, ToolHandler};
use crate::error::{ToolError, ToolResult};
use crate::formatting::financial::{
    format_current_price, format_historical_prices, format_monthly_returns,
};
use crate::services::FinancialDataProvider;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use serde_json::Value;

pub const GET_CURRENT_BITCOIN_PRICE: &str = "get_current_bitcoin_price";
pub const GET_HISTORICAL_BITCOIN_PRICES: &str = "get_historical_bitcoin_prices";
pub const GET_BITCOIN_MONTHLY_RETURNS: &str = "get_bitcoin_monthly_returns";

const DEFAULT_YEARS: i64 = 10;

pub static FINANCIAL_TOOLS: [ToolSpec; 3] = [
    ToolSpec {
        name: GET_CURRENT_BITCOIN_PRICE,
        description: "Get current Bitcoin price and market data",
        args: &[],
    },
    ToolSpec {
        name: GET_HISTORICAL_BITCOIN_PRICES,
        description: "Get historical Bitcoin prices for a date range",
        args: &[
            ArgSpec::required("start_date", ArgKind::String, "Start date in YYYY-MM-DD format"),
            ArgSpec::required("end_date", ArgKind::String, "End date in YYYY-MM-DD format"),
        ],
    },
    ToolSpec {
        name: GET_BITCOIN_MONTHLY_RETURNS,
        description: "Get Bitcoin monthly returns for analysis",
        args: &[ArgSpec::optional(
            "years",
            ArgKind::Integer,
            "Number of years to analyze",
            ArgDefault::Int(DEFAULT_YEARS),
        )],
    },
];

static CATALOG: Lazy<Value> = Lazy::new(|| catalog_json(&FINANCIAL_TOOLS));

/// Tools of the financial server.
pub struct FinancialTools {
    provider: FinancialDataProvider,
}

impl FinancialTools {
    pub fn new(provider: FinancialDataProvider) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl ToolHandler for FinancialTools {
    fn server_name(&self) -> &'static str {
        "crypto-financial-mcp"
    }

    fn tools(&self) -> &'static [ToolSpec] {
        &FINANCIAL_TOOLS
    }

    fn catalog(&self) -> &Value {
        &CATALOG
    }

    async fn call(&self, name: &str, arguments: &Arguments) -> ToolResult<String> {
        match name {
            GET_CURRENT_BITCOIN_PRICE => {
                let session = self.provider.open_session();
                let price = self.provider.current_bitcoin_price(&session).await;
                Ok(format_current_price(price.as_ref()))
            }
            GET_HISTORICAL_BITCOIN_PRICES => {
                let start_date = arguments.required_str("start_date")?;
                let end_date = arguments.required_str("end_date")?;

                let session = self.provider.open_session();
                let points = self
                    .provider
                    .historical_bitcoin_prices(&session, &start_date, &end_date)
                    .await;
                Ok(format_historical_prices(&points, &start_date, &end_date))
            }
            GET_BITCOIN_MONTHLY_RETURNS => {
                let years = arguments.i64_or("years", DEFAULT_YEARS)?;

                let session = self.provider.open_session();
                let returns = self.provider.bitcoin_monthly_returns(&session, years).await?;
                Ok(format_monthly_returns(&returns, years))
            }
            other => Err(ToolError::ToolNotFound(other.to_string())),
        }
    }
}
