//! Crypto MCP servers - stdio tool servers for cryptocurrency market data.
//!
//! Two servers share this library:
//!
//! - **crypto-financial-mcp**: current and historical Bitcoin prices plus monthly
//!   return analysis
//! - **crypto-liquidity-mcp**: DEX liquidity pools per network, token search and
//!   cross-exchange comparison
//!
//! # Architecture
//!
//! - **server**: line protocol, request dispatch and the stdio loop
//! - **tools**: tool catalogs, argument extraction and the two tool tables
//! - **services**: data providers combining sources, cache and aggregation
//! - **sources**: upstream API adapters
//! - **client**: per-call HTTP sessions
//! - **aggregation**: pure derivations (monthly returns, ranking, comparison)
//! - **formatting**: Portuguese text reports
//! - **models**: normalized market records
//! - **cache**, **metrics**, **config**, **error**: supporting infrastructure

pub mod aggregation;
pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod formatting;
pub mod metrics;
pub mod models;
pub mod networks;
pub mod server;
pub mod services;
pub mod sources;
pub mod tools;

pub use cache::TimedCache;
pub use client::{HttpConnector, HttpSession};
pub use config::Config;
pub use error::{ConfigError, ToolError, UpstreamError};
pub use metrics::{HttpTimer, Metrics, MetricsSummary};
pub use models::{DexComparison, LiquidityPool, MonthlyReturn, NetworkInfo, PricePoint};
pub use server::ToolServer;
pub use services::{FinancialDataProvider, LiquidityDataProvider};
pub use tools::{FinancialTools, LiquidityTools, ToolHandler};
