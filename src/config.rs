//! Configuration management for the crypto MCP servers.
//!
//! This module handles loading and validating configuration from environment variables.
//! It avoids polluting stdout (which the tool protocol uses for communication) by
//! loading the .env file through `dotenvy`, which never prints.

use crate::error::{ConfigError, ConfigResult};
use std::env;

/// Default base URL of the Financial Datasets price API.
pub const DEFAULT_FINANCIAL_API_URL: &str = "https://api.financialdatasets.ai";

/// Default base URL of the DexScreener pairs API.
pub const DEFAULT_DEXSCREENER_API_URL: &str = "https://api.dexscreener.com";

/// Default base URL of the CoinGecko token-pairs API.
pub const DEFAULT_COINGECKO_API_URL: &str = "https://api.coingecko.com";

/// Configuration shared by both servers.
#[derive(Debug, Clone)]
pub struct Config {
    /// Financial Datasets API base URL
    pub financial_api_url: String,

    /// Bearer token for the Financial Datasets API.
    /// `None` degrades the price tools to "unavailable" answers.
    pub financial_api_key: Option<String>,

    /// DexScreener API base URL
    pub dexscreener_api_url: String,

    /// CoinGecko API base URL
    pub coingecko_api_url: String,

    /// Cache TTL in seconds (default: 300)
    pub cache_ttl_secs: u64,

    /// HTTP request timeout in seconds (default: 30)
    pub request_timeout: u64,

    /// Log level used when RUST_LOG is not set (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `FINANCIAL_DATASETS_API_KEY`: bearer token for the price API
    /// - `FINANCIAL_DATASETS_API_URL`: price API base URL
    /// - `DEXSCREENER_API_URL`: DexScreener base URL
    /// - `COINGECKO_API_URL`: CoinGecko base URL
    /// - `CACHE_TTL_SECONDS`: cache TTL in seconds (default: 300)
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 30)
    /// - `LOG_LEVEL`: logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let financial_api_key = env::var("FINANCIAL_DATASETS_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty());

        let financial_api_url =
            Self::parse_env_url("FINANCIAL_DATASETS_API_URL", DEFAULT_FINANCIAL_API_URL)?;
        let dexscreener_api_url =
            Self::parse_env_url("DEXSCREENER_API_URL", DEFAULT_DEXSCREENER_API_URL)?;
        let coingecko_api_url = Self::parse_env_url("COINGECKO_API_URL", DEFAULT_COINGECKO_API_URL)?;

        let cache_ttl_secs = Self::parse_env_u64("CACHE_TTL_SECONDS", 300)?;
        let request_timeout = Self::parse_env_u64("REQUEST_TIMEOUT", 30)?;

        if request_timeout == 0 {
            return Err(ConfigError::InvalidValue {
                var: "REQUEST_TIMEOUT".to_string(),
                reason: "Must be greater than zero".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Config {
            financial_api_url,
            financial_api_key,
            dexscreener_api_url,
            coingecko_api_url,
            cache_ttl_secs,
            request_timeout,
            log_level,
        })
    }

    /// Parse an environment variable as a base URL with a default value.
    fn parse_env_url(var_name: &str, default: &str) -> ConfigResult<String> {
        let url = env::var(var_name).unwrap_or_else(|_| default.to_string());

        if !url.starts_with("http://") && !url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        Ok(url)
    }

    /// Parse an environment variable as u64 with a default value.
    fn parse_env_u64(var_name: &str, default: u64) -> ConfigResult<u64> {
        match env::var(var_name) {
            Ok(val) => val.parse::<u64>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            financial_api_url: DEFAULT_FINANCIAL_API_URL.to_string(),
            financial_api_key: None,
            dexscreener_api_url: DEFAULT_DEXSCREENER_API_URL.to_string(),
            coingecko_api_url: DEFAULT_COINGECKO_API_URL.to_string(),
            cache_ttl_secs: 300,
            request_timeout: 30,
            log_level: "info".to_string(),
        }
    }
}
