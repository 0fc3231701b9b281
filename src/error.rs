//! Error types for the crypto MCP servers.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! Upstream failures never leave the data providers; only [`ToolError`] reaches the
//! request dispatcher, where it is turned into a JSON-RPC error object.

use thiserror::Error;

/// JSON-RPC error code for an unknown method or tool.
pub const METHOD_NOT_FOUND: i64 = -32601;

/// JSON-RPC error code for any failure while handling a request.
pub const INTERNAL_ERROR: i64 = -32603;

/// Errors that can occur when talking to an upstream market-data API.
#[derive(Error, Debug)]
pub enum UpstreamError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// API answered with something other than 200 OK
    #[error("API returned status {status}")]
    Status { status: u16 },

    /// Failed to decode the response body
    #[error("JSON parse error: {0}")]
    Json(String),

    /// Network timeout
    #[error("Request timeout")]
    Timeout,

    /// No API key is configured for an authenticated endpoint
    #[error("API key not configured")]
    MissingCredentials,

    /// The upstream answered but had nothing usable
    #[error("No data returned")]
    NoData,
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors surfaced to the client as JSON-RPC error objects.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ToolError {
    /// The request named a method this server does not implement
    #[error("Method {0} not found")]
    MethodNotFound(String),

    /// `tools/call` named a tool that is not in the catalog
    #[error("Tool {0} not found")]
    ToolNotFound(String),

    /// A required tool argument was absent
    #[error("Missing required argument: {0}")]
    MissingArgument(String),

    /// A tool argument had the wrong type or an unusable value
    #[error("Invalid value for argument {name}: {reason}")]
    InvalidArgument { name: String, reason: String },

    /// Anything else that went wrong while handling the request
    #[error("{0}")]
    Internal(String),
}

impl ToolError {
    /// The JSON-RPC error code for this error.
    pub fn code(&self) -> i64 {
        match self {
            ToolError::MethodNotFound(_) | ToolError::ToolNotFound(_) => METHOD_NOT_FOUND,
            _ => INTERNAL_ERROR,
        }
    }
}

/// Convenience type alias for Results with UpstreamError
pub type UpstreamResult<T> = Result<T, UpstreamError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with ToolError
pub type ToolResult<T> = Result<T, ToolError>;
