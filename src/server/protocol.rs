//! Wire types of the line protocol.
//!
//! A request is `{"method": ..., "params": {...}}`; a response is either
//! `{"result": ...}` or `{"error": {"code": ..., "message": ...}}`. Request ids are
//! not part of the protocol.

use crate::error::ToolError;
use serde::Serialize;
use serde_json::{json, Value};

/// One response line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RpcResponse {
    Success { result: Value },
    Failure { error: RpcError },
}

impl RpcResponse {
    pub fn success(result: Value) -> Self {
        RpcResponse::Success { result }
    }

    /// A `tools/call` result carrying one text block.
    pub fn text(text: String) -> Self {
        RpcResponse::Success {
            result: json!({
                "content": [TextContent::new(text)]
            }),
        }
    }

    pub fn failure(error: &ToolError) -> Self {
        RpcResponse::Failure {
            error: RpcError::from(error),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RpcError {
    pub code: i64,
    pub message: String,
}

impl From<&ToolError> for RpcError {
    fn from(error: &ToolError) -> Self {
        Self {
            code: error.code(),
            message: error.to_string(),
        }
    }
}

/// A text content block of a tool result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextContent {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub text: String,
}

impl TextContent {
    pub fn new(text: String) -> Self {
        Self { kind: "text", text }
    }
}

/// Render a method or tool name taken from a request for an error message.
/// Absent names render as `null`, non-strings as their JSON text.
pub fn display_name(value: Option<&Value>) -> String {
    match value {
        None => "null".to_string(),
        Some(Value::String(name)) => name.clone(),
        Some(other) => other.to_string(),
    }
}
