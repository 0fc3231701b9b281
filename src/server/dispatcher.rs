//! Request dispatch shared by both servers.

use super::protocol::{display_name, RpcResponse};
use crate::error::{ToolError, ToolResult};
use crate::tools::{Arguments, ToolHandler};
use futures::FutureExt;
use serde_json::{Map, Value};
use std::any::Any;
use std::panic::AssertUnwindSafe;

/// A line-protocol server over one tool table.
pub struct ToolServer<H> {
    handler: H,
}

impl<H: ToolHandler> ToolServer<H> {
    pub fn new(handler: H) -> Self {
        Self { handler }
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    /// Answer one request object.
    ///
    /// A panic while handling the request becomes a `-32603` error response.
    pub async fn handle_request(&self, request: &Map<String, Value>) -> RpcResponse {
        let outcome = AssertUnwindSafe(self.route(request))
            .catch_unwind()
            .await
            .unwrap_or_else(|panic| {
                let message = panic_message(panic.as_ref()).to_string();
                Err(ToolError::Internal(message))
            });

        outcome.unwrap_or_else(|error| {
            match &error {
                ToolError::MethodNotFound(_) | ToolError::ToolNotFound(_) => {
                    tracing::warn!("{}: {}", self.handler.server_name(), error);
                }
                _ => tracing::error!("Error handling request: {}", error),
            }
            RpcResponse::failure(&error)
        })
    }

    async fn route(&self, request: &Map<String, Value>) -> ToolResult<RpcResponse> {
        let method = request.get("method");

        match method.and_then(Value::as_str) {
            Some("tools/list") => Ok(RpcResponse::success(self.handler.catalog().clone())),
            Some("tools/call") => self.call_tool(request.get("params")).await,
            _ => Err(ToolError::MethodNotFound(display_name(method))),
        }
    }

    async fn call_tool(&self, params: Option<&Value>) -> ToolResult<RpcResponse> {
        let params = match params {
            None | Some(Value::Null) => None,
            Some(Value::Object(params)) => Some(params),
            Some(_) => {
                return Err(ToolError::InvalidArgument {
                    name: "params".to_string(),
                    reason: "expected an object".to_string(),
                })
            }
        };

        let name = params.and_then(|p| p.get("name"));
        let Some(tool) = name.and_then(Value::as_str) else {
            return Err(ToolError::ToolNotFound(display_name(name)));
        };
        let arguments = Arguments::from_params(params.and_then(|p| p.get("arguments")))?;

        tracing::debug!("Calling tool {}", tool);
        let text = self.handler.call(tool, &arguments).await?;
        Ok(RpcResponse::text(text))
    }
}

fn panic_message(panic: &(dyn Any + Send)) -> &str {
    if let Some(message) = panic.downcast_ref::<&'static str>() {
        *message
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.as_str()
    } else {
        "panic while handling request"
    }
}
