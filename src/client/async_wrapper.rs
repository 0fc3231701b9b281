//! Async entry point for the synchronous HTTP session.
//!
//! Uses `tokio::task::spawn_blocking` to run `ureq` requests on a dedicated thread
//! pool, preventing blocking of the async runtime.

use super::{HttpSession, UpstreamRequest};
use crate::error::{UpstreamError, UpstreamResult};
use serde_json::Value;

impl HttpSession {
    /// Issue `request` and return the decoded JSON body.
    pub async fn get_json(&self, request: UpstreamRequest) -> UpstreamResult<Value> {
        let agent = self.agent.clone();
        let metrics = self.metrics.clone();

        tokio::task::spawn_blocking(move || HttpSession::execute(&agent, &metrics, &request))
            .await
            .map_err(|e| UpstreamError::Http(format!("Task join error: {}", e)))?
    }
}
