//! Outbound HTTP capability for the data providers.
//!
//! An [`HttpConnector`] lives for the whole process and knows the timeout and the
//! metrics sink. Each tool call opens its own [`HttpSession`] from it: a fresh
//! `ureq` agent with its own connection pool. Dropping the session closes the pool,
//! so the pool never outlives the tool call that opened it, whether the call
//! succeeded or not.
//!
//! `ureq` is synchronous; the session runs requests on tokio's blocking pool (see
//! `async_wrapper`).

mod async_wrapper;

use crate::error::{UpstreamError, UpstreamResult};
use crate::metrics::{HttpTimer, Metrics};
use serde_json::Value;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// A GET request against an upstream JSON API.
#[derive(Debug, Clone)]
pub struct UpstreamRequest {
    url: String,
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
}

impl UpstreamRequest {
    /// Start a GET request for `url`.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            query: Vec::new(),
            headers: Vec::new(),
        }
    }

    /// Append a query parameter.
    pub fn query(mut self, name: &str, value: &str) -> Self {
        self.query.push((name.to_string(), value.to_string()));
        self
    }

    /// Append a request header.
    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_string(), value.to_string()));
        self
    }

    /// The request URL without query parameters.
    pub fn url(&self) -> &str {
        &self.url
    }
}

/// Join a base URL and a path with exactly one slash between them.
pub fn build_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{}/{}", base, path)
}

/// Factory for per-call HTTP sessions.
#[derive(Debug, Clone)]
pub struct HttpConnector {
    timeout: Duration,
    metrics: Metrics,
    sessions_opened: Arc<AtomicU64>,
}

impl HttpConnector {
    /// Create a connector whose sessions time out requests after `timeout_secs`.
    pub fn new(timeout_secs: u64, metrics: Metrics) -> Self {
        Self {
            timeout: Duration::from_secs(timeout_secs),
            metrics,
            sessions_opened: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Open a session. The connection pool is released when the session is dropped.
    pub fn open(&self) -> HttpSession {
        let agent = ureq::AgentBuilder::new().timeout(self.timeout).build();
        let id = self.sessions_opened.fetch_add(1, Ordering::Relaxed) + 1;

        tracing::debug!(session = id, "HTTP session opened");

        HttpSession {
            id,
            agent: Arc::new(agent),
            metrics: self.metrics.clone(),
        }
    }

    /// Metrics shared by every session of this connector.
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }
}

/// HTTP capability scoped to one tool call.
///
/// Not `Clone`: the agent handle is only lent to blocking tasks for the duration of
/// a request, so dropping the session drops the last reference to the pool.
pub struct HttpSession {
    id: u64,
    agent: Arc<ureq::Agent>,
    metrics: Metrics,
}

impl HttpSession {
    /// Execute a GET request and decode the body as JSON.
    ///
    /// Anything other than a 200 answer is an error.
    fn execute(
        agent: &ureq::Agent,
        metrics: &Metrics,
        request: &UpstreamRequest,
    ) -> UpstreamResult<Value> {
        let timer = HttpTimer::new(metrics.clone());

        let mut call = agent.get(&request.url);
        for (name, value) in &request.query {
            call = call.query(name, value);
        }
        for (name, value) in &request.headers {
            call = call.set(name, value);
        }

        tracing::debug!("GET {}", request.url);

        let response = match call.call() {
            Ok(response) => response,
            Err(e) => {
                timer.complete_with_error();
                let err = map_error(e);
                tracing::debug!("GET {} - Error: {}", request.url, err);
                return Err(err);
            }
        };

        if response.status() != 200 {
            timer.complete_with_error();
            return Err(UpstreamError::Status {
                status: response.status(),
            });
        }

        match response.into_json::<Value>() {
            Ok(body) => {
                timer.complete();
                Ok(body)
            }
            Err(e) => {
                timer.complete_with_error();
                Err(UpstreamError::Json(e.to_string()))
            }
        }
    }
}

impl Drop for HttpSession {
    fn drop(&mut self) {
        tracing::debug!(session = self.id, "HTTP session closed");
    }
}

/// Map a ureq error to an UpstreamError.
fn map_error(error: ureq::Error) -> UpstreamError {
    match error {
        ureq::Error::Status(code, _) => UpstreamError::Status { status: code },
        ureq::Error::Transport(transport) => {
            if transport.kind() == ureq::ErrorKind::ConnectionFailed {
                UpstreamError::Http("Connection failed".to_string())
            } else if transport.kind() == ureq::ErrorKind::Io {
                UpstreamError::Timeout
            } else {
                UpstreamError::Http(transport.to_string())
            }
        }
    }
}
