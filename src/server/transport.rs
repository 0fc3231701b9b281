//! Newline-delimited JSON transport.
//!
//! Requests are handled strictly one at a time: each response is written and
//! flushed before the next line is read.

use super::dispatcher::ToolServer;
use crate::tools::ToolHandler;
use serde_json::Value;
use std::io;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Serve requests from `reader` until end of input.
///
/// Lines that are not JSON objects are logged and produce no response. Read errors
/// other than invalid UTF-8 and every write error end the loop.
pub async fn serve<H, R, W>(server: &ToolServer<H>, reader: R, mut writer: W) -> io::Result<()>
where
    H: ToolHandler,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                tracing::error!("Invalid input line: {}", e);
                continue;
            }
            Err(e) => return Err(e),
        };

        if line.trim().is_empty() {
            continue;
        }

        let request = match serde_json::from_str::<Value>(&line) {
            Ok(Value::Object(request)) => request,
            Ok(other) => {
                tracing::error!("Invalid request, expected a JSON object: {}", other);
                continue;
            }
            Err(e) => {
                tracing::error!("Invalid JSON: {}", e);
                continue;
            }
        };

        let response = server.handle_request(&request).await;

        let mut encoded = serde_json::to_vec(&response)?;
        encoded.push(b'\n');
        writer.write_all(&encoded).await?;
        writer.flush().await?;
    }

    Ok(())
}
