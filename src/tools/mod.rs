//! Tool tables of the two servers.
//!
//! A [`ToolHandler`] owns a data provider, advertises its catalog and renders the
//! result of each call as text.

pub mod arguments;
pub mod catalog;
pub mod financial;
pub mod liquidity;

pub use arguments::Arguments;
pub use catalog::{catalog_json, ArgDefault, ArgKind, ArgSpec, ToolSpec};
pub use financial::FinancialTools;
pub use liquidity::LiquidityTools;

use crate::error::ToolResult;
use async_trait::async_trait;
use serde_json::Value;

/// The tools one server exposes.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// Server name reported in logs.
    fn server_name(&self) -> &'static str;

    /// Tools in catalog order.
    fn tools(&self) -> &'static [ToolSpec];

    /// The `tools/list` result.
    fn catalog(&self) -> &Value;

    /// Run tool `name` and render its result.
    ///
    /// Unknown names fail with [`ToolError::ToolNotFound`](crate::error::ToolError::ToolNotFound).
    async fn call(&self, name: &str, arguments: &Arguments) -> ToolResult<String>;
}
