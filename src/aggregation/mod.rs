//! Pure derivations over normalized market records.
//!
//! Nothing in here performs I/O; the data providers feed these helpers with
//! whatever the upstream APIs returned.

mod monthly;
mod pools;

pub use monthly::{mock_monthly_returns, monthly_returns};
pub use pools::{compare_by_dex, filter_by_token, rank_pools, summarize_network};
