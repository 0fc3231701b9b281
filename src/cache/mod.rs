//! Caching utilities for the crypto MCP servers.
//!
//! This module provides a generic time-based cache implementation with TTL support.

pub mod timed_cache;

pub use timed_cache::TimedCache;
