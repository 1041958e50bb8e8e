//! Caching utilities for SWAPI Explorer.
//!
//! This module provides the process-lifetime response cache used by the fetcher.

pub mod response_cache;

pub use response_cache::ResponseCache;
