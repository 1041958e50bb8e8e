//! SWAPI Explorer - a cached, timeout-bounded client for the Star Wars API.
//!
//! The heart of the crate is [`Fetcher`]: it resolves endpoint strings such as
//! `people/1` to parsed JSON, keeps every successful response for the life of
//! the process, and bounds each network request with a deadline.
//!
//! # Architecture
//!
//! - **client**: The fetcher and the `Resolver` trait consumers depend on
//! - **cache**: Endpoint-keyed response cache
//! - **metrics**: Fetch, error and byte counters
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **models**: Typed views of SWAPI resources
//! - **services**: Endpoint construction and typed decoding
//! - **stats**: Aggregates over planets, starships and films
//! - **display**: Console and HTML renderers
//! - **server**: HTTP demo server

pub mod cache;
pub mod client;
pub mod config;
pub mod display;
pub mod error;
pub mod metrics;
pub mod models;
pub mod server;
pub mod services;
pub mod stats;

pub use cache::ResponseCache;
pub use client::{Fetcher, FetcherBuilder, Resolver};
pub use config::Config;
pub use error::{ApiError, ConfigError, FetchError, FetchErrorKind};
pub use metrics::{FetchMetrics, FetchTimer, MetricsSummary};
pub use models::{Character, Film, Page, Planet, Starship, Vehicle};
pub use services::{CatalogService, CatalogServiceImpl, Endpoint};
