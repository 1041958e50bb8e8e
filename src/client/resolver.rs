//! The seam between the fetcher and everything that consumes its output.

use crate::client::Fetcher;
use crate::error::FetchResult;
use crate::metrics::MetricsSummary;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

/// Anything that can turn an endpoint into a JSON document.
///
/// The service layer and the demo server depend on this trait rather than
/// on [`Fetcher`] directly, so tests can substitute an in-memory resolver.
#[async_trait]
pub trait Resolver: Send + Sync {
    /// Resolve `endpoint` to its JSON document.
    async fn resolve(&self, endpoint: &str) -> FetchResult<Arc<Value>>;

    /// Snapshot of the fetch counters.
    fn metrics(&self) -> MetricsSummary;

    /// Number of endpoints currently cached.
    fn cache_size(&self) -> usize;
}

#[async_trait]
impl Resolver for Fetcher {
    async fn resolve(&self, endpoint: &str) -> FetchResult<Arc<Value>> {
        Fetcher::resolve(self, endpoint).await
    }

    fn metrics(&self) -> MetricsSummary {
        Fetcher::metrics(self).summary()
    }

    fn cache_size(&self) -> usize {
        self.cache_len()
    }
}
