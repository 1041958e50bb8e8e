use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use swapi_explorer::client::Resolver;
use swapi_explorer::error::{FetchError, FetchResult};
use swapi_explorer::metrics::MetricsSummary;

/// Canned outcome for one endpoint.
#[allow(dead_code)]
#[derive(Clone)]
pub enum Canned {
    Json(Value),
    Status(u16),
    Timeout(u64),
}

/// Mock resolver for testing.
///
/// Serves canned documents or failures per endpoint and tracks how often
/// each endpoint was requested. Unknown endpoints answer 404.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockResolver {
    responses: Arc<Mutex<HashMap<String, Canned>>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
}

#[allow(dead_code)]
impl MockResolver {
    /// Create a new empty MockResolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `value` for `endpoint`.
    pub fn add_json(&self, endpoint: &str, value: Value) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(endpoint.to_string(), Canned::Json(value));
    }

    /// Fail `endpoint` with the given outcome.
    pub fn add_failure(&self, endpoint: &str, canned: Canned) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(endpoint.to_string(), canned);
    }

    /// Get the number of times an endpoint was resolved.
    pub fn get_call_count(&self, endpoint: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(endpoint).unwrap_or(&0)
    }

    fn track_call(&self, endpoint: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(endpoint.to_string()).or_insert(0) += 1;
    }
}

#[async_trait]
impl Resolver for MockResolver {
    async fn resolve(&self, endpoint: &str) -> FetchResult<Arc<Value>> {
        self.track_call(endpoint);

        let canned = self.responses.lock().unwrap().get(endpoint).cloned();
        match canned {
            Some(Canned::Json(value)) => Ok(Arc::new(value)),
            Some(Canned::Status(status)) => Err(FetchError::HttpStatus {
                endpoint: endpoint.to_string(),
                status,
            }),
            Some(Canned::Timeout(timeout_ms)) => Err(FetchError::Timeout {
                endpoint: endpoint.to_string(),
                timeout_ms,
            }),
            None => Err(FetchError::HttpStatus {
                endpoint: endpoint.to_string(),
                status: 404,
            }),
        }
    }

    fn metrics(&self) -> MetricsSummary {
        let calls: usize = self.call_counts.lock().unwrap().values().sum();
        MetricsSummary {
            fetch_count: calls as u64,
            error_count: 0,
            total_bytes: 0,
            duration_total_ms: 0,
            duration_avg_ms: 0.0,
        }
    }

    fn cache_size(&self) -> usize {
        self.responses.lock().unwrap().len()
    }
}
