//! Cached, deadline-bounded fetcher for the upstream JSON API.
//!
//! [`Fetcher::resolve`] turns an endpoint string such as `people/1` into a
//! parsed JSON document. A cached endpoint is answered without any I/O; an
//! uncached one costs exactly one GET, raced against the configured deadline.
//! Every call produces one outcome and updates the counters once for it.
//!
//! # TLS
//!
//! By default certificate verification is **disabled** (trust-all), which is
//! insecure. Enable verification with [`FetcherBuilder::accept_invalid_certs`]
//! set to `false`, `SWAPI_ACCEPT_INVALID_CERTS=false` or `--verify-tls`.

mod resolver;
pub use resolver::Resolver;

use crate::cache::ResponseCache;
use crate::config::{Config, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS};
use crate::error::{ConfigResult, FetchError, FetchResult};
use crate::metrics::{FetchMetrics, FetchTimer};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;

/// Builder for [`Fetcher`], mostly useful to point tests at a stub server.
#[derive(Debug, Clone)]
pub struct FetcherBuilder {
    base_url: String,
    timeout: Duration,
    debug: bool,
    accept_invalid_certs: bool,
}

impl Default for FetcherBuilder {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            debug: false,
            accept_invalid_certs: true,
        }
    }
}

impl FetcherBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Root URL that endpoints are appended to.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Deadline for the network phase of a single resolve.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Emit a debug trace for every successful fetch.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Skip TLS certificate verification. Defaults to `true`.
    pub fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    pub fn build(self) -> ConfigResult<Fetcher> {
        // No client-level timeout: the deadline is enforced in `resolve` so an
        // expiry is always reported as `Timeout`, never as a transport error.
        // Redirects are not followed; one resolve is one GET.
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .danger_accept_invalid_certs(self.accept_invalid_certs)
            .user_agent(concat!("swapi-explorer/", env!("CARGO_PKG_VERSION")))
            .build()?;

        if self.accept_invalid_certs {
            tracing::warn!("TLS certificate verification is disabled for upstream requests");
        }

        Ok(Fetcher {
            base_url: normalize_base_url(&self.base_url),
            http,
            timeout: self.timeout,
            debug: self.debug,
            cache: ResponseCache::new(),
            metrics: FetchMetrics::new(),
        })
    }
}

/// Resolves endpoints to JSON with an in-memory cache and bounded latency.
///
/// Clones share the cache, counters and connection pool.
#[derive(Clone)]
pub struct Fetcher {
    /// API root, always ending in exactly one `/`
    base_url: String,

    /// Underlying HTTP client
    http: reqwest::Client,

    /// Deadline for each outbound request
    timeout: Duration,

    /// Emit debug traces on success
    debug: bool,

    cache: ResponseCache,
    metrics: FetchMetrics,
}

impl Fetcher {
    /// Create a Fetcher from configuration.
    pub fn new(config: &Config) -> ConfigResult<Self> {
        FetcherBuilder::new()
            .base_url(config.base_url.clone())
            .timeout(config.timeout())
            .debug(config.debug)
            .accept_invalid_certs(config.accept_invalid_certs)
            .build()
    }

    pub fn builder() -> FetcherBuilder {
        FetcherBuilder::new()
    }

    /// Resolve `endpoint` to its JSON document.
    ///
    /// A cache hit returns the stored document and touches no counter. A miss
    /// issues one GET to `base_url + endpoint`; the first of response
    /// completion or deadline expiry decides the outcome. On expiry the
    /// request future is dropped, which closes the connection, so nothing
    /// that arrives later can reach the cache or the counters.
    pub async fn resolve(&self, endpoint: &str) -> FetchResult<Arc<Value>> {
        if let Some(cached) = self.cache.get(endpoint) {
            tracing::trace!(endpoint = %endpoint, "Cache hit");
            return Ok(cached);
        }

        let url = self.build_url(endpoint);
        let timer = FetchTimer::start(self.metrics.clone());

        let body = match tokio::time::timeout(self.timeout, self.download(endpoint, &url)).await {
            Ok(Ok(body)) => body,
            Ok(Err(err)) => return Err(self.fail(timer, err)),
            Err(_elapsed) => {
                let err = FetchError::Timeout {
                    endpoint: endpoint.to_string(),
                    timeout_ms: self.timeout.as_millis() as u64,
                };
                return Err(self.fail(timer, err));
            }
        };

        let value = match serde_json::from_slice::<Value>(&body) {
            Ok(value) => Arc::new(value),
            Err(cause) => {
                let err = FetchError::MalformedBody {
                    endpoint: endpoint.to_string(),
                    cause,
                };
                return Err(self.fail(timer, err));
            }
        };

        let cache_size = self.cache.insert(endpoint, value.clone());
        timer.complete(body.len());

        if self.debug {
            tracing::debug!(
                endpoint = %endpoint,
                bytes = body.len(),
                cache_size = cache_size,
                "Fetched and cached"
            );
        }

        Ok(value)
    }

    /// Issue the GET and collect the full body.
    ///
    /// Error statuses are reported from the headers alone; their body is
    /// never read.
    async fn download(&self, endpoint: &str, url: &str) -> FetchResult<Vec<u8>> {
        let response = self
            .http
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|cause| FetchError::Transport {
                endpoint: endpoint.to_string(),
                cause,
            })?;

        let status = response.status();
        if status.as_u16() >= 400 {
            return Err(FetchError::HttpStatus {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|cause| FetchError::Transport {
                endpoint: endpoint.to_string(),
                cause,
            })?;

        Ok(body.to_vec())
    }

    fn fail(&self, timer: FetchTimer, err: FetchError) -> FetchError {
        timer.complete_with_error();
        tracing::warn!(
            endpoint = %err.endpoint(),
            kind = %err.kind(),
            "Fetch failed: {}",
            err
        );
        err
    }

    /// Build a full URL from an endpoint. The cache key stays verbatim.
    fn build_url(&self, endpoint: &str) -> String {
        format!("{}{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// Get a reference to the metrics collector.
    pub fn metrics(&self) -> &FetchMetrics {
        &self.metrics
    }

    /// Number of cached endpoints.
    pub fn cache_len(&self) -> usize {
        self.cache.len()
    }

    /// Cached endpoints in lexical order.
    pub fn cached_endpoints(&self) -> Vec<String> {
        self.cache.keys()
    }

    /// Whether `endpoint` is already cached.
    pub fn is_cached(&self, endpoint: &str) -> bool {
        self.cache.contains_key(endpoint)
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl std::fmt::Debug for Fetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fetcher")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("debug", &self.debug)
            .field("cache", &self.cache)
            .finish()
    }
}

fn normalize_base_url(base_url: &str) -> String {
    format!("{}/", base_url.trim_end_matches('/'))
}
