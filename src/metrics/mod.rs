//! Fetch counters.
//!
//! Provides the monotonically increasing counters the fetcher maintains:
//! requests issued, failures, body bytes received and cumulative latency.

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Metrics collector for the fetcher.
///
/// Clones share the same counters, so the server can hold a handle while the
/// fetcher keeps writing.
#[derive(Debug, Clone)]
pub struct FetchMetrics {
    /// Outbound requests issued (cache misses)
    fetch_count: Arc<AtomicU64>,

    /// Requests that ended in any failure kind
    error_count: Arc<AtomicU64>,

    /// Sum of body byte lengths of successfully parsed responses
    total_bytes: Arc<AtomicU64>,

    /// Total duration of all outbound requests in milliseconds
    duration_total_ms: Arc<AtomicU64>,
}

impl Default for FetchMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl FetchMetrics {
    /// Create a new metrics collector.
    pub fn new() -> Self {
        Self {
            fetch_count: Arc::new(AtomicU64::new(0)),
            error_count: Arc::new(AtomicU64::new(0)),
            total_bytes: Arc::new(AtomicU64::new(0)),
            duration_total_ms: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Record that an outbound request is about to be issued.
    pub fn record_fetch_started(&self) {
        self.fetch_count.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a successful request and the byte length of its body.
    pub fn record_success(&self, bytes: usize, duration: Duration) {
        self.total_bytes.fetch_add(bytes as u64, Ordering::Relaxed);
        self.record_duration(duration);
    }

    /// Record a failed request.
    pub fn record_failure(&self, duration: Duration) {
        self.error_count.fetch_add(1, Ordering::Relaxed);
        self.record_duration(duration);
    }

    fn record_duration(&self, duration: Duration) {
        self.duration_total_ms
            .fetch_add(duration.as_millis() as u64, Ordering::Relaxed);
    }

    /// Get total outbound requests.
    pub fn fetch_count(&self) -> u64 {
        self.fetch_count.load(Ordering::Relaxed)
    }

    /// Get total failures.
    pub fn error_count(&self) -> u64 {
        self.error_count.load(Ordering::Relaxed)
    }

    /// Get total body bytes of successful responses.
    pub fn total_bytes(&self) -> u64 {
        self.total_bytes.load(Ordering::Relaxed)
    }

    /// Get total request duration in milliseconds.
    pub fn duration_total_ms(&self) -> u64 {
        self.duration_total_ms.load(Ordering::Relaxed)
    }

    /// Get average request duration in milliseconds.
    pub fn duration_avg_ms(&self) -> f64 {
        let total = self.duration_total_ms.load(Ordering::Relaxed);
        let count = self.fetch_count.load(Ordering::Relaxed);
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    /// Get a summary of all metrics.
    pub fn summary(&self) -> MetricsSummary {
        MetricsSummary {
            fetch_count: self.fetch_count(),
            error_count: self.error_count(),
            total_bytes: self.total_bytes(),
            duration_total_ms: self.duration_total_ms(),
            duration_avg_ms: self.duration_avg_ms(),
        }
    }
}

/// A snapshot of metrics values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsSummary {
    pub fetch_count: u64,
    pub error_count: u64,
    pub total_bytes: u64,
    pub duration_total_ms: u64,
    pub duration_avg_ms: f64,
}

/// Times a single outbound request.
///
/// Starting the timer counts the request; finishing it consumes the timer, so
/// each request records exactly one outcome.
pub struct FetchTimer {
    start: Instant,
    metrics: FetchMetrics,
}

impl FetchTimer {
    /// Count a new outbound request and start timing it.
    pub fn start(metrics: FetchMetrics) -> Self {
        metrics.record_fetch_started();
        Self {
            start: Instant::now(),
            metrics,
        }
    }

    /// Complete the timing as a success carrying `bytes` of body.
    pub fn complete(self, bytes: usize) {
        let duration = self.start.elapsed();
        self.metrics.record_success(bytes, duration);
    }

    /// Complete the timing and record as an error.
    pub fn complete_with_error(self) {
        let duration = self.start.elapsed();
        self.metrics.record_failure(duration);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_metrics_creation() {
        let metrics = FetchMetrics::new();
        assert_eq!(metrics.fetch_count(), 0);
        assert_eq!(metrics.error_count(), 0);
        assert_eq!(metrics.total_bytes(), 0);
        assert_eq!(metrics.duration_avg_ms(), 0.0);
    }

    #[test]
    fn test_success_adds_bytes_not_errors() {
        let metrics = FetchMetrics::new();
        metrics.record_fetch_started();
        metrics.record_success(512, Duration::from_millis(40));

        assert_eq!(metrics.fetch_count(), 1);
        assert_eq!(metrics.total_bytes(), 512);
        assert_eq!(metrics.error_count(), 0);
        assert_eq!(metrics.duration_total_ms(), 40);
    }

    #[test]
    fn test_failure_adds_errors_not_bytes() {
        let metrics = FetchMetrics::new();
        metrics.record_fetch_started();
        metrics.record_failure(Duration::from_millis(10));

        assert_eq!(metrics.error_count(), 1);
        assert_eq!(metrics.total_bytes(), 0);
    }

    #[test]
    fn test_average_duration() {
        let metrics = FetchMetrics::new();
        metrics.record_fetch_started();
        metrics.record_success(1, Duration::from_millis(100));
        metrics.record_fetch_started();
        metrics.record_failure(Duration::from_millis(200));

        assert_eq!(metrics.duration_total_ms(), 300);
        assert_eq!(metrics.duration_avg_ms(), 150.0);
    }

    #[test]
    fn test_summary() {
        let metrics = FetchMetrics::new();
        metrics.record_fetch_started();
        metrics.record_success(42, Duration::from_millis(100));

        let summary = metrics.summary();
        assert_eq!(summary.fetch_count, 1);
        assert_eq!(summary.error_count, 0);
        assert_eq!(summary.total_bytes, 42);
        assert_eq!(summary.duration_avg_ms, 100.0);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["total_bytes"], 42);
    }

    #[test]
    fn test_fetch_timer() {
        let metrics = FetchMetrics::new();
        let timer = FetchTimer::start(metrics.clone());
        assert_eq!(metrics.fetch_count(), 1);
        thread::sleep(Duration::from_millis(10));
        timer.complete(7);

        assert_eq!(metrics.total_bytes(), 7);
        assert!(metrics.duration_total_ms() >= 10);
    }

    #[test]
    fn test_fetch_timer_with_error() {
        let metrics = FetchMetrics::new();
        let timer = FetchTimer::start(metrics.clone());
        timer.complete_with_error();

        assert_eq!(metrics.fetch_count(), 1);
        assert_eq!(metrics.error_count(), 1);
        assert_eq!(metrics.total_bytes(), 0);
    }

    #[test]
    fn test_concurrent_access() {
        let metrics = FetchMetrics::new();
        let metrics1 = metrics.clone();
        let metrics2 = metrics.clone();

        let handle1 = thread::spawn(move || {
            for _ in 0..100 {
                FetchTimer::start(metrics1.clone()).complete(3);
            }
        });

        let handle2 = thread::spawn(move || {
            for _ in 0..100 {
                FetchTimer::start(metrics2.clone()).complete_with_error();
            }
        });

        handle1.join().unwrap();
        handle2.join().unwrap();

        assert_eq!(metrics.fetch_count(), 200);
        assert_eq!(metrics.error_count(), 100);
        assert_eq!(metrics.total_bytes(), 300);
    }
}
