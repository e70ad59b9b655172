//! Translation pipeline metrics.
//!
//! Counters for request outcomes, detection fallbacks and idiom corrections,
//! exposed through the `/metrics` endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Pipeline counters, shared between request tasks.
pub struct PipelineMetrics {
    started_at: DateTime<Utc>,

    /// Translation requests received
    requests: AtomicUsize,

    /// Requests rejected before reaching the model
    validation_failures: AtomicUsize,

    /// Requests whose detected language was replaced by the default
    detection_fallbacks: AtomicUsize,

    /// Model calls that returned an error
    translation_failures: AtomicUsize,

    /// Model calls that exceeded the deadline
    timeouts: AtomicUsize,

    /// Bad renderings rewritten by the glossary
    corrections_applied: AtomicUsize,
}

impl PipelineMetrics {
    pub fn new() -> Self {
        Self {
            started_at: Utc::now(),
            requests: AtomicUsize::new(0),
            validation_failures: AtomicUsize::new(0),
            detection_fallbacks: AtomicUsize::new(0),
            translation_failures: AtomicUsize::new(0),
            timeouts: AtomicUsize::new(0),
            corrections_applied: AtomicUsize::new(0),
        }
    }

    pub fn record_request(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_validation_failure(&self) {
        self.validation_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_detection_fallback(&self) {
        self.detection_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_translation_failure(&self) {
        self.translation_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_timeout(&self) {
        self.timeouts.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_corrections(&self, count: usize) {
        self.corrections_applied.fetch_add(count, Ordering::Relaxed);
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let requests = self.requests.load(Ordering::Relaxed);
        let validation_failures = self.validation_failures.load(Ordering::Relaxed);
        let translation_failures = self.translation_failures.load(Ordering::Relaxed);
        let timeouts = self.timeouts.load(Ordering::Relaxed);

        let failed = validation_failures + translation_failures + timeouts;
        let success_rate = if requests > 0 {
            (requests.saturating_sub(failed) as f64 / requests as f64) * 100.0
        } else {
            0.0
        };

        let now = Utc::now();
        MetricsReport {
            started_at: self.started_at,
            uptime_secs: (now - self.started_at).num_seconds().max(0) as u64,
            requests,
            validation_failures,
            detection_fallbacks: self.detection_fallbacks.load(Ordering::Relaxed),
            translation_failures,
            timeouts,
            corrections_applied: self.corrections_applied.load(Ordering::Relaxed),
            success_rate,
        }
    }
}

impl Default for PipelineMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of the pipeline counters.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub started_at: DateTime<Utc>,
    pub uptime_secs: u64,
    pub requests: usize,
    pub validation_failures: usize,
    pub detection_fallbacks: usize,
    pub translation_failures: usize,
    pub timeouts: usize,
    pub corrections_applied: usize,
    /// Percentage of requests that produced a translation
    pub success_rate: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_metrics_are_zero() {
        let report = PipelineMetrics::new().report();

        assert_eq!(report.requests, 0);
        assert_eq!(report.corrections_applied, 0);
        assert_eq!(report.success_rate, 0.0);
    }

    #[test]
    fn test_success_rate() {
        let metrics = PipelineMetrics::new();
        for _ in 0..4 {
            metrics.record_request();
        }
        metrics.record_validation_failure();

        let report = metrics.report();
        assert_eq!(report.requests, 4);
        assert_eq!(report.validation_failures, 1);
        assert!((report.success_rate - 75.0).abs() < 0.01);
    }

    #[test]
    fn test_record_counters() {
        let metrics = PipelineMetrics::new();
        metrics.record_detection_fallback();
        metrics.record_translation_failure();
        metrics.record_timeout();
        metrics.record_corrections(3);
        metrics.record_corrections(2);

        let report = metrics.report();
        assert_eq!(report.detection_fallbacks, 1);
        assert_eq!(report.translation_failures, 1);
        assert_eq!(report.timeouts, 1);
        assert_eq!(report.corrections_applied, 5);
    }

    #[test]
    fn test_report_serializes() {
        let metrics = PipelineMetrics::new();
        metrics.record_request();

        let json = serde_json::to_value(metrics.report()).expect("Should serialize");
        assert_eq!(json["requests"], 1);
        assert!(json["started_at"].is_string());
    }
}
