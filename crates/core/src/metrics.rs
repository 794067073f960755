//! Prometheus metrics for core components.
//!
//! Covers the search orchestrator (requests by source, result counts) and
//! the upstream provider (requests by outcome, retries).

use once_cell::sync::Lazy;
use prometheus::{Histogram, HistogramOpts, IntCounter, IntCounterVec, Opts};

use crate::search::FetchError;

/// Search requests total by result source.
pub static SEARCH_REQUESTS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new("eduseek_search_requests_total", "Total search requests"),
        &["source"], // "live", "fallback"
    )
    .unwrap()
});

/// Records returned per search, after facet filtering.
pub static SEARCH_RESULT_COUNT: Lazy<Histogram> = Lazy::new(|| {
    Histogram::with_opts(
        HistogramOpts::new(
            "eduseek_search_results",
            "Number of records returned per search",
        )
        .buckets(vec![0.0, 1.0, 5.0, 10.0, 20.0, 50.0]),
    )
    .unwrap()
});

/// Upstream provider requests by outcome.
pub static UPSTREAM_REQUESTS: Lazy<IntCounterVec> = Lazy::new(|| {
    IntCounterVec::new(
        Opts::new(
            "eduseek_upstream_requests_total",
            "Total upstream provider requests",
        ),
        &["status"], // "success", "unauthenticated", "rate_limited", "transient", "empty"
    )
    .unwrap()
});

/// Backoff retries performed against the upstream provider.
pub static UPSTREAM_RETRIES: Lazy<IntCounter> = Lazy::new(|| {
    IntCounter::new(
        "eduseek_upstream_retries_total",
        "Total upstream retry attempts after rate limiting",
    )
    .unwrap()
});

/// Record one failed upstream request under its taxonomy label.
pub fn observe_upstream(error: &FetchError) {
    let status = match error {
        FetchError::Unauthenticated(_) => "unauthenticated",
        FetchError::RateLimited => "rate_limited",
        FetchError::Transient(_) => "transient",
        FetchError::Empty => "empty",
    };
    UPSTREAM_REQUESTS.with_label_values(&[status]).inc();
}

/// Get all core metrics for registration in a registry.
pub fn all_metrics() -> Vec<Box<dyn prometheus::core::Collector>> {
    vec![
        Box::new(SEARCH_REQUESTS.clone()),
        Box::new(SEARCH_RESULT_COUNT.clone()),
        Box::new(UPSTREAM_REQUESTS.clone()),
        Box::new(UPSTREAM_RETRIES.clone()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_observe_upstream_labels() {
        let before = UPSTREAM_REQUESTS.with_label_values(&["rate_limited"]).get();
        observe_upstream(&FetchError::RateLimited);
        let after = UPSTREAM_REQUESTS.with_label_values(&["rate_limited"]).get();
        assert_eq!(after, before + 1);
    }

    #[test]
    fn test_all_metrics_register_cleanly() {
        let registry = prometheus::Registry::new();
        for metric in all_metrics() {
            registry.register(metric).unwrap();
        }
    }
}
