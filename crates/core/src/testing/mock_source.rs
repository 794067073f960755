//! Mock video source for testing.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::search::{FetchError, RawVideoItem, VideoSource};

/// A handler that produces a fetch outcome dynamically from the query.
type FetchHandler = Box<dyn Fn(&str) -> Result<Vec<RawVideoItem>, FetchError> + Send + Sync>;

/// Mock implementation of the [`VideoSource`] trait.
///
/// Provides controllable behavior for testing:
/// - Return configurable raw items
/// - Track fetched search terms for assertions
/// - Simulate any [`FetchError`] on every call, or script outcomes per
///   call with a handler closure
///
/// Mirrors the upstream contract: an empty configured result set is
/// reported as [`FetchError::Empty`], not as `Ok(vec![])`.
pub struct MockVideoSource {
    /// Configured items to return.
    results: Arc<RwLock<Vec<RawVideoItem>>>,
    /// Recorded search terms, in call order.
    fetches: Arc<RwLock<Vec<String>>>,
    /// Handler for dynamic outcome generation; takes precedence over
    /// `results` when set.
    handler: Arc<RwLock<Option<FetchHandler>>>,
}

impl std::fmt::Debug for MockVideoSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockVideoSource")
            .field("results", &"<results>")
            .field("fetches", &"<fetches>")
            .field("handler", &"<handler>")
            .finish()
    }
}

impl Default for MockVideoSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockVideoSource {
    /// Create a new mock source with no results (fetch yields
    /// [`FetchError::Empty`]).
    pub fn new() -> Self {
        Self {
            results: Arc::new(RwLock::new(Vec::new())),
            fetches: Arc::new(RwLock::new(Vec::new())),
            handler: Arc::new(RwLock::new(None)),
        }
    }

    /// Create a mock source with predefined items.
    pub fn with_results(results: Vec<RawVideoItem>) -> Self {
        Self {
            results: Arc::new(RwLock::new(results)),
            fetches: Arc::new(RwLock::new(Vec::new())),
            handler: Arc::new(RwLock::new(None)),
        }
    }

    /// Replace the items returned by subsequent fetches.
    pub async fn set_results(&self, results: Vec<RawVideoItem>) {
        *self.results.write().await = results;
    }

    /// Fail every subsequent fetch with the given error.
    pub async fn fail_always(&self, error: FetchError) {
        self.set_handler(move |_| Err(error.clone())).await;
    }

    /// Set a handler that produces the outcome for each fetch.
    pub async fn set_handler<F>(&self, handler: F)
    where
        F: Fn(&str) -> Result<Vec<RawVideoItem>, FetchError> + Send + Sync + 'static,
    {
        *self.handler.write().await = Some(Box::new(handler));
    }

    /// Clear any configured handler.
    pub async fn clear_handler(&self) {
        *self.handler.write().await = None;
    }

    /// Search terms fetched so far, in call order.
    pub async fn recorded_fetches(&self) -> Vec<String> {
        self.fetches.read().await.clone()
    }

    /// Number of fetches performed.
    pub async fn fetch_count(&self) -> usize {
        self.fetches.read().await.len()
    }
}

#[async_trait]
impl VideoSource for MockVideoSource {
    fn name(&self) -> &str {
        "mock"
    }

    async fn fetch(&self, search_term: &str) -> Result<Vec<RawVideoItem>, FetchError> {
        self.fetches.write().await.push(search_term.to_string());

        let handler = self.handler.read().await;
        if let Some(ref h) = *handler {
            return h(search_term);
        }
        drop(handler);

        let results = self.results.read().await.clone();
        if results.is_empty() {
            return Err(FetchError::Empty);
        }
        Ok(results)
    }
}
