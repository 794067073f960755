//! Search orchestrator - the public entry point of the subsystem.
//!
//! Coordinates query building, the retry-driven upstream fetch, and
//! classification, falling back to the curated catalog on persistent
//! failure. `search` is infallible: every path resolves to a
//! [`SearchOutcome`], never an error.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::VideoSearchConfig;
use crate::metrics;

use super::classifier;
use super::fallback::FallbackCatalog;
use super::query;
use super::retry::{FailureCause, RetryController, RetryPolicy, Sleeper};
use super::types::{ResultSource, SearchOutcome, SearchRequest, VideoRecord, VideoSource};
use super::youtube::YoutubeSource;

/// Orchestrates one sequential search pipeline per call.
///
/// `source` is `None` in demo mode (no usable credential); the service
/// then serves the fallback catalog without touching the network.
pub struct VideoSearchService {
    source: Option<Arc<dyn VideoSource>>,
    retry: RetryController,
}

impl VideoSearchService {
    pub fn new(source: Option<Arc<dyn VideoSource>>, policy: RetryPolicy) -> Self {
        Self {
            source,
            retry: RetryController::new(policy),
        }
    }

    /// Like [`VideoSearchService::new`] with an injected sleeper, so tests
    /// drive the backoff cycle without real delays.
    pub fn with_sleeper(
        source: Option<Arc<dyn VideoSource>>,
        policy: RetryPolicy,
        sleeper: Arc<dyn Sleeper>,
    ) -> Self {
        Self {
            source,
            retry: RetryController::with_sleeper(policy, sleeper),
        }
    }

    /// Build the service from configuration. A missing or placeholder
    /// credential yields a demo-mode service that never attempts a call.
    pub fn from_config(config: &VideoSearchConfig) -> Result<Self, reqwest::Error> {
        let source: Option<Arc<dyn VideoSource>> = if config.credential_configured() {
            Some(Arc::new(YoutubeSource::new(config)?))
        } else {
            info!("no video API credential configured, serving curated catalog only");
            None
        };

        Ok(Self::new(source, RetryPolicy::from(&config.retry)))
    }

    /// Whether live upstream search is available.
    pub fn is_live(&self) -> bool {
        self.source.is_some()
    }

    /// Execute one logical search.
    ///
    /// Never returns an error: upstream failures degrade to the fallback
    /// catalog with a human-readable diagnostic. Facet filters apply to
    /// the final record set regardless of source.
    pub async fn search(&self, request: &SearchRequest) -> SearchOutcome {
        let source = match &self.source {
            Some(source) => source,
            None => {
                return fallback_outcome(
                    request,
                    "Demo mode: no video API credential is configured; showing curated results.",
                );
            }
        };

        let term = query::build(&request.term, request.subject, request.language);
        debug!(term = %term, "starting live video search");

        match self.retry.run(source.as_ref(), &term).await {
            Ok(raw_items) => {
                let records: Vec<VideoRecord> = raw_items
                    .into_iter()
                    .map(|item| {
                        let tags =
                            classifier::classify(&format!("{} {}", item.title, item.description));
                        VideoRecord::from_raw(item, tags)
                    })
                    .collect();

                let records = apply_facets(records, request);

                metrics::SEARCH_REQUESTS.with_label_values(&["live"]).inc();
                metrics::SEARCH_RESULT_COUNT.observe(records.len() as f64);
                debug!(results = records.len(), "live search complete");

                SearchOutcome {
                    total_count: records.len(),
                    records,
                    source: ResultSource::Live,
                    diagnostic: None,
                }
            }
            Err(cause) => {
                warn!(?cause, "live search failed, serving curated catalog");
                fallback_outcome(request, diagnostic_for(cause))
            }
        }
    }
}

/// Filter records by exact tag match for each requested facet.
///
/// Pure post-filter: applying it twice with the same request is a no-op.
pub fn apply_facets(records: Vec<VideoRecord>, request: &SearchRequest) -> Vec<VideoRecord> {
    records
        .into_iter()
        .filter(|r| request.subject.is_none_or(|subject| r.subject == subject))
        .filter(|r| request.language.is_none_or(|language| r.language == language))
        .filter(|r| request.level.is_none_or(|level| r.level == level))
        .collect()
}

fn fallback_outcome(request: &SearchRequest, diagnostic: &str) -> SearchOutcome {
    let records = apply_facets(FallbackCatalog::all(), request);

    metrics::SEARCH_REQUESTS.with_label_values(&["fallback"]).inc();
    metrics::SEARCH_RESULT_COUNT.observe(records.len() as f64);

    SearchOutcome {
        total_count: records.len(),
        records,
        source: ResultSource::Fallback,
        diagnostic: Some(diagnostic.to_string()),
    }
}

fn diagnostic_for(cause: FailureCause) -> &'static str {
    match cause {
        FailureCause::Unauthenticated => {
            "Live search unavailable: the video API credential was rejected; showing curated results."
        }
        FailureCause::RateLimited => {
            "Live search unavailable: the video API quota is exhausted; showing curated results."
        }
        FailureCause::Transient => {
            "Live search unavailable: the video service could not be reached; showing curated results."
        }
        FailureCause::NoResults => {
            "No live videos matched this search; showing curated results."
        }
    }
}
