//! Resilient educational video search.
//!
//! This module is the heart of the crate: a `VideoSource` trait fronting
//! the upstream provider, a backoff/cooldown retry controller, a keyword
//! classifier, a curated fallback catalog, and the orchestrating
//! `VideoSearchService` that ties them together and never surfaces an
//! error to its caller.

pub mod classifier;
mod fallback;
pub mod query;
mod retry;
mod service;
mod types;
mod youtube;

pub use fallback::FallbackCatalog;
pub use retry::{
    backoff_delay, next_state, FailureCause, RetryController, RetryDecision, RetryPolicy,
    RetryState, Sleeper, TokioSleeper,
};
pub use service::{apply_facets, VideoSearchService};
pub use types::*;
pub use youtube::YoutubeSource;
