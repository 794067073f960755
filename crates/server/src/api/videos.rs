//! Video search API handlers.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use eduseek_core::{Language, Level, SearchOutcome, SearchRequest, Subject};

use crate::state::AppState;

/// Query parameters for `GET /api/v1/videos/search`.
///
/// Facets are closed enums; an unknown value is a 400 from the serde
/// layer rather than a silently empty filter.
#[derive(Debug, Deserialize)]
pub struct VideoSearchParams {
    /// Free-text search term. Optional; the service substitutes a default
    /// seed term for an empty search box.
    #[serde(default)]
    pub q: String,
    #[serde(default)]
    pub subject: Option<Subject>,
    #[serde(default)]
    pub language: Option<Language>,
    #[serde(default)]
    pub level: Option<Level>,
}

/// GET /api/v1/videos/search
///
/// Execute a video search. Always answers 200: upstream failures degrade
/// to the curated catalog, with the cause carried in the outcome's
/// `diagnostic` field for non-blocking display.
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<VideoSearchParams>,
) -> Json<SearchOutcome> {
    let request = SearchRequest {
        term: params.q,
        subject: params.subject,
        language: params.language,
        level: params.level,
    };

    Json(state.search().search(&request).await)
}
