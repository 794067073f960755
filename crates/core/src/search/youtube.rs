//! YouTube Data API search backend implementation.
//!
//! One outbound request per [`VideoSource::fetch`] call; retries and
//! cooldowns are owned by the retry controller. Everything the provider
//! can do wrong is mapped onto the closed [`FetchError`] taxonomy before
//! it crosses the module boundary.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::config::VideoSearchConfig;
use crate::metrics;

use super::types::{FetchError, RawVideoItem, VideoSource};

/// YouTube Data API v3 search client.
pub struct YoutubeSource {
    client: Client,
    base_url: String,
    api_key: String,
    max_results: u32,
}

impl YoutubeSource {
    /// Create a new client from the video search configuration.
    pub fn new(config: &VideoSearchConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(u64::from(config.timeout_secs)))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            max_results: config.max_results,
        })
    }
}

#[async_trait]
impl VideoSource for YoutubeSource {
    fn name(&self) -> &str {
        "youtube"
    }

    async fn fetch(&self, search_term: &str) -> Result<Vec<RawVideoItem>, FetchError> {
        let url = format!("{}/search", self.base_url);
        let max_results = self.max_results.to_string();

        debug!(term = search_term, "querying video provider");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", search_term),
                ("part", "snippet"),
                ("type", "video"),
                ("maxResults", max_results.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                let error = if e.is_timeout() {
                    FetchError::Transient("request timed out".to_string())
                } else {
                    FetchError::Transient(e.to_string())
                };
                metrics::observe_upstream(&error);
                error
            })?;

        let status = response.status().as_u16();
        if let Some(error) = classify_status(status) {
            metrics::observe_upstream(&error);
            return Err(error);
        }

        let payload: SearchListResponse = response.json().await.map_err(|e| {
            let error = FetchError::Transient(format!("failed to parse response: {}", e));
            metrics::observe_upstream(&error);
            error
        })?;

        let items: Vec<RawVideoItem> = payload
            .items
            .into_iter()
            .filter_map(raw_from_item)
            .collect();

        if items.is_empty() {
            metrics::observe_upstream(&FetchError::Empty);
            return Err(FetchError::Empty);
        }

        debug!(term = search_term, results = items.len(), "provider search complete");
        metrics::UPSTREAM_REQUESTS.with_label_values(&["success"]).inc();

        Ok(items)
    }
}

/// Map an HTTP status code onto the error taxonomy. `None` means success.
fn classify_status(status: u16) -> Option<FetchError> {
    match status {
        200..=299 => None,
        401 | 403 => Some(FetchError::Unauthenticated(format!("HTTP {}", status))),
        429 => Some(FetchError::RateLimited),
        _ => Some(FetchError::Transient(format!("HTTP {}", status))),
    }
}

/// Convert one provider item, skipping entries without a video id
/// (channel and playlist hits slip through `type=video` on occasion).
fn raw_from_item(item: SearchItem) -> Option<RawVideoItem> {
    let id = item.id.video_id?;
    let snippet = item.snippet;

    Some(RawVideoItem {
        watch_url: format!("https://www.youtube.com/watch?v={}", id),
        title: snippet.title,
        description: snippet.description,
        thumbnail_url: snippet
            .thumbnails
            .medium
            .map(|t| t.url)
            .unwrap_or_default(),
        channel: snippet.channel_title,
        published_at: snippet.published_at.as_deref().and_then(parse_published_date),
        id,
    })
}

/// Parse the provider's RFC 3339 `publishedAt` timestamp.
fn parse_published_date(date_str: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(date_str)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

// YouTube API response types
#[derive(Debug, Deserialize)]
struct SearchListResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchItemId,
    #[serde(default)]
    snippet: Snippet,
}

#[derive(Debug, Deserialize)]
struct SearchItemId {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Snippet {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    thumbnails: Thumbnails,
    #[serde(rename = "channelTitle", default)]
    channel_title: String,
    #[serde(rename = "publishedAt")]
    published_at: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
struct Thumbnails {
    medium: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}
