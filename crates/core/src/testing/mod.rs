//! Testing utilities and mock implementations.
//!
//! Provides a mock video source and a recording sleeper so the whole
//! search pipeline can be exercised without network access or real
//! backoff delays.
//!
//! # Example
//!
//! ```rust,ignore
//! use eduseek_core::testing::{fixtures, MockVideoSource, RecordingSleeper};
//!
//! let source = MockVideoSource::with_results(vec![
//!     fixtures::raw_video("v1", "Python tutorial in Telugu"),
//! ]);
//!
//! let items = source.fetch("python").await?;
//! assert_eq!(source.fetch_count().await, 1);
//! ```

mod mock_source;

pub use mock_source::MockVideoSource;

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::search::Sleeper;

/// A [`Sleeper`] that records requested delays and returns immediately.
#[derive(Debug, Default)]
pub struct RecordingSleeper {
    slept: RwLock<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Delays requested so far, in call order.
    pub async fn slept(&self) -> Vec<Duration> {
        self.slept.read().await.clone()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.slept.write().await.push(duration);
    }
}

/// Test fixtures and helper functions.
pub mod fixtures {
    use crate::search::RawVideoItem;

    /// Create a raw upstream item with reasonable defaults.
    pub fn raw_video(id: &str, title: &str) -> RawVideoItem {
        RawVideoItem {
            id: id.to_string(),
            title: title.to_string(),
            description: format!("{} - full lesson with examples", title),
            thumbnail_url: format!("https://img.example/{}/mqdefault.jpg", id),
            channel: "Mock Study Channel".to_string(),
            watch_url: format!("https://www.youtube.com/watch?v={}", id),
            published_at: None,
        }
    }
}
