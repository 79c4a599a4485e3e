//! Topic to headline digest reduction

use std::sync::Arc;

use async_trait::async_trait;
use postgen_core::{NewsDigest, MAX_HEADLINES};
use tracing::{info, instrument, warn};

use crate::error::NewsError;

/// A news search backend
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Short backend name used in logs
    fn name(&self) -> &'static str;

    /// Search recent articles for `topic` and return their titles, most relevant first.
    ///
    /// Backends may return more than `limit` titles; callers truncate.
    async fn search_headlines(
        &self,
        topic: &str,
        language: &str,
        limit: usize,
    ) -> Result<Vec<String>, NewsError>;
}

/// Turns a topic into a [`NewsDigest`], degrading to a sentinel on failure
#[derive(Clone)]
pub struct NewsLookup {
    source: Arc<dyn NewsSource>,
    language: String,
}

impl NewsLookup {
    pub fn new(source: Arc<dyn NewsSource>, language: impl Into<String>) -> Self {
        Self {
            source,
            language: language.into(),
        }
    }

    /// Fetch up to five recent headlines for `topic`.
    ///
    /// Never fails: an empty result yields the "no news" sentinel and a
    /// provider failure yields the "provider error" sentinel.
    #[instrument(skip(self), fields(source = self.source.name()))]
    pub async fn lookup(&self, topic: &str) -> NewsDigest {
        match self
            .source
            .search_headlines(topic, &self.language, MAX_HEADLINES)
            .await
        {
            Ok(headlines) => {
                let digest = NewsDigest::from_headlines(headlines);
                info!(
                    "News lookup returned {} headline(s) for '{}'",
                    digest.headline_count(),
                    topic
                );
                digest
            }
            Err(e) => {
                warn!("News lookup failed, continuing without headlines: {}", e);
                NewsDigest::provider_error()
            }
        }
    }
}
