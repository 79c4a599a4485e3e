//! Request-scoped article data structures

use serde::{Deserialize, Serialize};

/// Maximum number of headlines folded into a digest
pub const MAX_HEADLINES: usize = 5;

/// Digest text used when the news service returned no items
pub const NO_NEWS_SENTINEL: &str = "no recent news found";

/// Digest text used when the news service could not be reached or parsed
pub const PROVIDER_ERROR_SENTINEL: &str = "no recent news found due to provider error";

/// Caller-supplied subject driving both news search and generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic(String);

impl Topic {
    /// Returns `None` for an empty or whitespace-only topic.
    ///
    /// The topic is otherwise kept verbatim.
    pub fn parse(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Newline-joined block of recent headlines, or a sentinel when none are available
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsDigest {
    text: String,
    headline_count: usize,
}

impl NewsDigest {
    /// Build a digest from headlines in the order the provider returned them.
    ///
    /// Blank titles are skipped and at most [`MAX_HEADLINES`] are kept. Falls
    /// back to [`NO_NEWS_SENTINEL`] when nothing usable remains.
    pub fn from_headlines<I, S>(headlines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let kept: Vec<String> = headlines
            .into_iter()
            .map(|h| h.as_ref().trim().to_string())
            .filter(|h| !h.is_empty())
            .take(MAX_HEADLINES)
            .collect();

        if kept.is_empty() {
            Self::no_news()
        } else {
            Self {
                text: kept.join("\n"),
                headline_count: kept.len(),
            }
        }
    }

    pub fn no_news() -> Self {
        Self {
            text: NO_NEWS_SENTINEL.to_string(),
            headline_count: 0,
        }
    }

    pub fn provider_error() -> Self {
        Self {
            text: PROVIDER_ERROR_SENTINEL.to_string(),
            headline_count: 0,
        }
    }

    /// True when the digest carries no real headlines
    pub fn is_sentinel(&self) -> bool {
        self.text == NO_NEWS_SENTINEL || self.text == PROVIDER_ERROR_SENTINEL
    }

    /// Number of headlines in the digest (0 for a sentinel)
    pub fn headline_count(&self) -> usize {
        self.headline_count
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

/// Generated title, meta-description and body for one topic
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedArticle {
    /// Single-line headline
    pub title: String,
    /// Single-sentence summary derived from the title
    pub meta_description: String,
    /// Long-form article body
    pub post_content: String,
}
