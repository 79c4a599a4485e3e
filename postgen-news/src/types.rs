//! API-specific types for Currents and NewsAPI

use serde::Deserialize;

// ============================================================================
// Currents API Types
// ============================================================================

/// Currents `latest-news` / `search` response
#[derive(Debug, Deserialize)]
pub struct CurrentsResponse {
    /// "ok" on success
    pub status: String,
    /// Matching articles, most relevant first
    #[serde(default)]
    pub news: Vec<CurrentsArticle>,
    /// Error description when status is not "ok"
    #[serde(default)]
    pub msg: Option<String>,
}

/// Individual Currents article
#[derive(Debug, Deserialize)]
pub struct CurrentsArticle {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub published: Option<String>,
}

// ============================================================================
// NewsAPI Types
// ============================================================================

/// NewsAPI `everything` response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsApiResponse {
    /// "ok" or "error"
    pub status: String,
    #[serde(default)]
    pub total_results: Option<u64>,
    #[serde(default)]
    pub articles: Vec<NewsApiArticle>,
    /// Machine-readable error code (e.g. "apiKeyInvalid")
    #[serde(default)]
    pub code: Option<String>,
    /// Human-readable error message
    #[serde(default)]
    pub message: Option<String>,
}

/// Individual NewsAPI article
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsApiArticle {
    #[serde(default)]
    pub source: Option<NewsApiSource>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct NewsApiSource {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}
