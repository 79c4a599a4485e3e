//! NewsAPI.org client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::error::NewsError;
use crate::lookup::NewsSource;
use crate::types::NewsApiResponse;

const NEWSAPI_BASE: &str = "https://newsapi.org";

/// Title NewsAPI substitutes for articles pulled by the publisher
const REMOVED_TITLE: &str = "[Removed]";

/// NewsAPI.org client
#[derive(Debug, Clone)]
pub struct NewsApiClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl NewsApiClient {
    /// Create a new NewsAPI client with a per-request timeout
    pub fn new(api_key: String, timeout: Duration) -> Result<Self, NewsError> {
        if api_key.trim().is_empty() {
            return Err(NewsError::InvalidConfig("NewsAPI key is empty".to_string()));
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("postgen/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| NewsError::InvalidConfig(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            base_url: NEWSAPI_BASE.to_string(),
        })
    }

    /// Point the client at a different host
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Search all articles for `query`, most relevant first
    #[instrument(skip(self))]
    pub async fn everything(
        &self,
        query: &str,
        language: &str,
        page_size: usize,
    ) -> Result<NewsApiResponse, NewsError> {
        let url = format!("{}/v2/everything", self.base_url);
        let page_size = page_size.to_string();

        let response = self
            .client
            .get(&url)
            .header("X-Api-Key", &self.api_key)
            .query(&[
                ("q", query),
                ("language", language),
                ("sortBy", "relevancy"),
                ("pageSize", page_size.as_str()),
            ])
            .send()
            .await
            .map_err(|e| NewsError::RequestFailed(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| NewsError::RequestFailed(e.to_string()))?;

        // NewsAPI reports errors as JSON bodies on non-2xx statuses
        let parsed: NewsApiResponse = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(_) if !status.is_success() => {
                return Err(NewsError::ApiError {
                    status: status.as_u16(),
                    message: body,
                });
            }
            Err(e) => return Err(NewsError::ParseError(e.to_string())),
        };

        if !status.is_success() || parsed.status != "ok" {
            let message = match (parsed.code, parsed.message) {
                (Some(code), Some(message)) => format!("{}: {}", code, message),
                (None, Some(message)) => message,
                (Some(code), None) => code,
                (None, None) => format!("NewsAPI returned status '{}'", parsed.status),
            };
            return Err(NewsError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        debug!(
            "Received {} of {:?} results from NewsAPI",
            parsed.articles.len(),
            parsed.total_results
        );
        Ok(parsed)
    }
}

#[async_trait]
impl NewsSource for NewsApiClient {
    fn name(&self) -> &'static str {
        "newsapi"
    }

    async fn search_headlines(
        &self,
        topic: &str,
        language: &str,
        limit: usize,
    ) -> Result<Vec<String>, NewsError> {
        let response = self.everything(topic, language, limit).await?;
        Ok(response
            .articles
            .into_iter()
            .filter_map(|article| article.title)
            .filter(|title| title.as_str() != REMOVED_TITLE)
            .take(limit)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn client_for(server: &mockito::Server) -> NewsApiClient {
        NewsApiClient::new("na-key".to_string(), Duration::from_secs(5))
            .unwrap()
            .with_base_url(&server.url())
    }

    #[tokio::test]
    async fn test_search_headlines() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/v2/everything")
            .match_header("x-api-key", "na-key")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("q".into(), "renewable energy".into()),
                Matcher::UrlEncoded("language".into(), "en".into()),
                Matcher::UrlEncoded("sortBy".into(), "relevancy".into()),
                Matcher::UrlEncoded("pageSize".into(), "5".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{
                    "status": "ok",
                    "totalResults": 3,
                    "articles": [
                        {"source": {"id": null, "name": "Wire"}, "title": "A", "url": "https://a"},
                        {"source": {"id": null, "name": "Wire"}, "title": "[Removed]", "url": "https://removed.com"},
                        {"source": {"id": null, "name": "Wire"}, "title": "B", "url": "https://b"}
                    ]
                }"#,
            )
            .create_async()
            .await;

        let titles = client_for(&server)
            .search_headlines("renewable energy", "en", 5)
            .await
            .unwrap();

        assert_eq!(titles, vec!["A", "B"]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_search_headlines_empty() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/v2/everything")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"status":"ok","totalResults":0,"articles":[]}"#)
            .create_async()
            .await;

        let titles = client_for(&server)
            .search_headlines("xyzzy-no-results", "en", 5)
            .await
            .unwrap();
        assert!(titles.is_empty());
    }

    #[tokio::test]
    async fn test_only_removed_titles_is_empty() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/v2/everything")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(
                r#"{
                    "status": "ok",
                    "totalResults": 2,
                    "articles": [
                        {"source": {"id": null, "name": "Wire"}, "title": "[Removed]", "url": "https://removed.com"},
                        {"source": {"id": null, "name": "Wire"}, "title": "[Removed]", "url": "https://removed.com"}
                    ]
                }"#,
            )
            .create_async()
            .await;

        let titles = client_for(&server)
            .search_headlines("renewable energy", "en", 5)
            .await
            .unwrap();
        assert!(titles.is_empty());
    }

    #[tokio::test]
    async fn test_error_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/v2/everything")
            .match_query(Matcher::Any)
            .with_status(401)
            .with_body(r#"{"status":"error","code":"apiKeyInvalid","message":"Your API key is invalid."}"#)
            .create_async()
            .await;

        let err = client_for(&server)
            .search_headlines("t", "en", 5)
            .await
            .unwrap_err();
        match err {
            NewsError::ApiError { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "apiKeyInvalid: Your API key is invalid.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_non_json_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/v2/everything")
            .match_query(Matcher::Any)
            .with_status(502)
            .with_body("Bad Gateway")
            .create_async()
            .await;

        let err = client_for(&server)
            .search_headlines("t", "en", 5)
            .await
            .unwrap_err();
        assert!(matches!(err, NewsError::ApiError { status: 502, .. }));
    }
}
