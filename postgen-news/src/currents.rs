//! Currents API client for recent-news search

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::error::NewsError;
use crate::lookup::NewsSource;
use crate::types::CurrentsResponse;

const CURRENTS_API_BASE: &str = "https://api.currentsapi.services";

/// Currents API client
#[derive(Debug, Clone)]
pub struct CurrentsClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl CurrentsClient {
    /// Create a new Currents client with a per-request timeout
    pub fn new(api_key: String, timeout: Duration) -> Result<Self, NewsError> {
        if api_key.trim().is_empty() {
            return Err(NewsError::InvalidConfig("Currents API key is empty".to_string()));
        }

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| NewsError::InvalidConfig(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            api_key,
            base_url: CURRENTS_API_BASE.to_string(),
        })
    }

    /// Point the client at a different host
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Fetch the latest news matching `keywords`
    #[instrument(skip(self))]
    pub async fn latest_news(
        &self,
        keywords: &str,
        language: &str,
        page_size: usize,
    ) -> Result<CurrentsResponse, NewsError> {
        let url = format!("{}/v1/latest-news", self.base_url);
        let page_size = page_size.to_string();

        let response = self
            .client
            .get(&url)
            .query(&[
                ("language", language),
                ("keywords", keywords),
                ("page_size", page_size.as_str()),
                ("apiKey", self.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| NewsError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(NewsError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let parsed: CurrentsResponse = response
            .json()
            .await
            .map_err(|e| NewsError::ParseError(e.to_string()))?;

        if parsed.status != "ok" {
            return Err(NewsError::ApiError {
                status: 200,
                message: parsed
                    .msg
                    .unwrap_or_else(|| format!("Currents returned status '{}'", parsed.status)),
            });
        }

        debug!("Received {} results from Currents", parsed.news.len());
        Ok(parsed)
    }
}

#[async_trait]
impl NewsSource for CurrentsClient {
    fn name(&self) -> &'static str {
        "currents"
    }

    async fn search_headlines(
        &self,
        topic: &str,
        language: &str,
        limit: usize,
    ) -> Result<Vec<String>, NewsError> {
        let response = self.latest_news(topic, language, limit).await?;
        Ok(response
            .news
            .into_iter()
            .filter_map(|article| article.title)
            .take(limit)
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::NewsLookup;
    use mockito::Matcher;
    use postgen_core::PROVIDER_ERROR_SENTINEL;
    use std::sync::Arc;
    use tokio::net::TcpListener;

    fn client_for(server: &mockito::Server) -> CurrentsClient {
        CurrentsClient::new("cur-key".to_string(), Duration::from_secs(5))
            .unwrap()
            .with_base_url(&server.url())
    }

    #[tokio::test]
    async fn test_search_headlines_sends_query_and_reads_titles() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/v1/latest-news")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("language".into(), "en".into()),
                Matcher::UrlEncoded("keywords".into(), "renewable energy".into()),
                Matcher::UrlEncoded("page_size".into(), "5".into()),
                Matcher::UrlEncoded("apiKey".into(), "cur-key".into()),
            ]))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"status":"ok","news":[{"title":"A"},{"title":"B"},{"title":"C"}],"page":1}"#,
            )
            .create_async()
            .await;

        let titles = client_for(&server)
            .search_headlines("renewable energy", "en", 5)
            .await
            .unwrap();

        assert_eq!(titles, vec!["A", "B", "C"]);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_search_headlines_empty() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/v1/latest-news")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"status":"ok","news":[],"page":1}"#)
            .create_async()
            .await;

        let titles = client_for(&server)
            .search_headlines("xyzzy-no-results", "en", 5)
            .await
            .unwrap();
        assert!(titles.is_empty());
    }

    #[tokio::test]
    async fn test_http_error_status() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/v1/latest-news")
            .match_query(Matcher::Any)
            .with_status(401)
            .with_body("Unauthorized")
            .create_async()
            .await;

        let err = client_for(&server)
            .search_headlines("t", "en", 5)
            .await
            .unwrap_err();
        match err {
            NewsError::ApiError { status, message } => {
                assert_eq!(status, 401);
                assert_eq!(message, "Unauthorized");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_provider_error_body() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/v1/latest-news")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"status":"error","msg":"quota exceeded"}"#)
            .create_async()
            .await;

        let err = client_for(&server)
            .search_headlines("t", "en", 5)
            .await
            .unwrap_err();
        assert!(err.to_string().contains("quota exceeded"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_parse_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/v1/latest-news")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body("<html>maintenance</html>")
            .create_async()
            .await;

        let err = client_for(&server)
            .search_headlines("t", "en", 5)
            .await
            .unwrap_err();
        assert!(matches!(err, NewsError::ParseError(_)));
    }

    #[test]
    fn test_empty_key_rejected() {
        assert!(matches!(
            CurrentsClient::new(" ".to_string(), Duration::from_secs(1)),
            Err(NewsError::InvalidConfig(_))
        ));
    }

    #[tokio::test]
    async fn test_unresponsive_server_times_out_to_sentinel() {
        // Accepts connections and never answers
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });

        let client = CurrentsClient::new("cur-key".to_string(), Duration::from_millis(300))
            .unwrap()
            .with_base_url(&format!("http://{}", addr));

        let err = client
            .search_headlines("renewable energy", "en", 5)
            .await
            .unwrap_err();
        assert!(matches!(err, NewsError::RequestFailed(_)));

        let lookup = NewsLookup::new(Arc::new(client), "en");
        let digest = lookup.lookup("renewable energy").await;
        assert_eq!(digest.as_str(), PROVIDER_ERROR_SENTINEL);
    }
}
