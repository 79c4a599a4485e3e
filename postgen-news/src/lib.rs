//! News lookup for article generation
//!
//! This crate provides clients for fetching recent headlines from:
//! - Currents API: direct HTTP call (default)
//! - NewsAPI.org: keyword search with relevancy sorting
//!
//! Both sit behind [`NewsSource`]; [`NewsLookup`] reduces their output to a
//! [`postgen_core::NewsDigest`] and never fails.

pub mod currents;
pub mod error;
pub mod lookup;
pub mod newsapi;
pub mod types;

pub use currents::CurrentsClient;
pub use error::NewsError;
pub use lookup::{NewsLookup, NewsSource};
pub use newsapi::NewsApiClient;

use std::{sync::Arc, time::Duration};

use postgen_core::{AppConfig, NewsProvider};

/// Build the news backend selected by configuration
pub fn source_from_config(config: &AppConfig) -> Result<Arc<dyn NewsSource>, NewsError> {
    let timeout = Duration::from_secs(config.news_timeout_secs);
    let source: Arc<dyn NewsSource> = match config.news_provider {
        NewsProvider::Currents => {
            let mut client = CurrentsClient::new(config.news_api_key.clone(), timeout)?;
            if let Some(base_url) = &config.news_base_url {
                client = client.with_base_url(base_url);
            }
            Arc::new(client)
        }
        NewsProvider::NewsApi => {
            let mut client = NewsApiClient::new(config.news_api_key.clone(), timeout)?;
            if let Some(base_url) = &config.news_base_url {
                client = client.with_base_url(base_url);
            }
            Arc::new(client)
        }
    };
    Ok(source)
}
