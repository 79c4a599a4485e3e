//! Process configuration
//!
//! Read once at startup and shared by reference with the news and generation
//! clients. API keys are never read from the ambient environment after this.

use std::{env, fmt, str::FromStr};

/// Backend used for news lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NewsProvider {
    /// Currents API, called directly over HTTP
    #[default]
    Currents,
    /// NewsAPI.org client
    NewsApi,
}

impl NewsProvider {
    /// Environment variable holding this provider's API key
    pub fn key_var(&self) -> &'static str {
        match self {
            NewsProvider::Currents => "CURRENTS_API_KEY",
            NewsProvider::NewsApi => "NEWS_API_KEY",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NewsProvider::Currents => "currents",
            NewsProvider::NewsApi => "newsapi",
        }
    }
}

impl fmt::Display for NewsProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NewsProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "currents" | "currentsapi" => Ok(NewsProvider::Currents),
            "newsapi" | "news_api" => Ok(NewsProvider::NewsApi),
            other => Err(format!(
                "unknown news provider '{}' (expected 'currents' or 'newsapi')",
                other
            )),
        }
    }
}

/// Service configuration
#[derive(Clone)]
pub struct AppConfig {
    /// Key for the text-generation service
    pub openai_api_key: String,
    /// Chat model used for all three generation steps
    pub openai_model: String,
    /// Optional API base override (e.g. a proxy or compatible server)
    pub openai_base_url: Option<String>,
    /// Selected news backend
    pub news_provider: NewsProvider,
    /// Key for the selected news backend
    pub news_api_key: String,
    /// Locale passed to the news search
    pub news_language: String,
    /// Timeout applied to news requests, in seconds
    pub news_timeout_secs: u64,
    /// Optional news API base override
    pub news_base_url: Option<String>,
    /// HTTP listen port
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Expects:
    /// - OPENAI_API_KEY: generation service key
    /// - CURRENTS_API_KEY or NEWS_API_KEY: key for the provider chosen by NEWS_PROVIDER
    ///
    /// Optional: NEWS_PROVIDER, NEWS_LANGUAGE, NEWS_TIMEOUT_SECS, NEWS_BASE_URL,
    /// OPENAI_MODEL, OPENAI_BASE_URL, PORT
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as unset
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let openai_api_key =
            get("OPENAI_API_KEY").ok_or(ConfigError::Missing("OPENAI_API_KEY"))?;

        let news_provider = match get("NEWS_PROVIDER") {
            Some(raw) => raw.parse::<NewsProvider>().map_err(|reason| ConfigError::Invalid {
                var: "NEWS_PROVIDER",
                reason,
            })?,
            None => NewsProvider::default(),
        };

        let news_api_key = get(news_provider.key_var())
            .ok_or(ConfigError::Missing(news_provider.key_var()))?;

        let news_timeout_secs = match get("NEWS_TIMEOUT_SECS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| ConfigError::Invalid {
                var: "NEWS_TIMEOUT_SECS",
                reason: format!("{}", e),
            })?,
            None => default_news_timeout_secs(),
        };

        let port = match get("PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::Invalid {
                var: "PORT",
                reason: format!("{}", e),
            })?,
            None => default_port(),
        };

        Ok(Self {
            openai_api_key,
            openai_model: get("OPENAI_MODEL").unwrap_or_else(default_openai_model),
            openai_base_url: get("OPENAI_BASE_URL"),
            news_provider,
            news_api_key,
            news_language: get("NEWS_LANGUAGE").unwrap_or_else(default_news_language),
            news_timeout_secs,
            news_base_url: get("NEWS_BASE_URL"),
            port,
        })
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("openai_api_key", &"<redacted>")
            .field("openai_model", &self.openai_model)
            .field("openai_base_url", &self.openai_base_url)
            .field("news_provider", &self.news_provider)
            .field("news_api_key", &"<redacted>")
            .field("news_language", &self.news_language)
            .field("news_timeout_secs", &self.news_timeout_secs)
            .field("news_base_url", &self.news_base_url)
            .field("port", &self.port)
            .finish()
    }
}

fn default_openai_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_news_language() -> String {
    "en".to_string()
}

fn default_news_timeout_secs() -> u64 {
    10
}

fn default_port() -> u16 {
    8081
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable must be set")]
    Missing(&'static str),

    #[error("Invalid value for {var}: {reason}")]
    Invalid { var: &'static str, reason: String },
}
