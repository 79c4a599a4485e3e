//! Post Generator API Server
//!
//! HTTP API server that turns a topic into a generated article using recent
//! news headlines and a text-generation service.

mod routes;

use anyhow::Context;
use axum::{
    http::{header, Method},
    Router,
};
use postgen_core::AppConfig;
use postgen_llm::OpenAIClient;
use postgen_news::NewsLookup;
use postgen_services::ContentGenerator;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub content_generator: Arc<ContentGenerator>,
}

/// Build the router with CORS and request tracing applied
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .merge(routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    if let Err(e) = dotenvy::dotenv() {
        // Not an error if the file doesn't exist
        if !e.not_found() {
            eprintln!("Warning: Failed to load .env: {}", e);
        }
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,postgen_api=debug,tower_http=debug")),
        )
        .init();

    info!("Starting Post Generator API");

    // Refuse to start without both API keys
    let config = Arc::new(AppConfig::from_env().context("Failed to load configuration")?);
    info!(
        "Configuration loaded: news provider={}, language={}, model={}",
        config.news_provider, config.news_language, config.openai_model
    );

    // Initialize clients
    let news_source =
        postgen_news::source_from_config(&config).context("Failed to initialize news client")?;
    let news_lookup = NewsLookup::new(news_source, config.news_language.clone());
    let openai_client = Arc::new(OpenAIClient::from_config(&config));

    let content_generator = Arc::new(ContentGenerator::new(news_lookup, openai_client));
    info!("Content generator initialized");

    let app = build_router(AppState { content_generator });

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
