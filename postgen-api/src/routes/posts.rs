//! Article generation endpoint

use axum::{
    extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router,
};
use postgen_core::Topic;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::AppState;

/// Request body for `POST /generate-post`
#[derive(Debug, Deserialize)]
pub struct GeneratePostRequest {
    pub topic: String,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

/// Create post generation routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/generate-post", post(generate_post))
}

/// POST /generate-post - Generate title, meta-description and body for a topic
async fn generate_post(
    State(state): State<AppState>,
    Json(body): Json<GeneratePostRequest>,
) -> impl IntoResponse {
    let topic = match Topic::parse(body.topic) {
        Some(topic) => topic,
        None => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "topic must not be empty".to_string(),
                }),
            )
                .into_response();
        }
    };

    info!("Generating post for topic '{}'", topic.as_str());

    match state.content_generator.generate(topic.as_str()).await {
        Ok(article) => (StatusCode::OK, Json(article)).into_response(),
        Err(e) => {
            error!("Failed to generate post: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
