//! API route definitions

mod health;
mod posts;

use axum::Router;
use crate::AppState;

/// Create all API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(posts::routes())
        .merge(health::routes())
}
