//! Route definitions for the REST API.

mod documents;
mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Document understanding
        .route("/documents", post(documents::upload_document))
        // Attach state
        .with_state(state)
}

pub use documents::*;
pub use health::*;
