pub mod deactivate;
pub mod list;

pub use deactivate::deactivate;
pub use list::list;

use axum::http::StatusCode;
use axum::routing::any;
use axum::Router;
use std::sync::Arc;

use crate::storage::EntryStore;

/// Shared State für alle Endpunkte
pub struct ApiState {
    pub store: Arc<dyn EntryStore>,
}

/// Router für die beiden Service-Endpunkte; jeder andere Pfad ist 404
pub fn router(state: Arc<ApiState>) -> Router {
    // A wrong method answers 404 rather than 405, so the routes accept any
    // method and the handlers check it themselves.
    Router::new()
        .route("/list", any(list))
        .route("/deactivate", any(deactivate))
        .fallback(not_found)
        .with_state(state)
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "404 not found.")
}
