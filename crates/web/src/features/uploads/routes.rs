use axum::{Router, extract::DefaultBodyLimit, routing::post};

use super::handlers::upload_athlete_image;
use crate::state::AppState;

/// Mounted under `/api/athletes`, next to the athlete routes.
pub fn routes(body_limit: usize) -> Router<AppState> {
    Router::new()
        .route("/upload", post(upload_athlete_image))
        .layer(DefaultBodyLimit::max(body_limit))
}
