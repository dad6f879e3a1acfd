use axum::{Router, routing::get};

use super::handlers::{create_gym, delete_gym, get_gym, list_gyms, update_gym};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_gyms).post(create_gym))
        .route("/:id", get(get_gym).put(update_gym).delete(delete_gym))
}
