use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    doc::ApiDoc,
    features::{athletes, gyms, uploads},
    state::AppState,
};

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Full application router: API routes, Swagger UI, CORS and request tracing.
pub fn router(state: AppState, upload_limit_bytes: usize) -> Router {
    let api = Router::new()
        .nest(
            "/athletes",
            athletes::routes::routes().merge(uploads::routes::routes(upload_limit_bytes)),
        )
        .nest("/gyms", gyms::routes::routes());

    Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
