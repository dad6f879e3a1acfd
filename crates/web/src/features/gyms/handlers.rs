use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    dto::{
        common::ApiResponse,
        gym::{CreateGymRequest, UpdateGymRequest},
    },
    models::Gym,
};

use crate::{error::WebError, extract::JsonBody, state::AppState};

use super::services;

#[utoipa::path(
    get,
    path = "/api/gyms",
    responses(
        (status = 200, description = "All gyms in insertion order, wrapped in a {success, data} envelope", body = Vec<Gym>)
    ),
    tag = "gyms"
)]
pub async fn list_gyms(State(state): State<AppState>) -> Result<Response, WebError> {
    let gyms = services::list_gyms(state.gyms.as_ref()).await?;

    Ok(Json(ApiResponse::success(gyms)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/gyms/{id}",
    params(
        ("id" = String, Path, description = "Gym id")
    ),
    responses(
        (status = 200, description = "Gym found", body = Gym),
        (status = 404, description = "Gym not found")
    ),
    tag = "gyms"
)]
pub async fn get_gym(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let gym = services::get_gym(state.gyms.as_ref(), &id).await?;

    Ok(Json(ApiResponse::success(gym)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/gyms",
    request_body = CreateGymRequest,
    responses(
        (status = 201, description = "Gym created successfully", body = Gym),
        (status = 400, description = "Missing required fields or validation error")
    ),
    tag = "gyms"
)]
pub async fn create_gym(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateGymRequest>,
) -> Result<Response, WebError> {
    let gym = services::create_gym(state.gyms.as_ref(), req).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(gym))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/gyms/{id}",
    params(
        ("id" = String, Path, description = "Gym id")
    ),
    request_body = UpdateGymRequest,
    responses(
        (status = 200, description = "Gym updated successfully", body = Gym),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Gym not found")
    ),
    tag = "gyms"
)]
pub async fn update_gym(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(patch): JsonBody<UpdateGymRequest>,
) -> Result<Response, WebError> {
    let gym = services::update_gym(state.gyms.as_ref(), &id, patch).await?;

    Ok(Json(ApiResponse::success(gym)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/gyms/{id}",
    params(
        ("id" = String, Path, description = "Gym id")
    ),
    responses(
        (status = 200, description = "Gym deleted; the removed record is returned", body = Gym),
        (status = 404, description = "Gym not found")
    ),
    tag = "gyms"
)]
pub async fn delete_gym(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let gym = services::delete_gym(state.gyms.as_ref(), &id).await?;

    Ok(Json(ApiResponse::success(gym)).into_response())
}
