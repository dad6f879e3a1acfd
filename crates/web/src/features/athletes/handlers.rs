use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    dto::{athlete::AthleteInput, common::ApiResponse},
    models::Athlete,
};

use crate::{error::WebError, extract::JsonBody, state::AppState};

use super::services;

#[utoipa::path(
    get,
    path = "/api/athletes",
    responses(
        (status = 200, description = "All athletes sorted by name, wrapped in a {success, data} envelope", body = Vec<Athlete>),
        (status = 500, description = "Backing service error")
    ),
    tag = "athletes"
)]
pub async fn list_athletes(State(state): State<AppState>) -> Result<Response, WebError> {
    let athletes = services::list_athletes(state.athletes.as_ref()).await?;

    Ok(Json(ApiResponse::success(athletes)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/athletes/{slug}",
    params(
        ("slug" = String, Path, description = "Athlete slug")
    ),
    responses(
        (status = 200, description = "Athlete found", body = Athlete),
        (status = 404, description = "Athlete not found")
    ),
    tag = "athletes"
)]
pub async fn get_athlete(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, WebError> {
    let athlete = services::get_athlete_by_slug(state.athletes.as_ref(), &slug).await?;

    Ok(Json(ApiResponse::success(athlete)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/athletes",
    request_body = AthleteInput,
    responses(
        (status = 201, description = "Athlete created successfully", body = Athlete),
        (status = 400, description = "Missing required fields or validation error"),
        (status = 409, description = "Slug already exists")
    ),
    tag = "athletes"
)]
pub async fn create_athlete(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<AthleteInput>,
) -> Result<Response, WebError> {
    let athlete = services::create_athlete(state.athletes.as_ref(), req).await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(athlete))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/athletes/{slug}",
    params(
        ("slug" = String, Path, description = "Athlete slug")
    ),
    request_body = AthleteInput,
    responses(
        (status = 200, description = "Athlete updated successfully", body = Athlete),
        (status = 400, description = "Missing required fields or validation error"),
        (status = 404, description = "Athlete not found"),
        (status = 409, description = "Slug already exists")
    ),
    tag = "athletes"
)]
pub async fn update_athlete(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    JsonBody(update_req): JsonBody<AthleteInput>,
) -> Result<Response, WebError> {
    let updated = services::update_athlete(state.athletes.as_ref(), &slug, update_req).await?;

    Ok(Json(ApiResponse::success(updated)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/athletes/{slug}",
    params(
        ("slug" = String, Path, description = "Athlete slug")
    ),
    responses(
        (status = 200, description = "Athlete deleted (or was already absent)"),
        (status = 500, description = "Backing service error")
    ),
    tag = "athletes"
)]
pub async fn delete_athlete(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Response, WebError> {
    services::delete_athlete(state.athletes.as_ref(), &slug).await?;

    Ok(Json(ApiResponse::<()>::empty()).into_response())
}
