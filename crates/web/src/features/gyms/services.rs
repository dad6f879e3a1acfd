use chrono::Utc;
use storage::{
    dto::gym::{CreateGymRequest, UpdateGymRequest},
    models::Gym,
    repository::GymRepository,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::{WebError, WebResult};

const NOT_FOUND: &str = "Gym not found";

/// Gym ids that do not parse cannot match any stored gym.
fn parse_id(id: &str) -> WebResult<Uuid> {
    Uuid::parse_str(id).map_err(|_| WebError::NotFound(NOT_FOUND))
}

pub async fn list_gyms(repo: &dyn GymRepository) -> WebResult<Vec<Gym>> {
    Ok(repo.get_all().await?)
}

pub async fn get_gym(repo: &dyn GymRepository, id: &str) -> WebResult<Gym> {
    repo.get_by_id(parse_id(id)?)
        .await?
        .ok_or(WebError::NotFound(NOT_FOUND))
}

pub async fn create_gym(repo: &dyn GymRepository, req: CreateGymRequest) -> WebResult<Gym> {
    req.validate()?;

    let gym = req
        .into_gym(Utc::now())
        .map_err(|msg| WebError::BadRequest(msg.to_string()))?;

    let gym = repo.add(gym).await?;
    tracing::info!(id = %gym.id, name = %gym.name, "Created gym");

    Ok(gym)
}

pub async fn update_gym(
    repo: &dyn GymRepository,
    id: &str,
    patch: UpdateGymRequest,
) -> WebResult<Gym> {
    let id = parse_id(id)?;
    patch.validate()?;

    if let Some(body_id) = patch.id
        && body_id != id
    {
        tracing::warn!(%id, %body_id, "Ignoring gym id in update body");
    }

    let gym = repo
        .update(id, patch)
        .await?
        .ok_or(WebError::NotFound(NOT_FOUND))?;
    tracing::info!(%id, "Updated gym");

    Ok(gym)
}

pub async fn delete_gym(repo: &dyn GymRepository, id: &str) -> WebResult<Gym> {
    let gym = repo
        .delete(parse_id(id)?)
        .await?
        .ok_or(WebError::NotFound(NOT_FOUND))?;
    tracing::info!(id = %gym.id, "Deleted gym");

    Ok(gym)
}
