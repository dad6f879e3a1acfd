use storage::{
    dto::athlete::AthleteInput,
    error::StorageError,
    models::Athlete,
    repository::AthleteRepository,
};
use validator::Validate;

use crate::error::{WebError, WebResult};

const NOT_FOUND: &str = "Athlete not found";

fn not_found(error: StorageError) -> WebError {
    match error {
        StorageError::NotFound => WebError::NotFound(NOT_FOUND),
        other => WebError::Storage(other),
    }
}

/// List all athletes, sorted by name
pub async fn list_athletes(repo: &dyn AthleteRepository) -> WebResult<Vec<Athlete>> {
    Ok(repo.list().await?)
}

/// Get athlete by slug
pub async fn get_athlete_by_slug(repo: &dyn AthleteRepository, slug: &str) -> WebResult<Athlete> {
    repo.find_by_slug(slug).await.map_err(not_found)
}

/// Create a new athlete
pub async fn create_athlete(repo: &dyn AthleteRepository, input: AthleteInput) -> WebResult<Athlete> {
    let input = input.normalized();
    let draft = input
        .clone()
        .into_draft()
        .map_err(|msg| WebError::BadRequest(msg.to_string()))?;
    input.validate()?;

    let athlete = repo.create(&draft).await?;
    tracing::info!(slug = %athlete.slug, id = %athlete.id, "Created athlete");

    Ok(athlete)
}

/// Replace an athlete's fields
pub async fn update_athlete(
    repo: &dyn AthleteRepository,
    slug: &str,
    input: AthleteInput,
) -> WebResult<Athlete> {
    let input = input.normalized();
    let draft = input
        .clone()
        .into_draft()
        .map_err(|msg| WebError::BadRequest(msg.to_string()))?;
    input.validate()?;

    let athlete = repo.update(slug, &draft).await.map_err(not_found)?;
    tracing::info!(slug, new_slug = %athlete.slug, "Updated athlete");

    Ok(athlete)
}

/// Delete an athlete
pub async fn delete_athlete(repo: &dyn AthleteRepository, slug: &str) -> WebResult<()> {
    repo.delete(slug).await?;
    tracing::info!(slug, "Deleted athlete");
    Ok(())
}
