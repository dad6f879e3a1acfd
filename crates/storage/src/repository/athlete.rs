use async_trait::async_trait;
use sqlx::{PgPool, types::Json};

use crate::dto::athlete::AthleteDraft;
use crate::error::{Result, StorageError};
use crate::models::Athlete;

/// Persistence port for athletes, keyed by slug.
#[async_trait]
pub trait AthleteRepository: Send + Sync {
    /// List all athletes, ordered by name
    async fn list(&self) -> Result<Vec<Athlete>>;

    /// Find athlete by slug
    async fn find_by_slug(&self, slug: &str) -> Result<Athlete>;

    /// Create a new athlete
    async fn create(&self, draft: &AthleteDraft) -> Result<Athlete>;

    /// Replace every mutable field of the athlete currently stored under `slug`.
    /// The draft may carry a different slug, which renames the athlete.
    async fn update(&self, slug: &str, draft: &AthleteDraft) -> Result<Athlete>;

    /// Delete the athlete stored under `slug`. Deleting a missing slug is not an error.
    async fn delete(&self, slug: &str) -> Result<()>;
}

macro_rules! athlete_columns {
    () => {
        "id, name, slug, sport, bio, avatar_image_url, cover_image_url, competition_record, \
         nationality, age, weight_classes, team, social_links, created_at, updated_at"
    };
}

const DUPLICATE_SLUG: &str = "An athlete with this slug already exists";

fn map_write_error(error: sqlx::Error) -> StorageError {
    let error = StorageError::from(error);
    if error.is_unique_violation() {
        StorageError::ConstraintViolation(DUPLICATE_SLUG.to_string())
    } else {
        error
    }
}

/// Athlete repository backed by the Postgres `athletes` table
#[derive(Clone)]
pub struct PgAthleteRepository {
    pool: PgPool,
}

impl PgAthleteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AthleteRepository for PgAthleteRepository {
    async fn list(&self) -> Result<Vec<Athlete>> {
        let athletes = sqlx::query_as::<_, Athlete>(concat!(
            "SELECT ",
            athlete_columns!(),
            " FROM athletes ORDER BY name ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(athletes)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Athlete> {
        let athlete = sqlx::query_as::<_, Athlete>(concat!(
            "SELECT ",
            athlete_columns!(),
            " FROM athletes WHERE slug = $1"
        ))
        .bind(slug)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(athlete)
    }

    async fn create(&self, draft: &AthleteDraft) -> Result<Athlete> {
        let athlete = sqlx::query_as::<_, Athlete>(concat!(
            r#"
            INSERT INTO athletes (
                name, slug, sport, bio, avatar_image_url, cover_image_url,
                competition_record, nationality, age, weight_classes, team, social_links
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING "#,
            athlete_columns!()
        ))
        .bind(&draft.name)
        .bind(&draft.slug)
        .bind(&draft.sport)
        .bind(&draft.bio)
        .bind(&draft.avatar_image_url)
        .bind(&draft.cover_image_url)
        .bind(Json(&draft.competition_record))
        .bind(&draft.nationality)
        .bind(draft.age)
        .bind(&draft.weight_classes)
        .bind(&draft.team)
        .bind(Json(&draft.social_links))
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)?;

        tracing::debug!(slug = %athlete.slug, "inserted athlete");

        Ok(athlete)
    }

    async fn update(&self, slug: &str, draft: &AthleteDraft) -> Result<Athlete> {
        let athlete = sqlx::query_as::<_, Athlete>(concat!(
            r#"
            UPDATE athletes
            SET name = $2,
                slug = $3,
                sport = $4,
                bio = $5,
                avatar_image_url = $6,
                cover_image_url = $7,
                competition_record = $8,
                nationality = $9,
                age = $10,
                weight_classes = $11,
                team = $12,
                social_links = $13,
                updated_at = GREATEST(now(), updated_at + interval '1 microsecond')
            WHERE slug = $1
            RETURNING "#,
            athlete_columns!()
        ))
        .bind(slug)
        .bind(&draft.name)
        .bind(&draft.slug)
        .bind(&draft.sport)
        .bind(&draft.bio)
        .bind(&draft.avatar_image_url)
        .bind(&draft.cover_image_url)
        .bind(Json(&draft.competition_record))
        .bind(&draft.nationality)
        .bind(draft.age)
        .bind(&draft.weight_classes)
        .bind(&draft.team)
        .bind(Json(&draft.social_links))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_write_error)?
        .ok_or(StorageError::NotFound)?;

        Ok(athlete)
    }

    async fn delete(&self, slug: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM athletes WHERE slug = $1")
            .bind(slug)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            tracing::debug!(slug, "delete matched no athlete");
        }

        Ok(())
    }
}
