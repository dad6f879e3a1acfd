use async_trait::async_trait;
use chrono::Utc;
use sqlx::{PgPool, types::Json};
use uuid::Uuid;

use super::GymRepository;
use crate::dto::gym::UpdateGymRequest;
use crate::error::Result;
use crate::models::Gym;

macro_rules! gym_columns {
    () => {
        "id, name, address, location, contact, description, schedule, pricing, images, \
         instructors, amenities, created_at, updated_at"
    };
}

/// Gym repository backed by the Postgres `gyms` table. Nested structures are
/// stored as JSONB.
#[derive(Clone)]
pub struct PgGymRepository {
    pool: PgPool,
}

impl PgGymRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GymRepository for PgGymRepository {
    async fn get_all(&self) -> Result<Vec<Gym>> {
        let gyms = sqlx::query_as::<_, Gym>(concat!(
            "SELECT ",
            gym_columns!(),
            " FROM gyms ORDER BY created_at ASC, id ASC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(gyms)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Gym>> {
        let gym = sqlx::query_as::<_, Gym>(concat!(
            "SELECT ",
            gym_columns!(),
            " FROM gyms WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(gym)
    }

    async fn add(&self, gym: Gym) -> Result<Gym> {
        let gym = sqlx::query_as::<_, Gym>(concat!(
            r#"
            INSERT INTO gyms (
                id, name, address, location, contact, description, schedule,
                pricing, images, instructors, amenities, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING "#,
            gym_columns!()
        ))
        .bind(gym.id)
        .bind(&gym.name)
        .bind(&gym.address)
        .bind(Json(&gym.location))
        .bind(Json(&gym.contact))
        .bind(&gym.description)
        .bind(Json(&gym.schedule))
        .bind(Json(&gym.pricing))
        .bind(Json(&gym.images))
        .bind(&gym.instructors)
        .bind(&gym.amenities)
        .bind(gym.created_at)
        .bind(gym.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(gym)
    }

    async fn update(&self, id: Uuid, patch: UpdateGymRequest) -> Result<Option<Gym>> {
        let mut tx = self.pool.begin().await?;

        let existing = sqlx::query_as::<_, Gym>(concat!(
            "SELECT ",
            gym_columns!(),
            " FROM gyms WHERE id = $1 FOR UPDATE"
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(mut gym) = existing else {
            return Ok(None);
        };

        patch.apply_to(&mut gym, Utc::now());

        let gym = sqlx::query_as::<_, Gym>(concat!(
            r#"
            UPDATE gyms
            SET name = $2,
                address = $3,
                location = $4,
                contact = $5,
                description = $6,
                schedule = $7,
                pricing = $8,
                images = $9,
                instructors = $10,
                amenities = $11,
                updated_at = $12
            WHERE id = $1
            RETURNING "#,
            gym_columns!()
        ))
        .bind(id)
        .bind(&gym.name)
        .bind(&gym.address)
        .bind(Json(&gym.location))
        .bind(Json(&gym.contact))
        .bind(&gym.description)
        .bind(Json(&gym.schedule))
        .bind(Json(&gym.pricing))
        .bind(Json(&gym.images))
        .bind(&gym.instructors)
        .bind(&gym.amenities)
        .bind(gym.updated_at)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(Some(gym))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Gym>> {
        let gym = sqlx::query_as::<_, Gym>(concat!(
            "DELETE FROM gyms WHERE id = $1 RETURNING ",
            gym_columns!()
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(gym)
    }
}
