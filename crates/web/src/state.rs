use std::sync::Arc;

use storage::{
    Database,
    object_store::{ObjectStore, SupabaseObjectStore},
    repository::{
        AthleteRepository, GymRepository, InMemoryGymRepository, PgAthleteRepository,
        PgGymRepository, UnconfiguredBackend,
    },
};

use crate::config::{Config, GymStoreKind};

const DATABASE_NOT_CONFIGURED: &str =
    "Database is not configured. Set DATABASE_URL in your .env file.";
const STORAGE_NOT_CONFIGURED: &str =
    "Supabase is not configured. Set SUPABASE_URL and SUPABASE_KEY in your .env file.";

/// Backing services injected into every handler
#[derive(Clone)]
pub struct AppState {
    pub athletes: Arc<dyn AthleteRepository>,
    pub gyms: Arc<dyn GymRepository>,
    pub images: Arc<dyn ObjectStore>,
}

impl AppState {
    pub fn new(
        athletes: Arc<dyn AthleteRepository>,
        gyms: Arc<dyn GymRepository>,
        images: Arc<dyn ObjectStore>,
    ) -> Self {
        Self {
            athletes,
            gyms,
            images,
        }
    }

    /// Wire backing services from configuration. Missing credentials install
    /// an [`UnconfiguredBackend`] instead of failing here.
    pub fn from_config(config: &Config, db: Option<&Database>) -> anyhow::Result<Self> {
        let athletes: Arc<dyn AthleteRepository> = match db {
            Some(db) => Arc::new(PgAthleteRepository::new(db.pool().clone())),
            None => {
                tracing::warn!("DATABASE_URL not set; athlete endpoints will fail until configured");
                Arc::new(UnconfiguredBackend::new(DATABASE_NOT_CONFIGURED))
            }
        };

        let gyms: Arc<dyn GymRepository> = match (config.gym_store, db) {
            (GymStoreKind::Memory, _) => {
                tracing::info!("Gyms are held in memory and reset on restart");
                Arc::new(InMemoryGymRepository::new())
            }
            (GymStoreKind::Postgres, Some(db)) => Arc::new(PgGymRepository::new(db.pool().clone())),
            (GymStoreKind::Postgres, None) => {
                Arc::new(UnconfiguredBackend::new(DATABASE_NOT_CONFIGURED))
            }
        };

        let images: Arc<dyn ObjectStore> = match (&config.supabase_url, &config.supabase_key) {
            (Some(url), Some(key)) => Arc::new(SupabaseObjectStore::new(
                url,
                key,
                &config.storage_bucket,
            )?),
            _ => {
                tracing::warn!("Supabase credentials not set; image uploads will fail until configured");
                Arc::new(UnconfiguredBackend::new(STORAGE_NOT_CONFIGURED))
            }
        };

        Ok(Self::new(athletes, gyms, images))
    }
}
