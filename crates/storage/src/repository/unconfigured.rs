use async_trait::async_trait;
use uuid::Uuid;

use super::{AthleteRepository, GymRepository};
use crate::dto::athlete::AthleteDraft;
use crate::dto::gym::UpdateGymRequest;
use crate::error::{Result, StorageError};
use crate::models::{Athlete, Gym};
use crate::object_store::ObjectStore;

/// Stand-in for a backing service whose credentials are missing.
///
/// Every operation fails with [`StorageError::Configuration`], so a missing
/// setting surfaces on the first request that needs it rather than at startup.
#[derive(Debug, Clone)]
pub struct UnconfiguredBackend {
    message: String,
}

impl UnconfiguredBackend {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    fn fail<T>(&self) -> Result<T> {
        tracing::error!("{}", self.message);
        Err(StorageError::Configuration(self.message.clone()))
    }
}

#[async_trait]
impl AthleteRepository for UnconfiguredBackend {
    async fn list(&self) -> Result<Vec<Athlete>> {
        self.fail()
    }

    async fn find_by_slug(&self, _slug: &str) -> Result<Athlete> {
        self.fail()
    }

    async fn create(&self, _draft: &AthleteDraft) -> Result<Athlete> {
        self.fail()
    }

    async fn update(&self, _slug: &str, _draft: &AthleteDraft) -> Result<Athlete> {
        self.fail()
    }

    async fn delete(&self, _slug: &str) -> Result<()> {
        self.fail()
    }
}

#[async_trait]
impl GymRepository for UnconfiguredBackend {
    async fn get_all(&self) -> Result<Vec<Gym>> {
        self.fail()
    }

    async fn get_by_id(&self, _id: Uuid) -> Result<Option<Gym>> {
        self.fail()
    }

    async fn add(&self, _gym: Gym) -> Result<Gym> {
        self.fail()
    }

    async fn update(&self, _id: Uuid, _patch: UpdateGymRequest) -> Result<Option<Gym>> {
        self.fail()
    }

    async fn delete(&self, _id: Uuid) -> Result<Option<Gym>> {
        self.fail()
    }
}

#[async_trait]
impl ObjectStore for UnconfiguredBackend {
    async fn upload(&self, _path: &str, _bytes: Vec<u8>, _content_type: &str) -> Result<String> {
        self.fail()
    }

    fn public_url(&self, path: &str) -> String {
        path.to_string()
    }
}
