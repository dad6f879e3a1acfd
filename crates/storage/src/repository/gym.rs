//! Gym persistence port and its in-memory implementation.
//!
//! The in-memory repository keeps gyms in insertion order for the lifetime of
//! the process. Lookups are linear scans by id; there is no index. All
//! read-modify-write sequences run under a single write lock, so concurrent
//! updates to the same gym resolve as last write wins.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::dto::gym::UpdateGymRequest;
use crate::error::Result;
use crate::models::Gym;

#[async_trait]
pub trait GymRepository: Send + Sync {
    /// All gyms in insertion order
    async fn get_all(&self) -> Result<Vec<Gym>>;

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Gym>>;

    /// Store `gym` as given. No uniqueness check is made.
    async fn add(&self, gym: Gym) -> Result<Gym>;

    /// Merge `patch` over the stored gym. Returns `None` when no gym has `id`.
    async fn update(&self, id: Uuid, patch: UpdateGymRequest) -> Result<Option<Gym>>;

    /// Remove the gym and hand it back, or `None` when no gym has `id`.
    async fn delete(&self, id: Uuid) -> Result<Option<Gym>>;
}

#[derive(Default)]
pub struct InMemoryGymRepository {
    gyms: RwLock<Vec<Gym>>,
}

impl InMemoryGymRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl GymRepository for InMemoryGymRepository {
    async fn get_all(&self) -> Result<Vec<Gym>> {
        Ok(self.gyms.read().await.clone())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<Gym>> {
        Ok(self.gyms.read().await.iter().find(|g| g.id == id).cloned())
    }

    async fn add(&self, gym: Gym) -> Result<Gym> {
        self.gyms.write().await.push(gym.clone());
        Ok(gym)
    }

    async fn update(&self, id: Uuid, patch: UpdateGymRequest) -> Result<Option<Gym>> {
        let mut gyms = self.gyms.write().await;

        let Some(gym) = gyms.iter_mut().find(|g| g.id == id) else {
            return Ok(None);
        };

        patch.apply_to(gym, Utc::now());
        gym.id = id;

        Ok(Some(gym.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Gym>> {
        let mut gyms = self.gyms.write().await;

        Ok(gyms
            .iter()
            .position(|g| g.id == id)
            .map(|index| gyms.remove(index)))
    }
}
