use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{AthleteRepository, advance_timestamp};
use crate::dto::athlete::AthleteDraft;
use crate::error::{Result, StorageError};
use crate::models::Athlete;

/// Process-local athlete store. Used by tests and by local runs without a
/// database; contents are lost on restart.
#[derive(Default)]
pub struct InMemoryAthleteRepository {
    athletes: RwLock<Vec<Athlete>>,
}

impl InMemoryAthleteRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn duplicate_slug() -> StorageError {
    StorageError::ConstraintViolation("An athlete with this slug already exists".to_string())
}

fn write_draft(athlete: &mut Athlete, draft: &AthleteDraft) {
    athlete.name = draft.name.clone();
    athlete.slug = draft.slug.clone();
    athlete.sport = draft.sport.clone();
    athlete.bio = draft.bio.clone();
    athlete.avatar_image_url = draft.avatar_image_url.clone();
    athlete.cover_image_url = draft.cover_image_url.clone();
    athlete.competition_record = draft.competition_record.clone();
    athlete.nationality = draft.nationality.clone();
    athlete.age = draft.age;
    athlete.weight_classes = draft.weight_classes.clone();
    athlete.team = draft.team.clone();
    athlete.social_links = draft.social_links.clone();
}

#[async_trait]
impl AthleteRepository for InMemoryAthleteRepository {
    async fn list(&self) -> Result<Vec<Athlete>> {
        let mut athletes = self.athletes.read().await.clone();
        athletes.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(athletes)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Athlete> {
        self.athletes
            .read()
            .await
            .iter()
            .find(|a| a.slug == slug)
            .cloned()
            .ok_or(StorageError::NotFound)
    }

    async fn create(&self, draft: &AthleteDraft) -> Result<Athlete> {
        let mut athletes = self.athletes.write().await;

        if athletes.iter().any(|a| a.slug == draft.slug) {
            return Err(duplicate_slug());
        }

        let now = Utc::now();
        let mut athlete = Athlete {
            id: Uuid::new_v4(),
            name: String::new(),
            slug: String::new(),
            sport: String::new(),
            bio: None,
            avatar_image_url: None,
            cover_image_url: None,
            competition_record: Vec::new(),
            nationality: String::new(),
            age: None,
            weight_classes: Vec::new(),
            team: None,
            social_links: Default::default(),
            created_at: now,
            updated_at: now,
        };
        write_draft(&mut athlete, draft);

        athletes.push(athlete.clone());
        Ok(athlete)
    }

    async fn update(&self, slug: &str, draft: &AthleteDraft) -> Result<Athlete> {
        let mut athletes = self.athletes.write().await;

        let index = athletes
            .iter()
            .position(|a| a.slug == slug)
            .ok_or(StorageError::NotFound)?;

        if draft.slug != slug && athletes.iter().any(|a| a.slug == draft.slug) {
            return Err(duplicate_slug());
        }

        let athlete = &mut athletes[index];
        write_draft(athlete, draft);
        athlete.updated_at = advance_timestamp(athlete.updated_at, Utc::now());

        Ok(athlete.clone())
    }

    async fn delete(&self, slug: &str) -> Result<()> {
        self.athletes.write().await.retain(|a| a.slug != slug);
        Ok(())
    }
}
