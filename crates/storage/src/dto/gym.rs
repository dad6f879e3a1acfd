use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::gym::{Gym, GymContact, GymImage, GymLocation, GymPricing, GymSchedule};

pub const REQUIRED_FIELDS_MESSAGE: &str = "Name, address, and location are required";

/// Request payload for creating a new gym
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateGymRequest {
    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[validate(length(max = 500))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[validate(nested)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GymLocation>,

    #[validate(nested)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<GymContact>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Vec<GymSchedule>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing: Option<Vec<GymPricing>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<GymImage>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructors: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,
}

/// Partial gym update. Supplied fields overwrite, omitted fields keep their
/// stored value. An `id` in the body is accepted for client convenience but
/// never changes the stored identity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateGymRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,

    #[validate(length(min = 1, max = 255))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 500))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    #[validate(nested)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GymLocation>,

    #[validate(nested)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<GymContact>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Vec<GymSchedule>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pricing: Option<Vec<GymPricing>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<GymImage>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instructors: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amenities: Option<Vec<String>>,
}

impl CreateGymRequest {
    /// Build a new gym with a fresh id, applying defaults for omitted fields.
    pub fn into_gym(self, now: DateTime<Utc>) -> Result<Gym, &'static str> {
        let name = self.name.filter(|n| !n.trim().is_empty());
        let address = self.address.filter(|a| !a.trim().is_empty());

        let (Some(name), Some(address), Some(location)) = (name, address, self.location) else {
            return Err(REQUIRED_FIELDS_MESSAGE);
        };

        Ok(Gym {
            id: Uuid::new_v4(),
            name,
            address,
            location,
            contact: self.contact.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            schedule: self.schedule.unwrap_or_default(),
            pricing: self.pricing.unwrap_or_default(),
            images: self.images.unwrap_or_default(),
            instructors: self.instructors.unwrap_or_default(),
            amenities: self.amenities.unwrap_or_default(),
            created_at: now,
            updated_at: now,
        })
    }
}

impl UpdateGymRequest {
    /// Merge the supplied fields over `gym`. `id` and `created_at` are never touched.
    pub fn apply_to(self, gym: &mut Gym, now: DateTime<Utc>) {
        if let Some(name) = self.name {
            gym.name = name;
        }
        if let Some(address) = self.address {
            gym.address = address;
        }
        if let Some(location) = self.location {
            gym.location = location;
        }
        if let Some(contact) = self.contact {
            gym.contact = contact;
        }
        if let Some(description) = self.description {
            gym.description = description;
        }
        if let Some(schedule) = self.schedule {
            gym.schedule = schedule;
        }
        if let Some(pricing) = self.pricing {
            gym.pricing = pricing;
        }
        if let Some(images) = self.images {
            gym.images = images;
        }
        if let Some(instructors) = self.instructors {
            gym.instructors = instructors;
        }
        if let Some(amenities) = self.amenities {
            gym.amenities = amenities;
        }

        gym.updated_at = crate::repository::advance_timestamp(gym.updated_at, now);
    }
}
