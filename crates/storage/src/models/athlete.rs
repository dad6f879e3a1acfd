use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

pub const DEFAULT_NATIONALITY: &str = "South African";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Athlete {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub sport: String,
    pub bio: Option<String>,
    pub avatar_image_url: Option<String>,
    pub cover_image_url: Option<String>,
    #[sqlx(json)]
    #[serde(default)]
    pub competition_record: Vec<CompetitionRecord>,
    pub nationality: String,
    pub age: Option<i32>,
    #[serde(default)]
    pub weight_classes: Vec<String>,
    pub team: Option<String>,
    #[sqlx(json)]
    #[serde(default)]
    pub social_links: SocialLinks,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One bout or match in an athlete's fight history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CompetitionRecord {
    pub event: String,
    pub date: String,
    pub opponent: String,
    pub result: CompetitionResult,
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub round: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum CompetitionResult {
    Win,
    Loss,
    Draw,
    #[serde(rename = "No Contest")]
    NoContest,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instagram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube: Option<String>,
    #[validate(url)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}
