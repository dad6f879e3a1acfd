use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::models::athlete::{CompetitionRecord, DEFAULT_NATIONALITY, SocialLinks};

pub const REQUIRED_FIELDS_MESSAGE: &str = "name, slug, and sport are required";

/// Request payload for creating or replacing an athlete.
///
/// Every field is optional on the wire so that a missing `name`, `slug` or
/// `sport` is reported with a single readable message instead of a
/// deserialization failure. Call [`AthleteInput::into_draft`] to resolve
/// defaults and enforce the required fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct AthleteInput {
    #[validate(length(max = 255, message = "Name must be at most 255 characters"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[validate(length(max = 255))]
    #[validate(custom(function = "validate_slug"))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,

    #[validate(length(max = 100))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sport: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    #[validate(url)]
    #[validate(length(max = 500))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_image_url: Option<String>,

    #[validate(url)]
    #[validate(length(max = 500))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub competition_record: Option<Vec<CompetitionRecord>>,

    #[validate(length(max = 255))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nationality: Option<String>,

    #[validate(range(min = 0, max = 150))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight_classes: Option<Vec<String>>,

    #[validate(length(max = 255))]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,

    #[validate(nested)]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub social_links: Option<SocialLinks>,
}

/// Fully resolved athlete fields, ready to be written by a repository.
#[derive(Debug, Clone, PartialEq)]
pub struct AthleteDraft {
    pub name: String,
    pub slug: String,
    pub sport: String,
    pub bio: Option<String>,
    pub avatar_image_url: Option<String>,
    pub cover_image_url: Option<String>,
    pub competition_record: Vec<CompetitionRecord>,
    pub nationality: String,
    pub age: Option<i32>,
    pub weight_classes: Vec<String>,
    pub team: Option<String>,
    pub social_links: SocialLinks,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

impl AthleteInput {
    /// Treat blank strings and a zero age as absent, the way form submissions send them.
    pub fn normalized(self) -> Self {
        Self {
            name: non_blank(self.name),
            slug: non_blank(self.slug),
            sport: non_blank(self.sport),
            bio: non_blank(self.bio),
            avatar_image_url: non_blank(self.avatar_image_url),
            cover_image_url: non_blank(self.cover_image_url),
            competition_record: self.competition_record,
            nationality: non_blank(self.nationality),
            age: self.age.filter(|age| *age != 0),
            weight_classes: self.weight_classes,
            team: non_blank(self.team),
            social_links: self.social_links,
        }
    }

    /// Resolve defaults and check the required fields.
    pub fn into_draft(self) -> Result<AthleteDraft, &'static str> {
        let input = self.normalized();

        let (Some(name), Some(slug), Some(sport)) = (input.name, input.slug, input.sport) else {
            return Err(REQUIRED_FIELDS_MESSAGE);
        };

        Ok(AthleteDraft {
            name,
            slug,
            sport,
            bio: input.bio,
            avatar_image_url: input.avatar_image_url,
            cover_image_url: input.cover_image_url,
            competition_record: input.competition_record.unwrap_or_default(),
            nationality: input
                .nationality
                .unwrap_or_else(|| DEFAULT_NATIONALITY.to_string()),
            age: input.age,
            weight_classes: input.weight_classes.unwrap_or_default(),
            team: input.team,
            social_links: input.social_links.unwrap_or_default(),
        })
    }
}

/// Path segments under `/api/athletes` that are routes, not athletes
pub const RESERVED_SLUGS: &[&str] = &["upload"];

// Validation helper
fn validate_slug(slug: &str) -> Result<(), validator::ValidationError> {
    if RESERVED_SLUGS.contains(&slug) {
        return Err(validator::ValidationError::new("reserved_slug"));
    }

    let is_valid = slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && !slug.contains("--");

    if is_valid {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_slug"))
    }
}
