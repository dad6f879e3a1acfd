use utoipa::OpenApi;

use crate::features::{athletes, gyms, uploads};

#[derive(OpenApi)]
#[openapi(
    paths(
        athletes::handlers::list_athletes,
        athletes::handlers::get_athlete,
        athletes::handlers::create_athlete,
        athletes::handlers::update_athlete,
        athletes::handlers::delete_athlete,
        uploads::handlers::upload_athlete_image,
        gyms::handlers::list_gyms,
        gyms::handlers::get_gym,
        gyms::handlers::create_gym,
        gyms::handlers::update_gym,
        gyms::handlers::delete_gym,
    ),
    components(
        schemas(
            storage::dto::athlete::AthleteInput,
            storage::dto::gym::CreateGymRequest,
            storage::dto::gym::UpdateGymRequest,
            storage::dto::common::UploadResponse,
            storage::models::Athlete,
            storage::models::CompetitionRecord,
            storage::models::CompetitionResult,
            storage::models::SocialLinks,
            storage::models::Gym,
            storage::models::GymLocation,
            storage::models::GymContact,
            storage::models::GymSchedule,
            storage::models::GymPricing,
            storage::models::GymImage,
        )
    ),
    tags(
        (name = "athletes", description = "Athlete profiles and image uploads"),
        (name = "gyms", description = "Gym directory"),
    )
)]
pub struct ApiDoc;
