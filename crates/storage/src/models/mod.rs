pub mod athlete;
pub mod gym;

pub use athlete::{Athlete, CompetitionRecord, CompetitionResult, SocialLinks};
pub use gym::{Gym, GymContact, GymImage, GymLocation, GymPricing, GymSchedule};
