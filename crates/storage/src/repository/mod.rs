use chrono::{DateTime, Duration, Utc};

pub mod athlete;
pub mod athlete_memory;
pub mod gym;
pub mod gym_pg;
pub mod unconfigured;

pub use athlete::{AthleteRepository, PgAthleteRepository};
pub use athlete_memory::InMemoryAthleteRepository;
pub use gym::{GymRepository, InMemoryGymRepository};
pub use gym_pg::PgGymRepository;
pub use unconfigured::UnconfiguredBackend;

/// Timestamp for a mutation that is strictly later than `previous`, even when
/// the clock has not moved on since the last write.
pub(crate) fn advance_timestamp(previous: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}
