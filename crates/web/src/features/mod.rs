pub mod athletes;
pub mod gyms;
pub mod uploads;
