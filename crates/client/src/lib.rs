//! Client-side cache of directory resources kept in sync with the HTTP API.
//!
//! A [`ResourceStore`] owns a local list of athletes or gyms plus the
//! currently selected item, and reconciles it after every call made through
//! a [`ResourceApi`].

pub mod api;
pub mod error;
pub mod resource;
pub mod store;

pub use api::{HttpResourceApi, ResourceApi};
pub use error::{ClientError, Result};
pub use resource::Resource;
pub use store::{AthleteStore, GymStore, ResourceStore};
