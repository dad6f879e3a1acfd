use std::fmt::Display;

use serde::Serialize;
use storage::dto::athlete::AthleteInput;
use storage::dto::gym::{CreateGymRequest, UpdateGymRequest};
use storage::models::{Athlete, Gym};
use uuid::Uuid;

/// A record type served under a REST collection and cached by a store.
pub trait Resource: Clone + Send + Sync + 'static {
    /// Value identifying one record in URLs and in the cache
    type Key: Clone + PartialEq + Display + Send + Sync;
    type Create: Serialize + Send + Sync;
    type Update: Serialize + Send + Sync;

    const SINGULAR: &'static str;
    const PLURAL: &'static str;
    /// Collection path relative to the API base URL
    const PATH: &'static str;

    fn key(&self) -> &Self::Key;
}

impl Resource for Athlete {
    type Key = String;
    type Create = AthleteInput;
    type Update = AthleteInput;

    const SINGULAR: &'static str = "athlete";
    const PLURAL: &'static str = "athletes";
    const PATH: &'static str = "/api/athletes";

    fn key(&self) -> &String {
        &self.slug
    }
}

impl Resource for Gym {
    type Key = Uuid;
    type Create = CreateGymRequest;
    type Update = UpdateGymRequest;

    const SINGULAR: &'static str = "gym";
    const PLURAL: &'static str = "gyms";
    const PATH: &'static str = "/api/gyms";

    fn key(&self) -> &Uuid {
        &self.id
    }
}
