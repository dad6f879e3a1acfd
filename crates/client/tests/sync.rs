//! Stores driven against a live router backed by in-memory services.

use std::sync::Arc;

use client::{AthleteStore, ClientError, GymStore};
use reqwest::StatusCode;
use storage::dto::athlete::AthleteInput;
use storage::dto::gym::{CreateGymRequest, UpdateGymRequest};
use storage::models::{GymLocation, SocialLinks};
use storage::object_store::InMemoryObjectStore;
use storage::repository::{InMemoryAthleteRepository, InMemoryGymRepository};
use uuid::Uuid;
use web::app;
use web::state::AppState;

async fn spawn_server() -> String {
    let state = AppState::new(
        Arc::new(InMemoryAthleteRepository::new()),
        Arc::new(InMemoryGymRepository::new()),
        Arc::new(InMemoryObjectStore::new("http://localhost/images")),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app::router(state, 1024 * 1024))
            .await
            .unwrap();
    });

    format!("http://{address}")
}

fn athlete_input(name: &str, slug: &str) -> AthleteInput {
    AthleteInput {
        name: Some(name.to_string()),
        slug: Some(slug.to_string()),
        sport: Some("Boxing".to_string()),
        weight_classes: Some(vec!["Welterweight".to_string()]),
        social_links: Some(SocialLinks {
            instagram: Some("@boxer".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn gym_input(name: &str) -> CreateGymRequest {
    CreateGymRequest {
        name: Some(name.to_string()),
        address: Some("1 Main St".to_string()),
        location: Some(GymLocation { lat: 1.0, lng: 1.0 }),
        ..Default::default()
    }
}

#[tokio::test]
async fn athlete_store_round_trip() {
    let base = spawn_server().await;
    let mut store = AthleteStore::connect(&base).unwrap();

    let created = store
        .create(&athlete_input("Sipho Ndlovu", "sipho-ndlovu"))
        .await
        .unwrap();
    assert_eq!(created.slug, "sipho-ndlovu");
    assert_eq!(created.nationality, "South African");
    assert_eq!(store.items().len(), 1);

    store
        .create(&athlete_input("Anele Zulu", "anele-zulu"))
        .await
        .unwrap();

    // A fresh list comes back sorted by name
    store.fetch_all().await;
    let slugs: Vec<&str> = store.items().iter().map(|a| a.slug.as_str()).collect();
    assert_eq!(slugs, vec!["anele-zulu", "sipho-ndlovu"]);

    // Fetching a cached athlete replaces it in place
    let key = "sipho-ndlovu".to_string();
    store.fetch_one(&key).await.unwrap();
    assert_eq!(store.items().len(), 2);
    assert_eq!(store.selected().map(|a| a.slug.as_str()), Some("sipho-ndlovu"));

    let mut replacement = athlete_input("Sipho Ndlovu", "sipho-ndlovu");
    replacement.team = Some("Soweto Boxing Club".to_string());
    let updated = store.update(&key, &replacement).await.unwrap();
    assert_eq!(updated.id, created.id);
    assert!(updated.updated_at > created.updated_at);
    assert_eq!(store.find(&key).and_then(|a| a.team.as_deref()), Some("Soweto Boxing Club"));
    assert_eq!(store.selected(), Some(&updated));

    store.delete(&key).await.unwrap();
    assert!(store.find(&key).is_none());
    assert!(store.selected().is_none());
    assert!(store.error().is_none());
    assert!(!store.is_loading());
}

#[tokio::test]
async fn athlete_fetch_one_failure_is_raised() {
    let base = spawn_server().await;
    let mut store = AthleteStore::connect(&base).unwrap();
    store
        .create(&athlete_input("Sipho Ndlovu", "sipho-ndlovu"))
        .await
        .unwrap();
    store.fetch_one(&"sipho-ndlovu".to_string()).await.unwrap();

    let err = store.fetch_one(&"nobody".to_string()).await.unwrap_err();

    match err {
        ClientError::Api { status, message } => {
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(message, "Athlete not found");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(store.error(), Some("Failed to fetch athlete"));
    assert_eq!(store.selected().map(|a| a.slug.as_str()), Some("sipho-ndlovu"));
    assert!(!store.is_loading());
}

#[tokio::test]
async fn athlete_create_without_sport_reports_server_message() {
    let base = spawn_server().await;
    let mut store = AthleteStore::connect(&base).unwrap();

    let mut input = athlete_input("Sipho Ndlovu", "sipho-ndlovu");
    input.sport = None;
    let err = store.create(&input).await.unwrap_err();

    assert!(matches!(
        err,
        ClientError::Api { status, ref message }
            if status == StatusCode::BAD_REQUEST && message == "name, slug, and sport are required"
    ));
    assert_eq!(store.error(), Some("Failed to create athlete"));
    assert!(!store.has_items());
}

#[tokio::test]
async fn gym_store_round_trip() {
    let base = spawn_server().await;
    let mut store = GymStore::connect(&base).unwrap();

    let created = store.create(&gym_input("Iron Works")).await.unwrap();
    assert!(created.schedule.is_empty());
    store.select(Some(created.clone()));

    let patch = UpdateGymRequest {
        amenities: Some(vec!["Sauna".to_string()]),
        ..Default::default()
    };
    let updated = store.update(&created.id, &patch).await.unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "Iron Works");
    assert_eq!(updated.amenities, vec!["Sauna".to_string()]);
    assert_eq!(store.selected(), Some(&updated));
    assert_eq!(store.find(&created.id), Some(&updated));

    store.delete(&created.id).await.unwrap();
    assert!(!store.has_items());
    assert!(store.selected().is_none());

    // The server no longer knows the gym
    let err = store.delete(&created.id).await.unwrap_err();
    assert!(matches!(err, ClientError::Api { status, .. } if status == StatusCode::NOT_FOUND));
    assert_eq!(store.error(), Some("Failed to delete gym"));
}

#[tokio::test]
async fn gym_fetch_one_appends_unknown_item() {
    let base = spawn_server().await;
    let mut writer = GymStore::connect(&base).unwrap();
    let created = writer.create(&gym_input("Iron Works")).await.unwrap();

    let mut reader = GymStore::connect(&base).unwrap();
    let fetched = reader.fetch_one(&created.id).await.unwrap();

    assert_eq!(fetched, created);
    assert_eq!(reader.items(), &[created]);
    assert!(reader.find(&Uuid::new_v4()).is_none());
}

#[tokio::test]
async fn fetch_all_against_unreachable_server_is_silent() {
    let mut offline = GymStore::connect("http://127.0.0.1:1").unwrap();
    offline.fetch_all().await;

    assert!(offline.items().is_empty());
    assert_eq!(offline.error(), Some("Failed to fetch gyms"));
    assert!(!offline.is_loading());
}
