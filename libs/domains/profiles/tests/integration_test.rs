//! Integration tests for the Profiles domain
//!
//! Uses real MongoDB via testcontainers. Change-stream subscriptions need a
//! replica set and are covered by the unit tests around the subscription
//! plumbing instead.

use chrono::Utc;
use domain_profiles::{MongoProfileRepository, Profile, ProfileRepository};
use test_utils::TestMongo;

fn sample(uid: &str) -> Profile {
    Profile {
        id: uid.to_string(),
        first_name: Some("John".to_string()),
        last_name: Some("Doe".to_string()),
        display_name: Some("John Doe".to_string()),
        email: "jdoe@fullsail.edu".to_string(),
        created_at: Utc::now(),
    }
}

#[tokio::test]
async fn upsert_then_get_roundtrip() {
    let mongo = TestMongo::new().await;
    let repo = MongoProfileRepository::new(mongo.database("profiles_roundtrip"));

    let profile = sample("uid-1");
    repo.upsert(profile.clone()).await.unwrap();

    let fetched = repo.get_by_id("uid-1").await.unwrap().expect("profile exists");
    assert_eq!(fetched.email, profile.email);
    assert_eq!(fetched.display_name.as_deref(), Some("John Doe"));
    assert_eq!(fetched.initials(), "JD");
}

#[tokio::test]
async fn upsert_replaces_existing_document() {
    let mongo = TestMongo::new().await;
    let repo = MongoProfileRepository::new(mongo.database("profiles_replace"));

    repo.upsert(sample("uid-2")).await.unwrap();

    let mut renamed = sample("uid-2");
    renamed.display_name = Some("Johnny".to_string());
    repo.upsert(renamed).await.unwrap();

    let fetched = repo.get_by_id("uid-2").await.unwrap().unwrap();
    assert_eq!(fetched.display_name.as_deref(), Some("Johnny"));
}

#[tokio::test]
async fn get_missing_profile_is_none() {
    let mongo = TestMongo::new().await;
    let repo = MongoProfileRepository::new(mongo.database("profiles_missing"));

    assert!(repo.get_by_id("nobody").await.unwrap().is_none());
}
