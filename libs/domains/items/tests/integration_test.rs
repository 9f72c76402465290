//! Integration tests for the Items domain
//!
//! These tests use real MongoDB via testcontainers to ensure:
//! - Documents round-trip through the `_id` mapping
//! - Partial updates merge correctly and refresh `updatedAt`
//! - Deletes are idempotent

use domain_items::*;
use test_utils::{TestDataBuilder, TestMongo};
use uuid::Uuid;

fn sample_input(builder: &TestDataBuilder, suffix: &str) -> CreateItem {
    CreateItem {
        name: builder.name("item", suffix),
        description: "Integration test item".to_string(),
        status: ItemStatus::Lost,
        category: Some("Electronics".to_string()),
        location: Some(Location {
            lat: 28.5662,
            lng: -81.2040,
        }),
        image_url: None,
    }
}

// ============================================================================
// Repository Tests
// ============================================================================

#[tokio::test]
async fn test_create_and_get_item() {
    let mongo = TestMongo::new().await;
    let repo = MongoItemRepository::new(mongo.database("create_and_get"));
    let builder = TestDataBuilder::from_test_name("create_and_get");

    let input = sample_input(&builder, "main");
    let created = repo.create(input.clone()).await.unwrap();

    assert_eq!(created.name, input.name);
    assert_eq!(created.status, ItemStatus::Lost);
    assert_eq!(created.category, "Electronics");
    assert_eq!(created.created_at, created.updated_at);

    let retrieved = repo.get_by_id(created.id).await.unwrap();
    let retrieved = retrieved.expect("item should exist");

    assert_eq!(retrieved.id, created.id);
    assert_eq!(retrieved.name, created.name);
    assert_eq!(retrieved.location, created.location);
}

#[tokio::test]
async fn test_get_missing_item_returns_none() {
    let mongo = TestMongo::new().await;
    let repo = MongoItemRepository::new(mongo.database("get_missing"));

    let found = repo.get_by_id(Uuid::now_v7()).await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn test_list_all_returns_every_item() {
    let mongo = TestMongo::new().await;
    let repo = MongoItemRepository::new(mongo.database("list_all"));
    let builder = TestDataBuilder::from_test_name("list_all");

    for suffix in ["one", "two", "three"] {
        repo.create(sample_input(&builder, suffix)).await.unwrap();
    }

    let items = repo.list_all().await.unwrap();
    assert_eq!(items.len(), 3);
}

#[tokio::test]
async fn test_update_merges_fields_and_refreshes_timestamp() {
    let mongo = TestMongo::new().await;
    let repo = MongoItemRepository::new(mongo.database("update_merges"));
    let builder = TestDataBuilder::from_test_name("update_merges");

    let created = repo.create(sample_input(&builder, "patchme")).await.unwrap();

    // make sure the patch lands on a later clock reading
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    let update = UpdateItem {
        status: Some(ItemStatus::Found),
        ..Default::default()
    };
    let updated = repo.update(created.id, update).await.unwrap();

    // only the patched field changes
    assert_eq!(updated.status, ItemStatus::Found);
    assert_eq!(updated.name, created.name);
    assert_eq!(updated.description, created.description);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at > created.updated_at);
}

#[tokio::test]
async fn test_update_missing_item_is_not_found() {
    let mongo = TestMongo::new().await;
    let repo = MongoItemRepository::new(mongo.database("update_missing"));

    let update = UpdateItem {
        name: Some("Ghost".to_string()),
        ..Default::default()
    };
    let result = repo.update(Uuid::now_v7(), update).await;

    assert!(
        matches!(result, Err(ItemError::NotFound(_))),
        "Expected NotFound error, got {:?}",
        result
    );
}

#[tokio::test]
async fn test_delete_is_idempotent() {
    let mongo = TestMongo::new().await;
    let repo = MongoItemRepository::new(mongo.database("delete_idempotent"));
    let builder = TestDataBuilder::from_test_name("delete_idempotent");

    let created = repo.create(sample_input(&builder, "gone")).await.unwrap();

    repo.delete(created.id).await.unwrap();
    assert!(repo.get_by_id(created.id).await.unwrap().is_none());

    // deleting again is still a success
    repo.delete(created.id).await.unwrap();
    // and so is deleting an id that never existed
    repo.delete(Uuid::now_v7()).await.unwrap();
}

// ============================================================================
// Service Tests (real repository)
// ============================================================================

#[tokio::test]
async fn test_service_report_and_resolve_flow() {
    let mongo = TestMongo::new().await;
    let repo = MongoItemRepository::new(mongo.database("report_resolve"));
    let service = ItemService::new(repo);

    let reported = service
        .create_item(CreateItem {
            name: "Black Backpack".to_string(),
            description: "Lost near the library".to_string(),
            status: ItemStatus::Lost,
            category: None,
            location: None,
            image_url: None,
        })
        .await
        .unwrap();

    // category defaults when omitted
    assert_eq!(reported.category, "Other");

    let listed = service.list_items().await.unwrap();
    assert!(listed.iter().any(|i| i.id == reported.id));

    let resolved = service
        .update_item(
            reported.id,
            UpdateItem {
                status: Some(ItemStatus::Found),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(resolved.status, ItemStatus::Found);

    let fetched = service.get_item(reported.id).await.unwrap();
    assert_eq!(fetched.status, ItemStatus::Found);
}
