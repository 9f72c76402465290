//! Item Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;
use validator::Validate;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item, UpdateItem};
use crate::repository::ItemRepository;

/// Item service providing business logic operations
///
/// The service layer handles validation and orchestrates repository
/// operations.
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    /// Create a new ItemService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List every item
    #[instrument(skip(self))]
    pub async fn list_items(&self) -> ItemResult<Vec<Item>> {
        self.repository.list_all().await
    }

    /// Create a new item
    #[instrument(skip(self, input), fields(item_name = %input.name))]
    pub async fn create_item(&self, input: CreateItem) -> ItemResult<Item> {
        input
            .validate()
            .map_err(|e| ItemError::Validation(e.to_string()))?;

        // Whitespace-only fields pass the length validator but are still
        // missing in any meaningful sense
        if input.name.trim().is_empty() || input.description.trim().is_empty() {
            return Err(ItemError::Validation(
                "Name, description, and status are required".to_string(),
            ));
        }

        self.repository.create(input).await
    }

    /// Get an item by ID
    #[instrument(skip(self))]
    pub async fn get_item(&self, id: Uuid) -> ItemResult<Item> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ItemError::NotFound(id))
    }

    /// Apply a partial update to an existing item
    #[instrument(skip(self, input))]
    pub async fn update_item(&self, id: Uuid, input: UpdateItem) -> ItemResult<Item> {
        input
            .validate()
            .map_err(|e| ItemError::Validation(e.to_string()))?;

        if let Some(ref name) = input.name {
            if name.trim().is_empty() {
                return Err(ItemError::Validation("Name cannot be empty".to_string()));
            }
        }
        if let Some(ref description) = input.description {
            if description.trim().is_empty() {
                return Err(ItemError::Validation(
                    "Description cannot be empty".to_string(),
                ));
            }
        }

        self.repository.update(id, input).await
    }

    /// Delete an item; deleting an absent id is a success
    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: Uuid) -> ItemResult<()> {
        self.repository.delete(id).await
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ItemStatus;
    use crate::repository::MockItemRepository;

    fn valid_input() -> CreateItem {
        CreateItem {
            name: "Black Backpack".to_string(),
            description: "Left in library".to_string(),
            status: ItemStatus::Lost,
            category: Some("Bags".to_string()),
            location: None,
            image_url: None,
        }
    }

    #[tokio::test]
    async fn test_create_item_persists_valid_input() {
        let mut repo = MockItemRepository::new();
        repo.expect_create()
            .times(1)
            .returning(|input| Ok(Item::new(input)));

        let service = ItemService::new(repo);
        let item = service.create_item(valid_input()).await.unwrap();

        assert_eq!(item.status, ItemStatus::Lost);
        assert_eq!(item.created_at, item.updated_at);
    }

    #[tokio::test]
    async fn test_create_item_rejects_blank_name() {
        let mut repo = MockItemRepository::new();
        repo.expect_create().times(0);

        let service = ItemService::new(repo);
        let result = service
            .create_item(CreateItem {
                name: "   ".to_string(),
                ..valid_input()
            })
            .await;

        assert!(matches!(result, Err(ItemError::Validation(_))));
    }

    #[tokio::test]
    async fn test_create_item_rejects_empty_description() {
        let mut repo = MockItemRepository::new();
        repo.expect_create().times(0);

        let service = ItemService::new(repo);
        let result = service
            .create_item(CreateItem {
                description: "".to_string(),
                ..valid_input()
            })
            .await;

        assert!(matches!(result, Err(ItemError::Validation(_))));
    }

    #[tokio::test]
    async fn test_get_item_maps_absent_to_not_found() {
        let mut repo = MockItemRepository::new();
        repo.expect_get_by_id().returning(|_| Ok(None));

        let service = ItemService::new(repo);
        let result = service.get_item(Uuid::now_v7()).await;

        assert!(matches!(result, Err(ItemError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_update_item_rejects_blank_name() {
        let mut repo = MockItemRepository::new();
        repo.expect_update().times(0);

        let service = ItemService::new(repo);
        let result = service
            .update_item(
                Uuid::now_v7(),
                UpdateItem {
                    name: Some("  ".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result, Err(ItemError::Validation(_))));
    }

    #[tokio::test]
    async fn test_delete_item_is_idempotent() {
        let mut repo = MockItemRepository::new();
        repo.expect_delete().times(2).returning(|_| Ok(()));

        let service = ItemService::new(repo);
        let id = Uuid::now_v7();

        assert!(service.delete_item(id).await.is_ok());
        assert!(service.delete_item(id).await.is_ok());
    }
}
