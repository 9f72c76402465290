use async_trait::async_trait;
use uuid::Uuid;

use crate::error::ItemResult;
use crate::models::{CreateItem, Item, UpdateItem};

/// Repository trait for Item persistence
///
/// This trait defines the data access interface for items.
/// Implementations can use different storage backends (MongoDB, etc.)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// List every item; no pagination, store-default order
    async fn list_all(&self) -> ItemResult<Vec<Item>>;

    /// Create a new item, assigning identifier and timestamps
    async fn create(&self, input: CreateItem) -> ItemResult<Item>;

    /// Get an item by ID
    async fn get_by_id(&self, id: Uuid) -> ItemResult<Option<Item>>;

    /// Merge partial fields into an existing item, refreshing `updatedAt`.
    /// Fails with `NotFound` when no item has the given id.
    async fn update(&self, id: Uuid, input: UpdateItem) -> ItemResult<Item>;

    /// Delete an item by ID. Deleting an absent id is not an error.
    async fn delete(&self, id: Uuid) -> ItemResult<()>;
}
