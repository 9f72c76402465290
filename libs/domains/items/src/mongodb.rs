//! MongoDB implementation of ItemRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_util::TryStreamExt;
use mongodb::{
    Collection, Database,
    bson::{Bson, doc, to_bson},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use uuid::Uuid;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item, ItemStatus, Location, UpdateItem};
use crate::repository::ItemRepository;

/// Stored shape of an item document.
///
/// Identical to [`Item`] except that the identifier lives under `_id`,
/// keeping the wire shape (`id`) independent of the storage shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ItemDocument {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub status: ItemStatus,
    pub category: String,
    pub location: Option<Location>,
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Item> for ItemDocument {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            name: item.name,
            description: item.description,
            status: item.status,
            category: item.category,
            location: item.location,
            image_url: item.image_url,
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}

impl From<ItemDocument> for Item {
    fn from(doc: ItemDocument) -> Self {
        Self {
            id: doc.id,
            name: doc.name,
            description: doc.description,
            status: doc.status,
            category: doc.category,
            location: doc.location,
            image_url: doc.image_url,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
        }
    }
}

/// MongoDB implementation of the ItemRepository
pub struct MongoItemRepository {
    collection: Collection<ItemDocument>,
}

impl MongoItemRepository {
    /// Create a new MongoItemRepository over the "items" collection
    ///
    /// # Example
    /// ```ignore
    /// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
    /// let db = client.database("lostfound");
    /// let repo = MongoItemRepository::new(db);
    /// ```
    pub fn new(db: Database) -> Self {
        let collection = db.collection::<ItemDocument>("items");
        Self { collection }
    }

    /// Create a new MongoItemRepository with a custom collection name
    pub fn with_collection(db: Database, collection_name: &str) -> Self {
        let collection = db.collection::<ItemDocument>(collection_name);
        Self { collection }
    }

    fn id_filter(id: Uuid) -> mongodb::bson::Document {
        doc! { "_id": to_bson(&id).unwrap_or(Bson::Null) }
    }
}

#[async_trait]
impl ItemRepository for MongoItemRepository {
    #[instrument(skip(self))]
    async fn list_all(&self) -> ItemResult<Vec<Item>> {
        let cursor = self.collection.find(doc! {}).await?;
        let docs: Vec<ItemDocument> = cursor.try_collect().await?;
        Ok(docs.into_iter().map(Item::from).collect())
    }

    #[instrument(skip(self, input), fields(item_name = %input.name))]
    async fn create(&self, input: CreateItem) -> ItemResult<Item> {
        let item = Item::new(input);

        self.collection.insert_one(ItemDocument::from(item.clone())).await?;

        tracing::info!(item_id = %item.id, "Item created successfully");
        Ok(item)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> ItemResult<Option<Item>> {
        let document = self.collection.find_one(Self::id_filter(id)).await?;
        Ok(document.map(Item::from))
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: Uuid, input: UpdateItem) -> ItemResult<Item> {
        let filter = Self::id_filter(id);
        let existing = self
            .collection
            .find_one(filter.clone())
            .await?
            .ok_or(ItemError::NotFound(id))?;

        // Merge the partial fields, then replace the document
        let mut updated = Item::from(existing);
        updated.apply_update(input);

        self.collection
            .replace_one(filter, ItemDocument::from(updated.clone()))
            .await?;

        tracing::info!(item_id = %id, "Item updated successfully");
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> ItemResult<()> {
        let result = self.collection.delete_one(Self::id_filter(id)).await?;

        // Idempotent: deleting an already-absent id is still a success
        if result.deleted_count == 0 {
            tracing::debug!(item_id = %id, "Delete requested for absent item");
        } else {
            tracing::info!(item_id = %id, "Item deleted successfully");
        }
        Ok(())
    }
}
