use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// Lost/Found classification of an item.
///
/// The wire form is exactly `"Lost"` or `"Found"`; any other value is
/// rejected at deserialization.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, ToSchema,
)]
pub enum ItemStatus {
    Lost,
    Found,
}

/// Map coordinate attached to an item report.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

/// A single lost/found report record.
///
/// Wire shape (camelCase):
/// `{id, name, description, status, category, location|null, imageUrl|null,
/// createdAt, updatedAt}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier, assigned on creation and never reassigned
    pub id: Uuid,
    /// Item name, trimmed and non-empty
    pub name: String,
    /// Item description, trimmed and non-empty
    pub description: String,
    /// Lost/Found classification
    pub status: ItemStatus,
    /// Category label; "Other" when the reporter did not pick one
    pub category: String,
    /// Optional map coordinate; absent means the item is not plotted
    pub location: Option<Location>,
    /// Public URL of an uploaded photo; absent renders a placeholder
    pub image_url: Option<String>,
    /// Creation timestamp (RFC 3339)
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp; refreshed on every update
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new item.
///
/// `name`, `description`, and `status` are mandatory; serde rejects a
/// missing `status` or one outside {Lost, Found} before validation runs.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateItem {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(min = 1, max = 2000))]
    pub description: String,
    pub status: ItemStatus,
    pub category: Option<String>,
    pub location: Option<Location>,
    pub image_url: Option<String>,
}

/// DTO for partially updating an existing item.
///
/// Any subset of fields may be present; `status` is re-validated by the
/// enum type the same way creation validates it.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateItem {
    #[validate(length(min = 1, max = 200))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 2000))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ItemStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl UpdateItem {
    /// True when no field is present (an empty PATCH body).
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.category.is_none()
            && self.location.is_none()
            && self.image_url.is_none()
    }
}

impl Item {
    /// Create a new item from a CreateItem DTO.
    ///
    /// Assigns the identifier, trims name/description, defaults the
    /// category to "Other", and stamps createdAt == updatedAt.
    pub fn new(input: CreateItem) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::now_v7(),
            name: input.name.trim().to_string(),
            description: input.description.trim().to_string(),
            status: input.status,
            category: input.category.unwrap_or_else(|| "Other".to_string()),
            location: input.location,
            image_url: input.image_url,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge updates from an UpdateItem DTO, refreshing `updatedAt`.
    pub fn apply_update(&mut self, update: UpdateItem) {
        if let Some(name) = update.name {
            self.name = name.trim().to_string();
        }
        if let Some(description) = update.description {
            self.description = description.trim().to_string();
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(location) = update.location {
            self.location = Some(location);
        }
        if let Some(image_url) = update.image_url {
            self.image_url = Some(image_url);
        }
        self.updated_at = Utc::now();
    }
}
