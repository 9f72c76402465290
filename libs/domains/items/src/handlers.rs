use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{ErrorBody, UuidPath, ValidatedJson};
use serde::Serialize;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

use crate::error::ItemResult;
use crate::models::{CreateItem, Item, UpdateItem};
use crate::repository::ItemRepository;
use crate::service::ItemService;

/// Envelope for `GET /items`
#[derive(Serialize, ToSchema)]
pub struct ItemListResponse {
    pub success: bool,
    pub count: usize,
    pub items: Vec<Item>,
}

/// Envelope for `GET /items/{id}`
#[derive(Serialize, ToSchema)]
pub struct ItemResponse {
    pub success: bool,
    pub item: Item,
}

/// Envelope for create/update responses
#[derive(Serialize, ToSchema)]
pub struct ItemMutationResponse {
    pub success: bool,
    pub message: String,
    pub item: Item,
}

/// Envelope for `DELETE /items/{id}`
#[derive(Serialize, ToSchema)]
pub struct ItemDeletedResponse {
    pub success: bool,
    pub message: String,
}

/// OpenAPI documentation for Items API
#[derive(OpenApi)]
#[openapi(
    paths(list_items, create_item, get_item, update_item, delete_item),
    components(schemas(
        Item,
        CreateItem,
        UpdateItem,
        ItemListResponse,
        ItemResponse,
        ItemMutationResponse,
        ItemDeletedResponse,
        ErrorBody,
    )),
    tags(
        (name = "Items", description = "Lost-and-found item endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;

/// Create the items router with all HTTP endpoints
pub fn router<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_items).post(create_item))
        .route(
            "/{id}",
            get(get_item).patch(update_item).delete(delete_item),
        )
        .with_state(shared_service)
}

/// List all items
#[utoipa::path(
    get,
    path = "",
    tag = "Items",
    responses(
        (status = 200, description = "All items with a count", body = ItemListResponse),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
async fn list_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
) -> ItemResult<Json<ItemListResponse>> {
    let items = service.list_items().await?;
    Ok(Json(ItemListResponse {
        success: true,
        count: items.len(),
        items,
    }))
}

/// Create a new item
#[utoipa::path(
    post,
    path = "",
    tag = "Items",
    request_body = CreateItem,
    responses(
        (status = 201, description = "Item created successfully", body = ItemMutationResponse),
        (status = 400, description = "Missing or invalid fields", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
async fn create_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateItem>,
) -> ItemResult<impl IntoResponse> {
    let item = service.create_item(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(ItemMutationResponse {
            success: true,
            message: "Item created successfully".to_string(),
            item,
        }),
    ))
}

/// Get an item by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Item found", body = ItemResponse),
        (status = 404, description = "No item with this id", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
async fn get_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    UuidPath(id): UuidPath,
) -> ItemResult<Json<ItemResponse>> {
    let item = service.get_item(id).await?;
    Ok(Json(ItemResponse {
        success: true,
        item,
    }))
}

/// Partially update an item
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    request_body = UpdateItem,
    responses(
        (status = 200, description = "Item updated successfully", body = ItemMutationResponse),
        (status = 400, description = "Invalid fields", body = ErrorBody),
        (status = 404, description = "No item with this id", body = ErrorBody),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
async fn update_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    UuidPath(id): UuidPath,
    ValidatedJson(input): ValidatedJson<UpdateItem>,
) -> ItemResult<Json<ItemMutationResponse>> {
    let item = service.update_item(id, input).await?;
    Ok(Json(ItemMutationResponse {
        success: true,
        message: "Item updated successfully".to_string(),
        item,
    }))
}

/// Delete an item
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Items",
    params(
        ("id" = Uuid, Path, description = "Item ID")
    ),
    responses(
        (status = 200, description = "Deletion acknowledged", body = ItemDeletedResponse),
        (status = 500, description = "Store failure", body = ErrorBody)
    )
)]
async fn delete_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    UuidPath(id): UuidPath,
) -> ItemResult<Json<ItemDeletedResponse>> {
    service.delete_item(id).await?;
    Ok(Json(ItemDeletedResponse {
        success: true,
        message: "Item deleted successfully".to_string(),
    }))
}
