use axum::{Json, Router, extract::Multipart, extract::State, routing::post};
use axum_helpers::{AppError, ErrorBody};
use bytes::Bytes;
use serde::Serialize;
use std::sync::Arc;
use utoipa::{OpenApi, ToSchema};

use crate::error::UploadError;
use crate::service::UploadService;
use crate::storage::BlobStorage;

/// Envelope for a successful upload.
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
    pub image_url: String,
    pub filename: String,
}

/// OpenAPI documentation for the upload endpoint
#[derive(OpenApi)]
#[openapi(
    paths(upload_image),
    components(schemas(UploadResponse, ErrorBody)),
    tags(
        (name = "Uploads", description = "Image upload to public object storage")
    )
)]
pub struct ApiDoc;

/// Create the uploads router.
pub fn router<S: BlobStorage + 'static>(service: UploadService<S>) -> Router {
    Router::new()
        .route("/", post(upload_image))
        .with_state(Arc::new(service))
}

/// Upload a single image
///
/// Expects a multipart form with a file field named `image`.
#[utoipa::path(
    post,
    path = "",
    tag = "Uploads",
    request_body(content = Vec<u8>, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "File uploaded successfully", body = UploadResponse),
        (status = 400, description = "Missing file, wrong type or too large", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody)
    )
)]
async fn upload_image<S: BlobStorage>(
    State(service): State<Arc<UploadService<S>>>,
    multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let (name, content_type, data) = extract_image_field(multipart).await?;

    let uploaded = service
        .upload_image(&name, &content_type, data)
        .await
        .map_err(AppError::from)?;

    Ok(Json(UploadResponse {
        success: true,
        message: "File uploaded successfully".to_string(),
        image_url: uploaded.image_url,
        filename: uploaded.filename,
    }))
}

/// Pull the `image` field out of the multipart body.
async fn extract_image_field(
    mut multipart: Multipart,
) -> Result<(String, String, Bytes), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let file_name = field.file_name().unwrap_or("upload").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Failed to read file: {e}")))?;

        return Ok((file_name, content_type, data));
    }

    Err(UploadError::NoFile.into())
}
