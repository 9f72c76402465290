//! Typed HTTP adapter over the Lost & Found REST API.
//!
//! Every method unwraps the server's `{success, ...}` envelope and turns a
//! `{success: false, error}` answer into [`ClientError::Api`], so callers
//! only ever see domain types or a single error shape.

use std::time::Duration;

use bytes::Bytes;
use domain_items::{CreateItem, Item, UpdateItem};
use reqwest::{Client, Response, multipart};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::debug;
use uuid::Uuid;

use crate::error::{ClientError, ClientResult};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Deserialize)]
struct ListEnvelope {
    count: usize,
    items: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct ItemEnvelope {
    item: Item,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UploadEnvelope {
    image_url: String,
    filename: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: String,
}

/// Connectivity probe response from `GET /api/test`.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendStatus {
    pub message: String,
    pub timestamp: String,
}

/// An uploaded image as the server reported it back.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub image_url: String,
    pub filename: String,
}

/// HTTP client for the Lost & Found API.
#[derive(Debug, Clone)]
pub struct LostFoundApi {
    base_url: String,
    http: Client,
}

impl LostFoundApi {
    /// Create a client for an API root such as `http://localhost:5000/api`.
    pub fn new(base_url: impl Into<String>) -> ClientResult<Self> {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT)
    }

    /// Create a client with a custom request timeout.
    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> ClientResult<Self> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Probe backend connectivity via `GET /test`.
    pub async fn test_backend(&self) -> ClientResult<BackendStatus> {
        let response = self.http.get(self.url("/test")).send().await?;
        unwrap_envelope(response).await
    }

    /// Fetch every item.
    pub async fn get_items(&self) -> ClientResult<Vec<Item>> {
        let response = self.http.get(self.url("/items")).send().await?;
        let envelope: ListEnvelope = unwrap_envelope(response).await?;
        debug!(count = envelope.count, "fetched items");
        Ok(envelope.items)
    }

    /// Fetch a single item by id.
    pub async fn get_item(&self, id: Uuid) -> ClientResult<Item> {
        let response = self
            .http
            .get(self.url(&format!("/items/{id}")))
            .send()
            .await?;
        let envelope: ItemEnvelope = unwrap_envelope(response).await?;
        Ok(envelope.item)
    }

    /// Create a new item report.
    pub async fn create_item(&self, input: &CreateItem) -> ClientResult<Item> {
        let response = self
            .http
            .post(self.url("/items"))
            .json(input)
            .send()
            .await?;
        let envelope: ItemEnvelope = unwrap_envelope(response).await?;
        Ok(envelope.item)
    }

    /// Patch an existing item.
    pub async fn update_item(&self, id: Uuid, updates: &UpdateItem) -> ClientResult<Item> {
        let response = self
            .http
            .patch(self.url(&format!("/items/{id}")))
            .json(updates)
            .send()
            .await?;
        let envelope: ItemEnvelope = unwrap_envelope(response).await?;
        Ok(envelope.item)
    }

    /// Delete an item. Succeeds even when the id does not exist.
    pub async fn delete_item(&self, id: Uuid) -> ClientResult<()> {
        let response = self
            .http
            .delete(self.url(&format!("/items/{id}")))
            .send()
            .await?;
        check_status(response).await?;
        Ok(())
    }

    /// Upload an image via multipart form, field name `image`.
    pub async fn upload_image(
        &self,
        filename: &str,
        content_type: &str,
        data: Bytes,
    ) -> ClientResult<UploadedImage> {
        let part = multipart::Part::stream(data)
            .file_name(filename.to_string())
            .mime_str(content_type)
            .map_err(|e| ClientError::Invalid(format!("Bad content type: {e}")))?;
        let form = multipart::Form::new().part("image", part);

        let response = self
            .http
            .post(self.url("/upload"))
            .multipart(form)
            .send()
            .await?;
        let envelope: UploadEnvelope = unwrap_envelope(response).await?;
        Ok(UploadedImage {
            image_url: envelope.image_url,
            filename: envelope.filename,
        })
    }
}

/// Turn a non-2xx response into `ClientError::Api`, keeping the server's
/// error message when the body carries one.
async fn check_status(response: Response) -> ClientResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = match response.json::<ErrorEnvelope>().await {
        Ok(envelope) => envelope.error,
        Err(_) => format!("Request failed with status {status}"),
    };
    Err(ClientError::Api {
        status: status.as_u16(),
        message,
    })
}

async fn unwrap_envelope<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
    let response = check_status(response).await?;
    Ok(response.json::<T>().await?)
}
