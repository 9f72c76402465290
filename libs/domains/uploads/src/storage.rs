//! Object storage backends.
//!
//! [`BlobStorage`] abstracts over the bucket so the upload service can be
//! unit tested with a mock. [`GcsBlobStorage`] talks to the Google Cloud
//! Storage JSON media-upload API and marks every object public on write.

use crate::error::{UploadError, UploadResult};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;
use tracing::{debug, error};

/// A blob that has been written to the bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredObject {
    /// Object key inside the bucket, e.g. `items/1712000000000_ab12cd34_photo.png`.
    pub key: String,
    /// Publicly reachable URL for the object.
    pub public_url: String,
}

/// Trait for object storage backends.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlobStorage: Send + Sync {
    /// Write `data` under `key` with the given content type and make it
    /// publicly readable.
    async fn put(&self, key: &str, content_type: &str, data: Bytes) -> UploadResult<StoredObject>;

    /// Backend name for logging.
    fn name(&self) -> &'static str;
}

/// Google Cloud Storage configuration.
#[derive(Debug, Clone)]
pub struct GcsConfig {
    /// Bucket name.
    pub bucket: String,
    /// OAuth bearer token with `storage.objects.create` permission.
    pub access_token: String,
    /// Upload API base URL (defaults to production).
    pub upload_url: String,
    /// Public object base URL (defaults to production).
    pub public_url: String,
}

impl GcsConfig {
    /// Create a new configuration against the production GCS endpoints.
    pub fn new(bucket: String, access_token: String) -> Self {
        Self {
            bucket,
            access_token,
            upload_url: "https://storage.googleapis.com/upload/storage/v1".to_string(),
            public_url: "https://storage.googleapis.com".to_string(),
        }
    }

    /// Create configuration from environment variables.
    pub fn from_env() -> UploadResult<Self> {
        let bucket = std::env::var("GCS_BUCKET")
            .map_err(|_| UploadError::Config("GCS_BUCKET not set".to_string()))?;
        let access_token = std::env::var("GCS_ACCESS_TOKEN")
            .map_err(|_| UploadError::Config("GCS_ACCESS_TOKEN not set".to_string()))?;

        let mut config = Self::new(bucket, access_token);
        if let Ok(url) = std::env::var("GCS_UPLOAD_URL") {
            config.upload_url = url;
        }
        if let Ok(url) = std::env::var("GCS_PUBLIC_URL") {
            config.public_url = url;
        }
        Ok(config)
    }
}

/// Google Cloud Storage backend.
#[derive(Clone)]
pub struct GcsBlobStorage {
    config: GcsConfig,
    client: Client,
}

impl GcsBlobStorage {
    /// Create a new GCS backend.
    pub fn new(config: GcsConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Create a backend from environment variables.
    pub fn from_env() -> UploadResult<Self> {
        Ok(Self::new(GcsConfig::from_env()?))
    }
}

#[async_trait]
impl BlobStorage for GcsBlobStorage {
    async fn put(&self, key: &str, content_type: &str, data: Bytes) -> UploadResult<StoredObject> {
        let url = format!(
            "{}/b/{}/o?uploadType=media&name={}&predefinedAcl=publicRead",
            self.config.upload_url,
            self.config.bucket,
            urlencoding::encode(key)
        );

        debug!(%key, %content_type, size = data.len(), "uploading object to GCS");

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.config.access_token))
            .header("Content-Type", content_type)
            .body(data)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(%key, %status, %body, "GCS rejected the upload");
            return Err(UploadError::Storage(format!(
                "GCS returned {status}: {body}"
            )));
        }

        Ok(StoredObject {
            key: key.to_string(),
            public_url: format!("{}/{}/{}", self.config.public_url, self.config.bucket, key),
        })
    }

    fn name(&self) -> &'static str {
        "gcs"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_defaults() {
        let config = GcsConfig::new("campus-items".to_string(), "token".to_string());
        assert_eq!(
            config.upload_url,
            "https://storage.googleapis.com/upload/storage/v1"
        );
        assert_eq!(config.public_url, "https://storage.googleapis.com");
    }

    #[test]
    fn public_url_shape() {
        let config = GcsConfig::new("campus-items".to_string(), "token".to_string());
        let url = format!(
            "{}/{}/{}",
            config.public_url, config.bucket, "items/1712000000000_ab12cd34_photo.png"
        );
        assert_eq!(
            url,
            "https://storage.googleapis.com/campus-items/items/1712000000000_ab12cd34_photo.png"
        );
    }
}
