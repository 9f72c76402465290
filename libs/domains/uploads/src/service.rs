use crate::error::{UploadError, UploadResult};
use crate::storage::BlobStorage;
use bytes::Bytes;
use tracing::{info, instrument};
use uuid::Uuid;

/// Maximum accepted upload size (5 MiB, matching the public API contract).
pub const MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Result of a successful image upload.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    /// Object key inside the bucket.
    pub filename: String,
    /// Publicly reachable URL.
    pub image_url: String,
}

/// Business logic for image uploads.
#[derive(Clone)]
pub struct UploadService<S: BlobStorage> {
    storage: S,
}

impl<S: BlobStorage> UploadService<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Validate and store an uploaded image.
    ///
    /// Rejects non-image content types and payloads over [`MAX_UPLOAD_BYTES`]
    /// before any bytes reach the storage backend.
    #[instrument(skip(self, data), fields(size = data.len()))]
    pub async fn upload_image(
        &self,
        original_name: &str,
        content_type: &str,
        data: Bytes,
    ) -> UploadResult<UploadedImage> {
        if !content_type.starts_with("image/") {
            return Err(UploadError::NotAnImage(content_type.to_string()));
        }
        if data.len() > MAX_UPLOAD_BYTES {
            return Err(UploadError::TooLarge(data.len()));
        }

        let key = object_key(original_name);
        let stored = self.storage.put(&key, content_type, data).await?;

        info!(backend = self.storage.name(), key = %stored.key, "image uploaded");

        Ok(UploadedImage {
            filename: stored.key,
            image_url: stored.public_url,
        })
    }
}

/// Build a collision-resistant object key under the `items/` prefix.
///
/// Combines the upload timestamp with a random component so two files
/// uploaded in the same millisecond with the same name cannot clobber
/// each other.
fn object_key(original_name: &str) -> String {
    let millis = chrono::Utc::now().timestamp_millis();
    let rand = Uuid::new_v4().simple().to_string();
    format!(
        "items/{}_{}_{}",
        millis,
        &rand[..8],
        sanitize_filename(original_name)
    )
}

/// Keep the key URL-friendly: alphanumerics, dots, dashes and underscores
/// pass through, everything else becomes an underscore.
fn sanitize_filename(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{MockBlobStorage, StoredObject};

    fn service_with(storage: MockBlobStorage) -> UploadService<MockBlobStorage> {
        UploadService::new(storage)
    }

    #[tokio::test]
    async fn stores_valid_image_and_returns_public_url() {
        let mut storage = MockBlobStorage::new();
        storage
            .expect_put()
            .withf(|key, content_type, data| {
                key.starts_with("items/")
                    && key.ends_with("_photo.png")
                    && content_type == "image/png"
                    && data.len() == 2 * 1024 * 1024
            })
            .times(1)
            .returning(|key, _, _| {
                Ok(StoredObject {
                    key: key.to_string(),
                    public_url: format!("https://storage.googleapis.com/bucket/{key}"),
                })
            });
        storage.expect_name().return_const("mock");

        let data = Bytes::from(vec![0u8; 2 * 1024 * 1024]);
        let uploaded = service_with(storage)
            .upload_image("photo.png", "image/png", data)
            .await
            .unwrap();

        assert!(uploaded.image_url.starts_with("https://storage.googleapis.com/bucket/items/"));
        assert!(uploaded.filename.starts_with("items/"));
    }

    #[tokio::test]
    async fn rejects_oversized_payload_before_storage() {
        let mut storage = MockBlobStorage::new();
        storage.expect_put().times(0);

        let data = Bytes::from(vec![0u8; 6 * 1024 * 1024]);
        let err = service_with(storage)
            .upload_image("big.jpg", "image/jpeg", data)
            .await
            .unwrap_err();

        assert!(matches!(err, UploadError::TooLarge(_)));
    }

    #[tokio::test]
    async fn rejects_non_image_content_type() {
        let mut storage = MockBlobStorage::new();
        storage.expect_put().times(0);

        let err = service_with(storage)
            .upload_image("notes.txt", "text/plain", Bytes::from_static(b"hello"))
            .await
            .unwrap_err();

        assert!(matches!(err, UploadError::NotAnImage(_)));
    }

    #[tokio::test]
    async fn accepts_payload_at_exact_limit() {
        let mut storage = MockBlobStorage::new();
        storage
            .expect_put()
            .times(1)
            .returning(|key, _, _| {
                Ok(StoredObject {
                    key: key.to_string(),
                    public_url: format!("https://example.test/{key}"),
                })
            });
        storage.expect_name().return_const("mock");

        let data = Bytes::from(vec![0u8; MAX_UPLOAD_BYTES]);
        service_with(storage)
            .upload_image("edge.png", "image/png", data)
            .await
            .unwrap();
    }

    #[test]
    fn filename_sanitization() {
        assert_eq!(sanitize_filename("my photo (1).png"), "my_photo__1_.png");
        assert_eq!(sanitize_filename("café.jpg"), "caf_.jpg");
        assert_eq!(sanitize_filename(""), "upload");
    }

    #[test]
    fn object_keys_are_unique_for_identical_names() {
        let a = object_key("photo.png");
        let b = object_key("photo.png");
        assert_ne!(a, b);
        assert!(a.starts_with("items/"));
    }
}
