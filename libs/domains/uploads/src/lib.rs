//! Uploads Domain
//!
//! Image upload gateway: accepts a multipart file from the client, validates
//! it, and stores it in a public object-storage bucket. The storage backend
//! sits behind the [`BlobStorage`] trait so the service can be tested without
//! touching the network.

pub mod error;
pub mod handlers;
pub mod service;
pub mod storage;

pub use error::{UploadError, UploadResult};
pub use service::{UploadService, UploadedImage};
pub use storage::{BlobStorage, GcsBlobStorage, GcsConfig, StoredObject};
