//! Upload API routes
//!
//! Wires the uploads domain to HTTP routes. The multipart body limit is
//! raised above the 5 MiB image ceiling so the size check in the service
//! produces the envelope-shaped error instead of a bare 413.

use axum::{Router, extract::DefaultBodyLimit};
use domain_uploads::{GcsBlobStorage, UploadService, handlers, service::MAX_UPLOAD_BYTES};

use crate::state::AppState;

/// Create upload router
pub fn router(state: &AppState) -> Router {
    let storage = GcsBlobStorage::new(state.config.gcs.clone());
    let service = UploadService::new(storage);

    handlers::router(service).layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + 64 * 1024))
}
