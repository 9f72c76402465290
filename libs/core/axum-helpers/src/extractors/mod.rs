//! Custom Axum extractors with envelope-shaped rejections.

mod uuid_path;
mod validated_json;

pub use uuid_path::UuidPath;
pub use validated_json::ValidatedJson;
