//! Profiles Domain
//!
//! User profile documents keyed by the authentication provider's user id.
//! Besides plain reads and upserts, [`MongoProfileRepository::watch_profile`]
//! exposes a live subscription backed by a MongoDB change stream, so every
//! consumer of a profile sees edits as soon as they land.

pub mod error;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod subscription;

pub use error::{ProfileError, ProfileResult};
pub use models::Profile;
pub use mongodb::MongoProfileRepository;
pub use repository::ProfileRepository;
pub use subscription::ProfileSubscription;
