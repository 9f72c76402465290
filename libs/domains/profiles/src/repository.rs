use crate::error::ProfileResult;
use crate::models::Profile;
use async_trait::async_trait;

/// Persistence operations for profiles.
#[async_trait]
#[cfg_attr(test, mockall::automock)]
pub trait ProfileRepository: Send + Sync {
    /// Fetch a profile by the auth provider's user id.
    async fn get_by_id(&self, id: &str) -> ProfileResult<Option<Profile>>;

    /// Insert or replace the profile for its id.
    async fn upsert(&self, profile: Profile) -> ProfileResult<Profile>;
}
