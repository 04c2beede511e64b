//! Profile store port.

use async_trait::async_trait;

use crate::auth::UserId;
use crate::error::Result;
use crate::profile::Profile;

/// Port for profile persistence.
#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Find the profile of a user.
    async fn find_profile(&self, user_id: &UserId) -> Result<Option<Profile>>;
}
