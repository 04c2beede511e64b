//! Identity source port.

use async_trait::async_trait;

use crate::auth::Identity;
use crate::error::Result;

/// Port for the authentication backend.
#[async_trait]
pub trait IdentitySource: Send + Sync {
    /// Find the currently signed-in user, `None` if nobody is.
    async fn current_identity(&self) -> Result<Option<Identity>>;

    /// Sign the current user out.
    async fn sign_out(&self) -> Result<()>;
}
