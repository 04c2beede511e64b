//! In-memory identity source and profile store.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::auth::{Credentials, Identity, UserId};
use crate::error::{Result, SourceError};
use crate::ports::{IdentitySource, ProfileStore};
use crate::profile::Profile;

#[derive(Debug)]
struct Account {
    user_id: UserId,
    credentials: Credentials,
}

/// Identity source keeping accounts in memory.
#[derive(Debug, Default)]
pub struct InMemoryIdentitySource {
    accounts: RwLock<Vec<Account>>,
    current: RwLock<Option<Identity>>,
}

impl InMemoryIdentitySource {
    /// Create a new [`InMemoryIdentitySource`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an account and return its key.
    pub async fn register(&self, credentials: Credentials) -> UserId {
        let mut accounts = self.accounts.write().await;
        let user_id = UserId::new(format!("u{}", accounts.len() + 1));

        tracing::debug!(
            %user_id,
            username = credentials.username(),
            "account registered"
        );
        accounts.push(Account {
            user_id: user_id.clone(),
            credentials,
        });
        user_id
    }

    /// Sign in with username or email, plus password.
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<Identity> {
        let accounts = self.accounts.read().await;
        let account = accounts
            .iter()
            .find(|account| same_account(&account.credentials, credentials))
            .ok_or_else(|| SourceError::backend("invalid credentials"))?;

        let identity = Identity::new(account.user_id.clone())
            .with_email(account.credentials.email());
        *self.current.write().await = Some(identity.clone());
        Ok(identity)
    }
}

fn same_account(stored: &Credentials, given: &Credentials) -> bool {
    let same_username = !given.username().is_empty()
        && stored.username() == given.username();
    let same_email =
        !given.email().is_empty() && stored.email() == given.email();
    let same_user = same_username || same_email;
    same_user && stored.password() == given.password()
}

#[async_trait]
impl IdentitySource for InMemoryIdentitySource {
    async fn current_identity(&self) -> Result<Option<Identity>> {
        Ok(self.current.read().await.clone())
    }

    async fn sign_out(&self) -> Result<()> {
        self.current.write().await.take();
        Ok(())
    }
}

/// Profile store keeping profiles in memory.
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    profiles: RwLock<HashMap<UserId, Profile>>,
}

impl InMemoryProfileStore {
    /// Create a new [`InMemoryProfileStore`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the profile of a user.
    pub async fn insert(&self, user_id: UserId, profile: Profile) {
        self.profiles.write().await.insert(user_id, profile);
    }
}

#[async_trait]
impl ProfileStore for InMemoryProfileStore {
    async fn find_profile(&self, user_id: &UserId) -> Result<Option<Profile>> {
        Ok(self.profiles.read().await.get(user_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials::new("hunter2", "tj", "tj@example.com")
    }

    #[tokio::test]
    async fn test_sign_in_and_out() {
        let source = InMemoryIdentitySource::new();
        assert_eq!(source.current_identity().await.unwrap(), None);

        let user_id = source.register(credentials()).await;
        assert_eq!(user_id.as_str(), "u1");

        // By email, without username.
        let login = Credentials::new("hunter2", "", "tj@example.com");
        let identity = source.sign_in(&login).await.unwrap();
        assert_eq!(identity.user_id(), &user_id);
        assert_eq!(identity.email(), Some("tj@example.com"));
        assert_eq!(source.current_identity().await.unwrap(), Some(identity));

        source.sign_out().await.unwrap();
        assert_eq!(source.current_identity().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_sign_in_rejects_wrong_password() {
        let source = InMemoryIdentitySource::new();
        source.register(credentials()).await;

        let err = source
            .sign_in(&credentials().with_password("nope"))
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "invalid credentials");

        // Empty identifiers never match.
        let err = source
            .sign_in(&Credentials::new("hunter2", "", ""))
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::Backend(_)));
        assert_eq!(source.current_identity().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_profiles() {
        let store = InMemoryProfileStore::new();
        let user_id = UserId::new("u1");
        assert_eq!(store.find_profile(&user_id).await.unwrap(), None);

        let profile = Profile {
            name: "TJ".into(),
            ..Default::default()
        };
        store.insert(user_id.clone(), profile.clone()).await;
        assert_eq!(store.find_profile(&user_id).await.unwrap(), Some(profile));
        assert_eq!(store.find_profile(&UserId::new("u2")).await.unwrap(), None);
    }
}
