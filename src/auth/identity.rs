//! Identity of the signed-in user.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable key of a user, as issued by the identity source.
///
/// Opaque: no format is enforced here.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Create a new [`UserId`].
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the same string as a string slice `&str`.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A signed-in user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    user_id: UserId,
    email: Option<String>,
}

impl Identity {
    /// Create a new [`Identity`].
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            email: None,
        }
    }

    /// Update `email` of [`Identity`].
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Key used to look the profile up.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Email the user signed in with, when the source exposes it.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}
