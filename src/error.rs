//! Error handler for the profile page.

use std::fmt;

use thiserror::Error;

use crate::strings::StringKey;

pub type Result<T> = std::result::Result<T, SourceError>;

/// Errors raised by the identity source or the profile store.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Backend answered with an error. The message is shown as-is to the user
    /// on some paths, so keep it human readable.
    #[error("{0}")]
    Backend(String),

    #[error("operation interrupted before completion")]
    Interrupted,

    #[error(transparent)]
    Internal(Box<dyn std::error::Error + Send + Sync>),
}

impl SourceError {
    /// Create a [`SourceError::Backend`] from a message.
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend(message.into())
    }

    /// Wrap any error as [`SourceError::Internal`].
    pub fn internal<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Internal(Box::new(err))
    }
}

/// Which fetch of the page sequence failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Identity,
    Profile,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Stage::Identity => write!(f, "identity"),
            Stage::Profile => write!(f, "profile"),
        }
    }
}

/// Everything that can go wrong while the profile page is active.
///
/// None of these leave the presenter: each one turns into at most one
/// [`Notice`] and, except [`ProfileError::SignOutFailed`], a return to the
/// login screen.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error("no signed-in user")]
    NotSignedIn,

    #[error("profile not found")]
    ProfileNotFound,

    #[error("{stage} fetch failed: {message}")]
    FetchFailed { stage: Stage, message: String },

    #[error("sign out failed: {0}")]
    SignOutFailed(String),
}

impl ProfileError {
    /// Build a [`ProfileError::FetchFailed`] out of a collaborator error.
    pub fn fetch_failed(stage: Stage, err: &SourceError) -> Self {
        Self::FetchFailed {
            stage,
            message: err.to_string(),
        }
    }

    /// Message to show the user, if any.
    ///
    /// Identity problems always use the generic localized message. Profile
    /// and sign-out failures show the backend text.
    pub fn notice(&self) -> Option<Notice> {
        match self {
            ProfileError::NotSignedIn
            | ProfileError::FetchFailed {
                stage: Stage::Identity,
                ..
            } => Some(Notice::Localized(StringKey::ErrorRetrievingData)),
            ProfileError::ProfileNotFound => None,
            ProfileError::FetchFailed { message, .. }
            | ProfileError::SignOutFailed(message) => {
                Some(Notice::Text(message.clone()))
            },
        }
    }

    /// Whether this error sends the user back to the login screen.
    pub fn redirects_to_login(&self) -> bool {
        !matches!(self, ProfileError::SignOutFailed(_))
    }

    /// Short label used for logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            ProfileError::NotSignedIn => "not_signed_in",
            ProfileError::ProfileNotFound => "profile_not_found",
            ProfileError::FetchFailed { .. } => "fetch_failed",
            ProfileError::SignOutFailed(_) => "sign_out_failed",
        }
    }
}

/// Transient message shown by the view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Resolved by the view through its string resources.
    Localized(StringKey),
    /// Raw text coming from a backend.
    Text(String),
}
