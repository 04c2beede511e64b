//! Login and signup input.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Credentials typed by the user.
///
/// Immutable: use the `with_*` methods to get an updated copy. Nothing is
/// validated here, the registration form does it.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    #[serde(skip_serializing)]
    password: String,
    username: String,
    email: String,
}

impl Credentials {
    /// Create a new [`Credentials`].
    pub fn new(
        password: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            password: password.into(),
            username: username.into(),
            email: email.into(),
        }
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Copy of [`Credentials`] with another `password`.
    pub fn with_password(self, password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            ..self
        }
    }

    /// Copy of [`Credentials`] with another `username`.
    pub fn with_username(self, username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            ..self
        }
    }

    /// Copy of [`Credentials`] with another `email`.
    pub fn with_email(self, email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            ..self
        }
    }
}

// Password never reaches logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("password", &"[redacted]")
            .field("username", &self.username)
            .field("email", &self.email)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_copy_with_change() {
        let original = Credentials::new("hunter2", "tj", "tj@example.com");
        let updated = original.clone().with_email("tj@realtalk.app");

        assert_eq!(original.email(), "tj@example.com");
        assert_eq!(updated.email(), "tj@realtalk.app");
        assert_eq!(updated.username(), "tj");
        assert_eq!(updated.password(), "hunter2");

        let updated =
            updated.with_username("tj2").with_password("correct horse");
        assert_eq!(updated.username(), "tj2");
        assert_eq!(updated.password(), "correct horse");
    }

    #[test]
    fn test_password_is_hidden() {
        let credentials = Credentials::new("hunter2", "tj", "tj@example.com");

        let debug = format!("{credentials:?}");
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("tj@example.com"));

        let json = serde_json::to_string(&credentials).unwrap();
        assert!(!json.contains("hunter2"));
    }

    #[test]
    fn test_deserialize_keeps_password() {
        let credentials: Credentials = serde_json::from_str(
            r#"{"password":"hunter2","username":"tj","email":"tj@x.com"}"#,
        )
        .unwrap();
        assert_eq!(credentials.password(), "hunter2");
    }
}
