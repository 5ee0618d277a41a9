//! Credential material resolved for a username during login.

use serde::{Deserialize, Serialize};

/// Stored credentials and role assignments of a user
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserCredentials {
    /// Stable principal identifier, becomes the token subject
    pub subject: String,

    pub username: String,

    /// bcrypt hash of the user's password
    pub password_hash: String,

    /// Role names in assignment order
    #[serde(default)]
    pub roles: Vec<String>,
}

impl UserCredentials {
    pub fn new<I, S>(
        subject: impl Into<String>,
        username: impl Into<String>,
        password_hash: impl Into<String>,
        roles: I,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            subject: subject.into(),
            username: username.into(),
            password_hash: password_hash.into(),
            roles: roles.into_iter().map(Into::into).collect(),
        }
    }
}

// Keeps the hash out of logs.
impl std::fmt::Debug for UserCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserCredentials")
            .field("subject", &self.subject)
            .field("username", &self.username)
            .field("password_hash", &"<redacted>")
            .field("roles", &self.roles)
            .finish()
    }
}
