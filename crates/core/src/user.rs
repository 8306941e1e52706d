//! User session payloads.

use serde::{Deserialize, Serialize};
use crate::error::{required, Result};
use crate::id::UserId;

/// The signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier
    pub id: UserId,

    /// Login name
    pub username: String,

    /// Contact address
    #[serde(default)]
    pub email: Option<String>,
}

/// Login form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Login name
    pub username: String,
    /// Password
    pub password: String,
}

impl Credentials {
    /// Create credentials.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Reject blank fields before a round trip to the server.
    pub fn validate(&self) -> Result<()> {
        required("username", &self.username)?;
        if self.password.is_empty() {
            return Err(crate::CoreError::validation("password", "This field may not be blank."));
        }
        Ok(())
    }
}

/// Registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    /// Login name
    pub username: String,
    /// Contact address
    pub email: String,
    /// Password
    pub password: String,
}
