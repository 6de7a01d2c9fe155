use std::fmt;

use serde::{Deserialize, Serialize};

/// Registration input
///
/// Missing fields deserialize as empty strings so they fail validation
/// rather than parsing.
#[derive(Clone, Deserialize)]
pub struct RegistrationRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

/// Login input
#[derive(Clone, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl RegistrationRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }
}

impl LoginRequest {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }
}

impl fmt::Debug for RegistrationRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Stored account record, keyed by `username`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    /// PHC-formatted argon2 hash
    pub password_hash: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_password() {
        let reg = RegistrationRequest::new("alice", "s3cret");
        let login = LoginRequest::new("alice", "s3cret");
        assert!(!format!("{reg:?}").contains("s3cret"));
        assert!(!format!("{login:?}").contains("s3cret"));
        assert!(format!("{login:?}").contains("alice"));
    }

    #[test]
    fn missing_fields_deserialize_empty() {
        let req: RegistrationRequest = serde_json::from_str(r#"{"username":"x"}"#).unwrap();
        assert_eq!(req.username, "x");
        assert!(req.password.is_empty());
    }
}
