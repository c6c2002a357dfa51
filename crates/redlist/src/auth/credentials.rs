//! Password-grant credentials type.

use std::fmt;

/// Credentials for the OAuth2 password grant.
///
/// A Reddit "script" app authenticates with its own client id and secret
/// plus the username and password of the account that registered it.
///
/// # Security
///
/// The client secret and password are never exposed in Debug output.
///
/// # Example
///
/// ```
/// use redlist::Credentials;
///
/// let creds = Credentials::new("client-id", "client-secret", "alice", "hunter2");
/// assert_eq!(creds.username(), "alice");
/// ```
#[derive(Clone)]
pub struct Credentials {
    client_id: String,
    client_secret: String,
    username: String,
    password: String,
}

impl Credentials {
    /// Create new credentials.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns the OAuth2 client id.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// Returns the account username.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the client secret.
    ///
    /// Use this only when constructing the token request.
    pub(crate) fn client_secret(&self) -> &str {
        &self.client_secret
    }

    /// Returns the account password.
    ///
    /// Use this only when constructing the token request.
    pub(crate) fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_hide_secrets_in_debug() {
        let creds = Credentials::new("my-client", "top-secret", "alice", "secret123");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("my-client"));
        assert!(debug.contains("alice"));
        assert!(!debug.contains("top-secret"));
        assert!(!debug.contains("secret123"));
        assert!(debug.contains("[REDACTED]"));
    }
}
