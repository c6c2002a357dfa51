//! Access token type for Reddit's OAuth2 API.

use std::fmt;

use chrono::{DateTime, Duration, Utc};

/// Seconds shaved off the advertised lifetime so a token is never used right
/// at its expiry boundary.
const EXPIRY_MARGIN_SECS: i64 = 60;

/// A bearer token issued by the password grant.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone)]
pub struct AccessToken {
    value: String,
    expires_at: Option<DateTime<Utc>>,
}

impl AccessToken {
    /// Create a token that expires `expires_in` seconds from `now`.
    pub(crate) fn new(
        value: impl Into<String>,
        expires_in: Option<i64>,
        now: DateTime<Utc>,
    ) -> Self {
        let expires_at =
            expires_in.map(|secs| now + Duration::seconds((secs - EXPIRY_MARGIN_SECS).max(0)));
        Self {
            value: value.into(),
            expires_at,
        }
    }

    /// Returns the token value for use in authorization headers.
    pub(crate) fn as_str(&self) -> &str {
        &self.value
    }

    /// Returns when this token stops being accepted, if the server said.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// Whether the token must be replaced before use at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("value", &"[REDACTED]")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn access_token_hides_value_in_debug() {
        let token = AccessToken::new("eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9", None, Utc::now());
        let debug = format!("{:?}", token);
        assert!(!debug.contains("eyJ"));
        assert!(debug.contains("[REDACTED]"));
    }

    #[test]
    fn expiry_includes_margin() {
        let now = Utc::now();
        let token = AccessToken::new("t", Some(3600), now);
        assert!(!token.is_expired(now));
        assert!(!token.is_expired(now + Duration::seconds(3500)));
        assert!(token.is_expired(now + Duration::seconds(3540)));
    }

    #[test]
    fn token_without_lifetime_never_expires() {
        let now = Utc::now();
        let token = AccessToken::new("t", None, now);
        assert!(!token.is_expired(now + Duration::days(365)));
    }

    #[test]
    fn short_lifetime_expires_immediately() {
        let now = Utc::now();
        let token = AccessToken::new("t", Some(30), now);
        assert!(token.is_expired(now));
    }
}
