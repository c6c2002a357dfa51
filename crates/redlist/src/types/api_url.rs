//! API base URL type.

use std::fmt;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// A validated Reddit API base URL.
///
/// Reddit serves the token endpoint and the authenticated API from two
/// different hosts, so a session holds one `ApiUrl` for each. The URL must be
/// absolute and use HTTPS (or HTTP for localhost).
///
/// # Example
///
/// ```
/// use redlist::ApiUrl;
///
/// let api = ApiUrl::new("https://oauth.reddit.com").unwrap();
/// assert_eq!(api.endpoint("/api/v1/me"), "https://oauth.reddit.com/api/v1/me");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiUrl(Url);

impl ApiUrl {
    /// Default host for the OAuth2 token endpoint.
    pub const AUTH_DEFAULT: &'static str = "https://www.reddit.com";

    /// Default host for authenticated API requests.
    pub const API_DEFAULT: &'static str = "https://oauth.reddit.com";

    /// Create a new API URL from a string, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s).map_err(|e| InvalidInputError::ApiUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&url, s)?;

        Ok(Self(url))
    }

    /// Returns the full URL for an endpoint path such as `/api/v1/me`.
    pub fn endpoint(&self, path: &str) -> String {
        // Url always renders a root path as "/", so trim before joining.
        let base = self.0.as_str().trim_end_matches('/');
        format!("{}/{}", base, path.trim_start_matches('/'))
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        let scheme = url.scheme();
        let is_localhost = url
            .host_str()
            .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "[::1]");

        if scheme != "https" && !(scheme == "http" && is_localhost) {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must use HTTPS (HTTP allowed only for localhost)".to_string(),
            }
            .into());
        }

        if url.host_str().is_none() {
            return Err(InvalidInputError::ApiUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for ApiUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
