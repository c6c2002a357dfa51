//! Environment-sourced configuration.
//!
//! Values are read once at startup. Nothing is validated at read time; each
//! accessor fails when the value it needs is absent, which happens inside
//! [`authenticate`](crate::authenticate).

use std::fmt;

use tracing::debug;

use crate::auth::Credentials;
use crate::error::{ConfigError, Error};
use crate::types::ApiUrl;

/// OAuth2 client id of the registered script app.
pub const CLIENT_ID_VAR: &str = "REDDIT_CLIENT_ID";
/// OAuth2 client secret of the registered script app.
pub const CLIENT_SECRET_VAR: &str = "REDDIT_CLIENT_SECRET";
/// Password of the account owning the app.
pub const PASSWORD_VAR: &str = "REDDIT_PASSWORD";
/// User agent sent with every request.
pub const USER_AGENT_VAR: &str = "REDDIT_USER_AGENT";
/// Username of the account owning the app.
pub const USERNAME_VAR: &str = "REDDIT_USERNAME";
/// Optional override of the token endpoint host.
pub const AUTH_URL_VAR: &str = "REDDIT_AUTH_URL";
/// Optional override of the API host.
pub const API_URL_VAR: &str = "REDDIT_API_URL";

/// Settings needed to authenticate against Reddit.
#[derive(Clone, Default)]
pub struct Config {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub password: Option<String>,
    pub user_agent: Option<String>,
    pub username: Option<String>,
    pub auth_url: Option<String>,
    pub api_url: Option<String>,
}

impl Config {
    /// Load a `.env` file if one exists, then read the process environment.
    ///
    /// A missing `.env` file is not an error.
    pub fn load() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => debug!(path = %path.display(), "Loaded .env file"),
            Err(e) => debug!(error = %e, "No .env file loaded"),
        }
        Self::from_env()
    }

    /// Read the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read every value through `lookup`. Empty strings count as absent.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|v| !v.is_empty());

        Self {
            client_id: get(CLIENT_ID_VAR),
            client_secret: get(CLIENT_SECRET_VAR),
            password: get(PASSWORD_VAR),
            user_agent: get(USER_AGENT_VAR),
            username: get(USERNAME_VAR),
            auth_url: get(AUTH_URL_VAR),
            api_url: get(API_URL_VAR),
        }
    }

    /// Assemble password-grant credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] naming the first absent value.
    pub fn credentials(&self) -> Result<Credentials, Error> {
        Ok(Credentials::new(
            require(&self.client_id, CLIENT_ID_VAR)?,
            require(&self.client_secret, CLIENT_SECRET_VAR)?,
            require(&self.username, USERNAME_VAR)?,
            require(&self.password, PASSWORD_VAR)?,
        ))
    }

    /// Returns the user agent.
    pub fn user_agent(&self) -> Result<&str, Error> {
        require(&self.user_agent, USER_AGENT_VAR)
    }

    /// Returns the token and API hosts, falling back to Reddit's own.
    pub fn endpoints(&self) -> Result<(ApiUrl, ApiUrl), Error> {
        let auth = ApiUrl::new(self.auth_url.as_deref().unwrap_or(ApiUrl::AUTH_DEFAULT))?;
        let api = ApiUrl::new(self.api_url.as_deref().unwrap_or(ApiUrl::API_DEFAULT))?;
        Ok((auth, api))
    }
}

fn require<'a>(value: &'a Option<String>, name: &'static str) -> Result<&'a str, Error> {
    value.as_deref().ok_or(ConfigError::Missing(name).into())
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let redacted = |v: &Option<String>| v.as_ref().map(|_| "[REDACTED]");
        f.debug_struct("Config")
            .field("client_id", &self.client_id)
            .field("client_secret", &redacted(&self.client_secret))
            .field("password", &redacted(&self.password))
            .field("user_agent", &self.user_agent)
            .field("username", &self.username)
            .field("auth_url", &self.auth_url)
            .field("api_url", &self.api_url)
            .finish()
    }
}
