//! Session management for authenticated Reddit API calls.

use std::num::NonZeroU32;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

use crate::api::{ApiClient, ListingData, ListingQuery, ME, MeResponse, PostData, Thing};
use crate::error::{Error, ProtocolError};
use crate::listing::{ListingPage, Post, Subreddit};
use crate::types::{ApiUrl, ForumName};

use super::credentials::Credentials;
use super::tokens::AccessToken;

/// The authenticated account, as reported by the identity probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Account name, without the `u/` prefix.
    pub name: String,
    /// Account id, if the API returned one.
    pub id: Option<String>,
}

impl std::fmt::Display for Identity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

/// A session representing a connection to the Reddit API.
///
/// Creating a session performs no network I/O. The password grant runs on
/// the first request that needs a token, so a freshly built session is
/// indistinguishable from a valid one until it is used. Call
/// [`Session::me()`] to force the handshake and surface credential errors.
///
/// Sessions are cheap to clone (they use internal `Arc`).
///
/// # Example
///
/// ```no_run
/// use redlist::{ApiUrl, Credentials, Session};
///
/// # async fn example() -> Result<(), redlist::Error> {
/// let session = Session::new(
///     Credentials::new("client-id", "client-secret", "alice", "hunter2"),
///     ApiUrl::new(ApiUrl::AUTH_DEFAULT)?,
///     ApiUrl::new(ApiUrl::API_DEFAULT)?,
///     "script:redlist:v0.1 (by /u/alice)",
/// )?;
///
/// println!("Logged in as: {}", session.me().await?);
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

struct SessionInner {
    credentials: Credentials,
    client: ApiClient,
    token: RwLock<Option<AccessToken>>,
}

impl Session {
    /// Build a session without contacting the server.
    ///
    /// # Errors
    ///
    /// Returns an error only if the HTTP client cannot be built, e.g. when
    /// the user agent is not a valid header value.
    pub fn new(
        credentials: Credentials,
        auth: ApiUrl,
        api: ApiUrl,
        user_agent: &str,
    ) -> Result<Self, Error> {
        let client = ApiClient::new(auth, api, user_agent)?;

        Ok(Self {
            inner: Arc::new(SessionInner {
                credentials,
                client,
                token: RwLock::new(None),
            }),
        })
    }

    /// Returns the username this session authenticates as.
    pub fn username(&self) -> &str {
        self.inner.credentials.username()
    }

    /// Whether a token has been obtained and has not yet expired.
    pub async fn is_authorized(&self) -> bool {
        self.inner
            .token
            .read()
            .await
            .as_ref()
            .is_some_and(|t| !t.is_expired(Utc::now()))
    }

    /// Returns a usable access token, running the password grant when there
    /// is none or the cached one has expired.
    async fn access_token(&self) -> Result<String, Error> {
        {
            let slot = self.inner.token.read().await;
            if let Some(token) = slot.as_ref().filter(|t| !t.is_expired(Utc::now())) {
                return Ok(token.as_str().to_string());
            }
        }

        let mut slot = self.inner.token.write().await;
        // Another holder of this session may have refreshed while we waited.
        if let Some(token) = slot.as_ref().filter(|t| !t.is_expired(Utc::now())) {
            return Ok(token.as_str().to_string());
        }

        let token = self.grant().await?;
        let value = token.as_str().to_string();
        *slot = Some(token);
        Ok(value)
    }

    async fn grant(&self) -> Result<AccessToken, Error> {
        info!("Running password grant");

        let response = self
            .inner
            .client
            .password_grant(&self.inner.credentials)
            .await?;
        let value = response.access_token.ok_or_else(|| {
            ProtocolError::new(200, None, Some("token has no access_token".to_string()))
        })?;

        let token = AccessToken::new(value, response.expires_in, Utc::now());
        debug!(expires_at = ?token.expires_at(), "Access token obtained");
        Ok(token)
    }

    /// Ask the API who this session is logged in as.
    ///
    /// This is the first authenticated request a session makes, so it is
    /// where invalid credentials show up.
    #[instrument(skip(self), fields(username = %self.username()))]
    pub async fn me(&self) -> Result<Identity, Error> {
        debug!("Requesting identity");

        let token = self.access_token().await?;
        let no_params: [(&str, &str); 0] = [];
        let response: MeResponse = self
            .inner
            .client
            .get_authed(ME, &no_params, &token)
            .await?;

        let name = response.name.ok_or_else(|| {
            ProtocolError::new(200, None, Some("identity has no account name".to_string()))
        })?;

        Ok(Identity {
            name,
            id: response.id,
        })
    }

    // ========================================================================
    // Listing Operations
    // ========================================================================

    /// Returns a handle to a forum. No request is made.
    pub fn subreddit(&self, name: ForumName) -> Subreddit {
        Subreddit::new(self.clone(), name)
    }

    /// Fetch one page of a forum's newest posts.
    ///
    /// # Arguments
    ///
    /// * `forum` - The forum to list
    /// * `limit` - Page size; values above 100 are capped by the server
    /// * `after` - Fullname of the last post of the previous page
    #[instrument(skip(self), fields(%forum))]
    pub async fn list_new(
        &self,
        forum: &ForumName,
        limit: NonZeroU32,
        after: Option<&str>,
    ) -> Result<ListingPage, Error> {
        debug!("Listing newest posts");

        let query = ListingQuery {
            limit: limit.get(),
            after,
            raw_json: 1,
        };

        let token = self.access_token().await?;
        let response: Thing<ListingData<Thing<PostData>>> = self
            .inner
            .client
            .get_authed(&forum.new_listing_path(), &query, &token)
            .await?;

        if response.kind != "Listing" {
            return Err(ProtocolError::new(
                200,
                None,
                Some(format!("expected a Listing, got '{}'", response.kind)),
            )
            .into());
        }

        let posts = response
            .data
            .children
            .into_iter()
            .filter(|child| child.kind == "t3")
            .map(|child| Post::from(child.data))
            .collect::<Vec<_>>();

        debug!(count = posts.len(), after = ?response.data.after, "Listing page received");

        Ok(ListingPage {
            posts,
            after: response.data.after,
        })
    }
}

// Custom Debug impl that hides sensitive data
impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("username", &self.inner.credentials.username())
            .field("api", self.inner.client.api())
            .field("token", &"[REDACTED]")
            .finish()
    }
}
