//! HTTP client for the token endpoint and the authenticated API.

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{StatusCode, redirect};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, trace};

use crate::auth::Credentials;
use crate::error::{AuthError, Error, InvalidInputError, ProtocolError};
use crate::types::ApiUrl;

use super::endpoints::{ACCESS_TOKEN, ApiErrorResponse, PasswordGrantRequest, TokenResponse};

/// HTTP client for Reddit API requests.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    auth: ApiUrl,
    api: ApiUrl,
}

impl ApiClient {
    /// Create a new client sending `user_agent` with every request.
    ///
    /// Redirects are not followed: Reddit redirects requests for unknown
    /// subreddits to a search page, which must surface as an error.
    pub fn new(auth: ApiUrl, api: ApiUrl, user_agent: &str) -> Result<Self, Error> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .redirect(redirect::Policy::none())
            .build()
            .map_err(|e| InvalidInputError::UserAgent {
                value: user_agent.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self { client, auth, api })
    }

    /// Returns the base URL of the authenticated API.
    pub fn api(&self) -> &ApiUrl {
        &self.api
    }

    /// Exchange account credentials for an access token.
    #[instrument(skip(self, credentials), fields(auth = %self.auth, username = %credentials.username()))]
    pub async fn password_grant(&self, credentials: &Credentials) -> Result<TokenResponse, Error> {
        let url = self.auth.endpoint(ACCESS_TOKEN);
        debug!(%url, "Requesting password grant");

        let form = PasswordGrantRequest {
            grant_type: "password",
            username: credentials.username(),
            password: credentials.password(),
        };

        let response = self
            .client
            .post(&url)
            .basic_auth(credentials.client_id(), Some(credentials.client_secret()))
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        trace!(status = %status, "Token response");

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(AuthError::ClientRejected {
                status: status.as_u16(),
            }
            .into());
        }

        if !status.is_success() && status != StatusCode::BAD_REQUEST {
            return Err(Error::Protocol(self.parse_error_response(response).await));
        }

        let body: TokenResponse = response.json().await?;

        if let Some(error) = body.error {
            return Err(AuthError::InvalidCredentials(error).into());
        }

        if body.access_token.is_none() {
            return Err(ProtocolError::new(
                status.as_u16(),
                None,
                Some("token response has no access_token".to_string()),
            )
            .into());
        }

        debug!(
            token_type = body.token_type.as_deref().unwrap_or("unknown"),
            scope = body.scope.as_deref().unwrap_or(""),
            expires_in = body.expires_in,
            "Password grant accepted"
        );

        Ok(body)
    }

    /// Make an authenticated GET request against the API host.
    #[instrument(skip(self, token), fields(api = %self.api))]
    pub async fn get_authed<Q, R>(&self, path: &str, params: &Q, token: &str) -> Result<R, Error>
    where
        Q: Serialize + std::fmt::Debug,
        R: DeserializeOwned,
    {
        let url = self.api.endpoint(path);
        debug!(%url, "Authenticated query");
        trace!(?params, "query parameters");

        let response = self
            .client
            .get(&url)
            .query(params)
            .headers(self.auth_headers(token)?)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Create authorization headers for authenticated requests.
    fn auth_headers(&self, token: &str) -> Result<HeaderMap, Error> {
        let mut headers = HeaderMap::new();
        let auth_value = HeaderValue::from_str(&format!("bearer {}", token)).map_err(|_| {
            ProtocolError::new(200, None, Some("access token is not a valid header".to_string()))
        })?;
        headers.insert(AUTHORIZATION, auth_value);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        Ok(headers)
    }

    /// Handle an API response, parsing the body or error.
    async fn handle_response<R: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<R, Error> {
        let status = response.status();
        trace!(status = %status, "API response");

        if status.is_success() {
            let body = response.json::<R>().await?;
            return Ok(body);
        }

        if status.is_redirection() {
            let location = response
                .headers()
                .get(reqwest::header::LOCATION)
                .and_then(|v| v.to_str().ok())
                .unwrap_or("unknown location")
                .to_string();
            return Err(ProtocolError::new(
                status.as_u16(),
                Some("Redirect".to_string()),
                Some(format!("redirected to {}", location)),
            )
            .into());
        }

        let error = self.parse_error_response(response).await;
        if error.is_auth_error() {
            return Err(AuthError::TokenRejected.into());
        }
        Err(Error::Protocol(error))
    }

    /// Parse an API error response.
    async fn parse_error_response(&self, response: reqwest::Response) -> ProtocolError {
        let status = response.status().as_u16();

        match response.json::<ApiErrorResponse>().await {
            Ok(body) => ProtocolError::new(status, body.reason, body.message),
            Err(_) => ProtocolError::new(status, None, None),
        }
    }
}
