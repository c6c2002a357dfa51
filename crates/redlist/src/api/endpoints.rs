//! Endpoint paths and request/response wire types.

use serde::{Deserialize, Serialize};

// ============================================================================
// Endpoint Paths
// ============================================================================

/// OAuth2 token endpoint, served by the auth host.
pub const ACCESS_TOKEN: &str = "/api/v1/access_token";

/// Identity of the authenticated account.
pub const ME: &str = "/api/v1/me";

/// Largest page the listing endpoints return.
pub const MAX_PAGE_SIZE: u32 = 100;

// ============================================================================
// Request/Response Types
// ============================================================================

/// Form body for the password grant.
#[derive(Debug, Serialize)]
pub struct PasswordGrantRequest<'a> {
    pub grant_type: &'static str,
    pub username: &'a str,
    pub password: &'a str,
}

/// Response from the token endpoint.
///
/// Reddit answers a refused grant with HTTP 200 and an `error` field, so
/// every field is optional and the caller decides which shape arrived.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Response from `/api/v1/me`.
#[derive(Debug, Deserialize)]
pub struct MeResponse {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}

/// Query parameters for a listing page.
#[derive(Debug, Serialize)]
pub struct ListingQuery<'a> {
    pub limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub after: Option<&'a str>,
    /// Ask for unescaped text instead of HTML entities.
    pub raw_json: u8,
}

/// A Reddit "thing": a kind tag wrapping a data object.
#[derive(Debug, Deserialize)]
pub struct Thing<T> {
    pub kind: String,
    pub data: T,
}

/// The data of a `Listing` thing.
#[derive(Debug, Deserialize)]
pub struct ListingData<T> {
    #[serde(default)]
    pub after: Option<String>,
    pub children: Vec<T>,
}

/// The fields of a `t3` (link/post) thing that redlist reads.
#[derive(Debug, Deserialize)]
pub struct PostData {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub author: Option<String>,
    pub score: i64,
    #[serde(default)]
    pub created_utc: Option<f64>,
    #[serde(default)]
    pub permalink: Option<String>,
}

/// Error body returned by the API.
///
/// The `error` field is a numeric status on most endpoints, so only the
/// textual fields are kept.
#[derive(Debug, Deserialize)]
pub struct ApiErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}
