//! Reddit HTTP API client.
//!
//! This module provides the HTTP plumbing for the OAuth2 token endpoint and
//! the authenticated `oauth.reddit.com` API.

mod client;
mod endpoints;

pub(crate) use client::ApiClient;
pub(crate) use endpoints::*;
