//! Core Reddit API types.
//!
//! These types enforce their invariants at construction time so that
//! invalid endpoints and forum names never reach the network layer.

mod api_url;
mod forum_name;

pub use api_url::ApiUrl;
pub use forum_name::ForumName;
