//! redlist - read a subreddit's newest posts as a password-grant script app.
//!
//! All API calls flow through a [`Session`]. [`authenticate`] builds one from
//! environment [`Config`] and proves the credentials with an identity probe;
//! [`Session::subreddit`] then gives lazy access to a forum's listings.
//!
//! # Example
//!
//! ```no_run
//! use std::num::NonZeroU32;
//! use futures_util::StreamExt;
//! use redlist::{Config, ForumName, authenticate};
//!
//! # async fn example() -> Result<(), redlist::Error> {
//! let (session, me) = authenticate(&Config::load()).await?;
//! println!("Logged in as {me}");
//!
//! let limit = NonZeroU32::new(5).expect("non-zero");
//! let mut posts = session.subreddit(ForumName::new("cats")?).new_posts(limit);
//! while let Some(post) = posts.next().await {
//!     let post = post?;
//!     println!("{} by {}: {}", post.title, post.author_display(), post.score);
//! }
//! # Ok(())
//! # }
//! ```

mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod listing;
pub mod types;

// Re-export primary types at crate root for convenience
pub use auth::{AccessToken, Credentials, Identity, Session, authenticate};
pub use config::Config;
pub use error::{Error, FailureKind};
pub use listing::{ListingPage, Post, PostStream, Subreddit};
pub use types::{ApiUrl, ForumName};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
