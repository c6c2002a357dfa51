//! Forum listings.
//!
//! A [`Subreddit`] handle is obtained from a [`Session`](crate::Session) and
//! turned into a lazy [`PostStream`] of the forum's newest posts.
//!
//! # Example
//!
//! ```no_run
//! use std::num::NonZeroU32;
//! use futures_util::StreamExt;
//! use redlist::{Config, ForumName, authenticate};
//!
//! # async fn example() -> Result<(), redlist::Error> {
//! let (session, _) = authenticate(&Config::load()).await?;
//! let limit = NonZeroU32::new(5).expect("non-zero");
//! let mut posts = session.subreddit(ForumName::new("cats")?).new_posts(limit);
//!
//! while let Some(post) = posts.next().await {
//!     let post = post?;
//!     println!("{} ({})", post.title, post.score);
//! }
//! # Ok(())
//! # }
//! ```

mod stream;
mod types;

pub use stream::{PostStream, Subreddit};
pub use types::{ListingPage, Post};
