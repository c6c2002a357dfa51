//! Lazy, paginated listing streams.

use std::num::NonZeroU32;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures_util::Stream;
use tracing::{debug, trace};

use crate::api::MAX_PAGE_SIZE;
use crate::auth::Session;
use crate::error::Error;
use crate::types::ForumName;

use super::types::Post;

/// A handle to a forum.
///
/// Creating the handle makes no request, so a forum that does not exist is
/// only reported once its listing is consumed.
#[derive(Debug, Clone)]
pub struct Subreddit {
    session: Session,
    name: ForumName,
}

impl Subreddit {
    pub(crate) fn new(session: Session, name: ForumName) -> Self {
        Self { session, name }
    }

    /// Stream up to `limit` of the forum's newest posts, newest first.
    ///
    /// Pages are requested only as the stream is polled. The stream ends
    /// after `limit` posts or when the forum has no more, whichever comes
    /// first. A request failure is yielded once and ends the stream.
    pub fn new_posts(&self, limit: NonZeroU32) -> PostStream {
        let session = self.session.clone();
        let forum = self.name.clone();

        let stream = async_stream::stream! {
            let mut remaining = limit.get();
            let mut after: Option<String> = None;

            while let Some(page_size) = NonZeroU32::new(remaining.min(MAX_PAGE_SIZE)) {
                let page = match session.list_new(&forum, page_size, after.as_deref()).await {
                    Ok(page) => page,
                    Err(e) => {
                        yield Err(e);
                        break;
                    }
                };

                if page.posts.is_empty() {
                    trace!("Empty page, listing exhausted");
                    break;
                }

                for post in page.posts.into_iter().take(remaining as usize) {
                    remaining -= 1;
                    yield Ok(post);
                }

                match page.after {
                    Some(cursor) => after = Some(cursor),
                    None => break,
                }
            }

            debug!(%forum, yielded = limit.get() - remaining, "Listing finished");
        };

        PostStream::new(stream)
    }
}

/// A stream of posts pulled from a paginated listing.
///
/// Use with `futures_util::StreamExt` for convenient methods like `next()`.
pub struct PostStream {
    inner: Pin<Box<dyn Stream<Item = Result<Post, Error>> + Send>>,
}

impl PostStream {
    fn new<S>(stream: S) -> Self
    where
        S: Stream<Item = Result<Post, Error>> + Send + 'static,
    {
        Self {
            inner: Box::pin(stream),
        }
    }
}

impl Stream for PostStream {
    type Item = Result<Post, Error>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.as_mut().poll_next(cx)
    }
}

impl std::fmt::Debug for PostStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PostStream").finish_non_exhaustive()
    }
}
