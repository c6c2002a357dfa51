//! Listing step.

use std::num::NonZeroU32;

use anyhow::Result;
use futures_util::StreamExt;

use redlist::{ForumName, Session};

use crate::output;

/// Print title, author and score of up to `limit` of a forum's newest posts.
///
/// Posts are printed as they arrive. A failure part way through stops the
/// output and is returned; posts already printed stay printed.
pub async fn retrieve_latest_posts(
    session: &Session,
    forum_name: &str,
    limit: NonZeroU32,
) -> Result<()> {
    let forum = ForumName::new(forum_name)?;
    let mut posts = session.subreddit(forum).new_posts(limit);

    while let Some(post) = posts.next().await {
        let post = post?;
        output::field("Post title", &post.title);
        output::field("Post author", post.author_display());
        output::field("Post upvote count", post.score);
    }

    Ok(())
}
