//! Listing types.

use chrono::{DateTime, Utc};

use crate::api::PostData;

/// Author value Reddit reports for deleted accounts.
const DELETED_AUTHOR: &str = "[deleted]";

/// A post from a forum listing.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    /// Base-36 post id, without the `t3_` prefix.
    pub id: String,

    /// Post title.
    pub title: String,

    /// Author handle; `None` when the account was deleted.
    pub author: Option<String>,

    /// Net votes. May be negative.
    pub score: i64,

    /// Creation time, if the listing carried one.
    pub created: Option<DateTime<Utc>>,

    /// Path of the post relative to the site root.
    pub permalink: Option<String>,
}

impl Post {
    /// Returns the author handle, or `[deleted]` for deleted accounts.
    pub fn author_display(&self) -> &str {
        self.author.as_deref().unwrap_or(DELETED_AUTHOR)
    }

    /// Fullname used as a pagination cursor.
    pub fn fullname(&self) -> String {
        format!("t3_{}", self.id)
    }
}

impl From<PostData> for Post {
    fn from(data: PostData) -> Self {
        let author = data.author.filter(|a| a != DELETED_AUTHOR);
        let created = data
            .created_utc
            .and_then(|secs| DateTime::from_timestamp(secs as i64, 0));

        Self {
            id: data.id,
            title: data.title,
            author,
            score: data.score,
            created,
            permalink: data.permalink,
        }
    }
}

/// One page of a listing.
#[derive(Debug, Clone)]
pub struct ListingPage {
    /// The posts in this page, in server order.
    pub posts: Vec<Post>,

    /// Cursor for the next page, if more posts exist.
    pub after: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data(author: Option<&str>) -> PostData {
        PostData {
            id: "abc123".to_string(),
            title: "Cat in a box".to_string(),
            author: author.map(str::to_string),
            score: -3,
            created_utc: Some(1_700_000_000.0),
            permalink: Some("/r/cats/comments/abc123/cat_in_a_box/".to_string()),
        }
    }

    #[test]
    fn converts_wire_post() {
        let post = Post::from(data(Some("whiskers")));
        assert_eq!(post.title, "Cat in a box");
        assert_eq!(post.author_display(), "whiskers");
        assert_eq!(post.score, -3);
        assert_eq!(post.fullname(), "t3_abc123");
        assert_eq!(post.created.unwrap().timestamp(), 1_700_000_000);
    }

    #[test]
    fn deleted_author_becomes_none() {
        let post = Post::from(data(Some("[deleted]")));
        assert!(post.author.is_none());
        assert_eq!(post.author_display(), "[deleted]");

        let post = Post::from(data(None));
        assert!(post.author.is_none());
    }
}
