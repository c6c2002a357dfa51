//! Forum (subreddit) name type.

use std::fmt;

use crate::error::{Error, InvalidInputError};

/// Longest subreddit name Reddit accepts.
const MAX_LEN: usize = 21;

/// A validated subreddit name.
///
/// Accepts `cats`, `r/cats` or `/r/cats` and stores the bare name. Existence
/// of the forum is not checked here; that only shows up once a listing is
/// requested.
///
/// # Example
///
/// ```
/// use redlist::ForumName;
///
/// let forum = ForumName::new("r/cats").unwrap();
/// assert_eq!(forum.as_str(), "cats");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ForumName(String);

impl ForumName {
    /// Create a new forum name, validating the format.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty, too long or contains characters
    /// other than ASCII letters, digits and underscores.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let original = s.as_ref();
        let name = original
            .trim_start_matches('/')
            .strip_prefix("r/")
            .unwrap_or(original.trim_start_matches('/'));

        Self::validate(name, original)?;
        Ok(Self(name.to_string()))
    }

    /// Returns the bare forum name.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the path of the newest-first listing for this forum.
    pub fn new_listing_path(&self) -> String {
        format!("/r/{}/new", self.0)
    }

    fn validate(name: &str, original: &str) -> Result<(), Error> {
        let invalid = |reason: &str| -> Error {
            InvalidInputError::ForumName {
                value: original.to_string(),
                reason: reason.to_string(),
            }
            .into()
        };

        if name.is_empty() {
            return Err(invalid("cannot be empty"));
        }

        if name.len() > MAX_LEN {
            return Err(invalid("must be at most 21 characters"));
        }

        if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(invalid("may only contain letters, digits and underscores"));
        }

        Ok(())
    }
}

impl fmt::Display for ForumName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "r/{}", self.0)
    }
}
