use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Post entity - a persisted blog post.
///
/// `id` is assigned by the store on insert and never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    /// Unix timestamp in seconds, stamped when the post was constructed.
    pub created: i64,
    pub title: String,
    pub body: String,
}

/// A post that has not been inserted yet.
///
/// The only way to obtain one is [`NewPost::new`], so every value carries a
/// non-empty title and a creation stamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    created: i64,
    title: String,
    body: String,
}

impl NewPost {
    /// Create a new post stamped with the current time.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Result<Self, DomainError> {
        Self::with_created(Utc::now().timestamp(), title, body)
    }

    /// Create a new post with an explicit creation stamp.
    pub fn with_created(
        created: i64,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(DomainError::Validation("Title is required".to_string()));
        }

        Ok(Self {
            created,
            title,
            body: body.into(),
        })
    }

    pub fn created(&self) -> i64 {
        self.created
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    /// Attach the store-assigned id, producing the persisted form.
    pub fn into_post(self, id: i64) -> Post {
        Post {
            id,
            created: self.created,
            title: self.title,
            body: self.body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_post_stamps_created() {
        let before = Utc::now().timestamp();
        let post = NewPost::new("Post 1", "Lorem ipsum").unwrap();
        let after = Utc::now().timestamp();

        assert!(post.created() >= before && post.created() <= after);
        assert_eq!(post.title(), "Post 1");
        assert_eq!(post.body(), "Lorem ipsum");
    }

    #[test]
    fn test_empty_title_rejected() {
        assert!(matches!(
            NewPost::new("", "body"),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            NewPost::new("   ", "body"),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_empty_body_allowed() {
        assert!(NewPost::new("Title", "").is_ok());
    }

    #[test]
    fn test_into_post_keeps_fields() {
        let post = NewPost::with_created(42, "T", "B").unwrap().into_post(7);
        assert_eq!(
            post,
            Post {
                id: 7,
                created: 42,
                title: "T".to_string(),
                body: "B".to_string(),
            }
        );
    }
}
