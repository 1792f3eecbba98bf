//! Data Transfer Objects - request types for the HTML forms.

use serde::{Deserialize, Serialize};

/// Form submitted to create a post.
///
/// Field names match the form inputs (`Title`, `Body`). Both default to empty
/// so that a missing title reaches validation instead of failing to parse.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostForm {
    #[serde(rename = "Title", default)]
    pub title: String,
    #[serde(rename = "Body", default)]
    pub body: String,
}

impl CreatePostForm {
    /// Required-field check. Returns one message per failed field.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();
        if self.title.trim().is_empty() {
            errors.push("Title is required".to_string());
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }
}
