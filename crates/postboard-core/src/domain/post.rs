use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Post identifier. Positive, assigned by the store on creation.
pub type PostId = u64;

/// Post entity - a blog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub content: String,
    pub author: String,
    pub image: String,
}

impl Post {
    /// Attach a store-assigned id to creation fields.
    pub fn from_new(id: PostId, new: NewPost) -> Self {
        Self {
            id,
            title: new.title,
            content: new.content,
            author: new.author,
            image: new.image,
        }
    }

    /// Replace the editable fields, keeping id, author and image.
    pub fn with_edits(self, title: String, content: String) -> Self {
        Self {
            title,
            content,
            ..self
        }
    }

    /// Reject edits that would blank out the title or content.
    pub fn validate_edit(title: &str, content: &str) -> Result<(), DomainError> {
        require("title", title)?;
        require("content", content)
    }
}

/// Fields supplied when creating a post. The id is chosen by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: String,
    #[serde(default)]
    pub image: String,
}

impl NewPost {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author: author.into(),
            image: image.into(),
        }
    }

    /// Reject blank required fields. The image URL may be empty.
    pub fn validate(&self) -> Result<(), DomainError> {
        require("title", &self.title)?;
        require("content", &self.content)?;
        require("author", &self.author)
    }
}

fn require(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_edits_keeps_author_and_image() {
        let post = Post::from_new(7, NewPost::new("Old", "Body", "Grace", "https://img/1.jpg"));
        let edited = post.with_edits("New".to_string(), "Changed".to_string());

        assert_eq!(edited.id, 7);
        assert_eq!(edited.title, "New");
        assert_eq!(edited.content, "Changed");
        assert_eq!(edited.author, "Grace");
        assert_eq!(edited.image, "https://img/1.jpg");
    }

    #[test]
    fn test_validate_rejects_blank_fields() {
        let blank_title = NewPost::new("  ", "Body", "Liam", "");
        assert_eq!(
            blank_title.validate(),
            Err(DomainError::Validation("title must not be empty".to_string()))
        );

        let ok = NewPost::new("T", "Body", "Liam", "");
        assert!(ok.validate().is_ok());
    }

    #[test]
    fn test_validate_edit() {
        assert!(Post::validate_edit("T", "").is_err());
        assert!(Post::validate_edit("T", "C").is_ok());
    }
}
