//! Data Transfer Objects - request/response types for the API and forms.

use serde::{Deserialize, Serialize};

/// Request to create a post. Also the shape of the new-post form.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    pub title: String,
    pub content: String,
    pub author: String,
    #[serde(default)]
    pub image: String,
}

/// Request to replace a post wholesale. The id comes from the path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub title: String,
    pub content: String,
    pub author: String,
    #[serde(default)]
    pub image: String,
}

/// Edit-post form: only title and content are editable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EditPostForm {
    pub title: String,
    pub content: String,
}

/// Response containing a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub author: String,
    pub image: String,
}
