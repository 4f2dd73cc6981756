use async_trait::async_trait;

use crate::domain::{NewPost, Post, PostId};
use crate::error::StoreError;

/// Post store - the sole owner of the canonical post collection.
///
/// Every read hands back owned copies; callers never see the stored records.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// All posts in insertion order.
    async fn list(&self) -> Vec<Post>;

    /// Find a post by its id.
    async fn get_by_id(&self, id: PostId) -> Result<Post, StoreError>;

    /// Append a post under a freshly assigned id (max existing id + 1, or 1).
    async fn create(&self, new: NewPost) -> Post;

    /// Replace the post sharing `post.id` wholesale.
    async fn update(&self, post: Post) -> Result<Post, StoreError>;

    /// Remove a post by its id.
    async fn delete(&self, id: PostId) -> Result<(), StoreError>;
}
