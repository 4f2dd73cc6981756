//! In-memory post store with simulated network latency.

use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use postboard_core::{NewPost, Post, PostId, PostStore, StoreError};

use super::seed::seed_posts;

/// Artificial delays applied before each store operation completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Latency {
    /// Delay for `list`.
    pub list: Duration,
    /// Delay for every other operation.
    pub op: Duration,
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            list: Duration::from_millis(500),
            op: Duration::from_millis(300),
        }
    }
}

impl Latency {
    /// No delay at all.
    pub fn none() -> Self {
        Self {
            list: Duration::ZERO,
            op: Duration::ZERO,
        }
    }

    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            list: std::env::var("LIST_LATENCY_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.list),
            op: std::env::var("OP_LATENCY_MS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.op),
        }
    }
}

/// In-memory post store backed by an ordered `Vec` behind an async RwLock.
///
/// Posts keep insertion order; `update` replaces in place by index.
/// Note: Data is lost on process restart.
pub struct InMemoryPostStore {
    posts: RwLock<Vec<Post>>,
    latency: Latency,
}

impl InMemoryPostStore {
    pub fn new(latency: Latency) -> Self {
        Self::with_posts(Vec::new(), latency)
    }

    /// Store pre-filled with the starter posts.
    pub fn seeded(latency: Latency) -> Self {
        Self::with_posts(seed_posts(), latency)
    }

    pub fn with_posts(posts: Vec<Post>, latency: Latency) -> Self {
        Self {
            posts: RwLock::new(posts),
            latency,
        }
    }

    async fn simulate(delay: Duration) {
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }

    fn position(posts: &[Post], id: PostId) -> Result<usize, StoreError> {
        posts
            .iter()
            .position(|p| p.id == id)
            .ok_or(StoreError::NotFound(id))
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn list(&self) -> Vec<Post> {
        Self::simulate(self.latency.list).await;
        self.posts.read().await.clone()
    }

    async fn get_by_id(&self, id: PostId) -> Result<Post, StoreError> {
        Self::simulate(self.latency.op).await;
        let posts = self.posts.read().await;
        let index = Self::position(&posts, id)?;
        Ok(posts[index].clone())
    }

    async fn create(&self, new: NewPost) -> Post {
        Self::simulate(self.latency.op).await;
        let mut posts = self.posts.write().await;

        let id = posts.iter().map(|p| p.id).max().map_or(1, |max| max + 1);
        let post = Post::from_new(id, new);
        posts.push(post.clone());

        tracing::debug!(post_id = id, "Post created");
        post
    }

    async fn update(&self, post: Post) -> Result<Post, StoreError> {
        Self::simulate(self.latency.op).await;
        let mut posts = self.posts.write().await;

        let index = Self::position(&posts, post.id)?;
        posts[index] = post.clone();

        tracing::debug!(post_id = post.id, "Post updated");
        Ok(post)
    }

    async fn delete(&self, id: PostId) -> Result<(), StoreError> {
        Self::simulate(self.latency.op).await;
        let mut posts = self.posts.write().await;

        let index = Self::position(&posts, id)?;
        posts.remove(index);

        tracing::debug!(post_id = id, "Post deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> InMemoryPostStore {
        InMemoryPostStore::seeded(Latency::none())
    }

    fn ids(posts: &[Post]) -> Vec<PostId> {
        posts.iter().map(|p| p.id).collect()
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let store = store();
        assert_eq!(ids(&store.list().await), vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_get_by_id_returns_matching_post() {
        let store = store();
        for id in 1..=4 {
            assert_eq!(store.get_by_id(id).await.unwrap().id, id);
        }
    }

    #[tokio::test]
    async fn test_returned_posts_are_copies() {
        let store = store();
        let mut post = store.get_by_id(1).await.unwrap();
        post.title = "Mutated outside".to_string();

        assert_eq!(
            store.get_by_id(1).await.unwrap().title,
            "Car Spotting in Kileleshwa"
        );
    }

    #[tokio::test]
    async fn test_create_assigns_next_id() {
        let store = store();
        let created = store.create(NewPost::new("T", "C", "A", "")).await;

        assert_eq!(created.id, 5);
        assert_eq!(store.list().await.len(), 5);
        assert_eq!(store.get_by_id(5).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_create_in_empty_store_starts_at_one() {
        let store = InMemoryPostStore::new(Latency::none());
        let created = store.create(NewPost::new("First", "C", "A", "")).await;
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn test_create_after_gap_uses_max_plus_one() {
        let store = store();
        store.delete(2).await.unwrap();
        store.delete(4).await.unwrap();

        let created = store.create(NewPost::new("T", "C", "A", "")).await;
        assert_eq!(created.id, 4);
        assert_eq!(ids(&store.list().await), vec![1, 3, 4]);
    }

    #[tokio::test]
    async fn test_update_replaces_only_matching_post() {
        let store = store();
        let before = store.list().await;

        let mut changed = before[1].clone();
        changed.title = "Renamed".to_string();
        changed.author = "Someone Else".to_string();
        let returned = store.update(changed.clone()).await.unwrap();

        assert_eq!(returned, changed);
        assert_eq!(store.get_by_id(2).await.unwrap(), changed);

        let after = store.list().await;
        assert_eq!(ids(&after), vec![1, 2, 3, 4]);
        for (old, new) in before.iter().zip(after.iter()).filter(|(p, _)| p.id != 2) {
            assert_eq!(old, new);
        }
    }

    #[tokio::test]
    async fn test_delete_removes_post() {
        let store = store();
        store.delete(3).await.unwrap();

        assert_eq!(store.get_by_id(3).await, Err(StoreError::NotFound(3)));
        assert_eq!(ids(&store.list().await), vec![1, 2, 4]);
    }

    #[tokio::test]
    async fn test_missing_id_is_not_found() {
        let store = store();
        let ghost = Post::from_new(42, NewPost::new("T", "C", "A", ""));

        assert_eq!(store.get_by_id(42).await, Err(StoreError::NotFound(42)));
        assert_eq!(store.update(ghost).await, Err(StoreError::NotFound(42)));
        assert_eq!(store.delete(42).await, Err(StoreError::NotFound(42)));
    }

    #[tokio::test]
    async fn test_delete_missing_leaves_store_unmodified() {
        let store = store();
        let before = store.list().await;

        assert_eq!(store.delete(99).await, Err(StoreError::NotFound(99)));
        assert_eq!(store.list().await, before);
    }

    #[tokio::test]
    async fn test_create_update_delete_round_trip() {
        let store = store();
        let before = store.list().await;

        let created = store.create(NewPost::new("T", "", "", "")).await;
        assert_eq!(created.id, 5);

        let edited = created.with_edits("T2".to_string(), "Body".to_string());
        store.update(edited).await.unwrap();
        store.delete(5).await.unwrap();

        assert_eq!(store.list().await, before);
    }

    #[tokio::test(start_paused = true)]
    async fn test_operations_wait_for_latency() {
        let store = InMemoryPostStore::seeded(Latency::default());

        let started = tokio::time::Instant::now();
        store.list().await;
        assert!(started.elapsed() >= Duration::from_millis(500));

        let started = tokio::time::Instant::now();
        let _ = store.get_by_id(1).await;
        assert_op_delay(started.elapsed());

        let started = tokio::time::Instant::now();
        let created = store.create(NewPost::new("T", "C", "A", "")).await;
        assert_op_delay(started.elapsed());

        let started = tokio::time::Instant::now();
        store
            .update(created.with_edits("T2".to_string(), "C2".to_string()))
            .await
            .unwrap();
        assert_op_delay(started.elapsed());

        let started = tokio::time::Instant::now();
        store.delete(5).await.unwrap();
        assert_op_delay(started.elapsed());
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_operations_still_wait() {
        let store = InMemoryPostStore::seeded(Latency::default());

        let started = tokio::time::Instant::now();
        assert_eq!(store.delete(99).await, Err(StoreError::NotFound(99)));
        assert_op_delay(started.elapsed());
    }

    fn assert_op_delay(elapsed: Duration) {
        assert!(elapsed >= Duration::from_millis(300), "too fast: {elapsed:?}");
        assert!(elapsed < Duration::from_millis(500), "too slow: {elapsed:?}");
    }

    #[test]
    fn test_latency_defaults() {
        let latency = Latency::default();
        assert_eq!(latency.list, Duration::from_millis(500));
        assert_eq!(latency.op, Duration::from_millis(300));
        assert!(Latency::none().list.is_zero());
    }
}
