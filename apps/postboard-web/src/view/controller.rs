//! View controller - turns user actions into store calls and store results
//! into region state.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::Mutex;

use postboard_core::{NewPost, Post, PostId, PostStore, StoreError};

use super::render;
use super::surface::{DetailRegion, EditDraft, ListRegion, NewPostForm, Surface};

/// Drives the page regions from the injected store.
///
/// The surface lock is only held for region writes, never across a store
/// call, so a slow fetch does not block other actions.
pub struct ViewController {
    store: Arc<dyn PostStore>,
    surface: Mutex<Surface>,
    /// Latest detail request issued. Fetches resolving under an older token
    /// are dropped.
    detail_token: AtomicU64,
}

impl ViewController {
    pub fn new(store: Arc<dyn PostStore>) -> Self {
        Self {
            store,
            surface: Mutex::new(Surface::default()),
            detail_token: AtomicU64::new(0),
        }
    }

    /// Copy of the current regions.
    pub async fn snapshot(&self) -> Surface {
        self.surface.lock().await.clone()
    }

    /// The full page for the current regions.
    pub async fn page(&self) -> String {
        render::page(&self.snapshot().await)
    }

    /// Reload the list, then select its first post.
    pub async fn render_list(&self) {
        if let Some(first) = self.load_list().await {
            self.show_detail(first).await;
        } else {
            self.surface.lock().await.detail = DetailRegion::Placeholder;
        }
    }

    /// Refresh button.
    pub async fn refresh(&self) {
        tracing::debug!("Refreshing post list");
        self.render_list().await;
    }

    /// Fetch and show one post. A newer selection made while this fetch is
    /// in flight wins.
    pub async fn show_detail(&self, id: PostId) {
        let token = self.next_token();
        self.surface.lock().await.detail = DetailRegion::Loading;

        let result = self.store.get_by_id(id).await;

        let mut surface = self.surface.lock().await;
        if !self.is_latest(token) {
            tracing::debug!(post_id = id, token, "Discarding stale detail fetch");
            return;
        }
        surface.edit_draft = None;
        surface.detail = match result {
            Ok(post) => DetailRegion::Viewing(post),
            Err(err) => {
                tracing::warn!(post_id = id, error = %err, "Detail fetch failed");
                DetailRegion::Failed(err)
            }
        };
    }

    /// Switch the detail panel to the edit form for `id`.
    pub async fn begin_edit(&self, id: PostId) {
        let token = self.next_token();
        let result = self.store.get_by_id(id).await;

        let mut surface = self.surface.lock().await;
        if !self.is_latest(token) {
            tracing::debug!(post_id = id, token, "Discarding stale edit fetch");
            return;
        }
        surface.edit_draft = None;
        surface.detail = match result {
            Ok(post) => DetailRegion::Editing(post),
            Err(err) => {
                tracing::warn!(post_id = id, error = %err, "Cannot edit post");
                DetailRegion::Failed(err)
            }
        };
    }

    /// Close the edit form without touching the store.
    pub async fn cancel_edit(&self) {
        let mut surface = self.surface.lock().await;
        surface.edit_draft = None;
        if let DetailRegion::Editing(post) = &surface.detail {
            let post = post.clone();
            surface.detail = DetailRegion::Viewing(post);
        }
    }

    /// Submit the edit form. Author and image are carried over from the
    /// stored post; only title and content change.
    pub async fn submit_edit(&self, id: PostId, title: String, content: String) {
        if let Err(err) = Post::validate_edit(&title, &content) {
            let mut surface = self.surface.lock().await;
            if surface.detail.is_editing() {
                surface.edit_draft = Some(EditDraft {
                    title,
                    content,
                    error: err.to_string(),
                });
            } else {
                tracing::debug!(post_id = id, "Ignoring invalid edit outside the edit form");
            }
            return;
        }

        if let Err(err) = self.apply_edit(id, title, content).await {
            tracing::warn!(post_id = id, error = %err, "Edit failed");
            self.fail_detail(err).await;
            return;
        }

        self.load_list().await;
        self.show_detail(id).await;
    }

    async fn apply_edit(
        &self,
        id: PostId,
        title: String,
        content: String,
    ) -> Result<Post, StoreError> {
        let current = self.store.get_by_id(id).await?;
        self.store.update(current.with_edits(title, content)).await
    }

    /// Open the confirmation panel for deleting `id`.
    pub async fn request_delete(&self, id: PostId) {
        self.surface.lock().await.pending_delete = Some(id);
    }

    /// Dismiss the confirmation panel.
    pub async fn cancel_delete(&self) {
        self.surface.lock().await.pending_delete = None;
    }

    /// Carry out the pending deletion, if any.
    pub async fn confirm_delete(&self) {
        let Some(id) = self.surface.lock().await.pending_delete.take() else {
            return;
        };

        match self.store.delete(id).await {
            Ok(()) => {
                tracing::info!(post_id = id, "Post deleted");
                self.load_list().await;
                // Invalidate any detail fetch still in flight.
                self.next_token();
                self.surface.lock().await.detail = DetailRegion::Placeholder;
            }
            Err(err) => {
                tracing::warn!(post_id = id, error = %err, "Delete failed");
                self.fail_detail(err).await;
            }
        }
    }

    /// Submit the new-post form.
    pub async fn submit_create(&self, new: NewPost) {
        if let Err(err) = new.validate() {
            self.surface.lock().await.new_post = NewPostForm {
                values: new,
                error: Some(err.to_string()),
            };
            return;
        }

        let post = self.store.create(new).await;
        tracing::info!(post_id = post.id, "Post created");

        self.load_list().await;
        self.surface.lock().await.new_post = NewPostForm::default();
        self.show_detail(post.id).await;
    }

    /// Reload the list region. Returns the first post's id.
    async fn load_list(&self) -> Option<PostId> {
        self.surface.lock().await.list = ListRegion::Loading;
        let posts = self.store.list().await;
        let first = posts.first().map(|p| p.id);
        self.surface.lock().await.list = ListRegion::Rows(posts);
        first
    }

    async fn fail_detail(&self, err: StoreError) {
        self.next_token();
        let mut surface = self.surface.lock().await;
        surface.edit_draft = None;
        surface.detail = DetailRegion::Failed(err);
    }

    fn next_token(&self) -> u64 {
        self.detail_token.fetch_add(1, Ordering::SeqCst) + 1
    }

    fn is_latest(&self, token: u64) -> bool {
        self.detail_token.load(Ordering::SeqCst) == token
    }
}
