//! Region state the view controller writes and the renderer reads.

use postboard_core::{NewPost, Post, PostId, StoreError};

/// The post list region.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListRegion {
    Loading,
    Rows(Vec<Post>),
}

/// The detail region.
///
/// `Loading -> Viewing` on fetch completion, `Viewing -> Editing` on edit,
/// `Editing -> Viewing` on submit or cancel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailRegion {
    /// Nothing selected.
    Placeholder,
    Loading,
    Viewing(Post),
    /// Detail panel hidden, edit form shown pre-filled from the post.
    Editing(Post),
    Failed(StoreError),
}

impl DetailRegion {
    pub fn is_editing(&self) -> bool {
        matches!(self, DetailRegion::Editing(_))
    }
}

/// Values and last validation error of the new-post form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPostForm {
    pub values: NewPost,
    pub error: Option<String>,
}

/// Edit-form values rejected by validation, shown back to the user.
///
/// Kept apart from `DetailRegion::Editing` so the post there always matches
/// the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditDraft {
    pub title: String,
    pub content: String,
    pub error: String,
}

/// Snapshot of everything on the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    pub list: ListRegion,
    pub detail: DetailRegion,
    pub new_post: NewPostForm,
    /// Rejected edit, only set while the detail region is `Editing`.
    pub edit_draft: Option<EditDraft>,
    /// Deletion awaiting confirm or cancel.
    pub pending_delete: Option<PostId>,
}

impl Default for Surface {
    fn default() -> Self {
        Self {
            list: ListRegion::Loading,
            detail: DetailRegion::Placeholder,
            new_post: NewPostForm::default(),
            edit_draft: None,
            pending_delete: None,
        }
    }
}
