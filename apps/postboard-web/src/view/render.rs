//! HTML rendering of the page regions.

use std::fmt::Write;

use postboard_core::{Post, PostId, StoreError};

use super::surface::{DetailRegion, EditDraft, ListRegion, NewPostForm, Surface};

const LOADING: &str =
    r#"<div class="text-center text-gray-500"><i class="fas fa-spinner fa-spin"></i> Loading...</div>"#;

const PLACEHOLDER: &str =
    r#"<p class="text-gray-500 text-center py-12">Select a post to view details</p>"#;

/// Escape text for use in element content and quoted attributes.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// The whole page.
pub fn page(surface: &Surface) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Postboard</title>
  <script src="https://cdn.tailwindcss.com"></script>
  <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.1/css/all.min.css" />
</head>
<body class="bg-gray-100 min-h-screen">
  <header class="bg-white shadow p-4 flex justify-between items-center">
    <h1 class="text-2xl font-bold text-gray-800">Postboard</h1>
    <form method="post" action="/refresh">
      <button id="refresh-btn" class="btn-secondary" type="submit"><i class="fas fa-sync"></i> Refresh</button>
    </form>
  </header>
  <main class="max-w-6xl mx-auto p-6 grid grid-cols-1 md:grid-cols-3 gap-6">
    <section class="space-y-6">
      {new_post}
      <div id="post-list" class="space-y-2">{list}</div>
    </section>
    <section class="md:col-span-2 bg-white rounded-lg shadow p-6">
      {detail}
      {edit_form}
    </section>
  </main>
  {confirm}
</body>
</html>
"#,
        new_post = new_post_form(&surface.new_post),
        list = list_region(&surface.list),
        detail = detail_region(&surface.detail),
        edit_form = edit_form(&surface.detail, surface.edit_draft.as_ref()),
        confirm = surface.pending_delete.map(delete_confirm).unwrap_or_default(),
    )
}

/// Contents of the `post-list` region.
pub fn list_region(list: &ListRegion) -> String {
    let posts = match list {
        ListRegion::Loading => return LOADING.to_string(),
        ListRegion::Rows(posts) => posts,
    };

    if posts.is_empty() {
        return r#"<p class="text-gray-500 text-center">No posts yet</p>"#.to_string();
    }

    let mut html = String::new();
    for post in posts {
        write!(
            html,
            r#"<a href="/posts/{id}" class="post-item p-4 bg-gray-50 rounded-lg cursor-pointer flex items-center space-x-4 transition" data-id="{id}">
  <img src="{image}" class="w-12 h-12 rounded-md object-cover" />
  <div>
    <h3 class="text-lg font-medium text-gray-800">{title}</h3>
    <p class="text-sm text-gray-500">By {author}</p>
  </div>
</a>
"#,
            id = post.id,
            image = escape(&post.image),
            title = escape(&post.title),
            author = escape(&post.author),
        )
        .expect("writing to a String cannot fail");
    }
    html
}

/// The `post-detail` region. Hidden while the edit form is open.
pub fn detail_region(detail: &DetailRegion) -> String {
    let (hidden, body) = match detail {
        DetailRegion::Placeholder => ("", PLACEHOLDER.to_string()),
        DetailRegion::Loading => ("", LOADING.to_string()),
        DetailRegion::Viewing(post) => ("", post_detail(post)),
        DetailRegion::Editing(post) => (" hidden", post_detail(post)),
        DetailRegion::Failed(err) => ("", failure(err)),
    };
    format!(r#"<div id="post-detail" class="text-left{hidden}">{body}</div>"#)
}

fn post_detail(post: &Post) -> String {
    format!(
        r#"<div class="fade-in text-left">
  <div class="flex justify-between items-center mb-4">
    <div>
      <h2 class="text-2xl font-bold text-gray-800">{title}</h2>
      <p class="text-gray-600">By {author}</p>
    </div>
    <div class="space-x-2 flex">
      <form method="post" action="/posts/{id}/edit"><button class="btn-primary text-sm" type="submit"><i class="fas fa-edit"></i> Edit</button></form>
      <form method="post" action="/posts/{id}/delete"><button class="btn-secondary text-sm" type="submit"><i class="fas fa-trash"></i> Delete</button></form>
    </div>
  </div>
  <img src="{image}" class="mb-4 w-full h-60 object-cover rounded-lg" />
  <p class="text-gray-700">{content}</p>
</div>"#,
        id = post.id,
        title = escape(&post.title),
        author = escape(&post.author),
        image = escape(&post.image),
        content = escape(&post.content),
    )
}

fn failure(err: &StoreError) -> String {
    let StoreError::NotFound(id) = err;
    format!(
        r#"<div class="text-center text-red-600 py-12" role="alert"><i class="fas fa-exclamation-triangle"></i> Post {id} was not found. It may have been deleted.</div>"#
    )
}

/// The `edit-post-form` region. Always present, hidden unless editing.
/// A rejected draft, when present, refills the fields.
pub fn edit_form(detail: &DetailRegion, draft: Option<&EditDraft>) -> String {
    let DetailRegion::Editing(post) = detail else {
        return r#"<form id="edit-post-form" class="hidden"></form>"#.to_string();
    };
    let (title, content) = match draft {
        Some(draft) => (&draft.title, &draft.content),
        None => (&post.title, &post.content),
    };

    format!(
        r#"<form id="edit-post-form" method="post" action="/posts/{id}/update" data-id="{id}" class="space-y-4">
  {error}
  <input id="edit-title" name="title" class="w-full border rounded p-2" value="{title}" />
  <textarea id="edit-content" name="content" class="w-full border rounded p-2" rows="6">{content}</textarea>
  <div class="space-x-2">
    <button class="btn-primary" type="submit">Save</button>
    <button id="cancel-edit" class="btn-secondary" type="submit" formaction="/edit/cancel">Cancel</button>
  </div>
</form>"#,
        id = post.id,
        error = draft.map(|d| form_error(&d.error)).unwrap_or_default(),
        title = escape(title),
        content = escape(content),
    )
}

/// The new-post form, refilled with the rejected values after a failed
/// submit.
pub fn new_post_form(form: &NewPostForm) -> String {
    let values = &form.values;
    format!(
        r#"<form id="new-post-form" method="post" action="/posts" class="bg-white rounded-lg shadow p-4 space-y-2">
  <h2 class="text-lg font-semibold text-gray-800">New post</h2>
  {error}
  <input id="title" name="title" placeholder="Title" class="w-full border rounded p-2" value="{title}" />
  <textarea id="content" name="content" placeholder="Content" class="w-full border rounded p-2">{content}</textarea>
  <input id="author" name="author" placeholder="Author" class="w-full border rounded p-2" value="{author}" />
  <input id="image" name="image" placeholder="Image URL" class="w-full border rounded p-2" value="{image}" />
  <button class="btn-primary w-full" type="submit"><i class="fas fa-plus"></i> Create</button>
</form>"#,
        error = form.error.as_deref().map(form_error).unwrap_or_default(),
        title = escape(&values.title),
        content = escape(&values.content),
        author = escape(&values.author),
        image = escape(&values.image),
    )
}

fn form_error(message: &str) -> String {
    format!(r#"<p class="text-sm text-red-600" role="alert">{}</p>"#, escape(message))
}

/// Non-blocking confirmation panel for a pending deletion.
pub fn delete_confirm(id: PostId) -> String {
    format!(
        r#"<div id="delete-confirm" data-id="{id}" class="fixed inset-0 bg-black bg-opacity-40 flex items-center justify-center">
  <div class="bg-white rounded-lg shadow p-6 space-y-4">
    <p class="text-gray-800">Delete this post?</p>
    <div class="flex space-x-2 justify-end">
      <form method="post" action="/delete/cancel"><button class="btn-secondary" type="submit">Cancel</button></form>
      <form method="post" action="/delete/confirm"><button class="btn-primary" type="submit">Delete</button></form>
    </div>
  </div>
</div>"#
    )
}
