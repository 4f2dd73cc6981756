//! JSON post endpoints, a thin layer over the store.

use actix_web::{HttpResponse, web};

use postboard_core::{NewPost, Post, PostId};
use postboard_shared::ApiResponse;
use postboard_shared::dto::{CreatePostRequest, PostResponse, UpdatePostRequest};

use crate::middleware::error::AppResult;
use crate::observability::RequestId;
use crate::state::AppState;

fn to_response(post: Post) -> PostResponse {
    PostResponse {
        id: post.id,
        title: post.title,
        content: post.content,
        author: post.author,
        image: post.image,
    }
}

/// GET /api/posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts: Vec<PostResponse> = state.store.list().await.into_iter().map(to_response).collect();
    Ok(HttpResponse::Ok().json(ApiResponse::ok(posts)))
}

/// GET /api/posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let post = state.store.get_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::ok(to_response(post))))
}

/// POST /api/posts
pub async fn create_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    let new = NewPost::new(req.title, req.content, req.author, req.image);
    new.validate()?;

    let post = state.store.create(new).await;
    tracing::info!(request_id = %request_id.as_str(), post_id = post.id, "Post created via API");

    Ok(HttpResponse::Created().json(ApiResponse::ok_with_message(
        to_response(post),
        "Post created",
    )))
}

/// PUT /api/posts/{id}
///
/// Replaces the post wholesale.
pub async fn update_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    path: web::Path<PostId>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    let fields = NewPost::new(req.title, req.content, req.author, req.image);
    fields.validate()?;

    let post = state.store.update(Post::from_new(id, fields)).await?;
    tracing::info!(request_id = %request_id.as_str(), post_id = id, "Post updated via API");

    Ok(HttpResponse::Ok().json(ApiResponse::ok(to_response(post))))
}

/// DELETE /api/posts/{id}
pub async fn delete_post(
    state: web::Data<AppState>,
    request_id: RequestId,
    path: web::Path<PostId>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    state.store.delete(id).await?;
    tracing::info!(request_id = %request_id.as_str(), post_id = id, "Post deleted via API");

    Ok(HttpResponse::Ok().json(ApiResponse::message("Post deleted")))
}
