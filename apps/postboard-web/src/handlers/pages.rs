//! Page endpoints. Each user action runs through the view controller and
//! then sends the browser back to the page.

use actix_web::http::header;
use actix_web::{HttpResponse, web};

use postboard_core::{NewPost, PostId};
use postboard_shared::dto::{CreatePostRequest, EditPostForm};

use crate::state::AppState;

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(body)
}

fn back_to_page() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((header::LOCATION, "/"))
        .finish()
}

/// GET /
pub async fn index(state: web::Data<AppState>) -> HttpResponse {
    html(state.view.page().await)
}

/// GET /posts/{id} - select a row.
pub async fn select(state: web::Data<AppState>, path: web::Path<PostId>) -> HttpResponse {
    state.view.show_detail(path.into_inner()).await;
    html(state.view.page().await)
}

/// POST /posts
pub async fn create(
    state: web::Data<AppState>,
    form: web::Form<CreatePostRequest>,
) -> HttpResponse {
    let req = form.into_inner();
    state
        .view
        .submit_create(NewPost::new(req.title, req.content, req.author, req.image))
        .await;
    back_to_page()
}

/// POST /posts/{id}/edit
pub async fn edit(state: web::Data<AppState>, path: web::Path<PostId>) -> HttpResponse {
    state.view.begin_edit(path.into_inner()).await;
    back_to_page()
}

/// POST /posts/{id}/update
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<PostId>,
    form: web::Form<EditPostForm>,
) -> HttpResponse {
    let form = form.into_inner();
    state
        .view
        .submit_edit(path.into_inner(), form.title, form.content)
        .await;
    back_to_page()
}

/// POST /edit/cancel
pub async fn cancel_edit(state: web::Data<AppState>) -> HttpResponse {
    state.view.cancel_edit().await;
    back_to_page()
}

/// POST /posts/{id}/delete - opens the confirmation panel.
pub async fn request_delete(state: web::Data<AppState>, path: web::Path<PostId>) -> HttpResponse {
    state.view.request_delete(path.into_inner()).await;
    back_to_page()
}

/// POST /delete/confirm
pub async fn confirm_delete(state: web::Data<AppState>) -> HttpResponse {
    state.view.confirm_delete().await;
    back_to_page()
}

/// POST /delete/cancel
pub async fn cancel_delete(state: web::Data<AppState>) -> HttpResponse {
    state.view.cancel_delete().await;
    back_to_page()
}

/// POST /refresh
pub async fn refresh(state: web::Data<AppState>) -> HttpResponse {
    state.view.refresh().await;
    back_to_page()
}
