//! HTTP handlers and route configuration.

mod health;
mod pages;
mod posts;

use actix_web::web;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/posts")
                    .route("", web::get().to(posts::list_posts))
                    .route("", web::post().to(posts::create_post))
                    .route("/{id}", web::get().to(posts::get_post))
                    .route("/{id}", web::put().to(posts::update_post))
                    .route("/{id}", web::delete().to(posts::delete_post)),
            ),
    )
    // Page actions
    .route("/", web::get().to(pages::index))
    .route("/refresh", web::post().to(pages::refresh))
    .route("/posts", web::post().to(pages::create))
    .route("/posts/{id}", web::get().to(pages::select))
    .route("/posts/{id}/edit", web::post().to(pages::edit))
    .route("/posts/{id}/update", web::post().to(pages::update))
    .route("/posts/{id}/delete", web::post().to(pages::request_delete))
    .route("/edit/cancel", web::post().to(pages::cancel_edit))
    .route("/delete/confirm", web::post().to(pages::confirm_delete))
    .route("/delete/cancel", web::post().to(pages::cancel_delete));
}
