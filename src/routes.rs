use actix_web::{HttpResponse, web};

use crate::auth;
use crate::handlers;

/// Every route of the application. Session middleware and shared data are
/// added by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Public routes
        .route("/login", web::get().to(handlers::auth_handlers::login_page))
        .route("/login", web::post().to(handlers::auth_handlers::login_submit))
        .route("/", web::get().to(|| async {
            HttpResponse::SeeOther()
                .insert_header(("Location", "/dashboard"))
                .finish()
        }))
        // JSON API
        .service(
            web::scope("/api/v1")
                .wrap(actix_web::middleware::from_fn(auth::middleware::require_api_auth))
                .configure(handlers::api_v1::configure),
        )
        // Protected routes
        .service(
            web::scope("")
                .wrap(actix_web::middleware::from_fn(auth::middleware::require_auth))
                .route("/dashboard", web::get().to(handlers::dashboard::index))
                .route("/logout", web::post().to(handlers::auth_handlers::logout))
                // Members: literal paths before /members/{id}
                .route("/members", web::get().to(handlers::member_handlers::list::list))
                .route("/members/new", web::get().to(handlers::member_handlers::crud::new_form))
                .route("/members", web::post().to(handlers::member_handlers::crud::create))
                .route("/members/export.csv", web::get().to(handlers::member_handlers::csv::export))
                .route("/members/import", web::get().to(handlers::member_handlers::csv::import_form))
                .route("/members/import", web::post().to(handlers::member_handlers::csv::import))
                .route("/members/missing", web::get().to(handlers::member_handlers::missing::list))
                .route("/members/{id}/edit", web::get().to(handlers::member_handlers::crud::edit_form))
                .route("/members/{id}", web::post().to(handlers::member_handlers::crud::update))
                .route("/members/{id}/delete", web::post().to(handlers::member_handlers::crud::delete))
                .route("/members/{id}/transfer", web::get().to(handlers::member_handlers::transfer::form))
                .route("/members/{id}/transfer", web::post().to(handlers::member_handlers::transfer::submit))
                // Meetings
                .route("/meetings", web::get().to(handlers::meeting_handlers::list::list))
                .route("/meetings/new", web::get().to(handlers::meeting_handlers::crud::new_form))
                .route("/meetings", web::post().to(handlers::meeting_handlers::crud::create))
                .route("/meetings/{id}/edit", web::get().to(handlers::meeting_handlers::crud::edit_form))
                .route("/meetings/{id}", web::post().to(handlers::meeting_handlers::crud::update))
                .route("/meetings/{id}/delete", web::post().to(handlers::meeting_handlers::crud::delete))
                .route("/meetings/{id}/attendance", web::get().to(handlers::meeting_handlers::attendance::view))
                .route(
                    "/meetings/{id}/attendance/{member_id}",
                    web::post().to(handlers::meeting_handlers::attendance::advance),
                )
                .route("/overview", web::get().to(handlers::overview::index))
                // Transfers
                .route("/transfers", web::get().to(handlers::transfer_handlers::review))
                .route("/transfers/complete", web::post().to(handlers::transfer_handlers::complete)),
        );
}

pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type("text/html; charset=utf-8")
        .body(include_str!("../templates/errors/404.html"))
}
