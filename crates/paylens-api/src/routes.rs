//! API routes configuration
//!
//! Wires every HTTP route for the Paylens API.

use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::handlers::{auth, salaries};

/// Configure API routes
///
/// - POST /auth/signup | /auth/login | /auth/refresh | /auth/logout
/// - GET/POST /salaries, GET /salaries/stats, GET /salaries/{id},
///   POST /salaries/{id}/vote, PATCH /salaries/{id}/status
/// - GET /health - Health check endpoint
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .route("/signup", web::post().to(auth::signup_handler))
            .route("/login", web::post().to(auth::login_handler))
            .route("/refresh", web::post().to(auth::refresh_handler))
            .route("/logout", web::post().to(auth::logout_handler)),
    )
    .service(
        // /stats is registered before /{id} so it never matches as an id.
        web::scope("/salaries")
            .route("", web::get().to(salaries::list_salaries_handler))
            .route("", web::post().to(salaries::submit_salary_handler))
            .route("/stats", web::get().to(salaries::salary_stats_handler))
            .route("/{id}", web::get().to(salaries::salary_detail_handler))
            .route("/{id}/vote", web::post().to(salaries::vote_handler))
            .route("/{id}/status", web::patch().to(salaries::update_status_handler)),
    )
    .route("/health", web::get().to(health_handler));
}

/// Health check endpoint handler
async fn health_handler() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
