//! API routes configuration.
//!
//! All endpoints live under the `/api` prefix:
//! - GET    /api/profile/me                  - Caller's profile (requires auth)
//! - GET    /api/profile                     - All profiles
//! - GET    /api/profile/user/{user_id}      - Profile by user id
//! - POST   /api/profile                     - Create or update the caller's profile (requires auth)
//! - DELETE /api/profile                     - Delete the caller's account (requires auth)
//! - PUT    /api/profile/experience          - Append an experience entry (requires auth)
//! - DELETE /api/profile/experience/{exp_id} - Remove an experience entry (requires auth)
//! - PUT    /api/profile/education           - Append an education entry (requires auth)
//! - DELETE /api/profile/education/{edu_id}  - Remove an education entry (requires auth)
//! - GET    /api/profile/github/{username}   - Recently created GitHub repos
//! - GET    /api/healthcheck                 - Health check endpoint

use actix_web::{web, HttpResponse};
use serde_json::json;

use crate::handlers::profile;

/// Configure API routes for Devfolio.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(
                web::scope("/profile")
                    .route("/me", web::get().to(profile::get_own_profile_handler))
                    .route("/user/{user_id}", web::get().to(profile::get_profile_by_user_handler))
                    .route("/github/{username}", web::get().to(profile::github_repos_handler))
                    .route("/experience", web::put().to(profile::add_experience_handler))
                    .route(
                        "/experience/{exp_id}",
                        web::delete().to(profile::remove_experience_handler),
                    )
                    .route("/education", web::put().to(profile::add_education_handler))
                    .route(
                        "/education/{edu_id}",
                        web::delete().to(profile::remove_education_handler),
                    )
                    .route("", web::get().to(profile::list_profiles_handler))
                    .route("", web::post().to(profile::upsert_profile_handler))
                    .route("", web::delete().to(profile::delete_account_handler)),
            )
            .route("/healthcheck", web::get().to(healthcheck_handler)),
    );
}

/// Health check endpoint handler.
async fn healthcheck_handler() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "api_version": "v1"
    }))
}
