//! Own-profile handler.
//!
//! GET /api/profile/me - Caller's profile joined with identity display fields

use std::sync::Arc;

use actix_web::{web, HttpRequest, HttpResponse};
use devfolio_auth::AuthGuard;
use devfolio_store::{ProfileStore, UserStore};
use log::error;

use super::models::MessageResponse;
use super::{authenticate, respond_with_view, server_error, MSG_NO_PROFILE};

/// GET /api/profile/me
///
/// Fetch the profile owned by the authenticated caller.
pub async fn get_own_profile_handler(
    req: HttpRequest,
    guard: web::Data<Arc<dyn AuthGuard>>,
    profiles: web::Data<Arc<dyn ProfileStore>>,
    users: web::Data<Arc<dyn UserStore>>,
) -> HttpResponse {
    let caller = match authenticate(&req, &guard).await {
        Ok(caller) => caller,
        Err(response) => return response,
    };

    match profiles.find_by_user(&caller.user_id).await {
        Ok(Some(profile)) => respond_with_view(profile, &users).await,
        Ok(None) => HttpResponse::BadRequest().json(MessageResponse::new(MSG_NO_PROFILE)),
        Err(err) => {
            error!("failed to load own profile: {}", err);
            server_error()
        }
    }
}
