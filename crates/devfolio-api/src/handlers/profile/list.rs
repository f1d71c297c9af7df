//! Public profile read handlers.
//!
//! GET /api/profile                - All profiles
//! GET /api/profile/user/{user_id} - Profile by user id

use std::sync::Arc;

use actix_web::{web, HttpResponse};
use devfolio_commons::UserId;
use devfolio_store::{ProfileStore, UserStore};
use log::error;

use super::models::{MessageResponse, ProfileView};
use super::{respond_with_view, server_error, MSG_PROFILE_NOT_FOUND};

/// GET /api/profile
///
/// List every profile, each joined with its identity's display fields.
/// An empty collection is a valid 200 with an empty array.
pub async fn list_profiles_handler(
    profiles: web::Data<Arc<dyn ProfileStore>>,
    users: web::Data<Arc<dyn UserStore>>,
) -> HttpResponse {
    let all = match profiles.find_all().await {
        Ok(all) => all,
        Err(err) => {
            error!("failed to list profiles: {}", err);
            return server_error();
        }
    };

    let mut views = Vec::with_capacity(all.len());
    for profile in all {
        match users.find_by_id(&profile.user).await {
            Ok(user) => views.push(ProfileView::new(profile, user.as_ref())),
            Err(err) => {
                error!("failed to load identity for profile join: {}", err);
                return server_error();
            }
        }
    }

    HttpResponse::Ok().json(views)
}

/// GET /api/profile/user/{user_id}
///
/// Fetch a profile by its owning identity's id. A malformed id could
/// never name a stored identity, so it gets the same answer as an
/// unknown one.
pub async fn get_profile_by_user_handler(
    path: web::Path<String>,
    profiles: web::Data<Arc<dyn ProfileStore>>,
    users: web::Data<Arc<dyn UserStore>>,
) -> HttpResponse {
    let user_id = match UserId::try_new(path.into_inner()) {
        Ok(user_id) => user_id,
        Err(_) => {
            return HttpResponse::BadRequest().json(MessageResponse::new(MSG_PROFILE_NOT_FOUND))
        }
    };

    match profiles.find_by_user(&user_id).await {
        Ok(Some(profile)) => respond_with_view(profile, &users).await,
        Ok(None) => HttpResponse::BadRequest().json(MessageResponse::new(MSG_PROFILE_NOT_FOUND)),
        Err(err) => {
            error!("failed to load profile for user {}: {}", user_id, err);
            server_error()
        }
    }
}
