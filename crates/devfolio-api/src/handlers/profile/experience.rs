//! Experience entry handlers.
//!
//! PUT    /api/profile/experience          - Append an experience entry
//! DELETE /api/profile/experience/{exp_id} - Remove an experience entry

use std::sync::Arc;

use actix_web::{web, HttpRequest, HttpResponse};
use devfolio_auth::AuthGuard;
use devfolio_store::ProfileStore;
use log::error;

use super::models::{ExperienceRequest, MessageResponse, ValidationErrorResponse};
use super::{authenticate, server_error, MSG_NO_PROFILE};

/// PUT /api/profile/experience
///
/// Prepend a new experience entry to the caller's profile, newest-first.
/// Requires the profile to exist already.
pub async fn add_experience_handler(
    req: HttpRequest,
    guard: web::Data<Arc<dyn AuthGuard>>,
    profiles: web::Data<Arc<dyn ProfileStore>>,
    body: web::Json<ExperienceRequest>,
) -> HttpResponse {
    let caller = match authenticate(&req, &guard).await {
        Ok(caller) => caller,
        Err(response) => return response,
    };

    if let Err(errors) = body.validate() {
        return HttpResponse::BadRequest().json(ValidationErrorResponse::new(errors));
    }

    let mut profile = match profiles.find_by_user(&caller.user_id).await {
        Ok(Some(profile)) => profile,
        Ok(None) => return HttpResponse::BadRequest().json(MessageResponse::new(MSG_NO_PROFILE)),
        Err(err) => {
            error!("failed to load profile for {}: {}", caller.user_id, err);
            return server_error();
        }
    };

    profile.experience.insert(0, body.to_entry());

    match profiles.replace(profile).await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(err) => {
            error!("failed to persist experience entry: {}", err);
            server_error()
        }
    }
}

/// DELETE /api/profile/experience/{exp_id}
///
/// Remove the entry whose id matches the path parameter. An unknown id
/// leaves the sequence unchanged; the caller still gets the document
/// back.
pub async fn remove_experience_handler(
    req: HttpRequest,
    path: web::Path<String>,
    guard: web::Data<Arc<dyn AuthGuard>>,
    profiles: web::Data<Arc<dyn ProfileStore>>,
) -> HttpResponse {
    let caller = match authenticate(&req, &guard).await {
        Ok(caller) => caller,
        Err(response) => return response,
    };
    let exp_id = path.into_inner();

    let mut profile = match profiles.find_by_user(&caller.user_id).await {
        Ok(Some(profile)) => profile,
        Ok(None) => return HttpResponse::BadRequest().json(MessageResponse::new(MSG_NO_PROFILE)),
        Err(err) => {
            error!("failed to load profile for {}: {}", caller.user_id, err);
            return server_error();
        }
    };

    if let Some(position) = profile
        .experience
        .iter()
        .position(|entry| entry.id.as_str() == exp_id)
    {
        profile.experience.remove(position);
    }

    match profiles.replace(profile).await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(err) => {
            error!("failed to persist experience removal: {}", err);
            server_error()
        }
    }
}
