//! Education entry handlers.
//!
//! PUT    /api/profile/education          - Append an education entry
//! DELETE /api/profile/education/{edu_id} - Remove an education entry

use std::sync::Arc;

use actix_web::{web, HttpRequest, HttpResponse};
use devfolio_auth::AuthGuard;
use devfolio_store::ProfileStore;
use log::error;

use super::models::{EducationRequest, MessageResponse, ValidationErrorResponse};
use super::{authenticate, server_error, MSG_NO_PROFILE};

/// PUT /api/profile/education
///
/// Prepend a new education entry to the caller's profile, newest-first.
/// Requires the profile to exist already.
pub async fn add_education_handler(
    req: HttpRequest,
    guard: web::Data<Arc<dyn AuthGuard>>,
    profiles: web::Data<Arc<dyn ProfileStore>>,
    body: web::Json<EducationRequest>,
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

    profile.education.insert(0, body.to_entry());

    match profiles.replace(profile).await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(err) => {
            error!("failed to persist education entry: {}", err);
            server_error()
        }
    }
}

/// DELETE /api/profile/education/{edu_id}
///
/// Remove the entry whose id matches the path parameter. An unknown id
/// leaves the sequence unchanged; the caller still gets the document
/// back.
pub async fn remove_education_handler(
    req: HttpRequest,
    path: web::Path<String>,
    guard: web::Data<Arc<dyn AuthGuard>>,
    profiles: web::Data<Arc<dyn ProfileStore>>,
) -> HttpResponse {
    let caller = match authenticate(&req, &guard).await {
        Ok(caller) => caller,
        Err(response) => return response,
    };
    let edu_id = path.into_inner();

    let mut profile = match profiles.find_by_user(&caller.user_id).await {
        Ok(Some(profile)) => profile,
        Ok(None) => return HttpResponse::BadRequest().json(MessageResponse::new(MSG_NO_PROFILE)),
        Err(err) => {
            error!("failed to load profile for {}: {}", caller.user_id, err);
            return server_error();
        }
    };

    if let Some(position) = profile
        .education
        .iter()
        .position(|entry| entry.id.as_str() == edu_id)
    {
        profile.education.remove(position);
    }

    match profiles.replace(profile).await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(err) => {
            error!("failed to persist education removal: {}", err);
            server_error()
        }
    }
}
