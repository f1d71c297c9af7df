//! Create-or-update profile handler.
//!
//! POST /api/profile - Create or update the caller's profile

use std::sync::Arc;

use actix_web::{web, HttpRequest, HttpResponse};
use devfolio_auth::AuthGuard;
use devfolio_commons::Profile;
use devfolio_store::ProfileStore;
use log::error;

use super::models::{UpsertProfileRequest, ValidationErrorResponse};
use super::{authenticate, server_error};

/// POST /api/profile
///
/// Create the caller's profile on first call, update it in place on
/// subsequent calls. The update is a sparse merge: only fields present
/// in the request are written, absent fields are never cleared.
pub async fn upsert_profile_handler(
    req: HttpRequest,
    guard: web::Data<Arc<dyn AuthGuard>>,
    profiles: web::Data<Arc<dyn ProfileStore>>,
    body: web::Json<UpsertProfileRequest>,
) -> HttpResponse {
    let caller = match authenticate(&req, &guard).await {
        Ok(caller) => caller,
        Err(response) => return response,
    };

    if let Err(errors) = body.validate() {
        return HttpResponse::BadRequest().json(ValidationErrorResponse::new(errors));
    }

    let update = body.to_update();

    // Update path: merge into the existing document.
    match profiles.find_and_update(&caller.user_id, update.clone()).await {
        Ok(Some(profile)) => return HttpResponse::Ok().json(profile),
        Ok(None) => {}
        Err(err) => {
            error!("failed to update profile: {}", err);
            return server_error();
        }
    }

    // Create path: no document matched, build a fresh one.
    let mut profile = Profile::new(caller.user_id.clone());
    update.apply(&mut profile);

    match profiles.insert(profile).await {
        Ok(profile) => HttpResponse::Ok().json(profile),
        Err(err) => {
            error!("failed to create profile: {}", err);
            server_error()
        }
    }
}
