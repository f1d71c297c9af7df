//! Account removal handler.
//!
//! DELETE /api/profile - Delete the caller's posts, profile, and identity

use std::sync::Arc;

use actix_web::{web, HttpRequest, HttpResponse};
use devfolio_auth::AuthGuard;
use devfolio_store::{PostStore, ProfileStore, UserStore};
use log::{error, info};

use super::models::MessageResponse;
use super::{authenticate, server_error};

/// DELETE /api/profile
///
/// Remove the caller's account: posts first, then the profile, then the
/// identity record. The steps are independent; a failure partway leaves
/// the earlier deletions committed.
pub async fn delete_account_handler(
    req: HttpRequest,
    guard: web::Data<Arc<dyn AuthGuard>>,
    profiles: web::Data<Arc<dyn ProfileStore>>,
    users: web::Data<Arc<dyn UserStore>>,
    posts: web::Data<Arc<dyn PostStore>>,
) -> HttpResponse {
    let caller = match authenticate(&req, &guard).await {
        Ok(caller) => caller,
        Err(response) => return response,
    };

    match posts.delete_by_author(&caller.user_id).await {
        Ok(removed) => info!("removed {} posts for user {}", removed, caller.user_id),
        Err(err) => {
            error!("failed to delete posts for {}: {}", caller.user_id, err);
            return server_error();
        }
    }

    if let Err(err) = profiles.delete_by_user(&caller.user_id).await {
        error!("failed to delete profile for {}: {}", caller.user_id, err);
        return server_error();
    }

    if let Err(err) = users.delete(&caller.user_id).await {
        error!("failed to delete identity {}: {}", caller.user_id, err);
        return server_error();
    }

    HttpResponse::Ok().json(MessageResponse::new("User deleted"))
}
