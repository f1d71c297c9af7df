//! Profile resource handlers.
//!
//! Every handler follows the same shape: authenticate (where required),
//! validate the body (where present), perform one store operation, and
//! answer with JSON. Failures stay local to the request: expected
//! conditions become 400-level responses with a `{msg}` body, anything
//! unexpected is logged and answered with a generic 500.

mod account;
mod education;
mod experience;
mod github;
mod list;
mod me;
pub mod models;
mod upsert;

pub use account::delete_account_handler;
pub use education::{add_education_handler, remove_education_handler};
pub use experience::{add_experience_handler, remove_experience_handler};
pub use github::github_repos_handler;
pub use list::{get_profile_by_user_handler, list_profiles_handler};
pub use me::get_own_profile_handler;
pub use upsert::upsert_profile_handler;

use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse};
use devfolio_auth::{AuthError, AuthGuard, AuthenticatedUser};
use devfolio_commons::Profile;
use devfolio_store::UserStore;

use self::models::{MessageResponse, ProfileView};

pub(crate) const MSG_NO_PROFILE: &str = "There is no profile for this user";
pub(crate) const MSG_PROFILE_NOT_FOUND: &str = "Profile not found";
pub(crate) const MSG_SERVER_ERROR: &str = "Server Error";

/// Generic 500 response. Detail never leaves the process; callers log it.
pub(crate) fn server_error() -> HttpResponse {
    HttpResponse::InternalServerError().json(MessageResponse::new(MSG_SERVER_ERROR))
}

/// Run the auth guard, turning a rejection into the 401 response.
pub(crate) async fn authenticate(
    req: &HttpRequest,
    guard: &Arc<dyn AuthGuard>,
) -> Result<AuthenticatedUser, HttpResponse> {
    guard.verify(req).await.map_err(|err| {
        let msg = match err {
            AuthError::MissingAuthorization(_) => "No token, authorization denied",
            _ => "Token is not valid",
        };
        HttpResponse::Unauthorized().json(MessageResponse::new(msg))
    })
}

/// Answer with the profile joined against its identity's display fields.
pub(crate) async fn respond_with_view(
    profile: Profile,
    users: &Arc<dyn UserStore>,
) -> HttpResponse {
    match users.find_by_id(&profile.user).await {
        Ok(user) => HttpResponse::Ok().json(ProfileView::new(profile, user.as_ref())),
        Err(err) => {
            log::error!("failed to load identity for profile join: {}", err);
            server_error()
        }
    }
}
