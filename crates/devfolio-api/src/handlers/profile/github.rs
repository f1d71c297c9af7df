//! GitHub repository proxy handler.
//!
//! GET /api/profile/github/{username} - Recently created repos for a username

use std::sync::Arc;

use actix_web::{web, HttpResponse};
use devfolio_github::{GithubError, RepoLookup};
use log::error;

use super::models::MessageResponse;

/// GET /api/profile/github/{username}
///
/// Proxy the lookup to the repo client and pass the upstream JSON body
/// through verbatim. Any upstream rejection means the username has no
/// visible GitHub profile; a failure to reach GitHub at all is the
/// gateway's fault and is reported as such.
pub async fn github_repos_handler(
    path: web::Path<String>,
    lookup: web::Data<Arc<dyn RepoLookup>>,
) -> HttpResponse {
    let username = path.into_inner();

    match lookup.recent_repos(&username).await {
        Ok(body) => HttpResponse::Ok().json(body),
        Err(GithubError::Status { status }) => {
            error!("github lookup for '{}' rejected upstream: {}", username, status);
            HttpResponse::NotFound().json(MessageResponse::new("No github profile found"))
        }
        Err(err) => {
            error!("github lookup for '{}' failed: {}", username, err);
            HttpResponse::BadGateway().json(MessageResponse::new("Unable to reach github"))
        }
    }
}
