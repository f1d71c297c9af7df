//! Shared helpers for API integration tests.
//!
//! Builds the full actix application with in-memory stores, a real JWT
//! guard, and a configurable repo-lookup stub, so tests exercise the
//! same wiring the server binary uses.

// Each test binary uses its own subset of these helpers.
#![allow(dead_code)]

use std::sync::Arc;

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use async_trait::async_trait;
use devfolio_auth::{issue_token, AuthGuard, JwtAuthGuard, DEFAULT_ISSUER};
use devfolio_commons::{User, UserId};
use devfolio_github::{GithubError, RepoLookup};
use devfolio_store::{
    MemoryPostStore, MemoryProfileStore, MemoryUserStore, PostStore, ProfileStore, UserStore,
};
use serde_json::Value;

/// Signing secret shared by the guard and the tokens tests issue.
pub const TEST_SECRET: &str = "devfolio-test-secret";

/// Canned behavior for the repo-lookup stub.
#[allow(dead_code)]
pub enum StubRepos {
    /// Answer every lookup with this body
    Body(Value),
    /// Fail every lookup with this upstream status
    Status(u16),
}

/// Repo-lookup collaborator with canned behavior.
pub struct StubRepoLookup {
    behavior: StubRepos,
}

impl StubRepoLookup {
    pub fn new(behavior: StubRepos) -> Self {
        Self { behavior }
    }
}

#[async_trait]
impl RepoLookup for StubRepoLookup {
    async fn recent_repos(&self, _username: &str) -> devfolio_github::Result<Value> {
        match &self.behavior {
            StubRepos::Body(body) => Ok(body.clone()),
            StubRepos::Status(status) => Err(GithubError::Status { status: *status }),
        }
    }
}

/// Stores and collaborators backing one test application.
pub struct TestContext {
    pub user_store: Arc<dyn UserStore>,
    pub profile_store: Arc<dyn ProfileStore>,
    pub post_store: Arc<dyn PostStore>,
    pub auth_guard: Arc<dyn AuthGuard>,
    pub repo_lookup: Arc<dyn RepoLookup>,
}

impl TestContext {
    /// Context with a repo lookup that reports no GitHub profile.
    pub fn new() -> Self {
        Self::with_repo_lookup(Arc::new(StubRepoLookup::new(StubRepos::Status(404))))
    }

    /// Context with a specific repo-lookup collaborator.
    pub fn with_repo_lookup(repo_lookup: Arc<dyn RepoLookup>) -> Self {
        Self {
            user_store: Arc::new(MemoryUserStore::new()),
            profile_store: Arc::new(MemoryProfileStore::new()),
            post_store: Arc::new(MemoryPostStore::new()),
            auth_guard: Arc::new(JwtAuthGuard::new(TEST_SECRET, DEFAULT_ISSUER)),
            repo_lookup,
        }
    }

    /// Insert an identity and issue a valid token for it.
    pub async fn seed_user(&self, name: &str) -> (UserId, String) {
        let email = format!("{}@example.com", name.to_lowercase());
        let user = User::new(name, email, None);
        let id = user.id.clone();
        self.user_store
            .insert(user)
            .await
            .expect("seeding user failed");
        let token = issue_token(&id, TEST_SECRET, 24).expect("issuing token failed");
        (id, token)
    }
}

/// Build the application under test.
pub async fn init_app(
    ctx: &TestContext,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(ctx.user_store.clone()))
            .app_data(web::Data::new(ctx.profile_store.clone()))
            .app_data(web::Data::new(ctx.post_store.clone()))
            .app_data(web::Data::new(ctx.auth_guard.clone()))
            .app_data(web::Data::new(ctx.repo_lookup.clone()))
            .configure(devfolio_api::routes::configure_routes),
    )
    .await
}

/// Authorization header pair for the given token.
pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}
