//! Integration tests for the GitHub repository proxy.
//!
//! The proxy passes a successful upstream body through verbatim, turns
//! any upstream rejection into 404, and reports an unreachable upstream
//! as 502 instead of leaving the request hanging.

#[path = "integration/common/mod.rs"]
mod common;

use std::sync::Arc;
use std::time::Duration;

use actix_web::test;
use common::{init_app, StubRepoLookup, StubRepos, TestContext};
use devfolio_github::{GithubClient, RepoLookup};
use serde_json::{json, Value};

#[actix_web::test]
async fn passes_upstream_body_through_verbatim() {
    let repos = json!([
        { "name": "repo-one", "stargazers_count": 3 },
        { "name": "repo-two", "stargazers_count": 0 }
    ]);
    let ctx = TestContext::with_repo_lookup(Arc::new(StubRepoLookup::new(StubRepos::Body(
        repos.clone(),
    ))));
    let app = init_app(&ctx).await;

    let req = test::TestRequest::get()
        .uri("/api/profile/github/octocat")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, repos);
}

#[actix_web::test]
async fn upstream_rejection_becomes_404() {
    let ctx = TestContext::with_repo_lookup(Arc::new(StubRepoLookup::new(StubRepos::Status(404))));
    let app = init_app(&ctx).await;

    let req = test::TestRequest::get()
        .uri("/api/profile/github/nonexistent-user")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 404);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["msg"], "No github profile found");
}

#[actix_web::test]
async fn unreachable_upstream_becomes_502() {
    // A real client pointed at a port nothing listens on: the transport
    // error surfaces as 502 rather than a hung request.
    let client = GithubClient::builder()
        .base_url("http://127.0.0.1:1")
        .timeout(Duration::from_secs(2))
        .build()
        .unwrap();
    let lookup: Arc<dyn RepoLookup> = Arc::new(client);
    let ctx = TestContext::with_repo_lookup(lookup);
    let app = init_app(&ctx).await;

    let req = test::TestRequest::get()
        .uri("/api/profile/github/octocat")
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 502);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["msg"], "Unable to reach github");
}
