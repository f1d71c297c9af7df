//! Integration tests for account removal.
//!
//! Deleting an account removes the caller's posts, profile, and
//! identity in that order; the steps are independent and best-effort.

#[path = "integration/common/mod.rs"]
mod common;

use actix_web::test;
use common::{bearer, init_app, TestContext};
use devfolio_commons::Post;
use devfolio_store::{PostStore, ProfileStore, UserStore};
use serde_json::{json, Value};

#[actix_web::test]
async fn delete_account_cascades_to_posts_profile_and_identity() {
    let ctx = TestContext::new();
    let app = init_app(&ctx).await;
    let (user_id, token) = ctx.seed_user("Alice").await;
    let (other_id, _) = ctx.seed_user("Bob").await;

    // Posts for both users, a profile for the caller.
    for text in ["first post", "second post"] {
        ctx.post_store
            .insert(Post::new(user_id.clone(), text, "Alice"))
            .await
            .unwrap();
    }
    ctx.post_store
        .insert(Post::new(other_id.clone(), "unrelated", "Bob"))
        .await
        .unwrap();

    let req = test::TestRequest::post()
        .uri("/api/profile")
        .insert_header(bearer(&token))
        .set_json(json!({ "status": "Developer", "skills": "Rust" }))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), 200);

    // Remove the account.
    let req = test::TestRequest::delete()
        .uri("/api/profile")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["msg"], "User deleted");

    // Everything owned by the caller is gone; the other user's post
    // survives.
    assert!(ctx
        .post_store
        .find_by_author(&user_id)
        .await
        .unwrap()
        .is_empty());
    assert!(ctx
        .profile_store
        .find_by_user(&user_id)
        .await
        .unwrap()
        .is_none());
    assert!(ctx.user_store.find_by_id(&user_id).await.unwrap().is_none());
    assert_eq!(ctx.post_store.find_by_author(&other_id).await.unwrap().len(), 1);

    // The public read now reports the profile as missing.
    let req = test::TestRequest::get()
        .uri(&format!("/api/profile/user/{}", user_id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["msg"], "Profile not found");
}

#[actix_web::test]
async fn delete_account_requires_auth() {
    let ctx = TestContext::new();
    let app = init_app(&ctx).await;

    let req = test::TestRequest::delete().uri("/api/profile").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 401);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["msg"], "No token, authorization denied");
}

#[actix_web::test]
async fn delete_account_without_profile_still_succeeds() {
    // The cascade's steps are independent; an account that never created
    // a profile can still be removed.
    let ctx = TestContext::new();
    let app = init_app(&ctx).await;
    let (user_id, token) = ctx.seed_user("Alice").await;

    let req = test::TestRequest::delete()
        .uri("/api/profile")
        .insert_header(bearer(&token))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), 200);
    assert!(ctx.user_store.find_by_id(&user_id).await.unwrap().is_none());
}
