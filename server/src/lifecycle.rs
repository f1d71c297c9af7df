//! Server lifecycle management helpers.
//!
//! This module encapsulates the heavy lifting otherwise handled in
//! `main.rs`: constructing the stores and collaborators, wiring the
//! HTTP server, and serving requests.

use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, App, HttpServer};
use anyhow::Result;
use devfolio_auth::{AuthGuard, JwtAuthGuard};
use devfolio_github::{GithubClient, RepoLookup};
use devfolio_store::{
    MemoryPostStore, MemoryProfileStore, MemoryUserStore, PostStore, ProfileStore, UserStore,
};
use log::info;

use crate::config::ServerConfig;
use crate::middleware;

/// Aggregated application components shared across the HTTP server.
///
/// Each collaborator is a trait object so the API layer stays agnostic
/// of the concrete store, guard, and lookup implementations.
pub struct ApplicationComponents {
    pub user_store: Arc<dyn UserStore>,
    pub profile_store: Arc<dyn ProfileStore>,
    pub post_store: Arc<dyn PostStore>,
    pub auth_guard: Arc<dyn AuthGuard>,
    pub repo_lookup: Arc<dyn RepoLookup>,
}

/// Construct the stores, auth guard, and GitHub client.
pub fn bootstrap(config: &ServerConfig) -> Result<ApplicationComponents> {
    let user_store: Arc<dyn UserStore> = Arc::new(MemoryUserStore::new());
    let profile_store: Arc<dyn ProfileStore> = Arc::new(MemoryProfileStore::new());
    let post_store: Arc<dyn PostStore> = Arc::new(MemoryPostStore::new());
    info!("in-memory document store initialized");

    let auth_guard: Arc<dyn AuthGuard> = Arc::new(JwtAuthGuard::new(
        config.auth.jwt_secret.clone(),
        config.auth.issuer.clone(),
    ));

    let github = GithubClient::builder()
        .base_url(config.github.api_base_url.clone())
        .user_agent(config.github.user_agent.clone())
        .timeout(Duration::from_secs(config.github.timeout_seconds))
        .token(config.github.token.clone())
        .build()?;
    let repo_lookup: Arc<dyn RepoLookup> = Arc::new(github);

    Ok(ApplicationComponents {
        user_store,
        profile_store,
        post_store,
        auth_guard,
        repo_lookup,
    })
}

/// Bind the HTTP server and serve until shutdown.
pub async fn run(config: ServerConfig, components: ApplicationComponents) -> Result<()> {
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let workers = config.server.workers;
    info!("devfolio API listening on {}", addr);

    let ApplicationComponents {
        user_store,
        profile_store,
        post_store,
        auth_guard,
        repo_lookup,
    } = components;

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::build_cors_from_config(&config))
            .wrap(middleware::request_logger())
            .app_data(web::Data::new(user_store.clone()))
            .app_data(web::Data::new(profile_store.clone()))
            .app_data(web::Data::new(post_store.clone()))
            .app_data(web::Data::new(auth_guard.clone()))
            .app_data(web::Data::new(repo_lookup.clone()))
            .configure(devfolio_api::routes::configure_routes)
    })
    .workers(workers)
    .bind(&addr)?
    .run()
    .await?;

    Ok(())
}
