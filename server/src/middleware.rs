//! Server-wide middleware configuration helpers.
//!
//! Keeps the Actix application setup focused by providing reusable
//! constructors for the CORS and request-logging layers.

use actix_cors::Cors;
use actix_web::middleware::Logger;
use log::debug;

use crate::config::ServerConfig;

/// Build CORS middleware from server configuration using actix-cors.
pub fn build_cors_from_config(config: &ServerConfig) -> Cors {
    let allowed = &config.security.cors.allowed_origins;

    let mut cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .max_age(3600);

    if allowed.is_empty() || allowed.contains(&"*".to_string()) {
        cors = cors.allow_any_origin();
        debug!("CORS: allowing any origin");
    } else {
        for origin in allowed {
            cors = cors.allowed_origin(origin);
        }
        debug!("CORS: allowed origins: {:?}", allowed);
    }

    cors
}

/// Request/response logging layer.
pub fn request_logger() -> Logger {
    Logger::default()
}
