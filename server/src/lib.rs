// Devfolio Server
//
// Server wiring: configuration, logging, middleware, and lifecycle.
// The actual HTTP surface lives in devfolio-api.

pub mod config;
pub mod lifecycle;
pub mod logging;
pub mod middleware;
