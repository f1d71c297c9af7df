//! Request authentication guard.
//!
//! The guard is the pluggable collaborator protected handlers call
//! before touching any store: it inspects the incoming request and
//! yields the caller's identity or a rejection.

use actix_web::HttpRequest;
use async_trait::async_trait;
use devfolio_commons::UserId;
use log::debug;

use crate::error::{AuthError, AuthResult};
use crate::jwt::decode_token;

/// The caller identity attached to an authenticated request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

impl AuthenticatedUser {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}

/// Authenticates a request and yields the caller's identity.
#[async_trait(?Send)]
pub trait AuthGuard: Send + Sync {
    /// Verify the request's credentials.
    async fn verify(&self, req: &HttpRequest) -> AuthResult<AuthenticatedUser>;
}

/// JWT bearer-token guard.
///
/// Reads `Authorization: Bearer <token>`, validates the signature,
/// expiry, and issuer, and resolves the subject claim to a [`UserId`].
pub struct JwtAuthGuard {
    secret: String,
    issuer: String,
}

impl JwtAuthGuard {
    pub fn new(secret: impl Into<String>, issuer: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            issuer: issuer.into(),
        }
    }
}

#[async_trait(?Send)]
impl AuthGuard for JwtAuthGuard {
    async fn verify(&self, req: &HttpRequest) -> AuthResult<AuthenticatedUser> {
        let auth_header = req
            .headers()
            .get("Authorization")
            .ok_or_else(|| {
                AuthError::MissingAuthorization(
                    "Authorization header is required. Use 'Authorization: Bearer <token>'"
                        .to_string(),
                )
            })?
            .to_str()
            .map_err(|_| {
                AuthError::MalformedAuthorization(
                    "Authorization header contains invalid characters".to_string(),
                )
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AuthError::MalformedAuthorization(
                "Authorization header must start with 'Bearer '".to_string(),
            )
        })?;
        if token.trim().is_empty() {
            return Err(AuthError::MalformedAuthorization(
                "Bearer token missing".to_string(),
            ));
        }

        let claims = decode_token(token.trim(), &self.secret, &self.issuer)?;
        let user_id = UserId::try_new(claims.sub)
            .map_err(|e| AuthError::InvalidToken(format!("invalid subject claim: {}", e)))?;

        debug!("authenticated request for user {}", user_id);
        Ok(AuthenticatedUser::new(user_id))
    }
}
