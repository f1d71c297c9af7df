//! JWT issuance and validation.

use chrono::{Duration, Utc};
use devfolio_commons::UserId;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::{AuthError, AuthResult};

/// Default issuer for Devfolio tokens.
pub const DEFAULT_ISSUER: &str = "devfolio";

/// Default token expiration in hours.
pub const DEFAULT_TOKEN_EXPIRY_HOURS: i64 = 24;

/// JWT claims carried by a Devfolio token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: String,
    /// Issuer
    pub iss: String,
    /// Issued at (Unix timestamp)
    pub iat: usize,
    /// Expiration time (Unix timestamp)
    pub exp: usize,
}

impl Claims {
    /// Create claims for a user with the given expiry horizon.
    pub fn new(user_id: &UserId, issuer: &str, expiry_hours: i64) -> Self {
        let now = Utc::now();
        let exp = now + Duration::hours(expiry_hours);
        Self {
            sub: user_id.to_string(),
            iss: issuer.to_string(),
            iat: now.timestamp().max(0) as usize,
            exp: exp.timestamp().max(0) as usize,
        }
    }
}

/// Issue a signed HS256 token for the given user.
pub fn issue_token(user_id: &UserId, secret: &str, expiry_hours: i64) -> AuthResult<String> {
    let claims = Claims::new(user_id, DEFAULT_ISSUER, expiry_hours);
    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AuthError::Internal(format!("failed to sign token: {}", e)))
}

/// Decode and validate a token, checking signature, expiry, and issuer.
pub fn decode_token(token: &str, secret: &str, issuer: &str) -> AuthResult<Claims> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[issuer]);

    match decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    ) {
        Ok(data) => Ok(data.claims),
        Err(e) => match e.kind() {
            ErrorKind::ExpiredSignature => Err(AuthError::Expired),
            _ => Err(AuthError::InvalidToken(e.to_string())),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret";

    #[test]
    fn issued_token_round_trips() {
        let user = UserId::new("usr_42");
        let token = issue_token(&user, SECRET, 1).unwrap();
        let claims = decode_token(&token, SECRET, DEFAULT_ISSUER).unwrap();
        assert_eq!(claims.sub, "usr_42");
        assert_eq!(claims.iss, DEFAULT_ISSUER);
    }

    #[test]
    fn rejects_wrong_secret() {
        let user = UserId::new("usr_42");
        let token = issue_token(&user, SECRET, 1).unwrap();
        let err = decode_token(&token, "other-secret", DEFAULT_ISSUER).unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken(_)));
    }

    #[test]
    fn rejects_expired_token() {
        let user = UserId::new("usr_42");
        let token = issue_token(&user, SECRET, -1).unwrap();
        let err = decode_token(&token, SECRET, DEFAULT_ISSUER).unwrap_err();
        assert_eq!(err, AuthError::Expired);
    }

    #[test]
    fn rejects_garbage_token() {
        let err = decode_token("not-a-token", SECRET, DEFAULT_ISSUER).unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken(_)));
    }

    #[test]
    fn rejects_wrong_issuer() {
        let user = UserId::new("usr_42");
        let token = issue_token(&user, SECRET, 1).unwrap();
        let err = decode_token(&token, SECRET, "someone-else").unwrap_err();
        assert!(matches!(err, AuthError::InvalidToken(_)));
    }
}
