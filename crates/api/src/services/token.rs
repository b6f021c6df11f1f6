//! Bearer token issuer/verifier.
//!
//! Tokens are HS256 JWTs whose claims embed the user id as
//! `{"user": {"id": <i32>}}`, the shape cart clients already send back in
//! the `auth-token` header. Verification failures are deliberately uniform:
//! the caller learns only that the token was unusable, not whether it was
//! missing, malformed, tampered with, or expired.

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use shopper_core::UserId;

/// Errors from token operations.
#[derive(Debug, Error)]
pub enum TokenError {
    /// The token could not be verified, for any reason.
    #[error("invalid authentication token")]
    Invalid,
    /// A token could not be signed.
    #[error("failed to sign token")]
    Signing,
}

/// JWT claims carried by a bearer token.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    user: TokenUser,
    iat: i64,
    exp: i64,
}

/// The user payload inside the claims.
#[derive(Debug, Serialize, Deserialize)]
struct TokenUser {
    id: UserId,
}

/// Issues and verifies bearer tokens.
///
/// Keys are derived once from the configured secret; cloning is cheap enough
/// for the service to live inside the shared application state.
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenService {
    /// Create a token service from the signing secret and a TTL in days.
    #[must_use]
    pub fn new(secret: &SecretString, ttl_days: i64) -> Self {
        let secret_bytes = secret.expose_secret().as_bytes();
        Self {
            encoding: EncodingKey::from_secret(secret_bytes),
            decoding: DecodingKey::from_secret(secret_bytes),
            ttl: Duration::days(ttl_days),
        }
    }

    /// Issue a signed token for a user.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Signing` if encoding fails.
    pub fn issue(&self, user_id: UserId) -> Result<String, TokenError> {
        let now = Utc::now();
        let claims = Claims {
            user: TokenUser { id: user_id },
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };

        jsonwebtoken::encode(&Header::default(), &claims, &self.encoding)
            .map_err(|_| TokenError::Signing)
    }

    /// Verify a token and extract the user id it asserts.
    ///
    /// # Errors
    ///
    /// Returns `TokenError::Invalid` for every failure mode - bad signature,
    /// malformed token, wrong algorithm, expired.
    pub fn verify(&self, token: &str) -> Result<UserId, TokenError> {
        let validation = Validation::new(Algorithm::HS256);
        let data = jsonwebtoken::decode::<Claims>(token, &self.decoding, &validation)
            .map_err(|_| TokenError::Invalid)?;

        Ok(data.claims.user.id)
    }
}
