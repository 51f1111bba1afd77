/**
 * Token Issuance and Verification
 *
 * Bearer tokens are HS256-signed JWTs. The signing secret is process-wide
 * configuration loaded once at startup (see `server::config`); rotating it
 * invalidates every outstanding token, which is acceptable given the short
 * TTL. There is no refresh or revocation: a token is valid until it expires.
 *
 * Verification treats every failure mode the same way - bad signature,
 * malformed encoding, expired token - and never yields partial claims.
 */

use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;

/// Identity claims carried inside a bearer token
///
/// Ephemeral: these exist only inside a signed token and are never persisted.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Credential record id
    pub sub: String,
    /// Email at issuance time
    pub email: String,
    /// Issued-at (Unix timestamp)
    pub iat: i64,
    /// Expiry (Unix timestamp)
    pub exp: i64,
}

/// Process-wide token signing/verification keys
///
/// Built once from the configured secret; shared across requests via
/// `AppState`.
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: i64,
}

impl TokenKeys {
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs,
        }
    }

    /// Issue a signed token for an identity
    pub fn issue(&self, user_id: Uuid, email: &str) -> Result<String, ApiError> {
        let iat = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_owned(),
            iat,
            exp: iat + self.ttl_secs,
        };

        Ok(encode(&Header::default(), &claims, &self.encoding)?)
    }

    /// Verify a token's signature and expiry and decode its claims
    ///
    /// Any tampering, malformed encoding, or expiry yields `Unauthenticated`;
    /// garbage claims are never returned.
    pub fn verify(&self, token: &str) -> Result<Claims, ApiError> {
        // No leeway: a token is invalid the instant it expires.
        let mut validation = Validation::default();
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|err| {
                tracing::warn!("token verification failed: {err}");
                ApiError::Unauthenticated
            })
    }
}
