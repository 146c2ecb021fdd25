//! Issuing and verifying identity tokens.
//!
//! Tokens are HS256 JWTs whose payload is the full [`Identity`] plus `iat`
//! and, when `JWT_EXPIRES_IN` is configured, `exp`. Verification checks the
//! signature, the payload shape, and the expiry when one is configured.
//!
//! The keys are derived once from [`JwtConfig`] when the service is built;
//! the service is then shared read-only through application state.

use std::fmt;

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use tracing::{debug, instrument};

use rentcar_config::JwtConfig;
use rentcar_core::ApplicationError;

use crate::claims::{Claims, Identity};

#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expires_in: Option<u64>,
}

impl TokenService {
    pub fn new(config: &JwtConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            expires_in: config.expires_in,
        }
    }

    /// Signs `identity` into a bearer token.
    ///
    /// # Errors
    ///
    /// Returns an internal error if encoding fails.
    #[instrument(skip(self, identity), fields(user_id = identity.id))]
    pub fn issue(&self, identity: &Identity) -> Result<String, ApplicationError> {
        let now = Utc::now().timestamp();
        let exp = self
            .expires_in
            .map(|seconds| now.saturating_add(i64::try_from(seconds).unwrap_or(i64::MAX)));

        let claims = Claims {
            identity: identity.clone(),
            iat: Some(now),
            exp,
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| ApplicationError::internal(format!("Failed to create token: {}", e)))
    }

    /// Verifies `token` and returns the identity it carries.
    ///
    /// # Errors
    ///
    /// Returns [`ApplicationError::InvalidToken`] if the signature is invalid,
    /// the payload is malformed, the token is empty, or it has expired.
    #[instrument(skip(self, token))]
    pub fn verify(&self, token: &str) -> Result<Identity, ApplicationError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation())
            .map(|data| data.claims.identity)
            .map_err(|e| {
                debug!(error = %e, "Token verification failed");
                ApplicationError::InvalidToken
            })
    }

    fn validation(&self) -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims.clear();
        validation.validate_exp = self.expires_in.is_some();
        if self.expires_in.is_some() {
            validation.set_required_spec_claims(&["exp"]);
        }
        validation
    }
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("expires_in", &self.expires_in)
            .finish_non_exhaustive()
    }
}
