//! Token verification
//!
//! Validates a bearer token against the current signing key set: resolve the
//! token's `kid` to a public key, verify the RS256 signature, and validate
//! the audience, issuer and expiry claims.

use std::sync::Arc;

use chrono::Utc;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode, decode_header};
use serde::{Deserialize, Serialize};

use super::jwks::{Jwk, KeySetProvider};
use super::AuthError;

/// Decoded claim set of a verified token.
///
/// Produced only by [`TokenVerifier::verify`]; immutable afterwards. Claims
/// beyond the typed ones are preserved in `extra` so the payload a handler
/// receives equals the claim set that was signed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPayload {
    pub iss: String,
    /// Audience - a single string or an array of strings.
    pub aud: serde_json::Value,
    pub exp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,
    /// Permission scopes. `None` when the claim is absent entirely, which
    /// the scope authorizer treats as a malformed token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<Vec<String>>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl TokenPayload {
    /// Seconds until the token expires (0 if already expired).
    pub fn seconds_until_expiry(&self) -> i64 {
        (self.exp - Utc::now().timestamp()).max(0)
    }
}

/// Verifies bearer tokens against a remote signing key set.
pub struct TokenVerifier {
    provider: Arc<dyn KeySetProvider>,
    algorithm: Algorithm,
    audience: String,
    issuer: String,
}

impl TokenVerifier {
    pub fn new(
        provider: Arc<dyn KeySetProvider>,
        algorithm: Algorithm,
        audience: impl Into<String>,
        issuer: impl Into<String>,
    ) -> Self {
        Self {
            provider,
            algorithm,
            audience: audience.into(),
            issuer: issuer.into(),
        }
    }

    /// Verify a token and return its decoded claim set.
    ///
    /// # Errors
    ///
    /// - [`AuthError::MalformedToken`] - not a JWT, or the header has no `kid`
    /// - [`AuthError::UnknownSigningKey`] - `kid` not in the key set, even
    ///   after a forced refresh
    /// - [`AuthError::TokenExpired`] - `exp` has passed
    /// - [`AuthError::InvalidClaims`] - audience/issuer mismatch or missing
    ///   required claims
    /// - [`AuthError::InvalidSignature`] - signature does not verify
    /// - [`AuthError::KeySetUnavailable`] - key set could not be fetched
    pub async fn verify(&self, token: &str) -> Result<TokenPayload, AuthError> {
        let header =
            decode_header(token).map_err(|e| AuthError::MalformedToken(e.to_string()))?;
        let kid = header
            .kid
            .ok_or_else(|| AuthError::MalformedToken("token header has no kid".to_string()))?;

        let jwk = self.resolve_key(&kid).await?;
        let key = DecodingKey::from_rsa_components(&jwk.n, &jwk.e)
            .map_err(|e| AuthError::KeySetUnavailable(format!("invalid key material: {}", e)))?;

        let mut validation = Validation::new(self.algorithm);
        validation.set_audience(&[&self.audience]);
        validation.set_issuer(&[&self.issuer]);
        validation.set_required_spec_claims(&["exp", "aud", "iss"]);

        let token_data =
            decode::<TokenPayload>(token, &key, &validation).map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                ErrorKind::InvalidSignature | ErrorKind::InvalidAlgorithm => {
                    AuthError::InvalidSignature
                }
                ErrorKind::InvalidAudience
                | ErrorKind::InvalidIssuer
                | ErrorKind::ImmatureSignature
                | ErrorKind::MissingRequiredClaim(_) => AuthError::InvalidClaims(e.to_string()),
                _ => AuthError::MalformedToken(e.to_string()),
            })?;

        Ok(token_data.claims)
    }

    /// Resolve a `kid` against the key set, forcing one refresh on a miss so
    /// freshly rotated keys are picked up.
    async fn resolve_key(&self, kid: &str) -> Result<Jwk, AuthError> {
        let keys = self.provider.key_set(false).await?;
        if let Some(jwk) = keys.find(kid) {
            return Ok(jwk.clone());
        }

        let keys = self.provider.key_set(true).await?;
        keys.find(kid)
            .cloned()
            .ok_or(AuthError::UnknownSigningKey)
    }
}
