//! Authorization failure taxonomy
//!
//! Every failure the guard chain can raise, each carrying a
//! (status, error code, description) triple. The transport boundary renders
//! the triple into the uniform JSON error body; nothing here touches HTTP
//! response types beyond the status code.

use http::StatusCode;
use thiserror::Error;

/// Failures raised by the token extractor, verifier and scope authorizer.
///
/// All token-level failures (missing/malformed credentials, bad signature,
/// expired or mismatched claims) are 401-class: the caller's credentials are
/// bad. A missing permissions claim means the token itself is malformed for
/// this API (400). An unreachable key set is a server fault (500), never
/// blamed on the caller.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("authorization header is expected")]
    MissingHeader,

    #[error("authorization header must be of the form 'Bearer <token>'")]
    MalformedHeader,

    #[error("unable to parse token: {0}")]
    MalformedToken(String),

    #[error("token is signed by an unknown key")]
    UnknownSigningKey,

    #[error("token is expired")]
    TokenExpired,

    #[error("incorrect claims, check the audience and issuer: {0}")]
    InvalidClaims(String),

    #[error("token signature is invalid")]
    InvalidSignature,

    #[error("permissions claim not included in token")]
    MissingPermissionsClaim,

    #[error("permission '{0}' not granted")]
    InsufficientScope(String),

    #[error("signing key set unavailable: {0}")]
    KeySetUnavailable(String),
}

impl AuthError {
    /// HTTP status this failure maps to at the transport boundary.
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::MissingHeader
            | AuthError::MalformedHeader
            | AuthError::MalformedToken(_)
            | AuthError::UnknownSigningKey
            | AuthError::TokenExpired
            | AuthError::InvalidClaims(_)
            | AuthError::InvalidSignature => StatusCode::UNAUTHORIZED,
            AuthError::MissingPermissionsClaim => StatusCode::BAD_REQUEST,
            AuthError::InsufficientScope(_) => StatusCode::FORBIDDEN,
            AuthError::KeySetUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable code, used for security logging.
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::MissingHeader => "authorization_header_missing",
            AuthError::MalformedHeader => "invalid_header",
            AuthError::MalformedToken(_) => "invalid_token",
            AuthError::UnknownSigningKey => "unknown_signing_key",
            AuthError::TokenExpired => "token_expired",
            AuthError::InvalidClaims(_) => "invalid_claims",
            AuthError::InvalidSignature => "invalid_signature",
            AuthError::MissingPermissionsClaim => "permissions_claim_missing",
            AuthError::InsufficientScope(_) => "insufficient_scope",
            AuthError::KeySetUnavailable(_) => "key_set_unavailable",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(AuthError::MissingHeader.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AuthError::TokenExpired.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            AuthError::MissingPermissionsClaim.status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AuthError::InsufficientScope("post:drinks".into()).status(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            AuthError::KeySetUnavailable("timeout".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
