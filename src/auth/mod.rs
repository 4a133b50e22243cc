//! Bearer-token authorization
//!
//! The guard chain for protected routes:
//! - [`extract_bearer_token`] - pull the token out of the Authorization header
//! - [`TokenVerifier`] - verify signature and claims against the key set
//! - [`check_permissions`] - enforce the required scope
//! - [`require_scope`] - the composed per-route gate

pub mod error;
pub mod extractor;
pub mod jwks;
pub mod middleware;
pub mod permissions;
pub mod verify;

pub use error::AuthError;
pub use extractor::extract_bearer_token;
pub use jwks::{CachedKeySetProvider, HttpKeySetProvider, Jwk, KeySet, KeySetProvider,
    StaticKeySetProvider};
pub use middleware::require_scope;
pub use permissions::{check_permissions, scopes};
pub use verify::{TokenPayload, TokenVerifier};
