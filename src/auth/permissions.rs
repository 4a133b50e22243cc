//! Permission scopes
//!
//! One scope per protected operation, configured statically at route
//! registration.

use super::verify::TokenPayload;
use super::AuthError;

/// Scopes the API grants.
pub mod scopes {
    pub const GET_DRINKS_DETAIL: &str = "get:drinks-detail";
    pub const POST_DRINKS: &str = "post:drinks";
    pub const PATCH_DRINKS: &str = "patch:drinks";
    pub const DELETE_DRINKS: &str = "delete:drinks";
}

/// Check that a verified payload grants the required scope.
///
/// A token with no `permissions` claim at all is malformed for this API
/// ([`AuthError::MissingPermissionsClaim`], 400); a present claim lacking the
/// scope is an authorization failure ([`AuthError::InsufficientScope`], 403).
pub fn check_permissions(payload: &TokenPayload, required: &str) -> Result<(), AuthError> {
    let permissions = payload
        .permissions
        .as_ref()
        .ok_or(AuthError::MissingPermissionsClaim)?;

    if !permissions.iter().any(|p| p == required) {
        return Err(AuthError::InsufficientScope(required.to_string()));
    }

    Ok(())
}
