//! Bearer token extraction
//!
//! Parses the `Authorization` header into the raw token string. No side
//! effects, no verification.

use super::AuthError;

/// Extract the bearer token from an `Authorization` header value.
///
/// The header must consist of exactly two space-separated parts and the
/// scheme must be `bearer` (case-insensitive). The second part is returned
/// verbatim.
///
/// # Errors
///
/// - [`AuthError::MissingHeader`] when the header is absent
/// - [`AuthError::MalformedHeader`] when the shape or scheme is wrong
pub fn extract_bearer_token(header: Option<&str>) -> Result<&str, AuthError> {
    let header = header.ok_or(AuthError::MissingHeader)?;

    let mut parts = header.split(' ');
    let scheme = parts.next().ok_or(AuthError::MalformedHeader)?;
    let token = parts.next().ok_or(AuthError::MalformedHeader)?;

    if parts.next().is_some() || !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() {
        return Err(AuthError::MalformedHeader);
    }

    Ok(token)
}
