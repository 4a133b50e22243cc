//! Authorization gate
//!
//! Composes extractor, verifier and scope authorizer into one per-route
//! guard. Either the full chain passes and the handler runs with the decoded
//! payload in its request extensions, or the handler never runs.

use std::future::Future;
use std::pin::Pin;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::AppError;
use crate::auth::{check_permissions, extract_bearer_token};
use crate::core::ServerState;
use crate::security_log;

/// Guard factory for a protected route.
///
/// Returns a middleware closure bound to `scope`; attach it with
/// `axum::middleware::from_fn_with_state`:
///
/// ```ignore
/// Router::new().route(
///     "/drinks",
///     post(handler::create_drink)
///         .layer(middleware::from_fn_with_state(state, require_scope(scopes::POST_DRINKS))),
/// )
/// ```
///
/// On success the verified [`TokenPayload`](crate::TokenPayload) is inserted
/// into the request extensions for the handler. Failures propagate unchanged
/// from the stage that raised them: 401 for credential problems, 400 for a
/// token with no permissions claim, 403 for a missing scope, 500 when the
/// key set cannot be fetched.
pub fn require_scope(
    scope: &'static str,
) -> impl Fn(
    State<ServerState>,
    Request,
    Next,
) -> Pin<Box<dyn Future<Output = Result<Response, AppError>> + Send>>
+ Clone {
    move |State(state): State<ServerState>, mut req: Request, next: Next| {
        Box::pin(async move {
            let header = req
                .headers()
                .get(http::header::AUTHORIZATION)
                .and_then(|h| h.to_str().ok());

            let token = match extract_bearer_token(header) {
                Ok(token) => token.to_owned(),
                Err(e) => {
                    security_log!(
                        "WARN",
                        "auth_missing",
                        code = e.code(),
                        uri = format!("{}", req.uri())
                    );
                    return Err(e.into());
                }
            };

            let payload = match state.verifier().verify(&token).await {
                Ok(payload) => payload,
                Err(e) => {
                    security_log!(
                        "WARN",
                        "auth_failed",
                        code = e.code(),
                        error = format!("{}", e),
                        uri = format!("{}", req.uri())
                    );
                    return Err(e.into());
                }
            };

            if let Err(e) = check_permissions(&payload, scope) {
                security_log!(
                    "WARN",
                    "permission_denied",
                    code = e.code(),
                    subject = payload.sub.clone().unwrap_or_default(),
                    required_scope = scope
                );
                return Err(e.into());
            }

            req.extensions_mut().insert(payload);
            Ok(next.run(req).await)
        })
    }
}
