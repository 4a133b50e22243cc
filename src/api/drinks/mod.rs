//! Drinks API module

mod handler;

use axum::{
    Router, middleware,
    routing::{delete, get, patch, post},
};

use crate::auth::{require_scope, scopes};
use crate::core::ServerState;

/// Drinks routes. The gate state is bound per protected route so each one
/// carries exactly the scope it demands.
pub fn router(state: ServerState) -> Router<ServerState> {
    Router::new()
        .route("/drinks", get(handler::list_drinks))
        .route(
            "/drinks",
            post(handler::create_drink).layer(middleware::from_fn_with_state(
                state.clone(),
                require_scope(scopes::POST_DRINKS),
            )),
        )
        .route(
            "/drinks-detail",
            get(handler::list_drinks_detail).layer(middleware::from_fn_with_state(
                state.clone(),
                require_scope(scopes::GET_DRINKS_DETAIL),
            )),
        )
        .route(
            "/drinks/{id}",
            patch(handler::update_drink).layer(middleware::from_fn_with_state(
                state.clone(),
                require_scope(scopes::PATCH_DRINKS),
            )),
        )
        .route(
            "/drinks/{id}",
            delete(handler::delete_drink).layer(middleware::from_fn_with_state(
                state,
                require_scope(scopes::DELETE_DRINKS),
            )),
        )
}
