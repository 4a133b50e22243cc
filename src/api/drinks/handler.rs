//! Drinks API handlers
//!
//! Success bodies follow the documented shapes exactly:
//! `{"success": true, "drinks": [..]}` for lists,
//! `{"success": true, "drink": ..}` for single entries,
//! `{"success": true, "delete": id}` for deletions.
//!
//! An empty catalog responds 404 rather than an empty list; existing clients
//! depend on it.

use axum::{
    Extension, Json,
    extract::{Path, State},
    extract::rejection::JsonRejection,
};
use serde::Serialize;

use crate::auth::TokenPayload;
use crate::core::ServerState;
use crate::db::models::{Drink, DrinkCreate, DrinkSummary, DrinkUpdate};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Serialize)]
pub struct DrinksResponse<T> {
    pub success: bool,
    pub drinks: Vec<T>,
}

#[derive(Debug, Serialize)]
pub struct DrinkResponse {
    pub success: bool,
    pub drink: Drink,
}

#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
    pub delete: u64,
}

/// GET /drinks - public summary listing
pub async fn list_drinks(
    State(state): State<ServerState>,
) -> AppResult<Json<DrinksResponse<DrinkSummary>>> {
    let drinks = state.drinks.list()?;
    if drinks.is_empty() {
        return Err(AppError::NotFound);
    }

    Ok(Json(DrinksResponse {
        success: true,
        drinks: drinks.iter().map(Drink::summary).collect(),
    }))
}

/// GET /drinks-detail - full recipes, requires `get:drinks-detail`
pub async fn list_drinks_detail(
    State(state): State<ServerState>,
    Extension(payload): Extension<TokenPayload>,
) -> AppResult<Json<DrinksResponse<Drink>>> {
    tracing::debug!(
        subject = payload.sub.as_deref().unwrap_or(""),
        "Listing drink details"
    );

    let drinks = state.drinks.list()?;
    if drinks.is_empty() {
        return Err(AppError::NotFound);
    }

    Ok(Json(DrinksResponse {
        success: true,
        drinks,
    }))
}

/// POST /drinks - create a drink, requires `post:drinks`
pub async fn create_drink(
    State(state): State<ServerState>,
    Extension(payload): Extension<TokenPayload>,
    body: Result<Json<DrinkCreate>, JsonRejection>,
) -> AppResult<Json<DrinkResponse>> {
    let Json(body) = body.map_err(|e| AppError::Validation(e.to_string()))?;
    let title = body
        .title
        .ok_or_else(|| AppError::Validation("title is required".to_string()))?;
    let recipe = body
        .recipe
        .ok_or_else(|| AppError::Validation("recipe is required".to_string()))?;

    let drink = state.drinks.insert(title, recipe)?;
    tracing::info!(
        subject = payload.sub.as_deref().unwrap_or(""),
        id = drink.id,
        "Drink created"
    );

    Ok(Json(DrinkResponse {
        success: true,
        drink,
    }))
}

/// PATCH /drinks/{id} - update a drink, requires `patch:drinks`
pub async fn update_drink(
    State(state): State<ServerState>,
    Extension(payload): Extension<TokenPayload>,
    Path(id): Path<u64>,
    body: Result<Json<DrinkUpdate>, JsonRejection>,
) -> AppResult<Json<DrinkResponse>> {
    let Json(body) = body.map_err(|e| AppError::Validation(e.to_string()))?;
    let title = body
        .title
        .ok_or_else(|| AppError::Validation("title is required".to_string()))?;

    let drink = state
        .drinks
        .update(id, title, body.recipe)?
        .ok_or(AppError::NotFound)?;
    tracing::info!(
        subject = payload.sub.as_deref().unwrap_or(""),
        id = drink.id,
        "Drink updated"
    );

    Ok(Json(DrinkResponse {
        success: true,
        drink,
    }))
}

/// DELETE /drinks/{id} - remove a drink, requires `delete:drinks`
pub async fn delete_drink(
    State(state): State<ServerState>,
    Extension(payload): Extension<TokenPayload>,
    Path(id): Path<u64>,
) -> AppResult<Json<DeleteResponse>> {
    state.drinks.get(id)?.ok_or(AppError::NotFound)?;

    // The entry existed a moment ago; a failure now is a 422, not a 404
    let removed = state
        .drinks
        .delete(id)
        .map_err(|e| AppError::Unprocessable(e.to_string()))?;
    if !removed {
        return Err(AppError::NotFound);
    }

    tracing::info!(
        subject = payload.sub.as_deref().unwrap_or(""),
        id = id,
        "Drink deleted"
    );

    Ok(Json(DeleteResponse {
        success: true,
        delete: id,
    }))
}
