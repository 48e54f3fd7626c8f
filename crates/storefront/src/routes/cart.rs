//! Cart route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use suit_yourself_core::types::CartId;

use crate::error::{AppError, Result};
use crate::models::cart::{AddItemRequest, Cart, RemoveItemRequest, UpdateItemRequest};
use crate::state::AppState;

/// `GET /api/cart/{cartId}`
pub async fn show(State(state): State<AppState>, Path(cart_id): Path<CartId>) -> Json<Cart> {
    Json(state.carts().get(&cart_id).await)
}

/// `POST /api/cart/{cartId}/add`
pub async fn add(
    State(state): State<AppState>,
    Path(cart_id): Path<CartId>,
    Json(body): Json<AddItemRequest>,
) -> Result<Json<Cart>> {
    let product = state
        .catalog()
        .get(&body.product_id)
        .ok_or(AppError::NotFound("Product"))?;

    let cart = state
        .carts()
        .add_item(&cart_id, product, &body.size, body.quantity)
        .await;
    Ok(Json(cart))
}

/// `POST /api/cart/{cartId}/remove`
pub async fn remove(
    State(state): State<AppState>,
    Path(cart_id): Path<CartId>,
    Json(body): Json<RemoveItemRequest>,
) -> Result<Json<Cart>> {
    state
        .carts()
        .remove_item(&cart_id, &body.item_id)
        .await
        .map(Json)
        .ok_or(AppError::NotFound("Cart"))
}

/// `POST /api/cart/{cartId}/update`
pub async fn update(
    State(state): State<AppState>,
    Path(cart_id): Path<CartId>,
    Json(body): Json<UpdateItemRequest>,
) -> Result<Json<Cart>> {
    state
        .carts()
        .update_item(&cart_id, &body.item_id, body.quantity)
        .await
        .map(Json)
        .ok_or(AppError::NotFound("Cart"))
}
