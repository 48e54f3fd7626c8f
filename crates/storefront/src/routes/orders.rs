//! Order route handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use suit_yourself_core::types::OrderId;

use crate::error::{AppError, Result};
use crate::models::order::{CreateOrderRequest, CreateOrderResponse, Order};
use crate::state::AppState;

/// `POST /api/orders/create`
///
/// Items may come directly from the request (browser-held cart); when they
/// are absent or empty, the server-side cart named by `cartId` is used as a
/// fallback. If that cart is also missing or empty, the request fails with
/// `EMPTY_CART` and nothing is persisted.
pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<CreateOrderRequest>,
) -> Result<Json<CreateOrderResponse>> {
    let items = match body.items {
        Some(items) if !items.is_empty() => items,
        _ => match body.cart_id {
            Some(cart_id) => state.carts().get(&cart_id).await.items,
            None => Vec::new(),
        },
    };

    let order = state
        .orders()
        .create(items, body.customer.unwrap_or_default())
        .await?;

    tracing::info!(order_id = %order.id, total = %order.total, "order created");

    Ok(Json(CreateOrderResponse {
        order_id: order.id,
        total: order.total,
    }))
}

/// `GET /api/orders/{orderId}`
pub async fn show(
    State(state): State<AppState>,
    Path(order_id): Path<OrderId>,
) -> Result<Json<Order>> {
    state
        .orders()
        .get(&order_id)
        .await
        .map(Json)
        .ok_or(AppError::NotFound("Order"))
}
