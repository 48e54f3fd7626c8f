//! HTTP route handlers for the storefront API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                                      - Health check
//!
//! # Products
//! GET  /api/products?category=                      - Product listing
//! GET  /api/products/{id}                           - Product detail
//! GET  /api/categories                              - Distinct categories
//!
//! # Cart
//! GET  /api/cart/{cartId}                           - Fetch cart (empty default)
//! POST /api/cart/{cartId}/add                       - Add item (merges duplicate product+size)
//! POST /api/cart/{cartId}/remove                    - Remove item
//! POST /api/cart/{cartId}/update                    - Set quantity (<=0 removes)
//!
//! # Orders
//! POST /api/orders/create                           - Create order from items or server cart
//! GET  /api/orders/{orderId}                        - Fetch order
//!
//! # Checkout (rate limited)
//! GET  /api/checkout/config/{orderId}               - Mint session + widget config
//! POST /api/checkout/confirm                        - Verify session, mark order paid
//!
//! # Security
//! GET  /api/security/events                         - Newest 50 security events
//!
//! # Operator transactions (auxiliary processor operations)
//! GET  /api/admin/transactions/{referenceId}        - Transaction details
//! POST /api/admin/transactions/{referenceId}/reverse - Reverse/void
//! POST /api/admin/transactions/{referenceId}/verify - Re-verify amounts
//! ```

pub mod cart;
pub mod checkout;
pub mod orders;
pub mod products;
pub mod security;
pub mod transactions;

use axum::{
    Json, Router,
    routing::{get, post},
};
use chrono::Utc;
use serde_json::json;

use crate::middleware::checkout_rate_limiter;
use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/{cartId}", get(cart::show))
        .route("/{cartId}/add", post(cart::add))
        .route("/{cartId}/remove", post(cart::remove))
        .route("/{cartId}/update", post(cart::update))
}

/// Create the order routes router.
pub fn order_routes() -> Router<AppState> {
    Router::new()
        .route("/create", post(orders::create))
        .route("/{orderId}", get(orders::show))
}

/// Create the checkout routes router (rate limited).
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/config/{orderId}", get(checkout::config))
        .route("/confirm", post(checkout::confirm))
        .layer(checkout_rate_limiter())
}

/// Create the operator transaction routes router.
pub fn transaction_routes() -> Router<AppState> {
    Router::new()
        .route("/{referenceId}", get(transactions::details))
        .route("/{referenceId}/reverse", post(transactions::reverse))
        .route("/{referenceId}/verify", post(transactions::verify))
}

/// Liveness health check endpoint.
async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "healthy", "timestamp": Utc::now() }))
}

/// Create all routes for the storefront.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/api/categories", get(products::categories))
        .nest("/api/products", product_routes())
        .nest("/api/cart", cart_routes())
        .nest("/api/orders", order_routes())
        .nest("/api/checkout", checkout_routes())
        .route("/api/security/events", get(security::events))
        .nest("/api/admin/transactions", transaction_routes())
}
