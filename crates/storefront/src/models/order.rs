//! Order models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use suit_yourself_core::types::{CartId, OrderId, OrderStatus};

use crate::models::cart::CartItem;

/// Optional customer details captured at order creation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// An order record.
///
/// Items and subtotal are a snapshot taken at creation: later mutations of
/// the live cart do not affect the order, and `total` is never recomputed
/// after creation. The checkout session hash is derived from `total` and
/// `service_fee`, so those fields are the quantities the protocol protects.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub status: OrderStatus,
    pub items: Vec<CartItem>,
    pub subtotal: Decimal,
    pub service_fee: Decimal,
    pub total: Decimal,
    pub customer: CustomerInfo,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_reference_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_at: Option<DateTime<Utc>>,
}

/// `POST /api/orders/create` request body.
///
/// Items may come directly from the client (browser-held cart) or, when
/// absent, fall back to the server-side cart identified by `cartId`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub cart_id: Option<CartId>,
    #[serde(default)]
    pub items: Option<Vec<CartItem>>,
    #[serde(default)]
    pub customer: Option<CustomerInfo>,
}

/// `POST /api/orders/create` response body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponse {
    pub order_id: OrderId,
    pub total: Decimal,
}
