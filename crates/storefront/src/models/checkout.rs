//! Checkout session wire models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use suit_yourself_core::types::OrderId;

use crate::models::cart::CartItem;
use crate::models::order::Order;
use crate::models::payabli::PayabliWidgetConfig;

/// The tamper-evident checkout session token.
///
/// Minted server-side from server-held order fields, handed to the client,
/// and echoed back verbatim at confirmation. The `hash` is an HMAC-SHA256
/// over `orderId:amount:fee:timestamp`; the tuple is never persisted, the
/// hash is the session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutVerification {
    pub order_id: OrderId,
    pub expected_amount: Decimal,
    pub expected_fee: Decimal,
    /// Mint time, millisecond epoch.
    pub timestamp: i64,
    /// Hex-encoded HMAC-SHA256.
    pub hash: String,
}

/// Session expiry information shown to the client.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub expires_at: DateTime<Utc>,
    pub max_age_seconds: u64,
}

/// Order summary embedded in the checkout config response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderSummary {
    pub id: OrderId,
    pub items: Vec<CartItem>,
    pub subtotal: Decimal,
    pub service_fee: Decimal,
    pub total: Decimal,
}

impl From<&Order> for OrderSummary {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.clone(),
            items: order.items.clone(),
            subtotal: order.subtotal,
            service_fee: order.service_fee,
            total: order.total,
        }
    }
}

/// `GET /api/checkout/config/{orderId}` response body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutConfigResponse {
    pub payabli_config: PayabliWidgetConfig,
    pub component_url: String,
    pub order: OrderSummary,
    pub verification: CheckoutVerification,
    pub session: SessionInfo,
}

/// `POST /api/checkout/confirm` request body.
///
/// Fields are optional so that presence can be validated explicitly; a
/// missing `orderId`, `referenceId`, or `verification` is a protocol error
/// (`MISSING_FIELDS`), not a deserialization failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmRequest {
    #[serde(default)]
    pub order_id: Option<OrderId>,
    #[serde(default)]
    pub reference_id: Option<String>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub verification: Option<CheckoutVerification>,
}

/// `POST /api/checkout/confirm` response body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmResponse {
    pub success: bool,
    pub order_id: OrderId,
    pub reference_id: String,
}
