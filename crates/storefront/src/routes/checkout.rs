//! Checkout route handlers: session mint and confirmation.
//!
//! Every security-relevant rejection is appended to the security event log
//! before the error response is produced, so the audit trail survives even
//! though the HTTP response itself is terse.

use axum::{
    Json,
    extract::{Path, State},
};
use serde_json::json;
use suit_yourself_core::types::OrderId;

use crate::checkout::SessionError;
use crate::error::{AppError, Result};
use crate::models::checkout::{CheckoutConfigResponse, ConfirmRequest, ConfirmResponse};
use crate::models::payabli::PayabliWidgetConfig;
use crate::security::SecurityEventKind;
use crate::state::AppState;
use crate::store::OrderStoreError;

/// `GET /api/checkout/config/{orderId}`
///
/// Mints a fresh verification tuple for a pending order and returns it with
/// the Payabli widget configuration. A new tuple is minted on every call;
/// only the newest one needs to stay valid since the client echoes the one
/// it was last handed.
#[tracing::instrument(skip(state))]
pub async fn config(
    State(state): State<AppState>,
    Path(order_id): Path<OrderId>,
) -> Result<Json<CheckoutConfigResponse>> {
    let Some(order) = state.orders().get(&order_id).await else {
        state
            .security()
            .record(
                SecurityEventKind::CheckoutOrderNotFound,
                json!({ "orderId": order_id }),
            )
            .await;
        return Err(AppError::NotFound("Order"));
    };

    if !order.status.is_pending() {
        return Err(AppError::InvalidState);
    }

    let minted = state.sessions().mint(&order);

    state
        .security()
        .record(
            SecurityEventKind::CheckoutSessionCreated,
            json!({
                "orderId": order.id,
                "amount": order.total,
                "timestamp": minted.verification.timestamp,
            }),
        )
        .await;

    Ok(Json(CheckoutConfigResponse {
        payabli_config: PayabliWidgetConfig::for_order(&state.config().payabli, &order),
        component_url: state
            .config()
            .payabli
            .environment
            .component_url()
            .to_string(),
        order: (&order).into(),
        verification: minted.verification,
        session: minted.session,
    }))
}

/// `POST /api/checkout/confirm`
///
/// Validates the echoed verification tuple (presence, hash, expiry) and
/// atomically transitions the order to `paid`. Per the POC trust model the
/// processor is not re-queried here; the HMAC plus the presence of a
/// `referenceId` are accepted as-is.
#[tracing::instrument(skip(state, body))]
pub async fn confirm(
    State(state): State<AppState>,
    Json(body): Json<ConfirmRequest>,
) -> Result<Json<ConfirmResponse>> {
    let (Some(order_id), Some(reference_id), Some(verification)) =
        (body.order_id, body.reference_id, body.verification)
    else {
        state
            .security()
            .record(SecurityEventKind::CheckoutMissingFields, json!({}))
            .await;
        return Err(AppError::MissingFields);
    };

    if let Err(err) = state.sessions().verify(&verification) {
        return match err {
            SessionError::InvalidHash => {
                state
                    .security()
                    .record(
                        SecurityEventKind::CheckoutHashMismatch,
                        json!({
                            "orderId": order_id,
                            "referenceId": reference_id,
                            "verification": verification,
                        }),
                    )
                    .await;
                Err(AppError::InvalidHash)
            }
            SessionError::Expired => {
                state
                    .security()
                    .record(
                        SecurityEventKind::CheckoutSessionExpired,
                        json!({ "orderId": order_id, "referenceId": reference_id }),
                    )
                    .await;
                Err(AppError::SessionExpired)
            }
        };
    }

    // State check and transition are one atomic read-modify-write; a replay
    // of a valid token lands here and observes a non-pending order.
    let order = match state
        .orders()
        .confirm_payment(&order_id, &reference_id, body.payment_method)
        .await
    {
        Ok(order) => order,
        Err(OrderStoreError::NotFound | OrderStoreError::InvalidState) => {
            state
                .security()
                .record(
                    SecurityEventKind::CheckoutInvalidOrder,
                    json!({ "orderId": order_id, "referenceId": reference_id }),
                )
                .await;
            return Err(AppError::InvalidOrder);
        }
        Err(err) => return Err(err.into()),
    };

    state
        .security()
        .record(
            SecurityEventKind::CheckoutConfirmed,
            json!({
                "orderId": order.id,
                "referenceId": reference_id,
                "amount": order.total,
            }),
        )
        .await;

    Ok(Json(ConfirmResponse {
        success: true,
        order_id: order.id,
        reference_id,
    }))
}
