//! Operator transaction route handlers.
//!
//! Auxiliary Payabli operations: detail lookup, reversal, and amount
//! re-verification. These never run on the checkout confirm path; they give
//! an operator a way to audit or unwind a processor transaction after the
//! fact. Processor failures surface as 502 `PROCESSOR_ERROR` and touch no
//! in-memory state.

use axum::{
    Json,
    extract::{Path, State},
};
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::Result;
use crate::payabli::VerificationReport;
use crate::state::AppState;

/// `POST /api/admin/transactions/{referenceId}/reverse` request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReverseRequest {
    /// Amount to reverse; omitted or zero means a full reversal/void.
    #[serde(default)]
    pub amount: Option<Decimal>,
}

/// `POST /api/admin/transactions/{referenceId}/verify` request body.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    pub expected_amount: Decimal,
    pub expected_fee: Decimal,
}

/// `GET /api/admin/transactions/{referenceId}`
#[tracing::instrument(skip(state))]
pub async fn details(
    State(state): State<AppState>,
    Path(reference_id): Path<String>,
) -> Result<Json<serde_json::Value>> {
    let details = state.payabli().transaction_details(&reference_id).await?;
    Ok(Json(details))
}

/// `POST /api/admin/transactions/{referenceId}/reverse`
#[tracing::instrument(skip(state, body))]
pub async fn reverse(
    State(state): State<AppState>,
    Path(reference_id): Path<String>,
    Json(body): Json<ReverseRequest>,
) -> Result<Json<serde_json::Value>> {
    let amount = body.amount.unwrap_or(Decimal::ZERO);
    let result = state
        .payabli()
        .reverse_transaction(&reference_id, amount)
        .await?;

    tracing::info!(%reference_id, %amount, "transaction reversal requested");
    Ok(Json(result))
}

/// `POST /api/admin/transactions/{referenceId}/verify`
#[tracing::instrument(skip(state, body))]
pub async fn verify(
    State(state): State<AppState>,
    Path(reference_id): Path<String>,
    Json(body): Json<VerifyRequest>,
) -> Result<Json<VerificationReport>> {
    let report = state
        .payabli()
        .verify_transaction(&reference_id, body.expected_amount, body.expected_fee)
        .await?;

    if !report.verified {
        tracing::warn!(%reference_id, ?report, "transaction verification mismatch");
    }
    Ok(Json(report))
}
