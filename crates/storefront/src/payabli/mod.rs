//! Payabli API client.
//!
//! Auxiliary processor operations: transaction detail lookups, reversals,
//! and amount re-verification. None of these are on the checkout confirm
//! path; they back the operator transaction routes. Failures here are
//! advisory only and can never corrupt in-memory order state.

use reqwest::header::{HeaderMap, HeaderValue};
use rust_decimal::Decimal;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

use crate::config::PayabliConfig;
use suit_yourself_core::types::amounts_match;

/// Outbound request timeout.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Errors that can occur when talking to the Payabli API.
#[derive(Debug, Error)]
pub enum PayabliError {
    /// HTTP request failed (connect error, timeout, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status.
    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    /// Failed to interpret a response body.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Payabli REST client.
#[derive(Debug, Clone)]
pub struct PayabliClient {
    client: reqwest::Client,
    base_url: String,
    amount_tolerance: Decimal,
}

impl PayabliClient {
    /// Create a new client authenticated with the server-side API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the API key is not a valid header value or the
    /// HTTP client fails to build.
    pub fn new(config: &PayabliConfig, amount_tolerance: Decimal) -> Result<Self, PayabliError> {
        let mut headers = HeaderMap::new();

        let mut token = HeaderValue::from_str(config.api_key.expose_secret())
            .map_err(|e| PayabliError::Parse(format!("Invalid API key format: {e}")))?;
        token.set_sensitive(true);
        headers.insert("requestToken", token);
        headers.insert("Content-Type", HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: config.environment.api_base_url().to_string(),
            amount_tolerance,
        })
    }

    async fn get_json(&self, path: &str) -> Result<serde_json::Value, PayabliError> {
        let url = format!("{}{path}", self.base_url);
        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(PayabliError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json()
            .await
            .map_err(|e| PayabliError::Parse(e.to_string()))
    }

    /// Fetch the raw transaction detail record for a processor reference.
    ///
    /// # Errors
    ///
    /// Returns an error on timeout, non-2xx status, or an unreadable body.
    pub async fn transaction_details(
        &self,
        reference_id: &str,
    ) -> Result<serde_json::Value, PayabliError> {
        self.get_json(&format!("/api/MoneyIn/details/{reference_id}"))
            .await
    }

    /// Reverse a transaction. An amount of zero requests a full
    /// reversal/void.
    ///
    /// # Errors
    ///
    /// Returns an error on timeout, non-2xx status, or an unreadable body.
    pub async fn reverse_transaction(
        &self,
        reference_id: &str,
        amount: Decimal,
    ) -> Result<serde_json::Value, PayabliError> {
        self.get_json(&format!("/api/MoneyIn/reverse/{reference_id}/{amount}"))
            .await
    }

    /// Fetch a transaction and compare its actual amounts against
    /// expectations within the configured tolerance.
    ///
    /// # Errors
    ///
    /// Returns an error when the detail lookup fails; a transaction that the
    /// processor cannot find is reported as `verified: false`, not an error.
    pub async fn verify_transaction(
        &self,
        reference_id: &str,
        expected_amount: Decimal,
        expected_fee: Decimal,
    ) -> Result<VerificationReport, PayabliError> {
        let raw = self.transaction_details(reference_id).await?;
        let details: TransactionDetails =
            serde_json::from_value(raw).map_err(|e| PayabliError::Parse(e.to_string()))?;

        if !details.is_success {
            return Ok(VerificationReport::not_found());
        }

        let (actual_amount, actual_fee) = details
            .response_data
            .as_ref()
            .map_or((Decimal::ZERO, Decimal::ZERO), TransactionData::amounts);

        Ok(evaluate(
            expected_amount,
            expected_fee,
            actual_amount,
            actual_fee,
            self.amount_tolerance,
        ))
    }
}

/// Pure comparison step of transaction verification.
#[must_use]
pub fn evaluate(
    expected_amount: Decimal,
    expected_fee: Decimal,
    actual_amount: Decimal,
    actual_fee: Decimal,
    tolerance: Decimal,
) -> VerificationReport {
    let amount_match = amounts_match(actual_amount, expected_amount, tolerance);
    let fee_match = amounts_match(actual_fee, expected_fee, tolerance);

    VerificationReport {
        verified: amount_match && fee_match,
        reason: None,
        expected: Some(AmountPair {
            amount: expected_amount,
            fee: expected_fee,
        }),
        actual: Some(AmountPair {
            amount: actual_amount,
            fee: actual_fee,
        }),
        amount_match,
        fee_match,
    }
}

/// Outcome of re-verifying a transaction against the processor.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationReport {
    pub verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected: Option<AmountPair>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<AmountPair>,
    pub amount_match: bool,
    pub fee_match: bool,
}

impl VerificationReport {
    fn not_found() -> Self {
        Self {
            verified: false,
            reason: Some("Transaction not found".to_string()),
            expected: None,
            actual: None,
            amount_match: false,
            fee_match: false,
        }
    }
}

/// An amount/fee pair in a verification report.
#[derive(Debug, Serialize)]
pub struct AmountPair {
    pub amount: Decimal,
    pub fee: Decimal,
}

// Payabli's transaction detail payload mixes PascalCase and camelCase;
// the field renames below follow the wire format exactly.

#[derive(Debug, Deserialize)]
struct TransactionDetails {
    #[serde(rename = "isSuccess", default)]
    is_success: bool,
    #[serde(rename = "responseData")]
    response_data: Option<TransactionData>,
}

#[derive(Debug, Deserialize)]
struct TransactionData {
    #[serde(rename = "PaymentData")]
    payment_data: Option<PaymentData>,
    #[serde(rename = "TotalAmount")]
    total_amount: Option<Decimal>,
    #[serde(rename = "FeeAmount")]
    fee_amount: Option<Decimal>,
}

impl TransactionData {
    /// Actual amount and fee, preferring the nested payment details with
    /// top-level fallbacks.
    fn amounts(&self) -> (Decimal, Decimal) {
        let nested = self
            .payment_data
            .as_ref()
            .and_then(|p| p.payment_details.as_ref());

        let amount = nested
            .and_then(|d| d.total_amount)
            .or(self.total_amount)
            .unwrap_or(Decimal::ZERO);
        let fee = nested
            .and_then(|d| d.service_fee)
            .or(self.fee_amount)
            .unwrap_or(Decimal::ZERO);

        (amount, fee)
    }
}

#[derive(Debug, Deserialize)]
struct PaymentData {
    #[serde(rename = "paymentDetails")]
    payment_details: Option<PaymentDetails>,
}

#[derive(Debug, Deserialize)]
struct PaymentDetails {
    #[serde(rename = "totalAmount")]
    total_amount: Option<Decimal>,
    #[serde(rename = "serviceFee")]
    service_fee: Option<Decimal>,
}
