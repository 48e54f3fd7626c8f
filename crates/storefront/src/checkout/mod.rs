//! Checkout session protocol.
//!
//! Mints signed, time-bounded verification tokens binding an order to its
//! charge amount, and validates them when the client posts a confirmation.
//! Sessions are stateless: nothing is stored at mint time, the HMAC-signed
//! tuple is the session. Replay-of-confirm protection therefore comes from
//! the order status transition, not from session bookkeeping.
//!
//! Per the POC trust model, confirmation does not re-query the processor;
//! the HMAC plus the presence of a processor `referenceId` are accepted as
//! ground truth. The server-side re-verification helper lives on
//! [`PayabliClient`](crate::payabli::PayabliClient) and is reachable through
//! the operator transaction routes instead.

pub mod signer;

use std::time::Duration;

use chrono::{TimeDelta, Utc};
use thiserror::Error;

use crate::config::CheckoutConfig;
use crate::models::checkout::{CheckoutVerification, SessionInfo};
use crate::models::order::Order;
use signer::CheckoutSigner;

/// Session validation failures, each with a matching security event kind at
/// the route layer.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("verification hash mismatch")]
    InvalidHash,
    #[error("session expired")]
    Expired,
}

/// A freshly minted session: the verification tuple plus its expiry.
#[derive(Debug)]
pub struct MintedSession {
    pub verification: CheckoutVerification,
    pub session: SessionInfo,
}

/// Mints and validates checkout sessions.
pub struct CheckoutSessions {
    signer: CheckoutSigner,
    max_age: Duration,
}

impl CheckoutSessions {
    #[must_use]
    pub fn new(config: &CheckoutConfig) -> Self {
        Self {
            signer: CheckoutSigner::new(config.hash_secret.clone()),
            max_age: config.session_max_age,
        }
    }

    fn max_age_ms(&self) -> i64 {
        i64::try_from(self.max_age.as_millis()).unwrap_or(i64::MAX)
    }

    /// Mint a session for a pending order.
    ///
    /// The hash is computed only from server-side order fields; client input
    /// never participates, so a client cannot obtain a valid tuple for an
    /// amount it was not actually quoted.
    #[must_use]
    pub fn mint(&self, order: &Order) -> MintedSession {
        let now = Utc::now();
        let timestamp = now.timestamp_millis();
        let hash = self
            .signer
            .sign(&order.id, order.total, order.service_fee, timestamp);

        MintedSession {
            verification: CheckoutVerification {
                order_id: order.id.clone(),
                expected_amount: order.total,
                expected_fee: order.service_fee,
                timestamp,
                hash,
            },
            session: SessionInfo {
                expires_at: now + TimeDelta::milliseconds(self.max_age_ms()),
                max_age_seconds: self.max_age.as_secs(),
            },
        }
    }

    /// Validate an echoed verification tuple: hash first, then expiry.
    ///
    /// # Errors
    ///
    /// `InvalidHash` when the recomputed HMAC does not match, `Expired` when
    /// the tuple is older than the max session age (the boundary itself is
    /// still accepted).
    pub fn verify(&self, verification: &CheckoutVerification) -> Result<(), SessionError> {
        self.verify_at(verification, Utc::now().timestamp_millis())
    }

    fn verify_at(
        &self,
        verification: &CheckoutVerification,
        now_ms: i64,
    ) -> Result<(), SessionError> {
        if !self.signer.verify(verification) {
            return Err(SessionError::InvalidHash);
        }

        if now_ms - verification.timestamp > self.max_age_ms() {
            return Err(SessionError::Expired);
        }

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use secrecy::SecretString;
    use suit_yourself_core::types::{OrderId, OrderStatus};

    fn sessions() -> CheckoutSessions {
        CheckoutSessions::new(&CheckoutConfig {
            hash_secret: SecretString::from("test-checkout-hash-secret-0123456789"),
            session_max_age: Duration::from_secs(30 * 60),
            amount_tolerance: Decimal::new(1, 2),
        })
    }

    fn order(total_cents: i64) -> Order {
        let total = Decimal::new(total_cents, 2);
        Order {
            id: OrderId::generate(),
            status: OrderStatus::PendingPayment,
            items: vec![],
            subtotal: total,
            service_fee: Decimal::ZERO,
            total,
            customer: crate::models::order::CustomerInfo::default(),
            created_at: Utc::now(),
            payment_reference_id: None,
            payment_method: None,
            paid_at: None,
        }
    }

    #[test]
    fn test_mint_binds_order_fields() {
        let sessions = sessions();
        let order = order(59900);
        let minted = sessions.mint(&order);

        assert_eq!(minted.verification.order_id, order.id);
        assert_eq!(minted.verification.expected_amount, Decimal::new(59900, 2));
        assert_eq!(minted.verification.expected_fee, Decimal::ZERO);
        assert_eq!(minted.session.max_age_seconds, 1800);
        assert_eq!(
            minted.session.expires_at.timestamp_millis(),
            minted.verification.timestamp + 30 * 60 * 1000
        );
    }

    #[test]
    fn test_fresh_session_verifies() {
        let sessions = sessions();
        let minted = sessions.mint(&order(59900));
        assert_eq!(sessions.verify(&minted.verification), Ok(()));
    }

    #[test]
    fn test_expiry_boundary_inclusive() {
        let sessions = sessions();
        let minted = sessions.mint(&order(59900));
        let max_age_ms = 30 * 60 * 1000;

        // Exactly max age old: accepted.
        let at_boundary = minted.verification.timestamp + max_age_ms;
        assert_eq!(sessions.verify_at(&minted.verification, at_boundary), Ok(()));

        // One millisecond past: rejected.
        let past_boundary = at_boundary + 1;
        assert_eq!(
            sessions.verify_at(&minted.verification, past_boundary),
            Err(SessionError::Expired)
        );
    }

    #[test]
    fn test_tampered_amount_fails_before_expiry_check() {
        let sessions = sessions();
        let mut verification = sessions.mint(&order(59900)).verification;
        verification.expected_amount = Decimal::new(599, 2);

        // Even a long-expired tamper reports the hash mismatch first.
        let far_future = verification.timestamp + 365 * 24 * 3600 * 1000;
        assert_eq!(
            sessions.verify_at(&verification, far_future),
            Err(SessionError::InvalidHash)
        );
    }
}
