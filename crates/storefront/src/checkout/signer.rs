//! HMAC signing of checkout verification tuples.
//!
//! The signed payload is `orderId:amount:fee:timestamp` with amounts in
//! their Decimal `Display` rendering (scale-preserving, so "599.00" stays
//! "599.00" through a serialize/deserialize round trip). The secret is
//! process-wide configuration and never leaves the process; the hex hash is
//! handed to the client and echoed back at confirmation.

use hmac::{Hmac, Mac};
use rust_decimal::Decimal;
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use suit_yourself_core::types::OrderId;

use crate::models::checkout::CheckoutVerification;

type HmacSha256 = Hmac<Sha256>;

/// Signs and verifies checkout verification tuples.
pub struct CheckoutSigner {
    secret: SecretString,
}

impl CheckoutSigner {
    #[must_use]
    pub const fn new(secret: SecretString) -> Self {
        Self { secret }
    }

    /// Compute the hex-encoded HMAC-SHA256 over the verification fields.
    #[must_use]
    pub fn sign(&self, order_id: &OrderId, amount: Decimal, fee: Decimal, timestamp: i64) -> String {
        let payload = format!("{order_id}:{amount}:{fee}:{timestamp}");
        let mut mac = HmacSha256::new_from_slice(self.secret.expose_secret().as_bytes())
            .expect("HMAC accepts keys of any length");
        mac.update(payload.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }

    /// Recompute the hash from the echoed tuple and compare in constant time.
    #[must_use]
    pub fn verify(&self, verification: &CheckoutVerification) -> bool {
        let expected = self.sign(
            &verification.order_id,
            verification.expected_amount,
            verification.expected_fee,
            verification.timestamp,
        );
        constant_time_compare(&expected, &verification.hash)
    }
}

/// Constant-time string comparison to prevent timing attacks.
fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result: u8 = 0;
    for (x, y) in a.bytes().zip(b.bytes()) {
        result |= x ^ y;
    }

    result == 0
}
