//! Lifecycle status enums.

use serde::{Deserialize, Serialize};

/// Order payment lifecycle.
///
/// The only defined transition is `PendingPayment` -> `Paid`, triggered by a
/// successful checkout confirmation. There is no transition back and no
/// cancellation state; processor-side reversals are an administrative action
/// that does not alter the order record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    PendingPayment,
    Paid,
}

impl OrderStatus {
    /// Whether the order is still awaiting payment.
    #[must_use]
    pub const fn is_pending(self) -> bool {
        matches!(self, Self::PendingPayment)
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PendingPayment => write!(f, "pending_payment"),
            Self::Paid => write!(f, "paid"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_snake_case() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::PendingPayment).unwrap(),
            "\"pending_payment\""
        );
        assert_eq!(serde_json::to_string(&OrderStatus::Paid).unwrap(), "\"paid\"");
    }

    #[test]
    fn test_is_pending() {
        assert!(OrderStatus::PendingPayment.is_pending());
        assert!(!OrderStatus::Paid.is_pending());
    }
}
