//! Security event log.
//!
//! Append-only, process-wide record of checkout-protocol events. The full
//! history is retained in memory for the life of the process; the external
//! reader exposes only the newest 50 entries, oldest first. Every append is
//! mirrored to `tracing` so rejections show up in operational logs and (via
//! the Sentry layer) in error tracking.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

/// How many events the read accessor exposes.
const READ_WINDOW: usize = 50;

/// Protocol event kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SecurityEventKind {
    CheckoutSessionCreated,
    CheckoutHashMismatch,
    CheckoutSessionExpired,
    CheckoutConfirmed,
    CheckoutOrderNotFound,
    CheckoutMissingFields,
    CheckoutInvalidOrder,
}

impl SecurityEventKind {
    /// Whether this kind records a rejection rather than normal progress.
    #[must_use]
    pub const fn is_rejection(self) -> bool {
        matches!(
            self,
            Self::CheckoutHashMismatch
                | Self::CheckoutSessionExpired
                | Self::CheckoutOrderNotFound
                | Self::CheckoutMissingFields
                | Self::CheckoutInvalidOrder
        )
    }
}

/// One audit log entry.
#[derive(Debug, Clone, Serialize)]
pub struct SecurityEvent {
    #[serde(rename = "type")]
    pub kind: SecurityEventKind,
    pub details: serde_json::Value,
    pub timestamp: DateTime<Utc>,
}

/// Process-wide append-only event log.
#[derive(Debug, Default)]
pub struct SecurityLog {
    events: RwLock<Vec<SecurityEvent>>,
}

impl SecurityLog {
    /// Append an event.
    ///
    /// Rejections log at WARN, normal protocol progress at INFO.
    pub async fn record(&self, kind: SecurityEventKind, details: serde_json::Value) {
        let event = SecurityEvent {
            kind,
            details,
            timestamp: Utc::now(),
        };

        if kind.is_rejection() {
            tracing::warn!(kind = ?event.kind, details = %event.details, "security event");
        } else {
            tracing::info!(kind = ?event.kind, details = %event.details, "security event");
        }

        self.events.write().await.push(event);
    }

    /// The newest 50 events in chronological order.
    pub async fn recent(&self) -> Vec<SecurityEvent> {
        let events = self.events.read().await;
        let start = events.len().saturating_sub(READ_WINDOW);
        events.get(start..).unwrap_or_default().to_vec()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn test_recent_returns_all_when_under_window() {
        let log = SecurityLog::default();
        log.record(SecurityEventKind::CheckoutSessionCreated, json!({"orderId": "ORD-1"}))
            .await;
        log.record(SecurityEventKind::CheckoutConfirmed, json!({"orderId": "ORD-1"}))
            .await;

        let recent = log.recent().await;
        assert_eq!(recent.len(), 2);
        assert_eq!(recent.first().unwrap().kind, SecurityEventKind::CheckoutSessionCreated);
    }

    #[tokio::test]
    async fn test_recent_caps_at_window_keeping_newest() {
        let log = SecurityLog::default();
        for i in 0..60 {
            log.record(SecurityEventKind::CheckoutHashMismatch, json!({ "seq": i }))
                .await;
        }

        let recent = log.recent().await;
        assert_eq!(recent.len(), 50);
        // Oldest-first within the window: sequence numbers 10..=59.
        assert_eq!(recent.first().unwrap().details["seq"], 10);
        assert_eq!(recent.last().unwrap().details["seq"], 59);

        // Internally unbounded: all 60 are retained.
        assert_eq!(log.events.read().await.len(), 60);
    }

    #[test]
    fn test_kind_serializes_screaming_snake() {
        let json = serde_json::to_string(&SecurityEventKind::CheckoutHashMismatch).unwrap();
        assert_eq!(json, "\"CHECKOUT_HASH_MISMATCH\"");
    }

    #[test]
    fn test_event_serializes_type_field() {
        let event = SecurityEvent {
            kind: SecurityEventKind::CheckoutConfirmed,
            details: json!({"orderId": "ORD-1"}),
            timestamp: Utc::now(),
        };
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["type"], "CHECKOUT_CONFIRMED");
    }
}
