//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that maps every failure to a stable
//! machine-readable code and an HTTP-appropriate status, rendered as a JSON
//! envelope `{"error": ..., "code": ...}`. Server-side failures are captured
//! to Sentry before responding. All route handlers should return
//! `Result<T, AppError>`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::payabli::PayabliError;
use crate::store::orders::OrderStoreError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Product, cart, or order absent.
    #[error("{0} not found")]
    NotFound(&'static str),

    /// Order not in the lifecycle state the operation expects.
    #[error("Order is not pending payment")]
    InvalidState,

    /// Order creation with no items available.
    #[error("Cart is empty")]
    EmptyCart,

    /// Checkout confirmation missing orderId, referenceId, or verification.
    #[error("Missing required fields")]
    MissingFields,

    /// Checkout verification hash does not match.
    #[error("Invalid checkout session")]
    InvalidHash,

    /// Checkout session older than the configured max age.
    #[error("Checkout session expired")]
    SessionExpired,

    /// Order missing or not pending at confirmation time.
    #[error("Invalid order")]
    InvalidOrder,

    /// Payabli API operation failed.
    #[error("Processor error: {0}")]
    Processor(#[from] PayabliError),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

/// JSON error envelope returned to clients.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    code: &'static str,
}

impl AppError {
    /// Stable machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::InvalidState => "INVALID_STATE",
            Self::EmptyCart => "EMPTY_CART",
            Self::MissingFields => "MISSING_FIELDS",
            Self::InvalidHash => "INVALID_HASH",
            Self::SessionExpired => "SESSION_EXPIRED",
            Self::InvalidOrder => "INVALID_ORDER",
            Self::Processor(_) => "PROCESSOR_ERROR",
            Self::Internal(_) => "INTERNAL",
        }
    }

    const fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidState
            | Self::EmptyCart
            | Self::MissingFields
            | Self::InvalidHash
            | Self::SessionExpired
            | Self::InvalidOrder => StatusCode::BAD_REQUEST,
            Self::Processor(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Internal(_) | Self::Processor(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Internal(_) => "Internal server error".to_string(),
            Self::Processor(_) => "Payment processor error".to_string(),
            _ => self.to_string(),
        };

        let body = ErrorBody {
            error: message,
            code: self.code(),
        };

        (self.status(), Json(body)).into_response()
    }
}

impl From<OrderStoreError> for AppError {
    fn from(err: OrderStoreError) -> Self {
        match err {
            OrderStoreError::EmptyCart => Self::EmptyCart,
            OrderStoreError::NotFound => Self::NotFound("Order"),
            OrderStoreError::InvalidState => Self::InvalidState,
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("Product");
        assert_eq!(err.to_string(), "Product not found");

        let err = AppError::EmptyCart;
        assert_eq!(err.to_string(), "Cart is empty");
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            err.into_response().status()
        }

        assert_eq!(get_status(AppError::NotFound("Order")), StatusCode::NOT_FOUND);
        assert_eq!(get_status(AppError::InvalidHash), StatusCode::BAD_REQUEST);
        assert_eq!(get_status(AppError::SessionExpired), StatusCode::BAD_REQUEST);
        assert_eq!(get_status(AppError::EmptyCart), StatusCode::BAD_REQUEST);
        assert_eq!(
            get_status(AppError::Internal("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_stable_codes() {
        assert_eq!(AppError::InvalidHash.code(), "INVALID_HASH");
        assert_eq!(AppError::SessionExpired.code(), "SESSION_EXPIRED");
        assert_eq!(AppError::MissingFields.code(), "MISSING_FIELDS");
        assert_eq!(AppError::InvalidOrder.code(), "INVALID_ORDER");
        assert_eq!(AppError::EmptyCart.code(), "EMPTY_CART");
    }

    #[test]
    fn test_order_store_error_conversion() {
        assert!(matches!(
            AppError::from(OrderStoreError::EmptyCart),
            AppError::EmptyCart
        ));
        assert!(matches!(
            AppError::from(OrderStoreError::NotFound),
            AppError::NotFound("Order")
        ));
        assert!(matches!(
            AppError::from(OrderStoreError::InvalidState),
            AppError::InvalidState
        ));
    }
}
