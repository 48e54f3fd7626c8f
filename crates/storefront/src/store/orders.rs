//! Order store: immutable-at-creation order snapshots with lifecycle state.

use std::collections::HashMap;

use chrono::Utc;
use rust_decimal::Decimal;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::models::cart::CartItem;
use crate::models::order::{CustomerInfo, Order};
use suit_yourself_core::types::{OrderId, OrderStatus, subtotal};

/// Errors from order store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderStoreError {
    #[error("cannot create an order from an empty cart")]
    EmptyCart,
    #[error("order not found")]
    NotFound,
    #[error("order is not pending payment")]
    InvalidState,
}

/// Process-wide order storage.
#[derive(Debug, Default)]
pub struct OrderStore {
    orders: RwLock<HashMap<OrderId, Order>>,
}

impl OrderStore {
    /// Create a pending order from an items snapshot.
    ///
    /// The subtotal is computed from the supplied item prices; items are not
    /// re-priced from the catalog. The total is fixed here and never
    /// recomputed afterwards.
    ///
    /// # Errors
    ///
    /// Returns `EmptyCart` when `items` is empty; nothing is persisted.
    pub async fn create(
        &self,
        items: Vec<CartItem>,
        customer: CustomerInfo,
    ) -> Result<Order, OrderStoreError> {
        if items.is_empty() {
            return Err(OrderStoreError::EmptyCart);
        }

        let order_subtotal = subtotal(items.iter().map(|i| (i.price, i.quantity)));
        let service_fee = Decimal::ZERO;
        let order = Order {
            id: OrderId::generate(),
            status: OrderStatus::PendingPayment,
            items,
            subtotal: order_subtotal,
            service_fee,
            total: order_subtotal + service_fee,
            customer,
            created_at: Utc::now(),
            payment_reference_id: None,
            payment_method: None,
            paid_at: None,
        };

        self.orders
            .write()
            .await
            .insert(order.id.clone(), order.clone());
        Ok(order)
    }

    /// Look up an order by ID.
    pub async fn get(&self, order_id: &OrderId) -> Option<Order> {
        self.orders.read().await.get(order_id).cloned()
    }

    /// Transition an order from `pending_payment` to `paid`, recording the
    /// processor reference and payment method.
    ///
    /// The state check and the transition happen under one write lock, so a
    /// concurrent second confirmation observes `InvalidState`, never a
    /// double transition.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` for unknown orders and `InvalidState` when the
    /// order is not pending payment.
    pub async fn confirm_payment(
        &self,
        order_id: &OrderId,
        reference_id: &str,
        payment_method: Option<String>,
    ) -> Result<Order, OrderStoreError> {
        let mut orders = self.orders.write().await;
        let order = orders.get_mut(order_id).ok_or(OrderStoreError::NotFound)?;

        if !order.status.is_pending() {
            return Err(OrderStoreError::InvalidState);
        }

        order.status = OrderStatus::Paid;
        order.payment_reference_id = Some(reference_id.to_string());
        order.payment_method = payment_method;
        order.paid_at = Some(Utc::now());
        Ok(order.clone())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use suit_yourself_core::types::{CartItemId, ProductId};

    fn line(cents: i64, quantity: u32) -> CartItem {
        CartItem {
            id: CartItemId::generate(),
            product_id: ProductId::new("suit-001"),
            name: "Navy Blue Wool Suit".to_string(),
            price: Decimal::new(cents, 2),
            size: "40R".to_string(),
            quantity,
            image: String::new(),
        }
    }

    #[tokio::test]
    async fn test_create_snapshots_items_and_fixes_total() {
        let store = OrderStore::default();
        let order = store
            .create(vec![line(59900, 1), line(12900, 2)], CustomerInfo::default())
            .await
            .unwrap();

        assert!(order.id.as_str().starts_with("ORD-"));
        assert_eq!(order.status, OrderStatus::PendingPayment);
        assert_eq!(order.subtotal, Decimal::new(85700, 2));
        assert_eq!(order.service_fee, Decimal::ZERO);
        assert_eq!(order.total, Decimal::new(85700, 2));
    }

    #[tokio::test]
    async fn test_create_empty_is_rejected_and_nothing_persisted() {
        let store = OrderStore::default();
        let result = store.create(vec![], CustomerInfo::default()).await;
        assert_eq!(result.unwrap_err(), OrderStoreError::EmptyCart);
        assert!(store.orders.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_get_unknown_is_none() {
        let store = OrderStore::default();
        assert!(store.get(&OrderId::new("ORD-missing")).await.is_none());
    }

    #[tokio::test]
    async fn test_confirm_payment_transitions_once() {
        let store = OrderStore::default();
        let order = store
            .create(vec![line(59900, 1)], CustomerInfo::default())
            .await
            .unwrap();

        let paid = store
            .confirm_payment(&order.id, "txn-123", Some("apple_pay".to_string()))
            .await
            .unwrap();
        assert_eq!(paid.status, OrderStatus::Paid);
        assert_eq!(paid.payment_reference_id.as_deref(), Some("txn-123"));
        assert!(paid.paid_at.is_some());

        // Confirmation is not idempotent: the second attempt sees a
        // non-pending order.
        let second = store.confirm_payment(&order.id, "txn-456", None).await;
        assert_eq!(second.unwrap_err(), OrderStoreError::InvalidState);

        // The first confirmation's reference is untouched.
        let stored = store.get(&order.id).await.unwrap();
        assert_eq!(stored.payment_reference_id.as_deref(), Some("txn-123"));
    }

    #[tokio::test]
    async fn test_confirm_unknown_order() {
        let store = OrderStore::default();
        let result = store
            .confirm_payment(&OrderId::new("ORD-missing"), "txn-1", None)
            .await;
        assert_eq!(result.unwrap_err(), OrderStoreError::NotFound);
    }
}
