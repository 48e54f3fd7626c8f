//! Cart ledger: keyed in-memory cart storage.
//!
//! Carts are created lazily on first mutation of an unknown `cartId` and
//! never expire server-side. The arithmetic invariants live on
//! [`Cart`](crate::models::cart::Cart); this module only provides the locked
//! keyed access around them.

use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::models::cart::Cart;
use crate::models::product::Product;
use suit_yourself_core::types::{CartId, CartItemId};

/// Process-wide cart storage.
#[derive(Debug, Default)]
pub struct CartLedger {
    carts: RwLock<HashMap<CartId, Cart>>,
}

impl CartLedger {
    /// Fetch a cart. Unknown IDs yield an empty cart without storing one.
    pub async fn get(&self, cart_id: &CartId) -> Cart {
        self.carts
            .read()
            .await
            .get(cart_id)
            .cloned()
            .unwrap_or_else(|| Cart::new(cart_id.clone()))
    }

    /// Add a product to a cart, creating the cart if needed.
    ///
    /// Returns the updated cart.
    pub async fn add_item(
        &self,
        cart_id: &CartId,
        product: &Product,
        size: &str,
        quantity: u32,
    ) -> Cart {
        let mut carts = self.carts.write().await;
        let cart = carts
            .entry(cart_id.clone())
            .or_insert_with(|| Cart::new(cart_id.clone()));
        cart.add_item(product, size, quantity);
        cart.clone()
    }

    /// Remove a line from a cart. Returns `None` if the cart is unknown.
    pub async fn remove_item(&self, cart_id: &CartId, item_id: &CartItemId) -> Option<Cart> {
        let mut carts = self.carts.write().await;
        let cart = carts.get_mut(cart_id)?;
        cart.remove_item(item_id);
        Some(cart.clone())
    }

    /// Set a line's quantity (zero or less removes the line). Returns `None`
    /// if the cart is unknown.
    pub async fn update_item(
        &self,
        cart_id: &CartId,
        item_id: &CartItemId,
        quantity: i64,
    ) -> Option<Cart> {
        let mut carts = self.carts.write().await;
        let cart = carts.get_mut(cart_id)?;
        cart.update_item(item_id, quantity);
        Some(cart.clone())
    }
}
