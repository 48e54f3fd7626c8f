//! Application state shared across handlers.

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::checkout::CheckoutSessions;
use crate::config::StorefrontConfig;
use crate::payabli::{PayabliClient, PayabliError};
use crate::security::SecurityLog;
use crate::store::{CartLedger, OrderStore};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration, the in-memory stores, and the protocol components.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    carts: CartLedger,
    orders: OrderStore,
    sessions: CheckoutSessions,
    security: SecurityLog,
    payabli: PayabliClient,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the Payabli HTTP client cannot be constructed
    /// (malformed API key).
    pub fn new(config: StorefrontConfig) -> Result<Self, PayabliError> {
        let sessions = CheckoutSessions::new(&config.checkout);
        let payabli = PayabliClient::new(&config.payabli, config.checkout.amount_tolerance)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                catalog: Catalog::new(),
                carts: CartLedger::default(),
                orders: OrderStore::default(),
                sessions,
                security: SecurityLog::default(),
                payabli,
                config,
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the cart ledger.
    #[must_use]
    pub fn carts(&self) -> &CartLedger {
        &self.inner.carts
    }

    /// Get a reference to the order store.
    #[must_use]
    pub fn orders(&self) -> &OrderStore {
        &self.inner.orders
    }

    /// Get a reference to the checkout session protocol.
    #[must_use]
    pub fn sessions(&self) -> &CheckoutSessions {
        &self.inner.sessions
    }

    /// Get a reference to the security event log.
    #[must_use]
    pub fn security(&self) -> &SecurityLog {
        &self.inner.security
    }

    /// Get a reference to the Payabli API client.
    #[must_use]
    pub fn payabli(&self) -> &PayabliClient {
        &self.inner.payabli
    }
}
