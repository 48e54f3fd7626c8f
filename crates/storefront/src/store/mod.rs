//! In-memory keyed stores.
//!
//! One logical store per process, held in `AppState`. Each store is a
//! `tokio::sync::RwLock` around a `HashMap`, and every mutation happens
//! inside a single lock acquisition so per-key read-modify-write is never
//! observably split. No cross-key transactions exist.

pub mod carts;
pub mod orders;

pub use carts::CartLedger;
pub use orders::{OrderStore, OrderStoreError};
