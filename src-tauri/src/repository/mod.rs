//! Repository Layer
//!
//! Document store abstraction and implementations.

mod traits;
mod memory_store;
mod sanity_store;


use std::sync::Arc;

use crate::config::StoreSettings;
use crate::domain::Order;

pub use traits::Repository;
pub use memory_store::MemoryStore;
pub use sanity_store::SanityStore;

/// Shared handle to the order store
pub type OrderStore = Arc<dyn Repository<Order>>;

/// Pick the store for the given settings: the hosted store when configured,
/// otherwise an in-memory one.
pub fn open_order_store(settings: &StoreSettings) -> OrderStore {
    if settings.is_configured() {
        log::info!(
            "Using hosted document store {} (dataset {})",
            settings.api_host(),
            settings.dataset
        );
        Arc::new(SanityStore::new(settings))
    } else {
        log::warn!("No document store configured; orders are kept in memory only");
        Arc::new(MemoryStore::new())
    }
}
