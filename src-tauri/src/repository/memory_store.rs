//! In-Memory Order Store
//!
//! Keeps orders in process. Used when no remote store is configured.

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{Order, OrderFields, DomainError, DomainResult};
use super::traits::Repository;

#[derive(Default)]
struct Inner {
    orders: Vec<Order>,
    next_id: u64,
}

/// Insertion-ordered in-memory implementation of Repository<Order>
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl Repository<Order> for MemoryStore {
    async fn list(&self) -> DomainResult<Vec<Order>> {
        Ok(self.inner.lock().await.orders.clone())
    }

    async fn find_by_id(&self, id: &String) -> DomainResult<Option<Order>> {
        let inner = self.inner.lock().await;
        Ok(inner.orders.iter().find(|o| &o.id == id).cloned())
    }

    async fn create(&self, fields: &OrderFields) -> DomainResult<Order> {
        let mut inner = self.inner.lock().await;
        inner.next_id += 1;
        let order = Order::from_fields(format!("order-{}", inner.next_id), fields);
        inner.orders.push(order.clone());
        Ok(order)
    }

    async fn patch(&self, id: &String, fields: &OrderFields) -> DomainResult<Order> {
        let mut inner = self.inner.lock().await;
        let order = inner
            .orders
            .iter_mut()
            .find(|o| &o.id == id)
            .ok_or_else(|| DomainError::NotFound(format!("Order {}", id)))?;
        order.apply(fields);
        Ok(order.clone())
    }

    async fn delete(&self, id: &String) -> DomainResult<()> {
        let mut inner = self.inner.lock().await;
        let before = inner.orders.len();
        inner.orders.retain(|o| &o.id != id);
        if inner.orders.len() == before {
            return Err(DomainError::NotFound(format!("Order {}", id)));
        }
        Ok(())
    }
}
