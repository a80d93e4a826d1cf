//! Order store trait and in-memory implementation.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use common::OrderId;
use domain::Order;

use crate::error::{Result, StoreError};
use crate::lock;

/// Storage for orders.
pub trait OrderRepository: Send + Sync {
    /// Returns a copy of the stored order.
    fn get_order(&self, id: OrderId) -> Result<Order>;

    /// Inserts the order, or replaces the stored copy with the same ID.
    fn save(&self, order: Order) -> Result<()>;
}

/// In-memory order store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryOrderStore {
    orders: Arc<RwLock<HashMap<OrderId, Order>>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored orders.
    pub fn order_count(&self) -> usize {
        lock::read(&self.orders).len()
    }
}

impl OrderRepository for InMemoryOrderStore {
    fn get_order(&self, id: OrderId) -> Result<Order> {
        lock::read(&self.orders)
            .get(&id)
            .cloned()
            .ok_or(StoreError::OrderNotFound(id))
    }

    fn save(&self, order: Order) -> Result<()> {
        lock::write(&self.orders).insert(order.id(), order);
        Ok(())
    }
}
