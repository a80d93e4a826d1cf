//! Order entity.

use chrono::{DateTime, Utc};
use common::OrderId;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::product::Product;
use crate::value_objects::{Money, UserId};

use super::{OrderItem, OrderLine, OrderStatus, PaymentStatus};

/// Order entity.
///
/// Represents an order from creation (pending, unpaid) to processing
/// (processed, paid). Items keep the order they were added in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    user_id: UserId,
    items: Vec<OrderItem>,
    status: OrderStatus,
    payment_status: PaymentStatus,
    created_at: DateTime<Utc>,
}

impl Order {
    /// Creates an empty pending order for a user.
    pub fn new(user_id: impl Into<UserId>) -> Self {
        Self {
            id: OrderId::new(),
            user_id: user_id.into(),
            items: Vec::new(),
            status: OrderStatus::Pending,
            payment_status: PaymentStatus::Unpaid,
            created_at: Utc::now(),
        }
    }
}

// Query methods
impl Order {
    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Returns the items in the order they were added.
    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn payment_status(&self) -> PaymentStatus {
        self.payment_status
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns true if the order has not been processed yet.
    pub fn is_pending(&self) -> bool {
        self.status.can_process()
    }

    /// Sums `unit_price * quantity` over all items.
    ///
    /// Computed on every call from the snapshot prices held by the items.
    /// [`Order::add_item`] refuses lines that would overflow, so the sum
    /// never saturates for orders built through it.
    pub fn calculate_total(&self) -> Money {
        self.items.iter().map(OrderItem::total_price).sum()
    }
}

// Command methods
impl Order {
    /// Adds a line to the order, capturing the product's current price.
    ///
    /// Zero quantities are rejected even though the catalog would accept
    /// them; an order item always holds at least one unit.
    pub fn add_item(&mut self, line: OrderLine, product: &Product) -> Result<(), DomainError> {
        if line.quantity == 0 {
            return Err(DomainError::InvalidQuantity {
                product_id: line.product_id,
            });
        }

        if !product.is_in_stock(line.quantity) {
            return Err(product.insufficient_stock(line.quantity));
        }

        product
            .price()
            .checked_mul(line.quantity)
            .and_then(|line_total| self.calculate_total().checked_add(line_total))
            .ok_or_else(|| DomainError::AmountOverflow {
                product_id: product.id().clone(),
            })?;

        self.items.push(OrderItem::new(
            product.id().clone(),
            product.name(),
            line.quantity,
            product.price(),
        ));
        Ok(())
    }

    /// Moves the order to processed and paid.
    pub fn mark_processed(&mut self) -> Result<(), DomainError> {
        if !self.status.can_process() {
            return Err(DomainError::AlreadyProcessed(self.id));
        }

        self.status = OrderStatus::Processed;
        self.payment_status = PaymentStatus::Paid;
        Ok(())
    }
}
