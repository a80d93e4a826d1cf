//! Value objects for the order domain.

use serde::{Deserialize, Serialize};

use crate::value_objects::{Money, ProductId};

/// A requested line when creating an order: which product and how many.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: u32,
}

impl OrderLine {
    pub fn new(product_id: impl Into<ProductId>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}

/// An item in an order.
///
/// `unit_price` is a snapshot of the catalog price when the item was added;
/// later catalog price changes do not affect it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// The product identifier.
    pub product_id: ProductId,

    /// Human-readable product name.
    pub product_name: String,

    /// Quantity ordered.
    pub quantity: u32,

    /// Price per unit at order creation.
    pub unit_price: Money,
}

impl OrderItem {
    /// Creates a new order item.
    pub fn new(
        product_id: impl Into<ProductId>,
        product_name: impl Into<String>,
        quantity: u32,
        unit_price: Money,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            product_name: product_name.into(),
            quantity,
            unit_price,
        }
    }

    /// Returns the total price for this item (quantity * unit_price).
    pub fn total_price(&self) -> Money {
        self.unit_price.saturating_mul(self.quantity)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_item_total_price() {
        let item = OrderItem::new("P003", "Headphones", 3, Money::from_dollars(150));
        assert_eq!(item.total_price().cents(), 45_000);
    }

    #[test]
    fn test_order_line_accepts_str_ids() {
        let line = OrderLine::new("P001", 2);
        assert_eq!(line.product_id, ProductId::new("P001"));
        assert_eq!(line.quantity, 2);
    }
}
