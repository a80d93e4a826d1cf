//! Catalog product records.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::{Money, ProductId};

/// A product offered in the catalog together with its stock level.
///
/// Stock is only ever reduced through [`Product::update_stock`], which
/// refuses to go below zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
    stock_quantity: u32,
}

impl Product {
    /// Creates a new product.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        price: Money,
        stock_quantity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            stock_quantity,
        }
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Money {
        self.price
    }

    pub fn stock_quantity(&self) -> u32 {
        self.stock_quantity
    }

    /// Returns true if at least `quantity` units are in stock.
    pub fn is_in_stock(&self, quantity: u32) -> bool {
        self.stock_quantity >= quantity
    }

    /// Removes `quantity` units from stock.
    ///
    /// Leaves the stock untouched and returns
    /// [`DomainError::InsufficientStock`] when fewer units are available.
    pub fn update_stock(&mut self, quantity: u32) -> Result<(), DomainError> {
        if !self.is_in_stock(quantity) {
            return Err(self.insufficient_stock(quantity));
        }
        self.stock_quantity -= quantity;
        Ok(())
    }

    pub(crate) fn insufficient_stock(&self, requested: u32) -> DomainError {
        DomainError::InsufficientStock {
            product_id: self.id.clone(),
            requested,
            available: self.stock_quantity,
        }
    }
}
