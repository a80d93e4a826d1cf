//! Domain error types.

use common::OrderId;
use thiserror::Error;

use crate::value_objects::ProductId;

/// A payment credential field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentField {
    CardNumber,
    ExpiryDate,
    Cvv,
}

impl PaymentField {
    /// Returns the human-readable field name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentField::CardNumber => "card number",
            PaymentField::ExpiryDate => "expiry date",
            PaymentField::Cvv => "CVV",
        }
    }
}

impl std::fmt::Display for PaymentField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors that can occur during domain operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Requested quantity exceeds the product's stock.
    #[error(
        "Insufficient stock for product {product_id}: requested {requested}, available {available}"
    )]
    InsufficientStock {
        product_id: ProductId,
        requested: u32,
        available: u32,
    },

    /// Order lines must request at least one unit.
    #[error("Invalid quantity for product {product_id}: must be greater than 0")]
    InvalidQuantity { product_id: ProductId },

    /// Adding the line would push the order total past the largest amount.
    #[error("Order total overflows when adding product {product_id}")]
    AmountOverflow { product_id: ProductId },

    /// Stored payment credentials are incomplete.
    #[error("Invalid payment credentials: {0} is required")]
    InvalidPaymentInfo(PaymentField),

    /// The order has already left the pending state.
    #[error("Order {0} is already processed")]
    AlreadyProcessed(OrderId),
}
