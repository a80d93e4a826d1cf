//! Store error types.

use common::OrderId;
use domain::{DomainError, ProductId, UserId};
use thiserror::Error;

/// Errors that can occur when reading or writing the stores.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The product is not in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// The user is not in the directory.
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    /// The order is not in the order store.
    #[error("Order not found: {0}")]
    OrderNotFound(OrderId),

    /// A domain rule rejected the change.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl StoreError {
    /// Returns true for any of the not-found variants.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            StoreError::ProductNotFound(_)
                | StoreError::UserNotFound(_)
                | StoreError::OrderNotFound(_)
        )
    }
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
