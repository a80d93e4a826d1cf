//! Checkout error types.

use domain::DomainError;
use store::StoreError;
use thiserror::Error;

/// Errors that can occur while creating or processing an order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    /// A lookup or write against a store failed.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// A domain rule rejected the operation.
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}

/// Coarse classification of a [`CheckoutError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    InsufficientStock,
    InvalidQuantity,
    AmountOverflow,
    InvalidPaymentCredentials,
    AlreadyProcessed,
}

impl CheckoutError {
    /// Returns the kind of failure regardless of which layer reported it.
    pub fn kind(&self) -> ErrorKind {
        let domain = match self {
            CheckoutError::Store(StoreError::Domain(e)) | CheckoutError::Domain(e) => e,
            CheckoutError::Store(_) => return ErrorKind::NotFound,
        };
        match domain {
            DomainError::InsufficientStock { .. } => ErrorKind::InsufficientStock,
            DomainError::InvalidQuantity { .. } => ErrorKind::InvalidQuantity,
            DomainError::AmountOverflow { .. } => ErrorKind::AmountOverflow,
            DomainError::InvalidPaymentInfo(_) => ErrorKind::InvalidPaymentCredentials,
            DomainError::AlreadyProcessed(_) => ErrorKind::AlreadyProcessed,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    pub fn is_insufficient_stock(&self) -> bool {
        self.kind() == ErrorKind::InsufficientStock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::OrderId;
    use domain::{PaymentField, ProductId, UserId};

    #[test]
    fn test_kind_of_store_lookups() {
        let err: CheckoutError = StoreError::UserNotFound(UserId::new("U404")).into();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.is_not_found());
    }

    #[test]
    fn test_kind_sees_through_store_wrapping() {
        let stock = DomainError::InsufficientStock {
            product_id: ProductId::new("P001"),
            requested: 2,
            available: 1,
        };
        let from_store: CheckoutError = StoreError::Domain(stock.clone()).into();
        let from_domain: CheckoutError = stock.into();

        assert!(from_store.is_insufficient_stock());
        assert!(from_domain.is_insufficient_stock());
    }

    #[test]
    fn test_kind_of_domain_errors() {
        let cases = [
            (
                DomainError::InvalidPaymentInfo(PaymentField::Cvv),
                ErrorKind::InvalidPaymentCredentials,
            ),
            (
                DomainError::AlreadyProcessed(OrderId::new()),
                ErrorKind::AlreadyProcessed,
            ),
            (
                DomainError::InvalidQuantity {
                    product_id: ProductId::new("P001"),
                },
                ErrorKind::InvalidQuantity,
            ),
            (
                DomainError::AmountOverflow {
                    product_id: ProductId::new("PBIG"),
                },
                ErrorKind::AmountOverflow,
            ),
        ];
        for (err, kind) in cases {
            assert_eq!(CheckoutError::from(err).kind(), kind);
        }
    }

    #[test]
    fn test_display_includes_cause() {
        let err: CheckoutError = StoreError::OrderNotFound(OrderId::new()).into();
        assert!(err.to_string().starts_with("Store error: Order not found: "));
    }
}
