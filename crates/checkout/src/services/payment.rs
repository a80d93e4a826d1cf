//! Payment processor trait and simulated implementation.

use std::sync::{Arc, Mutex, PoisonError};

use common::OrderId;
use domain::{Money, Order};
use serde::Serialize;
use store::UserRepository;

use crate::error::CheckoutError;

/// Result of a successful charge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChargeReceipt {
    /// The payment ID assigned by the processor.
    pub payment_id: String,
    pub order_id: OrderId,
    pub amount: Money,
    /// Last four characters of the card, empty for shorter card numbers.
    pub card_last_four: String,
}

/// Trait for charging an order to its owner's stored card.
pub trait PaymentProcessor: Send + Sync {
    /// Charges the order total. Never mutates the order.
    fn charge(&self, order: &Order) -> Result<ChargeReceipt, CheckoutError>;
}

#[derive(Debug, Default)]
struct Ledger {
    receipts: Vec<ChargeReceipt>,
    next_id: u32,
}

/// Payment processor that validates credentials and records charges
/// in memory instead of talking to a gateway.
#[derive(Debug, Clone)]
pub struct SimulatedPaymentProcessor<U> {
    users: U,
    ledger: Arc<Mutex<Ledger>>,
}

impl<U: UserRepository> SimulatedPaymentProcessor<U> {
    /// Creates a processor that reads credentials from `users`.
    pub fn new(users: U) -> Self {
        Self {
            users,
            ledger: Arc::default(),
        }
    }

    /// Returns the number of successful charges.
    pub fn charge_count(&self) -> usize {
        self.ledger().receipts.len()
    }

    /// Returns all receipts in the order they were issued.
    pub fn receipts(&self) -> Vec<ChargeReceipt> {
        self.ledger().receipts.clone()
    }

    fn ledger(&self) -> std::sync::MutexGuard<'_, Ledger> {
        self.ledger.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<U: UserRepository> PaymentProcessor for SimulatedPaymentProcessor<U> {
    #[tracing::instrument(skip_all, fields(order_id = %order.id()))]
    fn charge(&self, order: &Order) -> Result<ChargeReceipt, CheckoutError> {
        let user = self.users.get_user(order.user_id())?;
        user.payment_info.validate()?;

        let amount = order.calculate_total();
        let card_last_four = user.payment_info.last_four_digits();
        tracing::info!(
            %amount,
            card_last_four = %card_last_four,
            "Processing payment of {amount} for order {} with card ending in {card_last_four}",
            order.id()
        );

        let mut ledger = self.ledger();
        ledger.next_id += 1;
        let receipt = ChargeReceipt {
            payment_id: format!("PAY-{:04}", ledger.next_id),
            order_id: order.id(),
            amount,
            card_last_four,
        };
        ledger.receipts.push(receipt.clone());
        metrics::counter!("payments_charged_total").increment(1);

        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{OrderLine, OrderStatus, PaymentInfo, PaymentStatus, Product, User};
    use store::InMemoryUserDirectory;

    use crate::error::ErrorKind;

    fn directory_with_card(card_number: &str, expiry: &str, cvv: &str) -> InMemoryUserDirectory {
        InMemoryUserDirectory::with_users([User::new(
            "U001",
            "John Doe",
            "john@example.com",
            "123 Main St",
            PaymentInfo::new(card_number, expiry, cvv),
        )])
    }

    fn valid_processor() -> SimulatedPaymentProcessor<InMemoryUserDirectory> {
        SimulatedPaymentProcessor::new(directory_with_card("1234-5678-9012-3456", "12/25", "123"))
    }

    fn order_for(user_id: &str) -> Order {
        let laptop = Product::new("P001", "Laptop", Money::from_dollars(1200), 10);
        let mut order = Order::new(user_id);
        order.add_item(OrderLine::new("P001", 1), &laptop).unwrap();
        order
    }

    #[test]
    fn test_charge_reports_masked_card() {
        let processor = valid_processor();
        let order = order_for("U001");

        let receipt = processor.charge(&order).unwrap();

        assert_eq!(receipt.card_last_four, "3456");
        assert_eq!(receipt.amount, Money::from_dollars(1200));
        assert_eq!(receipt.order_id, order.id());
        assert_eq!(processor.charge_count(), 1);
    }

    #[test]
    fn test_charge_short_card_reports_no_digits() {
        let processor = SimulatedPaymentProcessor::new(directory_with_card("111", "12/25", "123"));

        let receipt = processor.charge(&order_for("U001")).unwrap();
        assert_eq!(receipt.card_last_four, "");
    }

    #[test]
    fn test_charge_unknown_user() {
        let processor = valid_processor();

        let err = processor.charge(&order_for("U999")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(processor.charge_count(), 0);
    }

    #[test]
    fn test_charge_invalid_credentials() {
        let processor =
            SimulatedPaymentProcessor::new(directory_with_card("1234-5678-9012-3456", "", "123"));

        let err = processor.charge(&order_for("U001")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidPaymentCredentials);
        assert_eq!(processor.charge_count(), 0);
    }

    #[test]
    fn test_charge_leaves_order_untouched() {
        let processor = valid_processor();
        let order = order_for("U001");

        processor.charge(&order).unwrap();
        assert_eq!(order.status(), OrderStatus::Pending);
        assert_eq!(order.payment_status(), PaymentStatus::Unpaid);
    }

    #[test]
    fn test_sequential_payment_ids() {
        let processor = valid_processor();

        let r1 = processor.charge(&order_for("U001")).unwrap();
        let r2 = processor.charge(&order_for("U001")).unwrap();

        assert_eq!(r1.payment_id, "PAY-0001");
        assert_eq!(r2.payment_id, "PAY-0002");
        assert_eq!(processor.receipts(), vec![r1, r2]);
    }
}
