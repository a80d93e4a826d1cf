//! Order workflow orchestrating catalog, users, orders, and payments.

use std::time::Instant;

use common::OrderId;
use domain::{DomainError, Order, OrderLine, UserId};
use store::{OrderRepository, ProductRepository, UserRepository};

use crate::error::CheckoutError;
use crate::services::payment::PaymentProcessor;

/// Drives orders from creation to processing.
///
/// ```text
/// Pending/Unpaid ──process_order──► Processed/Paid
/// ```
///
/// A failed `process_order` leaves the stored order pending. Stock deducted
/// for earlier items before a later deduction fails is not restored.
pub struct OrderWorkflow<C, U, O, P>
where
    C: ProductRepository,
    U: UserRepository,
    O: OrderRepository,
    P: PaymentProcessor,
{
    catalog: C,
    users: U,
    orders: O,
    payments: P,
}

impl<C, U, O, P> OrderWorkflow<C, U, O, P>
where
    C: ProductRepository,
    U: UserRepository,
    O: OrderRepository,
    P: PaymentProcessor,
{
    /// Creates a new workflow over the given stores and payment processor.
    pub fn new(catalog: C, users: U, orders: O, payments: P) -> Self {
        Self {
            catalog,
            users,
            orders,
            payments,
        }
    }

    /// Creates a pending order for `user_id` from the requested lines.
    ///
    /// Every line is checked against the catalog and priced at the current
    /// catalog price. If any line fails, no order is stored.
    #[tracing::instrument(
        skip(self, user_id, lines),
        fields(user_id = %user_id, lines = lines.len())
    )]
    pub fn create_order(
        &self,
        user_id: &UserId,
        lines: &[OrderLine],
    ) -> Result<Order, CheckoutError> {
        self.build_order(user_id, lines)
            .and_then(|order| {
                self.orders.save(order.clone())?;
                Ok(order)
            })
            .inspect(|order| {
                metrics::counter!("orders_created_total").increment(1);
                tracing::info!(
                    order_id = %order.id(),
                    total = %order.calculate_total(),
                    "order created"
                );
            })
            .inspect_err(|e| record_failure("create", e))
    }

    fn build_order(&self, user_id: &UserId, lines: &[OrderLine]) -> Result<Order, CheckoutError> {
        self.users.get_user(user_id)?;

        let mut order = Order::new(user_id.clone());
        for line in lines {
            let product = self.catalog.get_product(&line.product_id)?;
            order.add_item(line.clone(), &product)?;
        }
        Ok(order)
    }

    /// Charges a pending order and deducts its stock.
    ///
    /// Payment is taken first, then stock is deducted item by item. On full
    /// success the order is stored as processed and paid and returned.
    #[tracing::instrument(skip(self))]
    pub fn process_order(&self, order_id: OrderId) -> Result<Order, CheckoutError> {
        let started = Instant::now();

        let result = self.charge_and_fulfill(order_id);
        metrics::histogram!("order_processing_seconds").record(started.elapsed().as_secs_f64());

        match &result {
            Ok(order) => {
                metrics::counter!("orders_processed_total").increment(1);
                tracing::info!(
                    status = %order.status(),
                    payment_status = %order.payment_status(),
                    "order processed"
                );
            }
            Err(e) => record_failure("process", e),
        }
        result
    }

    fn charge_and_fulfill(&self, order_id: OrderId) -> Result<Order, CheckoutError> {
        let mut order = self.orders.get_order(order_id)?;
        if !order.is_pending() {
            return Err(DomainError::AlreadyProcessed(order_id).into());
        }

        let receipt = self.payments.charge(&order)?;
        tracing::debug!(payment_id = %receipt.payment_id, "payment accepted");

        for (index, item) in order.items().iter().enumerate() {
            if let Err(e) = self.catalog.decrement_stock(&item.product_id, item.quantity) {
                tracing::warn!(
                    product_id = %item.product_id,
                    deducted_items = index,
                    payment_id = %receipt.payment_id,
                    "stock deduction failed after payment, earlier deductions are kept"
                );
                return Err(e.into());
            }
        }

        order.mark_processed()?;
        self.orders.save(order.clone())?;
        Ok(order)
    }

    /// Loads a stored order.
    pub fn get_order(&self, order_id: OrderId) -> Result<Order, CheckoutError> {
        Ok(self.orders.get_order(order_id)?)
    }
}

fn record_failure(stage: &'static str, error: &CheckoutError) {
    metrics::counter!("orders_failed_total", "stage" => stage).increment(1);
    tracing::warn!(stage, error = %error, "order {stage} failed");
}
