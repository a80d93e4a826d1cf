//! Scripted demonstration of the order workflow.
//!
//! Seeds the sample catalog and user directory, places one order, processes
//! it, and reports the outcome together with the remaining stock.

pub mod config;
pub mod error;

use checkout::{OrderWorkflow, SimulatedPaymentProcessor};
use common::OrderId;
use domain::{Money, OrderLine, OrderStatus, PaymentStatus, UserId};
use serde::Serialize;
use store::InMemoryOrderStore;
use store::fixtures::{sample_catalog, sample_directory};

pub use config::{Config, Format};
pub use error::DemoError;

/// Remaining stock of one catalog product after the run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockLine {
    pub product_id: String,
    pub name: String,
    pub stock_remaining: u32,
}

/// Outcome of a demo run.
#[derive(Debug, Clone, Serialize)]
pub struct DemoReport {
    pub order_id: OrderId,
    pub total: Money,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub stock: Vec<StockLine>,
}

impl DemoReport {
    /// Renders the report as human-readable lines or as pretty JSON.
    pub fn render(&self, format: Format) -> Result<String, DemoError> {
        match format {
            Format::Json => Ok(serde_json::to_string_pretty(self)?),
            Format::Text => Ok(self.render_text()),
        }
    }

    fn render_text(&self) -> String {
        let header = format!(
            "Order created with ID: {}, Total Amount: {}\n\
             Order {} status: {}, Payment status: {}\n",
            self.order_id, self.total, self.order_id, self.status, self.payment_status
        );
        let stock: String = self
            .stock
            .iter()
            .map(|line| {
                format!(
                    "Product: {}, Stock remaining: {}\n",
                    line.name, line.stock_remaining
                )
            })
            .collect();
        header + &stock
    }
}

/// The order placed by the demo: one laptop and two headphones.
pub fn demo_lines() -> Vec<OrderLine> {
    vec![OrderLine::new("P001", 1), OrderLine::new("P003", 2)]
}

/// Runs the demo scenario for `user_id` against freshly seeded stores.
pub fn run(user_id: &UserId) -> Result<DemoReport, DemoError> {
    let catalog = sample_catalog();
    let users = sample_directory();
    let workflow = OrderWorkflow::new(
        catalog.clone(),
        users.clone(),
        InMemoryOrderStore::new(),
        SimulatedPaymentProcessor::new(users),
    );

    let order = workflow
        .create_order(user_id, &demo_lines())
        .map_err(DemoError::CreateOrder)?;
    let total = order.calculate_total();

    let processed = workflow
        .process_order(order.id())
        .map_err(DemoError::ProcessOrder)?;

    let stock = catalog
        .products()
        .into_iter()
        .map(|p| StockLine {
            product_id: p.id().to_string(),
            name: p.name().to_string(),
            stock_remaining: p.stock_quantity(),
        })
        .collect();

    Ok(DemoReport {
        order_id: processed.id(),
        total,
        status: processed.status(),
        payment_status: processed.payment_status(),
        stock,
    })
}
