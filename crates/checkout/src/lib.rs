//! Order checkout workflow.
//!
//! This crate orchestrates the catalog, the user directory, and the payment
//! processor to move an order through its lifecycle:
//! 1. Create: validate the user, check stock and snapshot prices
//! 2. Process: charge the stored card, then deduct stock per item
//!
//! Processing does not compensate. If a stock deduction fails, deductions
//! already made for earlier items of the same order are kept and the order
//! stays pending.

pub mod error;
pub mod services;
pub mod workflow;

pub use error::{CheckoutError, ErrorKind};
pub use services::{ChargeReceipt, PaymentProcessor, SimulatedPaymentProcessor};
pub use workflow::OrderWorkflow;
