//! External service traits and simulated implementations.

pub mod payment;

pub use payment::{ChargeReceipt, PaymentProcessor, SimulatedPaymentProcessor};
