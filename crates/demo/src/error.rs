//! Demo error types.

use checkout::CheckoutError;
use thiserror::Error;

/// Errors that end a demo run.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("Error creating order: {0}")]
    CreateOrder(#[source] CheckoutError),

    #[error("Error processing order: {0}")]
    ProcessOrder(#[source] CheckoutError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
