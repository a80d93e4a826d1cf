//! Shared types for the order kata workspace.

pub mod types;

pub use types::OrderId;
