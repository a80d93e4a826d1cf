//! Domain layer for the order kata.
//!
//! This crate provides the core domain types:
//! - Value objects for identifiers and money
//! - Product records with stock bookkeeping
//! - User records with embedded payment credentials
//! - The order entity with its status state machine

pub mod error;
pub mod order;
pub mod product;
pub mod user;
pub mod value_objects;

pub use error::{DomainError, PaymentField};
pub use order::{Order, OrderItem, OrderLine, OrderStatus, PaymentStatus};
pub use product::Product;
pub use user::{PaymentInfo, User};
pub use value_objects::{Money, ProductId, UserId};
