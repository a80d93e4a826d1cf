//! Repositories for the order kata.
//!
//! Each repository is a trait with an in-memory implementation. The
//! in-memory types are cheap handles over shared state, so a clone given to
//! one component observes writes made through another.

pub mod catalog;
pub mod error;
pub mod fixtures;
pub mod orders;
pub mod users;

mod lock;

pub use catalog::{InMemoryProductCatalog, ProductRepository};
pub use error::{Result, StoreError};
pub use orders::{InMemoryOrderStore, OrderRepository};
pub use users::{InMemoryUserDirectory, UserRepository};
