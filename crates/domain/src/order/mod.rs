//! Order entity and related types.

mod aggregate;
mod state;
mod value_objects;

pub use aggregate::Order;
pub use state::{OrderStatus, PaymentStatus};
pub use value_objects::{OrderItem, OrderLine};
