//! Shared types for order placement.

mod types;

pub use types::{CustomerId, OrderId};
