//! Order aggregate and related types.

mod aggregate;
mod service;
mod value_objects;

pub use aggregate::Order;
pub use service::OrderService;
pub use value_objects::Money;

use common::OrderId;
use thiserror::Error;

/// Errors raised when the order itself cannot be placed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// Order already carries an id, so it has been placed before.
    #[error("Order ID must be 0")]
    IdAssigned { id: OrderId },

    #[error("Order amount must be more than 0")]
    NonPositiveAmount { amount: Money },

    /// Order has no customer, or its customer no longer exists.
    #[error("Order must have a customer")]
    MissingCustomer,
}
