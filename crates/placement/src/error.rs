//! Placement error types.

use thiserror::Error;

use crate::customer::{AddressError, CustomerError};
use crate::order::OrderError;

/// Reason an order could not be placed.
///
/// The variant tells which part of the order was at fault; the display text is
/// the message of the violated rule.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    /// The order's own fields, or its missing customer.
    #[error(transparent)]
    InvalidOrder(#[from] OrderError),

    /// The customer's own fields.
    #[error(transparent)]
    InvalidCustomer(#[from] CustomerError),

    /// The customer's home address.
    #[error(transparent)]
    InvalidAddress(#[from] AddressError),
}

impl PlacementError {
    /// Returns a stable label for the error kind, used in logs and metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            PlacementError::InvalidOrder(_) => "invalid_order",
            PlacementError::InvalidCustomer(_) => "invalid_customer",
            PlacementError::InvalidAddress(_) => "invalid_address",
        }
    }
}

/// Convenience type alias for placement results.
pub type Result<T> = std::result::Result<T, PlacementError>;
