//! Order placement.
//!
//! This crate provides:
//! - Address, Customer and Order types with the rules each must satisfy
//! - OrderService, which validates an order, applies the expedite rule and
//!   records the order in its customer's history
//! - PlacementRules for the configurable thresholds
//! - Builders for assembling test data

pub mod builders;
pub mod config;
pub mod customer;
pub mod error;
pub mod order;

pub use builders::{AddressBuilder, CustomerBuilder, OrderBuilder};
pub use common::{CustomerId, OrderId};
pub use config::PlacementRules;
pub use customer::{Address, AddressError, Customer, CustomerError, CustomerRef, SharedCustomer};
pub use error::PlacementError;
pub use order::{Money, Order, OrderError, OrderService};
