//! Customer entity and the handles orders use to reach it.

mod address;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use common::CustomerId;
use thiserror::Error;

use crate::builders::CustomerBuilder;
use crate::config::PlacementRules;
use crate::order::Order;

pub use address::{Address, AddressError};

/// Errors raised when the customer placing an order is not eligible.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CustomerError {
    /// Customer has not been persisted.
    #[error("Customer must have an ID greater than 0")]
    InvalidId { id: CustomerId },

    #[error("Customer must have an address")]
    MissingAddress,

    #[error("Customer must have a first and last name")]
    MissingName,

    #[error("Customer must have a credit rating greater than {minimum}")]
    CreditRatingTooLow { rating: i32, minimum: i32 },

    #[error("Customer total purchases cannot be negative")]
    NegativePurchases { total: i64 },

    /// Purchase count is at its maximum and cannot record another order.
    #[error("Customer total purchases cannot be increased")]
    PurchaseCountExhausted { total: i64 },
}

/// A customer and their purchase history.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Customer {
    pub(crate) id: CustomerId,
    pub(crate) first_name: Option<String>,
    pub(crate) last_name: Option<String>,
    pub(crate) home_address: Option<Address>,
    pub(crate) credit_rating: i32,
    pub(crate) total_purchases: i64,
    pub(crate) order_history: Vec<Order>,
}

// Query methods
impl Customer {
    /// Creates a customer with the given id and nothing else filled in.
    pub fn new(id: impl Into<CustomerId>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Returns a builder for a customer with the given id.
    pub fn builder(id: impl Into<CustomerId>) -> CustomerBuilder {
        CustomerBuilder::new(id)
    }

    pub fn id(&self) -> CustomerId {
        self.id
    }

    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    pub fn home_address(&self) -> Option<&Address> {
        self.home_address.as_ref()
    }

    pub fn credit_rating(&self) -> i32 {
        self.credit_rating
    }

    /// Number of orders this customer has placed.
    pub fn total_purchases(&self) -> i64 {
        self.total_purchases
    }

    /// Placed orders, oldest first.
    pub fn order_history(&self) -> &[Order] {
        &self.order_history
    }

    /// Wraps the customer so orders can reference it.
    pub fn into_shared(self) -> SharedCustomer {
        SharedCustomer::new(self)
    }
}

impl Customer {
    /// Checks the customer's own fields and returns the home address to validate next.
    ///
    /// Rules run in order: id, address presence, names, credit rating, purchases.
    /// Names only need to be present; an empty name passes.
    pub fn validate(&self, rules: &PlacementRules) -> Result<&Address, CustomerError> {
        if !self.id.is_positive() {
            return Err(CustomerError::InvalidId { id: self.id });
        }

        let address = self
            .home_address
            .as_ref()
            .ok_or(CustomerError::MissingAddress)?;

        if self.first_name.is_none() || self.last_name.is_none() {
            return Err(CustomerError::MissingName);
        }

        if self.credit_rating <= rules.min_credit_rating {
            return Err(CustomerError::CreditRatingTooLow {
                rating: self.credit_rating,
                minimum: rules.min_credit_rating,
            });
        }

        if self.total_purchases < 0 {
            return Err(CustomerError::NegativePurchases {
                total: self.total_purchases,
            });
        }

        Ok(address)
    }

    /// Returns the purchase count after one more order, without recording anything.
    pub fn next_purchase_count(&self) -> Result<i64, CustomerError> {
        self.total_purchases
            .checked_add(1)
            .ok_or(CustomerError::PurchaseCountExhausted {
                total: self.total_purchases,
            })
    }

    /// Appends a placed order and stores the count from [`Customer::next_purchase_count`].
    pub(crate) fn record_order(&mut self, order: Order, total_purchases: i64) {
        self.order_history.push(order);
        self.total_purchases = total_purchases;
    }
}

/// Owning handle to a customer shared by all of its orders.
///
/// Placement locks the customer for the whole check-then-record sequence, so
/// concurrent placements for one customer are serialized.
#[derive(Debug, Clone)]
pub struct SharedCustomer(Arc<Mutex<Customer>>);

impl SharedCustomer {
    pub fn new(customer: Customer) -> Self {
        Self(Arc::new(Mutex::new(customer)))
    }

    /// Locks the customer.
    ///
    /// A poisoned lock is recovered: placement only writes after every rule
    /// has passed, so a panic elsewhere cannot leave a half-recorded order.
    pub fn lock(&self) -> MutexGuard<'_, Customer> {
        self.0.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a non-owning reference for an order to hold.
    pub fn downgrade(&self) -> CustomerRef {
        CustomerRef(Arc::downgrade(&self.0))
    }

    /// Returns true if both handles point at the same customer.
    pub fn ptr_eq(&self, other: &SharedCustomer) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Non-owning reference from an order back to its customer.
///
/// Orders live inside their customer's history, so holding a strong handle
/// here would form a reference cycle.
#[derive(Debug, Clone)]
pub struct CustomerRef(Weak<Mutex<Customer>>);

impl CustomerRef {
    /// Returns the customer, or None if every owning handle has been dropped.
    pub fn upgrade(&self) -> Option<SharedCustomer> {
        self.0.upgrade().map(SharedCustomer)
    }

    pub fn ptr_eq(&self, other: &CustomerRef) -> bool {
        Weak::ptr_eq(&self.0, &other.0)
    }

    /// Returns true if this reference points at the given customer.
    pub fn refers_to(&self, customer: &SharedCustomer) -> bool {
        std::ptr::eq(self.0.as_ptr(), Arc::as_ptr(&customer.0))
    }
}

impl From<&SharedCustomer> for CustomerRef {
    fn from(customer: &SharedCustomer) -> Self {
        customer.downgrade()
    }
}
