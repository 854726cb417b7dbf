//! Order aggregate.

use common::OrderId;

use crate::builders::OrderBuilder;
use crate::customer::{CustomerRef, SharedCustomer};

use super::{Money, OrderError};

/// An order waiting to be placed, or a placed order in a customer's history.
///
/// The order refers back to its customer without owning it. Two orders are equal
/// when their fields match and they point at the same customer.
#[derive(Debug, Clone, Default)]
pub struct Order {
    pub(crate) id: OrderId,
    pub(crate) total_amount: Money,
    pub(crate) customer: Option<CustomerRef>,
    pub(crate) is_expedited: bool,
}

impl PartialEq for Order {
    fn eq(&self, other: &Self) -> bool {
        let same_customer = match (&self.customer, &other.customer) {
            (Some(a), Some(b)) => a.ptr_eq(b),
            (None, None) => true,
            _ => false,
        };

        same_customer
            && self.id == other.id
            && self.total_amount == other.total_amount
            && self.is_expedited == other.is_expedited
    }
}

// Query methods
impl Order {
    /// Creates an unplaced order for a customer.
    pub fn new(total_amount: Money, customer: &SharedCustomer) -> Self {
        Self {
            id: OrderId::UNASSIGNED,
            total_amount,
            customer: Some(customer.downgrade()),
            is_expedited: false,
        }
    }

    pub fn builder() -> OrderBuilder {
        OrderBuilder::default()
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn total_amount(&self) -> Money {
        self.total_amount
    }

    /// Returns the customer, if the order has one and it is still alive.
    pub fn customer(&self) -> Option<SharedCustomer> {
        self.customer.as_ref().and_then(CustomerRef::upgrade)
    }

    /// Returns true if this order was placed by the given customer.
    pub fn belongs_to(&self, customer: &SharedCustomer) -> bool {
        self.customer
            .as_ref()
            .is_some_and(|r| r.refers_to(customer))
    }

    pub fn is_expedited(&self) -> bool {
        self.is_expedited
    }
}

impl Order {
    /// Checks the order's own fields and resolves its customer.
    ///
    /// Rules run in order: unassigned id, positive amount, customer present.
    pub fn validate(&self) -> Result<SharedCustomer, OrderError> {
        if self.id.is_assigned() {
            return Err(OrderError::IdAssigned { id: self.id });
        }

        if !self.total_amount.is_positive() {
            return Err(OrderError::NonPositiveAmount {
                amount: self.total_amount,
            });
        }

        self.customer().ok_or(OrderError::MissingCustomer)
    }

    pub(crate) fn mark_expedited(&mut self) {
        self.is_expedited = true;
    }
}
