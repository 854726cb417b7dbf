use serde::{Deserialize, Serialize};

/// Identifier of a customer.
///
/// Customers are created by the caller before any order references them, so a
/// valid customer always carries a positive id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerId(i64);

impl CustomerId {
    /// Creates a customer ID from a raw value.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw value.
    pub const fn as_i64(&self) -> i64 {
        self.0
    }

    /// Returns true if the id is greater than zero.
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }
}

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for CustomerId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<CustomerId> for i64 {
    fn from(id: CustomerId) -> Self {
        id.0
    }
}

/// Identifier of an order.
///
/// An order that has not been placed yet carries [`OrderId::UNASSIGNED`].
/// Handing out real ids is the job of whatever stores orders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(i64);

impl OrderId {
    /// Id of an order that has not been persisted.
    pub const UNASSIGNED: OrderId = OrderId(0);

    /// Creates an order ID from a raw value.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw value.
    pub const fn as_i64(&self) -> i64 {
        self.0
    }

    /// Returns true if the id differs from [`OrderId::UNASSIGNED`].
    pub const fn is_assigned(&self) -> bool {
        self.0 != 0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for OrderId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl From<OrderId> for i64 {
    fn from(id: OrderId) -> Self {
        id.0
    }
}
